//! Shared test support: an in-process stand-in for the DTDL engine.

#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::collections::BTreeSet;

use serde_json::{Map, Value, json};

use dtdl_parser::{InteropError, Parser};

/// Minimal DTDL engine good enough to exercise the pipelines end to end.
///
/// Speaks the real engine's wire contract: a serialized object model on
/// success, a JSON-encoded `ModelingException` inside the raised failure
/// otherwise. Grammar coverage is intentionally tiny — documents are
/// interfaces identified by `@id`, optionally extending others — because the
/// crate under test never looks inside the grammar.
pub struct FakeDtdlEngine;

impl FakeDtdlEngine {
    fn raise_parsing(cause: &str, validation_id: &str, value: &str) -> InteropError {
        InteropError::engine(
            json!({
                "ExceptionKind": "Parsing",
                "Errors": [{
                    "Cause": cause,
                    "Action": "Correct the offending document",
                    "ValidationID": validation_id,
                    "Value": value,
                }]
            })
            .to_string(),
        )
    }

    fn raise_resolution(missing: &BTreeSet<String>) -> InteropError {
        let errors: Vec<Value> = missing
            .iter()
            .map(|dtmi| {
                json!({
                    "Cause": format!("Undefined reference: {dtmi}"),
                    "Action": "Define the referenced interface or include its file",
                    "ValidationID": "dtdl:resolution:undefinedExtends",
                    "Value": dtmi,
                })
            })
            .collect();
        InteropError::engine(
            json!({"ExceptionKind": "Resolution", "Errors": errors}).to_string(),
        )
    }

    fn extends_of(doc: &Map<String, Value>) -> Vec<String> {
        match doc.get("extends") {
            Some(Value::String(parent)) => vec![parent.clone()],
            Some(Value::Array(parents)) => parents
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Parser for FakeDtdlEngine {
    fn parse(&self, input: &str) -> Result<String, InteropError> {
        let payload: Value = serde_json::from_str(input)
            .map_err(|cause| Self::raise_parsing(&cause.to_string(), "dtdl:parsing:invalidJson", input))?;

        let docs: Vec<Map<String, Value>> = match payload {
            Value::Array(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    Value::Object(doc) => Ok(doc),
                    other => Err(Self::raise_parsing(
                        "Document is not a JSON object",
                        "dtdl:parsing:notAnObject",
                        &other.to_string(),
                    )),
                })
                .collect::<Result<_, _>>()?,
            Value::Object(doc) => vec![doc],
            other => {
                return Err(Self::raise_parsing(
                    "Payload is not a document or document set",
                    "dtdl:parsing:notAnObject",
                    &other.to_string(),
                ));
            }
        };

        let mut ids = Vec::new();
        for doc in &docs {
            let id = doc.get("@id").and_then(Value::as_str).ok_or_else(|| {
                Self::raise_parsing(
                    "Document has no @id",
                    "dtdl:parsing:missingId",
                    &Value::Object(doc.clone()).to_string(),
                )
            })?;
            ids.push(id.to_string());
        }

        let missing: BTreeSet<String> = docs
            .iter()
            .flat_map(|doc| Self::extends_of(doc))
            .filter(|parent| !ids.contains(parent))
            .collect();
        if !missing.is_empty() {
            return Err(Self::raise_resolution(&missing));
        }

        let mut model = Map::new();
        for (doc, id) in docs.iter().zip(&ids) {
            let extends = Self::extends_of(doc);
            let extended_by: Vec<&String> = docs
                .iter()
                .zip(&ids)
                .filter(|(child, _)| Self::extends_of(child).contains(id))
                .map(|(_, child_id)| child_id)
                .collect();
            model.insert(
                id.clone(),
                json!({
                    "Id": id,
                    "EntityKind": doc.get("@type").cloned().unwrap_or_else(|| json!("Interface")),
                    "ClassId": "dtmi:dtdl:class:Interface;3",
                    "extends": extends,
                    "extendedBy": extended_by,
                    "languageMajorVersion": 3,
                }),
            );
        }

        Ok(Value::Object(model).to_string())
    }

    fn parser_version(&self) -> String {
        "fake-dtdl-engine 3.0.0".to_string()
    }
}
