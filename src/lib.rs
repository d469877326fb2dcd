//! # dtdl-parser
//!
//! Directory-oriented front end for a DTDL (Digital Twins Definition Language)
//! model parser. Discovers JSON documents under a filesystem root, merges them
//! into a single logical document set, feeds that set to an external
//! parsing/resolution engine, and normalizes engine failures into a
//! structured, serializable error taxonomy.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → file discovery, document combining, parse/validate pipelines
//!   ↓
//! model     → DtdlObjectModel, entity types, serialisation projection
//!   ↓
//! error     → ModelingException wire contract, failure classifier
//!   ↓
//! interop   → Parser trait, engine failure boundary
//! ```
//!
//! The DTDL grammar and semantics live entirely inside the external engine,
//! consumed through the [`Parser`] trait. This crate owns everything around
//! it: which files take part in a parse request, how independently-authored
//! documents are combined into one request, and how a failure raised by the
//! engine is decoded into a [`ModelingException`].

// ============================================================================
// MODULES (dependency order: interop → error → model → project)
// ============================================================================

/// Engine boundary: the `Parser` trait and the failure type it raises
pub mod interop;

/// Exception wire contract and the engine failure classifier
pub mod error;

/// Object model types and the DTDL serialisation projection
pub mod model;

/// Directory pipelines: discovery, combining, parsing, validation
pub mod project;

// Re-export the public surface
pub use error::{
    ModelingError, ModelingException, handle_error, is_modeling_exception, is_resolution_exception,
};
pub use interop::{InteropError, Parser};
pub use model::{DtdlObjectModel, EntityInfo, InterfaceInfo, serialise_interface};
pub use project::{
    DtdlParseError, parse_directories, parse_dtdl, search_for_json_files, validate_directories,
};
