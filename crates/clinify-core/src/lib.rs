//! clinify-core
//!
//! Pure domain types for clinical note templates: section descriptors,
//! template configurations, navigation options and validation results.
//! No I/O. This is the shared vocabulary between the template engine,
//! the CLI and the note-rendering frontend (via `ts-rs` bindings).

pub mod components;
pub mod error;
pub mod models;
