//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod namespace;
mod output_format;

pub use namespace::NotesNamespace;
pub use output_format::OutputFormat;
