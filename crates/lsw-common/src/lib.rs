//! Lendsweep common types and errors.
//!
//! This crate provides the foundation shared across lsw-core modules:
//! - Unified error type with stable numeric codes
//! - Schema versioning for JSON documents
//! - Output format specification

pub mod error;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
