//! Error types and error handling for the code generator.
//!
//! This module defines the errors a lowering pass can fail with. It includes:
//!
//! - Error structures with source position information
//! - One variant per unsupported construct (type, operator, constant, name)
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
