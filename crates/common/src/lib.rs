//! Common types and utilities for protodoc
//!
//! This crate contains the shared documentation context model and error
//! types used across the docgen, render, and CLI components.

mod context;

pub use context::{
    DocContext, FieldContext, FieldFlags, MessageContext, MethodContext, OutputFile,
    ServiceContext,
};

use thiserror::Error;

/// Errors that can occur during documentation generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
