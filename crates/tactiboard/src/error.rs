//! Error types for Tactiboard operations.
//!
//! This module provides the main error type [`TactiboardError`] which wraps
//! the error conditions of the collaborators around the renderer. Rendering
//! itself never fails.

use std::io;

use thiserror::Error;

use crate::{editor::EditorError, export::ExportError, generate::GenerateError};

/// The main error type for Tactiboard operations.
///
/// # Diagnostic Variants
///
/// The `Json` variant keeps the offending document next to the serde error,
/// whose line and column can be turned into a labelled source span.
#[derive(Debug, Error)]
pub enum TactiboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid lesson document: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl From<ExportError> for TactiboardError {
    fn from(error: ExportError) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TactiboardError {
    /// Create a new `Json` error with the associated source text.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }
}
