//! Export of boards and lesson plans.
//!
//! - [`svg`]: the diagram renderer
//! - [`document`]: lesson-sheet export of a whole lesson plan
//! - [`image`]: image export of a rendered board

pub mod document;
pub mod image;
pub mod svg;

use thiserror::Error;

/// Failure of an export collaborator.
///
/// Exports never touch the scene or the lesson plan they read, so a failed
/// export can simply be retried.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Document export failed: {0}")]
    Document(String),

    #[error("Image export failed: {0}")]
    Image(String),
}
