//! Error adapter for converting TactiboardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Malformed lesson documents are reported with the offending JSON as source
//! code and a label at the line and column serde_json stopped at.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use tactiboard::TactiboardError;

/// Adapter for a JSON error carrying its source document.
pub struct JsonAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> JsonAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the error position inside the source.
    fn span(&self) -> SourceSpan {
        let offset = line_column_offset(self.src, self.err.line(), self.err.column());
        let len = usize::from(offset < self.src.len());
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for JsonAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for JsonAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid lesson document")
    }
}

impl Error for JsonAdapter<'_> {}

impl MietteDiagnostic for JsonAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("tactiboard::json"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the document must follow the lesson-plan format: title, sport, warmup, fundamental, final",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some(self.err.to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`TactiboardError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a TactiboardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TactiboardError::Io(_) => "tactiboard::io",
            TactiboardError::Json { .. } => "tactiboard::json",
            TactiboardError::Generate(_) => "tactiboard::generate",
            TactiboardError::Export(_) => "tactiboard::export",
            TactiboardError::Editor(_) => "tactiboard::editor",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A JSON error with its source document.
    Json(JsonAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Json(j) => fmt::Display::fmt(j, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Reportable::Json(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(j) => j.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Json(j) => j.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Json(j) => j.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Json(j) => j.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Byte offset of a 1-based line and column, clamped to the source length.
///
/// serde_json reports column 0 when the error is at the start of a line.
fn line_column_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

/// Convert a [`TactiboardError`] into a reportable error.
pub fn to_reportable(err: &TactiboardError) -> Reportable<'_> {
    match err {
        TactiboardError::Json { err, src } => Reportable::Json(JsonAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use tactiboard::BoardBuilder;

    use super::*;

    #[test]
    fn test_line_column_offset() {
        let src = "{\n  \"title\": 3\n}";
        assert_eq!(line_column_offset(src, 1, 1), 0);
        assert_eq!(line_column_offset(src, 2, 3), 4);
        assert_eq!(line_column_offset(src, 9, 9), src.len());
    }

    #[test]
    fn test_json_error_points_at_value() {
        let src = "{\n  \"duration\": \"long\"\n}";
        let err = BoardBuilder::default().parse_lesson(src).unwrap_err();

        let reportable = to_reportable(&err);
        let Reportable::Json(adapter) = &reportable else {
            panic!("Expected JSON reportable");
        };
        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert!(labels[0].offset() > 2);
        assert!(labels[0].offset() <= src.len());
        assert_eq!(reportable.code().unwrap().to_string(), "tactiboard::json");
    }

    #[test]
    fn test_non_json_error() {
        let err = TactiboardError::Io(std::io::Error::other("disk full"));
        let reportable = to_reportable(&err);
        match &reportable {
            Reportable::Error(e) => assert_eq!(e.to_string(), "I/O error: disk full"),
            Reportable::Json(_) => panic!("Expected Error"),
        }
        assert_eq!(reportable.code().unwrap().to_string(), "tactiboard::io");
        assert!(reportable.source_code().is_none());
    }
}
