//! Image export of rendered boards.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;

use super::{ExportError, svg::RenderedBoard};

/// Captures a rendered board as an image.
pub trait ImageExporter {
    /// Produces an image data URL of the board. The board is only read.
    fn rasterize(&self, board: &RenderedBoard) -> Result<String, ExportError>;
}

/// Exports the board as a base64 `data:image/svg+xml` URL.
///
/// # Examples
///
/// ```
/// use tactiboard::export::{image::{ImageExporter, SvgDataUrl}, svg::render};
/// use tactiboard_core::scene::TacticalSchema;
///
/// let board = render(&TacticalSchema::default(), "Basketball", 600, 400);
/// let url = SvgDataUrl.rasterize(&board).unwrap();
/// assert!(url.starts_with("data:image/svg+xml;base64,"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgDataUrl;

impl SvgDataUrl {
    pub const PREFIX: &'static str = "data:image/svg+xml;base64,";
}

impl ImageExporter for SvgDataUrl {
    fn rasterize(&self, board: &RenderedBoard) -> Result<String, ExportError> {
        let svg = board.to_svg_string();
        if svg.is_empty() {
            return Err(ExportError::Image("empty drawing".to_string()));
        }
        debug!(bytes = svg.len(); "Encoding board as data URL");
        Ok(format!("{}{}", Self::PREFIX, STANDARD.encode(svg.as_bytes())))
    }
}

/// Download name of a drill's PNG capture: `schema-` followed by the
/// lowercased title with whitespace runs replaced by `-`.
pub fn drill_image_file_name(title: &str) -> String {
    let words: Vec<String> = title.split_whitespace().map(str::to_lowercase).collect();
    format!("schema-{}.png", words.join("-"))
}

#[cfg(test)]
mod tests {
    use tactiboard_core::scene::TacticalSchema;

    use super::*;
    use crate::export::svg::render;

    #[test]
    fn test_data_url_decodes_to_svg() {
        let board = render(&TacticalSchema::default(), "Handball", 600, 400);
        let url = SvgDataUrl.rasterize(&board).unwrap();
        let payload = url.strip_prefix(SvgDataUrl::PREFIX).unwrap();
        let decoded = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
        assert_eq!(decoded, board.to_svg_string());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(drill_image_file_name("Situation 1"), "schema-situation-1.png");
        assert_eq!(drill_image_file_name("  Jeu   à  3 "), "schema-jeu-à-3.png");
    }
}
