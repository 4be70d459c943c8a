//! Text definitions for labels drawn on the board.
//!
//! Labels are short (role abbreviations, captions) and are positioned by
//! their anchor, so no text measurement is needed: the SVG renderer does the
//! layout through `text-anchor` and `dominant-baseline`.
//!
//! ```
//! # use tactiboard_core::draw::{TextDefinition, Text};
//! # use tactiboard_core::geometry::Point;
//! let style = TextDefinition::new(12.0).with_bold(true);
//! let text = Text::new(&style, "PG");
//! let node = text.render_to_svg(Point::new(32.0, 30.0));
//! assert!(node.to_string().contains("PG"));
//! ```

use svg::node::element as svg_element;

use crate::{color::Color, geometry::Point};

/// Default font stack for board labels.
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";

/// Vertical alignment of a label relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// Baseline of the glyphs sits on the anchor (SVG default)
    #[default]
    Alphabetic,
    /// Glyphs are vertically centered on the anchor
    Middle,
}

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Glyphs start at the anchor
    Start,
    /// Glyphs are horizontally centered on the anchor
    #[default]
    Middle,
}

/// Visual style of a label.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: Option<String>,
    color: Option<Color>,
    outline: Option<(Color, f32)>,
    baseline: TextBaseline,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a text definition with the given font size (canvas units).
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Renders the label in bold when `bold` is true.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.weight = bold.then(|| "bold".to_string());
        self
    }

    /// Sets an explicit font weight such as `"600"`.
    pub fn with_weight(mut self, weight: &str) -> Self {
        self.weight = Some(weight.to_string());
        self
    }

    /// Sets the fill color. `None` keeps the SVG default (black).
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Draws an outline of the given color and width behind the glyphs,
    /// keeping labels legible on any background.
    pub fn with_outline(mut self, color: Color, width: f32) -> Self {
        self.outline = Some((color, width));
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns the font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 12.0,
            weight: None,
            color: None,
            outline: None,
            baseline: TextBaseline::default(),
            anchor: TextAnchor::default(),
        }
    }
}

/// A label: content paired with a [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new label with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Renders the label at `position`, centered unless the definition
    /// anchors it at the start.
    pub fn render_to_svg(&self, position: Point) -> svg_element::Text {
        let def = self.definition;
        let mut text = svg_element::Text::new(self.content)
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", def.font_family.as_str())
            .set("font-size", def.font_size);

        if def.anchor == TextAnchor::Middle {
            text = text.set("text-anchor", "middle");
        }
        if def.baseline == TextBaseline::Middle {
            text = text.set("dominant-baseline", "middle");
        }
        if let Some(weight) = &def.weight {
            text = text.set("font-weight", weight.as_str());
        }
        if let Some(color) = def.color {
            text = text.set("fill", color);
        }
        if let Some((color, width)) = def.outline {
            text = text
                .set("stroke", color)
                .set("stroke-width", width)
                .set("paint-order", "stroke");
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let def = TextDefinition::default();
        assert_eq!(def.font_size(), 12.0);
        let rendered = Text::new(&def, "A").render_to_svg(Point::default()).to_string();
        assert!(rendered.contains("text-anchor=\"middle\""));
        assert!(!rendered.contains("font-weight"));
        assert!(!rendered.contains("stroke="));
    }

    #[test]
    fn test_text_outline_and_bold() {
        let def = TextDefinition::new(12.0)
            .with_bold(true)
            .with_color(Some(Color::default()))
            .with_outline(Color::new("white").unwrap(), 0.5);
        let rendered = Text::new(&def, "Plot").render_to_svg(Point::new(0.0, 40.0)).to_string();
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("stroke-width=\"0.5\""));
        assert!(rendered.contains("y=\"40\""));
        assert!(rendered.contains("Plot"));
    }

    #[test]
    fn test_text_start_anchor_and_weight() {
        let def = TextDefinition::new(2.5)
            .with_weight("600")
            .with_anchor(TextAnchor::Start);
        let rendered = Text::new(&def, "Att").render_to_svg(Point::new(6.0, 4.5)).to_string();
        assert!(!rendered.contains("text-anchor"));
        assert!(rendered.contains("font-weight=\"600\""));
    }

    #[test]
    fn test_text_middle_baseline() {
        let def = TextDefinition::new(18.0).with_baseline(TextBaseline::Middle);
        let rendered = Text::new(&def, "C").render_to_svg(Point::new(32.0, 30.0)).to_string();
        assert!(rendered.contains("dominant-baseline=\"middle\""));
    }
}
