//! Stroke definitions for court lines, arrows and glyph outlines.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width, dash pattern, cap and join of a stroke
//! - [`StrokeStyle`]: solid or dashed with an explicit SVG dash pattern
//! - [`StrokeCap`] / [`StrokeJoin`]: SVG line endings and corners
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to any SVG element
//!
//! Widths are expressed in normalized canvas units (the board is `100×100`),
//! not in pixels.
//!
//! ```
//! use tactiboard_core::draw::StrokeDefinition;
//! use tactiboard_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#333").unwrap(), 1.2, "4");
//! let path = svg_element::Path::new().set("d", "M 0 0 L 10 10");
//! let path = tactiboard_core::apply_stroke!(path, &stroke);
//! assert!(path.to_string().contains("stroke-dasharray=\"4\""));
//! ```

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line
    #[default]
    Solid,
    /// Dashed line using the given SVG dasharray pattern (e.g. `"3,2"`)
    Dashed(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed(pattern) => Some(pattern),
        }
    }
}

/// Defines how line endpoints are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Defines how line corners are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a dashed stroke with an explicit dasharray pattern.
    pub fn dashed(color: Color, width: f32, pattern: &str) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed(pattern.to_string()),
            ..Self::default()
        }
    }

    /// Builder-style setter for the cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Builder-style setter for the join.
    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width, line cap, line join, and the dash pattern when
/// the style is not solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("white").unwrap();

        let solid = StrokeDefinition::solid(color, 0.8);
        assert_eq!(solid.width(), 0.8);
        assert_eq!(solid.style().to_svg_value(), None);

        let dashed = StrokeDefinition::dashed(color, 0.5, "3,2");
        assert_eq!(dashed.style().to_svg_value(), Some("3,2"));
    }

    #[test]
    fn test_builder_setters() {
        let stroke = StrokeDefinition::solid(Color::default(), 3.0)
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Round);
        assert_eq!(stroke.cap(), StrokeCap::Round);
        assert_eq!(stroke.join(), StrokeJoin::Round);
    }

    #[test]
    fn test_apply_stroke_solid_has_no_dasharray() {
        let stroke = StrokeDefinition::solid(Color::default(), 0.8);
        let line = crate::apply_stroke!(svg_element::Line::new(), &stroke);
        let rendered = line.to_string();
        assert!(rendered.contains("stroke-width=\"0.8\""));
        assert!(!rendered.contains("stroke-dasharray"));
    }
}
