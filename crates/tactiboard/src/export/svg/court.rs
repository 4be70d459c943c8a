//! Sport-specific court backgrounds.
//!
//! Each [`CourtKind`] maps to a [`CourtStyle`] holding the background fill,
//! the line color and the routine that draws the fixed markings. Markings use
//! the normalized `100×100` canvas.

use log::debug;
use svg::node::element as svg_element;

use tactiboard_core::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, SvgNode},
    geometry::CANVAS_EXTENT,
};

const LINE_WIDTH: f32 = 0.8;

/// The court families the renderer knows how to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CourtKind {
    #[default]
    Basketball,
    Handball,
    Football,
}

/// Visual attributes and marking routine of one court family.
struct CourtStyle {
    background: &'static str,
    lines: &'static str,
    markings: fn(&StrokeDefinition) -> Vec<SvgNode>,
}

const COURT_STYLES: [(CourtKind, CourtStyle); 3] = [
    (
        CourtKind::Basketball,
        CourtStyle {
            background: "#e0f2fe",
            lines: "#1e3a8a",
            markings: basketball_markings,
        },
    ),
    (
        CourtKind::Handball,
        CourtStyle {
            background: "#f0e68c",
            lines: "#000000",
            markings: handball_markings,
        },
    ),
    (
        CourtKind::Football,
        CourtStyle {
            background: "#dcfce7",
            lines: "#ffffff",
            markings: football_markings,
        },
    ),
];

impl CourtKind {
    /// Selects the court for a sport name.
    ///
    /// Matching ignores case and surrounding whitespace. Sports without a
    /// dedicated court fall back to basketball.
    ///
    /// ```
    /// # use tactiboard::export::svg::CourtKind;
    /// assert_eq!(CourtKind::from_sport("Handball"), CourtKind::Handball);
    /// assert_eq!(CourtKind::from_sport("Volleyball"), CourtKind::Basketball);
    /// ```
    pub fn from_sport(sport: &str) -> Self {
        let kind = match sport.trim().to_lowercase().as_str() {
            "handball" => Self::Handball,
            "football" => Self::Football,
            _ => Self::Basketball,
        };
        debug!(sport = sport, court:? = kind; "Court selected");
        kind
    }

    fn style(self) -> &'static CourtStyle {
        COURT_STYLES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, style)| style)
            .unwrap_or(&COURT_STYLES[0].1)
    }

    /// Returns the court fill color.
    pub fn background(self) -> Color {
        Color::parse_or(Some(self.style().background), Color::default())
    }

    /// Returns the marking line color.
    pub fn line_color(self) -> Color {
        Color::parse_or(Some(self.style().lines), Color::default())
    }

    /// Draws the fixed markings of this court.
    pub fn markings(self) -> Vec<SvgNode> {
        let stroke = StrokeDefinition::solid(self.line_color(), LINE_WIDTH);
        (self.style().markings)(&stroke)
    }
}

impl Drawable for CourtKind {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", CANVAS_EXTENT)
            .set("height", CANVAS_EXTENT)
            .set("fill", self.background());
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        for marking in self.markings() {
            output.add_to_layer(RenderLayer::Court, marking);
        }

        output
    }
}

fn outline_rect(x: f32, y: f32, width: f32, height: f32, stroke: &StrokeDefinition) -> SvgNode {
    let rect = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", "none");
    Box::new(apply_stroke!(rect, stroke))
}

fn filled_rect(x: f32, y: f32, width: f32, height: f32, fill: &str) -> SvgNode {
    let rect = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", fill);
    Box::new(rect)
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32, stroke: &StrokeDefinition) -> SvgNode {
    let line = svg_element::Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2);
    Box::new(apply_stroke!(line, stroke))
}

fn circle(cx: f32, cy: f32, r: f32, stroke: &StrokeDefinition) -> SvgNode {
    let circle = svg_element::Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .set("fill", "none");
    Box::new(apply_stroke!(circle, stroke))
}

fn open_path(d: &str, stroke: &StrokeDefinition) -> SvgNode {
    let path = svg_element::Path::new().set("d", d).set("fill", "none");
    Box::new(apply_stroke!(path, stroke))
}

fn basketball_markings(stroke: &StrokeDefinition) -> Vec<SvgNode> {
    vec![
        outline_rect(2.0, 2.0, 96.0, 96.0, stroke),
        line(50.0, 2.0, 50.0, 98.0, stroke),
        circle(50.0, 50.0, 12.0, stroke),
        // Left basket
        outline_rect(2.0, 38.0, 16.0, 24.0, stroke),
        open_path("M 2 30 Q 25 50 2 70", stroke),
        circle(5.0, 50.0, 1.5, stroke),
        // Right basket
        outline_rect(82.0, 38.0, 16.0, 24.0, stroke),
        open_path("M 98 30 Q 75 50 98 70", stroke),
        circle(95.0, 50.0, 1.5, stroke),
    ]
}

fn handball_markings(stroke: &StrokeDefinition) -> Vec<SvgNode> {
    let free_throw = StrokeDefinition::dashed(stroke.color(), 0.5, "3,2");
    vec![
        outline_rect(2.0, 10.0, 96.0, 80.0, stroke),
        line(50.0, 10.0, 50.0, 90.0, stroke),
        // Left area
        open_path("M 2 15 L 10 15 Q 22 50 10 85 L 2 85", stroke),
        open_path("M 2 10 L 14 10 Q 28 50 14 90 L 2 90", &free_throw),
        filled_rect(0.0, 45.0, 2.0, 10.0, "#333"),
        // Right area
        open_path("M 98 15 L 90 15 Q 78 50 90 85 L 98 85", stroke),
        open_path("M 98 10 L 86 10 Q 72 50 86 90 L 98 90", &free_throw),
        filled_rect(98.0, 45.0, 2.0, 10.0, "#333"),
    ]
}

fn football_markings(stroke: &StrokeDefinition) -> Vec<SvgNode> {
    vec![
        outline_rect(2.0, 2.0, 96.0, 96.0, stroke),
        line(50.0, 2.0, 50.0, 98.0, stroke),
        circle(50.0, 50.0, 10.0, stroke),
        // Goals
        outline_rect(0.0, 42.0, 4.0, 16.0, stroke),
        outline_rect(96.0, 42.0, 4.0, 16.0, stroke),
        // Penalty areas
        outline_rect(2.0, 25.0, 15.0, 50.0, stroke),
        outline_rect(83.0, 25.0, 15.0, 50.0, stroke),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sport() {
        assert_eq!(CourtKind::from_sport("Basketball"), CourtKind::Basketball);
        assert_eq!(CourtKind::from_sport(" football "), CourtKind::Football);
        assert_eq!(CourtKind::from_sport("HANDBALL"), CourtKind::Handball);
        assert_eq!(CourtKind::from_sport("Futsal"), CourtKind::Basketball);
        assert_eq!(CourtKind::from_sport(""), CourtKind::Basketball);
    }

    #[test]
    fn test_marking_counts() {
        assert_eq!(CourtKind::Basketball.markings().len(), 9);
        assert_eq!(CourtKind::Handball.markings().len(), 8);
        assert_eq!(CourtKind::Football.markings().len(), 7);
    }

    #[test]
    fn test_colors() {
        assert_eq!(CourtKind::Handball.background(), Color::new("#f0e68c").unwrap());
        assert_eq!(CourtKind::Handball.line_color(), Color::new("#000000").unwrap());
        assert_eq!(CourtKind::Football.line_color(), Color::new("#ffffff").unwrap());
        assert_eq!(CourtKind::Basketball.line_color(), Color::new("#1e3a8a").unwrap());
    }

    #[test]
    fn test_court_layers() {
        let output = CourtKind::Football.render_to_layers();
        assert_eq!(output.count(RenderLayer::Background), 1);
        assert_eq!(output.count(RenderLayer::Court), 7);
    }

    #[test]
    fn test_handball_dashed_lines() {
        let rendered: Vec<String> = CourtKind::Handball
            .markings()
            .iter()
            .map(|node| node.to_string())
            .collect();
        let dashed = rendered
            .iter()
            .filter(|s| s.contains("stroke-dasharray=\"3,2\""))
            .count();
        assert_eq!(dashed, 2);
    }
}
