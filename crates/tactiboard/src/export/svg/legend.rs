//! The fixed legend overlay in the lower-left corner of every board.

use svg::node::element as svg_element;

use tactiboard_core::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, JERSEY_COMPACT, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor,
        TextDefinition,
    },
    geometry::Point,
};

use super::player::Kit;

/// The legend: an attacker jersey, a defender jersey and a ball, each with
/// a caption. It does not depend on the scene.
pub struct Legend<'a> {
    font_family: &'a str,
}

impl<'a> Legend<'a> {
    pub fn new(font_family: &'a str) -> Self {
        Self { font_family }
    }

    fn swatch(kit: Kit, x: f32) -> svg_element::Group {
        let (fill, stroke) = kit.colors();
        let path = svg_element::Path::new()
            .set("d", JERSEY_COMPACT)
            .set("fill", fill);
        svg_element::Group::new()
            .set("transform", format!("translate({x}, 3.5) scale(0.1)"))
            .add(apply_stroke!(path, &StrokeDefinition::solid(stroke, 20.0)))
    }
}

impl Drawable for Legend<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let caption = TextDefinition::new(2.5)
            .with_font_family(self.font_family)
            .with_weight("600")
            .with_anchor(TextAnchor::Start);
        let frame = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", 55)
            .set("height", 7)
            .set("fill", "white")
            .set("opacity", 0.9)
            .set("rx", 1);
        let frame_stroke = StrokeDefinition::solid(Color::parse_or(Some("#e2e8f0"), Color::default()), 0.2);
        let ball = svg_element::Circle::new()
            .set("cx", 21)
            .set("cy", 3.5)
            .set("r", 1.5)
            .set("fill", "#f97316");

        let group = svg_element::Group::new()
            .set("transform", "translate(2, 92)")
            .add(apply_stroke!(frame, &frame_stroke))
            .add(Self::swatch(Kit::Home, 3.0))
            .add(Text::new(&caption, "Att").render_to_svg(Point::new(6.0, 4.5)))
            .add(Self::swatch(Kit::Away, 12.0))
            .add(Text::new(&caption, "Déf").render_to_svg(Point::new(15.0, 4.5)))
            .add(ball)
            .add(Text::new(&caption, "Bal").render_to_svg(Point::new(23.5, 4.5)));

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Legend, Box::new(group));
        output
    }
}

#[cfg(test)]
mod tests {
    use tactiboard_core::draw::DEFAULT_FONT_FAMILY;

    use super::*;

    #[test]
    fn test_legend_contents() {
        let output = Legend::new(DEFAULT_FONT_FAMILY).render_to_layers();
        assert_eq!(output.count(RenderLayer::Legend), 1);
        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        for caption in ["Att", "Déf", "Bal"] {
            assert!(rendered.contains(caption));
        }
        assert!(rendered.contains("translate(2, 92)"));
        assert_eq!(rendered.matches(JERSEY_COMPACT).count(), 2);
    }
}
