//! Glyphs of board items placed from the icon library.

use svg::node::element as svg_element;

use tactiboard_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, Text, TextDefinition},
    geometry::Point,
    icon::{ICON_BOX, IconDefinition},
    scene::BoardItem,
};

/// Offset of the caption below the item origin, in icon units.
const LABEL_OFFSET: f32 = 40.0;

/// A board item resolved against its library entry.
pub struct ItemGlyph<'a> {
    item: &'a BoardItem,
    definition: &'a IconDefinition,
    font_family: &'a str,
}

impl<'a> ItemGlyph<'a> {
    pub fn new(item: &'a BoardItem, definition: &'a IconDefinition, font_family: &'a str) -> Self {
        Self {
            item,
            definition,
            font_family,
        }
    }
}

impl Drawable for ItemGlyph<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let item = self.item;
        let position = item.position();
        let color = self.definition.resolve_color(item.color());
        let half = ICON_BOX / 2.0;

        let icon = svg_element::Group::new()
            .set("transform", format!("translate({}, {})", -half, -half))
            .add(self.definition.draw(color));

        let mut group = svg_element::Group::new()
            .set(
                "transform",
                format!(
                    "translate({}, {}) rotate({}) scale({})",
                    position.x(),
                    position.y(),
                    item.rotation(),
                    item.scale()
                ),
            )
            .add(icon);

        if let Some(label) = item.label() {
            let style = TextDefinition::new(12.0)
                .with_font_family(self.font_family)
                .with_bold(true)
                .with_color(Some(Color::default()))
                .with_outline(Color::parse_or(Some("white"), Color::default()), 0.5);
            group = group.add(Text::new(&style, label).render_to_svg(Point::new(0.0, LABEL_OFFSET)));
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Item, Box::new(group));
        output
    }
}

#[cfg(test)]
mod tests {
    use tactiboard_core::{draw::DEFAULT_FONT_FAMILY, icon};

    use super::*;

    fn render(item: &BoardItem) -> String {
        let definition = icon::lookup(item.icon()).unwrap();
        ItemGlyph::new(item, definition, DEFAULT_FONT_FAMILY)
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_item_transform() {
        let mut item = BoardItem::new("1", "cone", Point::new(25.0, 75.0));
        item.set_rotation(45.0);
        let rendered = render(&item);
        assert!(rendered.contains("translate(25, 75) rotate(45) scale(0.12)"));
        assert!(rendered.contains("translate(-32, -32)"));
        assert!(!rendered.contains("<text"));
    }

    #[test]
    fn test_item_label() {
        let mut item = BoardItem::new("1", "cone", Point::new(25.0, 75.0));
        item.set_label("Départ");
        let rendered = render(&item);
        assert!(rendered.contains("Départ"));
        assert!(rendered.contains("y=\"40\""));
        assert!(rendered.contains("stroke-width=\"0.5\""));
    }

    #[test]
    fn test_item_color_override() {
        let item = BoardItem::new("1", "cone", Point::new(25.0, 75.0)).with_color(Some("#22c55e".to_string()));
        let rendered = render(&item);
        assert!(rendered.contains(&Color::new("#22c55e").unwrap().to_string()));
    }
}
