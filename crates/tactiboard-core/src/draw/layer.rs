//! Layer-based rendering for board diagrams.
//!
//! Every drawable states which z-order layer its SVG nodes belong to, and
//! [`LayeredOutput`] emits them bottom to top regardless of the order in which
//! they were produced.
//!
//! # Example
//!
//! ```
//! # use tactiboard_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! // Added out of order on purpose
//! output.add_to_layer(RenderLayer::Player, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! assert_eq!(output.len(), 2);
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of a board diagram.
///
/// Layers are rendered from bottom to top in declaration order; the derived
/// `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Court background fill
    Background,
    /// Sport-specific court markings
    Court,
    /// Translucent zone rectangles
    Zone,
    /// Arrows with their arrowhead markers
    Arrow,
    /// Player jerseys, orientation indicators and balls
    Player,
    /// Generic icon-library items placed in the editor
    Item,
    /// The fixed legend overlay
    Legend,
}

impl RenderLayer {
    /// All layers in rendering order.
    pub const ALL: [RenderLayer; 7] = [
        Self::Background,
        Self::Court,
        Self::Zone,
        Self::Arrow,
        Self::Player,
        Self::Item,
        Self::Legend,
    ];

    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Court => "court",
            Self::Zone => "zone",
            Self::Arrow => "arrow",
            Self::Player => "player",
            Self::Item => "item",
            Self::Legend => "legend",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are kept in insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all nodes from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of nodes in a single layer.
    ///
    /// ```
    /// # use tactiboard_core::draw::{RenderLayer, LayeredOutput};
    /// # use svg::node::element::Rectangle;
    /// let mut output = LayeredOutput::new();
    /// output.add_to_layer(RenderLayer::Zone, Box::new(Rectangle::new()));
    /// output.add_to_layer(RenderLayer::Zone, Box::new(Rectangle::new()));
    /// assert_eq!(output.count(RenderLayer::Zone), 2);
    /// assert_eq!(output.count(RenderLayer::Arrow), 0);
    /// ```
    pub fn count(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute. Empty layers are skipped. The sort is stable, so draw order
    /// inside a layer is insertion order.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::Rectangle;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Zone, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Item, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_render_groups_same_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Arrow, Box::new(Rectangle::new()));

        let nodes = output.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_render_orders_layers_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Legend, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Player, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Zone, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        let names: Vec<&str> = rendered
            .iter()
            .map(|s| {
                RenderLayer::ALL
                    .iter()
                    .find(|l| s.contains(&format!("data-layer=\"{}\"", l.name())))
                    .map(|l| l.name())
                    .unwrap_or("?")
            })
            .collect();
        assert_eq!(names, vec!["background", "zone", "player", "legend"]);
    }

    #[test]
    fn test_layer_order_matches_all() {
        let mut sorted = RenderLayer::ALL;
        sorted.sort();
        assert_eq!(sorted, RenderLayer::ALL);
    }
}
