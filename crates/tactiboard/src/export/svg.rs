//! SVG rendering of tactical boards.
//!
//! [`Renderer::render`] is a pure function of the scene, the sport and the
//! output size. The normalized `100×100` canvas is stretched onto the output
//! rectangle (`preserveAspectRatio="none"`), and elements are emitted in the
//! fixed z-order of [`RenderLayer`]: background, court markings, zones,
//! arrows, players, items and the legend.

mod arrow;
mod court;
mod item;
mod legend;
mod player;

pub use arrow::{ArrowGlyph, DEFAULT_ARROW_COLOR, arrow_path_data, arrow_stroke, curve_control_point, dribble_points};
pub use court::CourtKind;
pub use item::ItemGlyph;
pub use legend::Legend;
pub use player::{Kit, PlayerGlyph, ball};

use std::fmt;

use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use svg::{Document, node::element as svg_element};

use tactiboard_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{CANVAS_EXTENT, Size},
    icon,
    scene::{TacticalSchema, Zone},
};

use crate::config::RenderConfig;

/// Opacity of zone fills.
const ZONE_OPACITY: f32 = 0.2;

/// A zone ready to draw: a translucent fill without outline.
pub struct ZoneGlyph<'a> {
    zone: &'a Zone,
}

impl<'a> ZoneGlyph<'a> {
    pub fn new(zone: &'a Zone) -> Self {
        Self { zone }
    }
}

impl Drawable for ZoneGlyph<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let origin = self.zone.origin();
        let fill = Color::parse_or(Some(self.zone.color()), Color::default());
        let rect = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", self.zone.width())
            .set("height", self.zone.height())
            .set("fill", fill)
            .set("opacity", ZONE_OPACITY)
            .set("stroke", "none");

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Zone, Box::new(rect));
        output
    }
}

/// The output of a render: the SVG document root plus per-layer element
/// counts.
///
/// The document is the handle downstream consumers, such as image
/// exporters, capture.
#[derive(Debug)]
pub struct RenderedBoard {
    document: Document,
    size: Size,
    layer_counts: IndexMap<RenderLayer, usize>,
}

impl RenderedBoard {
    /// Returns the root of the drawing.
    pub fn root(&self) -> &Document {
        &self.document
    }

    /// Consumes the board, returning the root of the drawing.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Returns the output size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of elements drawn in one layer.
    pub fn layer_count(&self, layer: RenderLayer) -> usize {
        self.layer_counts.get(&layer).copied().unwrap_or(0)
    }

    /// Number of elements drawn across every layer.
    pub fn element_count(&self) -> usize {
        self.layer_counts.values().sum()
    }

    /// Number of elements drawn for scene contents: zones, arrows, players
    /// and items. Court, background and legend elements are excluded.
    pub fn scene_element_count(&self) -> usize {
        [
            RenderLayer::Zone,
            RenderLayer::Arrow,
            RenderLayer::Player,
            RenderLayer::Item,
        ]
        .into_iter()
        .map(|layer| self.layer_count(layer))
        .sum()
    }

    /// Serializes the drawing to SVG text.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}

impl fmt::Display for RenderedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}

/// Renders tactical boards to SVG.
///
/// # Examples
///
/// ```
/// use tactiboard::{config::RenderConfig, export::svg::Renderer};
/// use tactiboard_core::scene::TacticalSchema;
///
/// let renderer = Renderer::new(RenderConfig::new(600, 400));
/// let board = renderer.render(&TacticalSchema::default(), "Handball");
/// assert_eq!(board.scene_element_count(), 0);
/// assert!(board.to_svg_string().contains("viewBox=\"0 0 100 100\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a scene at the configured output size.
    pub fn render(&self, schema: &TacticalSchema, sport: &str) -> RenderedBoard {
        self.render_sized(schema, sport, self.config.width(), self.config.height())
    }

    /// Renders a scene at an explicit output size in pixels.
    ///
    /// Never fails: items whose icon is unknown are skipped, invalid colors
    /// fall back to defaults and coincident arrow endpoints draw a point.
    pub fn render_sized(
        &self,
        schema: &TacticalSchema,
        sport: &str,
        width: u32,
        height: u32,
    ) -> RenderedBoard {
        info!(sport = sport, width = width, height = height; "Rendering board");
        let font_family = self.config.font_family();

        let mut output = LayeredOutput::new();
        output.merge(CourtKind::from_sport(sport).render_to_layers());

        for zone in schema.zones() {
            output.merge(ZoneGlyph::new(zone).render_to_layers());
        }
        for (index, arrow) in schema.arrows().iter().enumerate() {
            trace!(index = index, kind:? = arrow.kind(); "Drawing arrow");
            output.merge(ArrowGlyph::new(arrow, index).render_to_layers());
        }
        for player in schema.players() {
            trace!(player = player.id(); "Drawing player");
            output.merge(PlayerGlyph::new(player, font_family).render_to_layers());
        }
        for item in schema.items() {
            match icon::lookup(item.icon()) {
                Some(definition) => {
                    output.merge(ItemGlyph::new(item, definition, font_family).render_to_layers());
                }
                None => warn!(item = item.id(), icon = item.icon(); "Skipping item with unknown icon"),
            }
        }
        if self.config.legend() {
            output.merge(Legend::new(font_family).render_to_layers());
        }

        let layer_counts: IndexMap<RenderLayer, usize> = RenderLayer::ALL
            .iter()
            .map(|&layer| (layer, output.count(layer)))
            .collect();

        let document = output.render().into_iter().fold(
            Document::new()
                .set("width", width)
                .set("height", height)
                .set("viewBox", format!("0 0 {CANVAS_EXTENT} {CANVAS_EXTENT}"))
                .set("preserveAspectRatio", "none"),
            |document, node| document.add(node),
        );

        let board = RenderedBoard {
            document,
            size: Size::new(width as f32, height as f32),
            layer_counts,
        };
        debug!(elements = board.element_count(); "Board rendered");
        board
    }
}

/// Renders a scene with the default configuration at the given size.
///
/// ```
/// use tactiboard::export::svg::render;
/// use tactiboard_core::scene::TacticalSchema;
///
/// let board = render(&TacticalSchema::default(), "Football", 300, 200);
/// assert!(board.to_svg_string().contains("width=\"300\""));
/// ```
pub fn render(schema: &TacticalSchema, sport: &str, width: u32, height: u32) -> RenderedBoard {
    Renderer::default().render_sized(schema, sport, width, height)
}
