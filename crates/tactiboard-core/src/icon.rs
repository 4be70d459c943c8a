//! The icon library: a fixed, ordered catalog of placeable board icons.
//!
//! Every entry draws itself inside a 64×64 design box so that the renderer can
//! translate, rotate and scale any icon the same way. The catalog is built once
//! and indexed by id; lookups are constant time and the order of [`library`]
//! is the palette display order.
//!
//! ```
//! use tactiboard_core::icon::{self, IconCategory};
//!
//! let cone = icon::lookup("cone").unwrap();
//! assert_eq!(cone.category(), IconCategory::Equipment);
//! assert!(icon::lookup("trampoline").is_none());
//! ```

use std::{fmt, sync::OnceLock};

use indexmap::IndexMap;
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{StrokeCap, StrokeDefinition, jersey},
};

/// Side length of the icon design box.
pub const ICON_BOX: f32 = 64.0;

/// Palette section an icon is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Player,
    Ball,
    Arrow,
    Equipment,
    Zone,
}

impl IconCategory {
    /// Categories shown in the editor palette, in display order.
    pub const PALETTE: [IconCategory; 4] = [Self::Player, Self::Ball, Self::Arrow, Self::Equipment];

    /// Returns the lowercase category name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Ball => "ball",
            Self::Arrow => "arrow",
            Self::Equipment => "equipment",
            Self::Zone => "zone",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Discriminant of every icon the library knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    ShirtBlue,
    ShirtOrange,
    ShirtYellow,
    BallFootball,
    BallBasketball,
    BallHandball,
    ArrowHorizontal,
    ArrowVertical,
    ArrowCurve,
    ArrowDashed,
    Cone,
    Goal,
    BasketHoop,
}

/// One library entry.
#[derive(Debug, Clone, Copy)]
pub struct IconDefinition {
    kind: IconKind,
    id: &'static str,
    name: &'static str,
    category: IconCategory,
    default_color: Option<&'static str>,
}

impl IconDefinition {
    const fn new(
        kind: IconKind,
        id: &'static str,
        name: &'static str,
        category: IconCategory,
        default_color: Option<&'static str>,
    ) -> Self {
        Self {
            kind,
            id,
            name,
            category,
            default_color,
        }
    }

    /// Returns the drawing discriminant.
    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Returns the stable identifier referenced by board items.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the display name shown in the palette.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the palette category.
    pub fn category(&self) -> IconCategory {
        self.category
    }

    /// Returns the default fill color, if the icon has one.
    pub fn default_color(&self) -> Option<&'static str> {
        self.default_color
    }

    /// Resolves the fill to use for an optional override color string.
    ///
    /// The override wins when it parses; otherwise the default color, and
    /// black for icons without one.
    pub fn resolve_color(&self, color: Option<&str>) -> Color {
        let fallback = Color::parse_or(self.default_color, Color::default());
        Color::parse_or(color, fallback)
    }

    /// Draws the icon inside the 64×64 design box.
    ///
    /// The output depends on `color` only.
    pub fn draw(&self, color: Color) -> svg_element::Group {
        draw_icon(self.kind, color)
    }
}

const ENTRIES: [IconDefinition; 13] = [
    IconDefinition::new(IconKind::ShirtBlue, "shirt-blue", "Joueur Bleu", IconCategory::Player, Some("#4da3ff")),
    IconDefinition::new(IconKind::ShirtOrange, "shirt-orange", "Joueur Orange", IconCategory::Player, Some("#f4a261")),
    IconDefinition::new(IconKind::ShirtYellow, "shirt-yellow", "Gardien (Jaune)", IconCategory::Player, Some("#ffd54a")),
    IconDefinition::new(IconKind::BallFootball, "ball-football", "Ballon Football", IconCategory::Ball, None),
    IconDefinition::new(IconKind::BallBasketball, "ball-basketball", "Ballon Basket", IconCategory::Ball, Some("#f97316")),
    IconDefinition::new(IconKind::BallHandball, "ball-handball", "Ballon Hand", IconCategory::Ball, Some("#ef4444")),
    IconDefinition::new(IconKind::ArrowHorizontal, "arrow-h", "Flèche Horizontale", IconCategory::Arrow, Some("#3b82f6")),
    IconDefinition::new(IconKind::ArrowVertical, "arrow-v", "Flèche Verticale", IconCategory::Arrow, Some("#ef4444")),
    IconDefinition::new(IconKind::ArrowCurve, "arrow-curve", "Flèche Courbe", IconCategory::Arrow, Some("#3b82f6")),
    IconDefinition::new(IconKind::ArrowDashed, "arrow-dashed", "Flèche Mouvement", IconCategory::Arrow, Some("#64748b")),
    IconDefinition::new(IconKind::Cone, "cone", "Plot / Cône", IconCategory::Equipment, Some("#f97316")),
    IconDefinition::new(IconKind::Goal, "goal-football", "But Foot/Hand", IconCategory::Equipment, Some("#000000")),
    IconDefinition::new(IconKind::BasketHoop, "basket-hoop", "Panier Basket", IconCategory::Equipment, Some("#ef4444")),
];

static LIBRARY: OnceLock<IndexMap<&'static str, IconDefinition>> = OnceLock::new();

/// Returns the whole catalog, keyed by id, in palette order.
pub fn library() -> &'static IndexMap<&'static str, IconDefinition> {
    LIBRARY.get_or_init(|| ENTRIES.iter().map(|def| (def.id, *def)).collect())
}

/// Finds an icon by id.
pub fn lookup(id: &str) -> Option<&'static IconDefinition> {
    library().get(id)
}

/// Groups the catalog by palette category, preserving catalog order inside
/// each group. Categories without icons are omitted.
pub fn palette() -> Vec<(IconCategory, Vec<&'static IconDefinition>)> {
    IconCategory::PALETTE
        .iter()
        .map(|&category| {
            let icons = library()
                .values()
                .filter(|def| def.category == category)
                .collect::<Vec<_>>();
            (category, icons)
        })
        .filter(|(_, icons)| !icons.is_empty())
        .collect()
}

fn stroke(color: &str, width: f32) -> StrokeDefinition {
    StrokeDefinition::solid(Color::known(color), width)
}

fn path(d: &str) -> svg_element::Path {
    svg_element::Path::new().set("d", d)
}

fn draw_icon(kind: IconKind, color: Color) -> svg_element::Group {
    let group = svg_element::Group::new();
    match kind {
        IconKind::ShirtBlue => jersey(color, &stroke("#003f7d", 2.0)),
        IconKind::ShirtOrange => jersey(color, &stroke("#7a3b00", 2.0)),
        IconKind::ShirtYellow => jersey(color, &stroke("#8a6d00", 2.0)),
        IconKind::BallFootball => {
            let ball = svg_element::Circle::new()
                .set("cx", 32)
                .set("cy", 32)
                .set("r", 28)
                .set("fill", "white");
            group
                .add(apply_stroke!(ball, &stroke("black", 2.0)))
                .add(path("M32 4 L38 20 L54 20 L42 32 L48 48 L32 40 L16 48 L22 32 L10 20 L26 20 Z").set("fill", "black"))
        }
        IconKind::BallBasketball => {
            let seams = [
                "M4 32 Q 32 32 60 32",
                "M32 4 Q 32 32 32 60",
                "M10 10 Q 32 32 54 54",
                "M54 10 Q 32 32 10 54",
            ];
            let ball = svg_element::Circle::new()
                .set("cx", 32)
                .set("cy", 32)
                .set("r", 28)
                .set("fill", color);
            let seam_stroke = stroke("#333", 2.0);
            seams.into_iter().fold(
                group.add(apply_stroke!(ball, &seam_stroke)),
                |group, d| group.add(apply_stroke!(path(d).set("fill", "none"), &seam_stroke)),
            )
        }
        IconKind::BallHandball => {
            let white = stroke("white", 2.0);
            let ball = svg_element::Circle::new()
                .set("cx", 32)
                .set("cy", 32)
                .set("r", 24)
                .set("fill", color);
            group
                .add(apply_stroke!(ball, &white))
                .add(apply_stroke!(path("M16 16 L48 48 M48 16 L16 48"), &white))
        }
        IconKind::ArrowHorizontal => straight_arrow(color, 6.0, None, false),
        IconKind::ArrowVertical => straight_arrow(color, 6.0, None, true),
        IconKind::ArrowDashed => straight_arrow(color, 4.0, Some("8,4"), false),
        IconKind::ArrowCurve => {
            let curve = path("M4 32 Q 32 4 60 32").set("fill", "none");
            let head = svg_element::Polygon::new()
                .set("points", "56,28 64,32 56,36")
                .set("fill", color)
                .set("transform", "rotate(45 60 32)");
            group
                .add(apply_stroke!(curve, &StrokeDefinition::solid(color, 4.0)))
                .add(head)
        }
        IconKind::Cone => group
            .add(
                svg_element::Rectangle::new()
                    .set("x", 16)
                    .set("y", 48)
                    .set("width", 32)
                    .set("height", 8)
                    .set("fill", color),
            )
            .add(
                svg_element::Polygon::new()
                    .set("points", "20,48 44,48 32,8")
                    .set("fill", color),
            ),
        IconKind::Goal => {
            let frame = svg_element::Rectangle::new()
                .set("x", 2)
                .set("y", 16)
                .set("width", 60)
                .set("height", 32)
                .set("fill", "none");
            let bar = StrokeDefinition::solid(color, 2.0);
            let posts = [(2, 16, 16, 4), (62, 16, 48, 4), (16, 4, 48, 4)];
            let group = posts.into_iter().fold(
                group.add(apply_stroke!(frame, &StrokeDefinition::solid(color, 4.0))),
                |group, (x1, y1, x2, y2)| {
                    let line = svg_element::Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2);
                    group.add(apply_stroke!(line, &bar))
                },
            );
            let net = path("M6 16 L18 4 M14 16 L26 4 M22 16 L34 4 M30 16 L42 4 M38 16 L50 4");
            group.add(apply_stroke!(net, &StrokeDefinition::solid(color, 0.5)))
        }
        IconKind::BasketHoop => {
            let rim = svg_element::Circle::new()
                .set("cx", 32)
                .set("cy", 32)
                .set("r", 16)
                .set("fill", "none");
            let pole = svg_element::Line::new()
                .set("x1", 32)
                .set("y1", 16)
                .set("x2", 32)
                .set("y2", 0);
            let board = svg_element::Rectangle::new()
                .set("x", 12)
                .set("y", 0)
                .set("width", 40)
                .set("height", 4)
                .set("fill", "white");
            group
                .add(apply_stroke!(rim, &StrokeDefinition::solid(color, 3.0)))
                .add(apply_stroke!(pole, &stroke("gray", 4.0)))
                .add(apply_stroke!(board, &stroke("gray", 1.0)))
        }
    }
}

/// Shaft plus triangular head spanning the design box, horizontal or
/// rotated to point down.
fn straight_arrow(color: Color, width: f32, dash: Option<&str>, vertical: bool) -> svg_element::Group {
    let shaft_stroke = match dash {
        Some(pattern) => StrokeDefinition::dashed(color, width, pattern),
        None => StrokeDefinition::solid(color, width),
    }
    .with_cap(StrokeCap::Round);

    let (shaft, head, offset) = if vertical {
        (
            svg_element::Line::new()
                .set("x1", 8)
                .set("y1", 2)
                .set("x2", 8)
                .set("y2", 54),
            "0,54 8,64 16,54",
            "translate(24, 0)",
        )
    } else {
        (
            svg_element::Line::new()
                .set("x1", 2)
                .set("y1", 8)
                .set("x2", 54)
                .set("y2", 8),
            "54,0 64,8 54,16",
            "translate(0, 24)",
        )
    };

    svg_element::Group::new()
        .set("transform", offset)
        .add(apply_stroke!(shaft, &shaft_stroke))
        .add(
            svg_element::Polygon::new()
                .set("points", head)
                .set("fill", color),
        )
}
