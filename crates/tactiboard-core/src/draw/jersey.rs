//! The jersey silhouette shared by player glyphs, the legend and the
//! player icons of the library.
//!
//! Paths are expressed in the 64×64 icon design box.

use svg::node::element as svg_element;

use crate::{apply_stroke, color::Color, draw::StrokeDefinition};

/// Collar and shoulders of the jersey.
pub const JERSEY_COLLAR: &str = "M16 12 C16 9, 20 6, 24 6 L40 6 C44 6, 48 9, 48 12 L48 22 C48 26, 44 28, 40 28 L24 28 C20 28, 16 26, 16 22 Z";

/// Body of the jersey.
pub const JERSEY_BODY: &str = "M18 28 L46 28 C50 28, 52 34, 50 40 L44 52 C43 54, 41 56, 38 56 L26 56 C23 56, 21 54, 20 52 L14 40 C12 34, 14 28, 18 28 Z";

/// Single-path, angular jersey used at legend scale.
pub const JERSEY_COMPACT: &str = "M16 12 C16 9, 20 6, 24 6 L40 6 C44 6, 48 9, 48 12 L48 22 L48 22 L40 28 L24 28 L16 22 Z M18 28 L46 28 L50 40 L44 52 L38 56 L26 56 L20 52 L14 40 Z";

/// Builds the two-part jersey, filled with `fill` and outlined by `stroke`.
///
/// # Examples
///
/// ```
/// # use tactiboard_core::{color::Color, draw::{jersey, StrokeDefinition}};
/// let outline = StrokeDefinition::solid(Color::new("#1e3a8a").unwrap(), 3.0);
/// let group = jersey(Color::new("white").unwrap(), &outline);
/// assert_eq!(group.to_string().matches("<path").count(), 2);
/// ```
pub fn jersey(fill: Color, stroke: &StrokeDefinition) -> svg_element::Group {
    [JERSEY_COLLAR, JERSEY_BODY]
        .into_iter()
        .fold(svg_element::Group::new(), |group, d| {
            let path = svg_element::Path::new().set("d", d).set("fill", fill);
            group.add(apply_stroke!(path, stroke))
        })
}
