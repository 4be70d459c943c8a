//! Drawing primitives shared by the board renderer and the icon library.
//!
//! All primitives produce [`svg`] nodes. Drawables report their nodes through
//! a [`LayeredOutput`] so that the final document respects the fixed z-order
//! of [`RenderLayer`].

mod jersey;
mod layer;
mod stroke;
mod text;

pub use jersey::{JERSEY_BODY, JERSEY_COLLAR, JERSEY_COMPACT, jersey};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{DEFAULT_FONT_FAMILY, Text, TextAnchor, TextBaseline, TextDefinition};

/// Anything that can contribute SVG nodes to the layered board output.
pub trait Drawable {
    /// Render this element into its layer(s).
    fn render_to_layers(&self) -> LayeredOutput;
}
