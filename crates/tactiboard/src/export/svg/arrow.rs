//! Arrow paths and their arrowhead markers.

use svg::node::element as svg_element;

use tactiboard_core::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
    scene::{Arrow, ArrowKind},
};

/// Arrow color used when the scene gives none, or an invalid one.
pub const DEFAULT_ARROW_COLOR: &str = "#333";

const DRIBBLE_AMPLITUDE: f32 = 1.5;
const DRIBBLE_STEP: f32 = 3.0;
/// Upper bound on zig-zag steps; far beyond anything on a 100x100 canvas.
const MAX_DRIBBLE_STEPS: usize = 512;
const CURVE_BEND: f32 = 0.15;

/// Vertices of a dribble zig-zag from `start` to `end`.
///
/// The segment is cut into `max(2, floor(distance / 3))` steps, capped at
/// 512. Interior vertices alternate sides of the straight line at a fixed
/// amplitude and the last vertex is exactly `end`. Coincident endpoints yield the single point
/// `start`.
///
/// ```
/// # use tactiboard::export::svg::dribble_points;
/// # use tactiboard_core::geometry::Point;
/// let points = dribble_points(Point::new(10.0, 10.0), Point::new(40.0, 10.0));
/// assert_eq!(points.len(), 11);
/// assert_eq!(points.last(), Some(&Point::new(40.0, 10.0)));
/// ```
pub fn dribble_points(start: Point, end: Point) -> Vec<Point> {
    let delta = end.sub_point(start);
    let distance = delta.hypot();
    if distance <= f32::EPSILON || !distance.is_finite() {
        return vec![start];
    }

    let steps = ((distance / DRIBBLE_STEP)
        .floor()
        .min(MAX_DRIBBLE_STEPS as f32) as usize)
        .max(2);
    let normal = delta.perpendicular().scale(1.0 / distance);

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        points.push(
            start
                .lerp(end, t)
                .add_point(normal.scale(DRIBBLE_AMPLITUDE * sign)),
        );
    }
    points.push(end);
    points
}

/// Control point of the curved arrow shapes: the midpoint pushed sideways
/// by a fixed fraction of the segment vector.
pub fn curve_control_point(start: Point, end: Point) -> Point {
    let delta = end.sub_point(start);
    start
        .midpoint(end)
        .add_point(delta.perpendicular().scale(CURVE_BEND))
}

/// Builds the SVG path data of an arrow of the given kind.
///
/// ```
/// # use tactiboard::export::svg::arrow_path_data;
/// # use tactiboard_core::{geometry::Point, scene::ArrowKind};
/// let d = arrow_path_data(ArrowKind::Pass, Point::new(20.0, 50.0), Point::new(80.0, 50.0));
/// assert_eq!(d, "M 20 50 L 80 50");
/// ```
pub fn arrow_path_data(kind: ArrowKind, start: Point, end: Point) -> String {
    match kind {
        ArrowKind::Dribble => polyline_data(&dribble_points(start, end)),
        ArrowKind::Rotation | ArrowKind::Action => {
            let control = curve_control_point(start, end);
            format!(
                "M {} {} Q {} {} {} {}",
                start.x(),
                start.y(),
                control.x(),
                control.y(),
                end.x(),
                end.y()
            )
        }
        ArrowKind::Pass | ArrowKind::Movement => {
            format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
        }
    }
}

fn polyline_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { "M" } else { "L" };
            format!("{command} {} {}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stroke of an arrow: movement is thin and dashed, every other kind solid.
pub fn arrow_stroke(kind: ArrowKind, color: Color) -> StrokeDefinition {
    match kind {
        ArrowKind::Movement => StrokeDefinition::dashed(color, 1.2, "4"),
        _ => StrokeDefinition::solid(color, 1.8),
    }
}

/// An arrow ready to draw, carrying its position in the scene so that its
/// marker id is unique within the document.
pub struct ArrowGlyph<'a> {
    arrow: &'a Arrow,
    index: usize,
}

impl<'a> ArrowGlyph<'a> {
    pub fn new(arrow: &'a Arrow, index: usize) -> Self {
        Self { arrow, index }
    }

    fn marker_id(&self) -> String {
        format!("arrowhead-{}", self.index)
    }
}

impl Drawable for ArrowGlyph<'_> {
    fn render_to_layers(&self) -> LayeredOutput {
        let fallback = Color::parse_or(Some(DEFAULT_ARROW_COLOR), Color::default());
        let color = Color::parse_or(self.arrow.color(), fallback);
        let marker_id = self.marker_id();

        let head = svg_element::Polygon::new()
            .set("points", "0 0, 10 3.5, 0 7")
            .set("fill", color);
        let marker = svg_element::Marker::new()
            .set("id", marker_id.as_str())
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("refX", 9)
            .set("refY", 3.5)
            .set("orient", "auto")
            .add(head);

        let data = arrow_path_data(self.arrow.kind(), self.arrow.start(), self.arrow.end());
        let path = svg_element::Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("marker-end", format!("url(#{marker_id})"));
        let path = apply_stroke!(path, &arrow_stroke(self.arrow.kind(), color));

        let group = svg_element::Group::new()
            .add(svg_element::Definitions::new().add(marker))
            .add(path);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Arrow, Box::new(group));
        output
    }
}
