//! Geometric primitives for the normalized board canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, either in percentage space or in pixels
//! - [`Size`] - Width and height dimensions of an output area
//! - [`CanvasBounds`] - The on-screen bounding box of the board, used to map
//!   pointer positions into percentage coordinates
//!
//! # Coordinate System
//!
//! Scene coordinates are percentages on a normalized `100×100` canvas, with
//! the same orientation as SVG:
//!
//! ```text
//!   (0,0) ────────► +X (100)
//!     │
//!     │
//!     ▼
//!    +Y (100)
//! ```
//!
//! The renderer stretches this canvas onto whatever output rectangle the
//! caller requests, so the two axes may be scaled differently.

/// The extent of the normalized canvas along each axis.
pub const CANVAS_EXTENT: f32 = 100.0;

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use tactiboard_core::geometry::Point;
/// let a = Point::new(20.0, 50.0);
/// let b = Point::new(80.0, 50.0);
///
/// assert_eq!(a.midpoint(b), Point::new(50.0, 50.0));
/// assert_eq!(a.distance(b), 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Linear interpolation towards `other`: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        self.add_point(other.sub_point(self).scale(t))
    }

    /// Rotates the vector by +90° in screen space: `(x, y)` becomes `(-y, x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tactiboard_core::geometry::Point;
    /// assert_eq!(Point::new(1.0, 0.0).perpendicular(), Point::new(0.0, 1.0));
    /// ```
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Clamps both coordinates into `[0, 100]`.
    pub fn clamp_to_canvas(self) -> Self {
        Self {
            x: self.x.clamp(0.0, CANVAS_EXTENT),
            y: self.y.clamp(0.0, CANVAS_EXTENT),
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The on-screen bounding box of the board canvas, in pixels.
///
/// Mirrors what a host UI reports for the canvas element: the top-left
/// corner and the rendered size. Pointer positions in the same pixel space
/// are mapped onto percentage coordinates with
/// `pct = (pointer - origin) / size * 100`.
///
/// # Examples
///
/// ```
/// # use tactiboard_core::geometry::{CanvasBounds, Point};
/// let canvas = CanvasBounds::new(100.0, 50.0, 600.0, 400.0);
///
/// let pct = canvas.to_percent(Point::new(400.0, 250.0)).unwrap();
/// assert_eq!(pct, Point::new(50.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasBounds {
    origin: Point,
    size: Size,
}

impl CanvasBounds {
    /// Creates bounds from the top-left corner and the size in pixels
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the rendered size
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns true if the pointer lies inside the bounds (edges included)
    pub fn contains(self, pointer: Point) -> bool {
        let rel = pointer.sub_point(self.origin);
        rel.x() >= 0.0
            && rel.y() >= 0.0
            && rel.x() <= self.size.width()
            && rel.y() <= self.size.height()
    }

    /// Maps a pointer position onto unclamped percentage coordinates.
    ///
    /// Returns `None` for a degenerate (zero-size) canvas, where the mapping
    /// is undefined.
    pub fn to_percent(self, pointer: Point) -> Option<Point> {
        if self.size.is_degenerate() {
            return None;
        }
        let rel = pointer.sub_point(self.origin);
        Some(Point::new(
            rel.x() / self.size.width() * CANVAS_EXTENT,
            rel.y() / self.size.height() * CANVAS_EXTENT,
        ))
    }

    /// Maps a pointer position onto percentage coordinates clamped to `[0, 100]`.
    pub fn to_clamped_percent(self, pointer: Point) -> Option<Point> {
        self.to_percent(pointer).map(Point::clamp_to_canvas)
    }

    /// Maps percentage coordinates back onto pixels.
    pub fn to_pixels(self, percent: Point) -> Point {
        Point::new(
            self.origin.x() + percent.x() / CANVAS_EXTENT * self.size.width(),
            self.origin.y() + percent.y() / CANVAS_EXTENT * self.size.height(),
        )
    }
}
