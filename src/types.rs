//! Value types shared by every component: bounding boxes, outlines, colors.
//!
//! Coordinates are model units with Y pointing down (screen convention), so
//! "top" is the smaller y. Points are `glam::DVec2`.

use std::fmt;

use glam::{DAffine2, DVec2, dvec2};

use crate::errors::NumericError;
use crate::geometry::defaults;

/// Axis-aligned rectangle owned by a figure.
///
/// Once a box belongs to a figure its extents never drop below
/// [`defaults::MIN_EXTENT`]; see [`BoundingBox::from_corners`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a box from raw fields without validation.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a box, rejecting NaN/infinite fields and negative extents.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Self {
            x: NumericError::check_finite(x)?,
            y: NumericError::check_finite(y)?,
            width: NumericError::check_non_negative(width)?,
            height: NumericError::check_non_negative(height)?,
        })
    }

    /// Normalized box spanning two arbitrary corner points.
    ///
    /// The top-left corner is the component-wise minimum; width and height are
    /// the absolute spans, floored at [`defaults::MIN_EXTENT`].
    pub fn from_corners(anchor: DVec2, lead: DVec2) -> Self {
        let min = anchor.min(lead);
        let span = (lead - anchor).abs();
        Self {
            x: min.x,
            y: min.y,
            width: span.x.max(defaults::MIN_EXTENT),
            height: span.y.max(defaults::MIN_EXTENT),
        }
    }

    /// Top-left corner.
    pub fn start_point(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn end_point(&self) -> DVec2 {
        dvec2(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Resolve a named reference point of this box.
    pub fn anchor(&self, anchor: BoxAnchor) -> DVec2 {
        let (fx, fy) = anchor.fractions();
        dvec2(self.x + self.width * fx, self.y + self.height * fy)
    }

    /// Grow every side outward by `dx` horizontally and `dy` vertically.
    pub fn grow(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            width: self.width + 2.0 * dx,
            height: self.height + 2.0 * dy,
        }
    }

    /// Smallest box enclosing all `points`, or `None` for an empty slice.
    ///
    /// No minimum extent is applied: a box around collinear points is flat.
    pub fn enclosing(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        })
    }

    /// Check all fields are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Compare two boxes field by field within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {} x {}]", self.x, self.y, self.width, self.height)
    }
}

/// A reference point on a bounding box: a corner, an edge midpoint, or the center.
///
/// Shape families describe their vertices as anchors, so an outline is always
/// a pure function of the box it is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxAnchor {
    TopLeft,
    TopMid,
    TopRight,
    RightMid,
    BottomRight,
    BottomMid,
    BottomLeft,
    LeftMid,
    Center,
}

impl BoxAnchor {
    /// Position as fractions of (width, height) from the top-left corner.
    pub const fn fractions(self) -> (f64, f64) {
        match self {
            BoxAnchor::TopLeft => (0.0, 0.0),
            BoxAnchor::TopMid => (0.5, 0.0),
            BoxAnchor::TopRight => (1.0, 0.0),
            BoxAnchor::RightMid => (1.0, 0.5),
            BoxAnchor::BottomRight => (1.0, 1.0),
            BoxAnchor::BottomMid => (0.5, 1.0),
            BoxAnchor::BottomLeft => (0.0, 1.0),
            BoxAnchor::LeftMid => (0.0, 0.5),
            BoxAnchor::Center => (0.5, 0.5),
        }
    }
}

/// Closed or open polyline describing a figure boundary.
///
/// Outlines are derived data: a figure rebuilds one from its box and
/// attributes on every query and never stores it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Outline {
    points: Vec<DVec2>,
    closed: bool,
}

impl Outline {
    /// A closed polygon through `points`; the last point connects back to the first.
    pub fn closed(points: Vec<DVec2>) -> Self {
        Self { points, closed: true }
    }

    /// An open polyline through `points`.
    pub fn open(points: Vec<DVec2>) -> Self {
        Self { points, closed: false }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over edges as `(from, to)` pairs, including the closing edge
    /// when the outline is closed.
    pub fn edges(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let n = self.points.len();
        let count = match (self.closed, n) {
            (_, 0) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area. Positive when the vertices turn counter-clockwise in a
    /// Y-up frame (clockwise on screen).
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Mean of the vertices. For a triangle this is the true centroid.
    pub fn centroid(&self) -> Option<DVec2> {
        if self.points.is_empty() {
            return None;
        }
        let sum: DVec2 = self.points.iter().copied().sum();
        Some(sum / self.points.len() as f64)
    }

    /// Tight bounds of the vertices (no minimum extent).
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::enclosing(&self.points)
    }

    /// Map every vertex through `matrix`.
    pub fn transformed(&self, matrix: &DAffine2) -> Self {
        Self {
            points: self.points.iter().map(|p| matrix.transform_point2(*p)).collect(),
            closed: self.closed,
        }
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        if self.closed {
            write!(f, " Z")?;
        }
        Ok(())
    }
}

/// Shoelace formula over a closed vertex ring.
pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n).map(|i| points[i].perp_dot(points[(i + 1) % n])).sum();
    twice * 0.5
}

/// Paint color for strokes and fills.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Color::Rgb(255, 255, 255)
    }
}
