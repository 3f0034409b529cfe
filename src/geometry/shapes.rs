//! Shape families: bounding box + orientation → outline
//!
//! Each family is a static table with one row per orientation. A row lists
//! the box anchors that become the outline's vertices, in order. Adding a
//! family means adding a table and a variant to [`ShapeKind`]; nothing else
//! in the crate changes.

use enum_dispatch::enum_dispatch;

use crate::attributes::Orientation;
use crate::types::{BoundingBox, BoxAnchor, Outline};

use crate::types::BoxAnchor::*;

/// Geometry of one family of figures.
#[enum_dispatch]
pub trait ShapeFamily {
    /// Human-readable family name.
    fn name(&self) -> &'static str;

    /// Closed outline for `bounds` with the tip pointing toward `orientation`.
    fn outline(&self, bounds: &BoundingBox, orientation: Orientation) -> Outline;

    /// Whether the outline depends on orientation at all. Families that don't
    /// care get no orientation handle.
    fn is_oriented(&self) -> bool {
        true
    }
}

/// Orientation → vertex-role table for a family with `N` vertices.
#[derive(Debug)]
pub struct VertexTable<const N: usize> {
    rows: [[BoxAnchor; N]; 8],
}

impl<const N: usize> VertexTable<N> {
    /// Rows are indexed by [`Orientation::index`].
    pub const fn new(rows: [[BoxAnchor; N]; 8]) -> Self {
        Self { rows }
    }

    /// Same row for every orientation.
    pub const fn uniform(row: [BoxAnchor; N]) -> Self {
        Self { rows: [row; 8] }
    }

    pub fn row(&self, orientation: Orientation) -> &[BoxAnchor; N] {
        &self.rows[orientation.index()]
    }

    /// Resolve the row for `orientation` against `bounds`.
    pub fn resolve(&self, bounds: &BoundingBox, orientation: Orientation) -> Outline {
        Outline::closed(
            self.row(orientation)
                .iter()
                .map(|anchor| bounds.anchor(*anchor))
                .collect(),
        )
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// Triangle vertices as (left, right, top) per orientation.
///
/// "Top" is the vertex the figure was originally drawn with uppermost; the
/// tip named by the orientation is whichever vertex lands on that side of the
/// box.
pub static TRIANGLE_TABLE: VertexTable<3> = VertexTable::new([
    // North
    [TopMid, BottomRight, BottomLeft],
    // NorthEast
    [TopLeft, TopRight, BottomRight],
    // East
    [TopLeft, RightMid, BottomLeft],
    // SouthEast
    [TopRight, BottomRight, BottomLeft],
    // South
    [BottomMid, TopLeft, TopRight],
    // SouthWest
    [BottomRight, BottomLeft, TopLeft],
    // West
    [LeftMid, TopRight, BottomRight],
    // NorthWest
    [BottomLeft, TopLeft, TopRight],
]);

/// Triangle pointing in one of eight compass directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triangle;

impl ShapeFamily for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn outline(&self, bounds: &BoundingBox, orientation: Orientation) -> Outline {
        TRIANGLE_TABLE.resolve(bounds, orientation)
    }
}

// ============================================================================
// Diamond
// ============================================================================

pub static DIAMOND_TABLE: VertexTable<4> = VertexTable::uniform([TopMid, RightMid, BottomMid, LeftMid]);

/// Rhombus through the four edge midpoints; orientation has no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diamond;

impl ShapeFamily for Diamond {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn outline(&self, bounds: &BoundingBox, orientation: Orientation) -> Outline {
        DIAMOND_TABLE.resolve(bounds, orientation)
    }

    fn is_oriented(&self) -> bool {
        false
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// The family a figure delegates its outline to.
#[enum_dispatch(ShapeFamily)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle(Triangle),
    Diamond(Diamond),
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::Triangle(Triangle)
    }
}
