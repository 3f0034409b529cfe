//! The figure: a bounding box, style attributes and a shape family
//!
//! Everything geometric is derived on demand from those three pieces. Nothing
//! is cached, so a query always sees the latest box and attributes.

use glam::{DAffine2, DVec2};

use crate::attributes::{AttributeValue, Attributes, Orientation};
use crate::connector::ChopConnector;
use crate::errors::{AttributeError, NumericError};
use crate::geometry::{Diamond, ShapeFamily, ShapeKind, Triangle, defaults, hit, offset};
use crate::handles::{self, Handle};
use crate::log::{trace, warn};
use crate::types::{BoundingBox, Outline};

/// A shape with a mutable bounding box and style attributes.
///
/// `Clone` is a deep copy: the clone shares no state with the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    bounds: BoundingBox,
    attributes: Attributes,
    shape: ShapeKind,
    drawing_area_padding: f64,
}

/// Saved bounding box for undoing a transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSnapshot {
    bounds: BoundingBox,
}

impl TransformSnapshot {
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new(ShapeKind::default(), BoundingBox::default())
    }
}

impl Figure {
    /// Create a figure of the given family.
    ///
    /// The box goes through [`Figure::set_bounds`], so zero or negative
    /// extents come out as [`defaults::MIN_EXTENT`].
    pub fn new(shape: impl Into<ShapeKind>, bounds: BoundingBox) -> Self {
        let mut figure = Self {
            bounds: BoundingBox::from_corners(DVec2::ZERO, DVec2::ZERO),
            attributes: Attributes::new(),
            shape: shape.into(),
            drawing_area_padding: defaults::DRAWING_AREA_PADDING,
        };
        figure.set_bounds(bounds.start_point(), bounds.end_point());
        figure
    }

    pub fn triangle(bounds: BoundingBox) -> Self {
        Self::new(Triangle, bounds)
    }

    pub fn diamond(bounds: BoundingBox) -> Self {
        Self::new(Diamond, bounds)
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    pub fn with_attribute(mut self, value: AttributeValue) -> Result<Self, AttributeError> {
        self.set_attribute(value)?;
        Ok(self)
    }

    /// Replace the margin [`Figure::drawing_area`] adds around the stroke.
    pub fn with_drawing_area_padding(mut self, padding: f64) -> Result<Self, NumericError> {
        self.drawing_area_padding = NumericError::check_non_negative(padding)?;
        Ok(self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn start_point(&self) -> DVec2 {
        self.bounds.start_point()
    }

    pub fn end_point(&self) -> DVec2 {
        self.bounds.end_point()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Validate and store an attribute, returning the value it replaced.
    pub fn set_attribute(&mut self, value: AttributeValue) -> Result<Option<AttributeValue>, AttributeError> {
        self.attributes.set(value)
    }

    pub fn orientation(&self) -> Orientation {
        self.attributes.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.attributes.set_orientation(orientation);
    }

    pub fn drawing_area_padding(&self) -> f64 {
        self.drawing_area_padding
    }

    // ========================================================================
    // Derived Geometry
    // ========================================================================

    /// Nominal outline for the current box and orientation.
    pub fn outline(&self) -> Outline {
        self.shape.outline(&self.bounds, self.orientation())
    }

    /// Region to fill when viewed at 1:`scale_denominator`.
    pub fn fill_outline(&self, scale_denominator: f64) -> Outline {
        self.grown_outline(offset::fill_growth(&self.attributes, scale_denominator))
    }

    /// Center line of the stroke when viewed at 1:`scale_denominator`.
    pub fn stroke_outline(&self, scale_denominator: f64) -> Outline {
        self.grown_outline(offset::draw_growth(&self.attributes, scale_denominator))
    }

    /// Region that counts as a hit when viewed at 1:`scale_denominator`.
    pub fn hit_outline(&self, scale_denominator: f64) -> Outline {
        self.grown_outline(offset::hit_growth(&self.attributes, scale_denominator))
    }

    fn grown_outline(&self, distance: f64) -> Outline {
        offset::offset(
            &self.outline(),
            distance,
            self.attributes.stroke_join(),
            self.attributes.stroke_miter_limit(),
        )
    }

    /// Whether `point` hits the figure when viewed at 1:`scale_denominator`.
    ///
    /// The stroke tolerance is constant on screen, so it covers more model
    /// space as the view zooms out.
    pub fn contains(&self, point: DVec2, scale_denominator: f64) -> bool {
        hit::contains(&self.hit_outline(scale_denominator), point)
    }

    /// Point on the hit outline where a line toward `point` should end.
    pub fn chop(&self, point: DVec2) -> DVec2 {
        hit::chop(&self.hit_outline(1.0), point).unwrap_or_else(|| self.bounds.center())
    }

    /// Box covering everything the figure paints, plus the padding margin.
    pub fn drawing_area(&self) -> BoundingBox {
        let margin = offset::stroke_extent(&self.attributes, 1.0) + self.drawing_area_padding;
        self.bounds.grow(margin, margin)
    }

    pub fn find_connector(&self) -> ChopConnector<'_> {
        ChopConnector::new(self)
    }

    /// Interaction handles; detail level 0 adds the orientation handle.
    pub fn create_handles(&self, detail_level: u32) -> Vec<Handle> {
        handles::create_handles(self, detail_level)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set the box to span `anchor` and `lead`, in any order.
    ///
    /// Extents are floored at [`defaults::MIN_EXTENT`]. Corners that are not
    /// finite, or that span more than `f64` can hold, leave the box as it was.
    pub fn set_bounds(&mut self, anchor: DVec2, lead: DVec2) {
        let bounds = BoundingBox::from_corners(anchor, lead);
        if !(anchor.is_finite() && lead.is_finite() && bounds.is_finite()) {
            warn!(?anchor, ?lead, "discarding non-finite bounds");
            return;
        }
        self.bounds = bounds;
        trace!(bounds = %self.bounds, "set bounds");
    }

    /// Map the box's start and end corners through `matrix`.
    ///
    /// Goes through [`Figure::set_bounds`], so collapsed extents get the
    /// minimum size and non-finite results are discarded.
    pub fn transform(&mut self, matrix: &DAffine2) {
        let anchor = matrix.transform_point2(self.start_point());
        let lead = matrix.transform_point2(self.end_point());
        self.set_bounds(anchor, lead);
    }

    pub fn capture_snapshot(&self) -> TransformSnapshot {
        TransformSnapshot { bounds: self.bounds }
    }

    pub fn restore(&mut self, snapshot: TransformSnapshot) {
        self.bounds = snapshot.bounds;
    }
}
