//! Geometry core for oriented figures in a vector drawing editor.
//!
//! A [`Figure`] is a bounding box, a set of style [`Attributes`] and a shape
//! family. From those it derives its outline, stroke-aware hit testing,
//! connector chop points, interaction handles and undo snapshots. Nothing is
//! painted here; outlines are plain point lists for a renderer to consume.
//!
//! ```
//! use figura::{BoundingBox, Figure, Orientation};
//! use glam::dvec2;
//!
//! let mut fig = Figure::triangle(BoundingBox::new(0.0, 0.0, 10.0, 10.0));
//! fig.set_orientation(Orientation::East);
//! assert_eq!(fig.outline().points()[1], dvec2(10.0, 5.0));
//! assert!(fig.contains(dvec2(3.0, 5.0), 1.0));
//! ```

pub mod attributes;
pub mod connector;
pub mod errors;
pub mod figure;
pub mod geometry;
pub mod handles;
pub mod log;
pub mod types;

pub use attributes::{
    AttributeKey, AttributeValue, Attributes, FillUnderStroke, Orientation, StrokeJoin, StrokePlacement,
    StrokeType,
};
pub use connector::ChopConnector;
pub use errors::{AttributeError, NumericError};
pub use figure::{Figure, TransformSnapshot};
pub use geometry::{Diamond, ShapeFamily, ShapeKind, Triangle};
pub use handles::{Handle, ResizeRole, create_handles};
pub use types::{BoundingBox, BoxAnchor, Color, Outline};
