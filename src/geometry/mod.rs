//! Pure geometry: shape tables, stroke offsetting and hit testing

pub mod defaults;
pub mod hit;
pub mod offset;
pub mod shapes;

pub use offset::{draw_growth, fill_growth, hit_growth, offset, stroke_extent, total_stroke_width};
pub use shapes::{Diamond, ShapeFamily, ShapeKind, Triangle};
