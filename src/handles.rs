//! Interaction handles
//!
//! Handles hold no reference to their figure. Every interaction takes the
//! figure as an argument and reads its current state, so a handle can never
//! act on a stale box.

use glam::{DVec2, dvec2};

use crate::attributes::Orientation;
use crate::figure::Figure;
use crate::geometry::ShapeFamily;
use crate::log::debug;
use crate::types::BoxAnchor;

/// Corner or edge a resize handle drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeRole {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeRole {
    /// All roles, clockwise from the top-left corner.
    pub const ALL: [ResizeRole; 8] = [
        ResizeRole::NorthWest,
        ResizeRole::North,
        ResizeRole::NorthEast,
        ResizeRole::East,
        ResizeRole::SouthEast,
        ResizeRole::South,
        ResizeRole::SouthWest,
        ResizeRole::West,
    ];

    pub const fn anchor(self) -> BoxAnchor {
        match self {
            ResizeRole::NorthWest => BoxAnchor::TopLeft,
            ResizeRole::North => BoxAnchor::TopMid,
            ResizeRole::NorthEast => BoxAnchor::TopRight,
            ResizeRole::East => BoxAnchor::RightMid,
            ResizeRole::SouthEast => BoxAnchor::BottomRight,
            ResizeRole::South => BoxAnchor::BottomMid,
            ResizeRole::SouthWest => BoxAnchor::BottomLeft,
            ResizeRole::West => BoxAnchor::LeftMid,
        }
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeRole::NorthWest | ResizeRole::North | ResizeRole::NorthEast)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, ResizeRole::SouthWest | ResizeRole::South | ResizeRole::SouthEast)
    }

    fn moves_left(self) -> bool {
        matches!(self, ResizeRole::NorthWest | ResizeRole::West | ResizeRole::SouthWest)
    }

    fn moves_right(self) -> bool {
        matches!(self, ResizeRole::NorthEast | ResizeRole::East | ResizeRole::SouthEast)
    }
}

/// A draggable control point on a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Resize(ResizeRole),
    /// Sits on the tip and turns the figure.
    Orientation,
}

/// Handles for `figure`: the eight resize handles, plus the orientation
/// handle at detail level 0 when the figure's outline depends on it.
pub fn create_handles(figure: &Figure, detail_level: u32) -> Vec<Handle> {
    let mut handles: Vec<Handle> = ResizeRole::ALL.iter().map(|r| Handle::Resize(*r)).collect();
    if detail_level == 0 && figure.shape().is_oriented() {
        handles.push(Handle::Orientation);
    }
    handles
}

impl Handle {
    /// Where the handle is drawn.
    pub fn location(&self, figure: &Figure) -> DVec2 {
        let anchor = match self {
            Handle::Resize(role) => role.anchor(),
            Handle::Orientation => figure.orientation().anchor(),
        };
        figure.bounds().anchor(anchor)
    }

    /// Drag the handle to `point`.
    ///
    /// Resize handles move their edges; dragging past the opposite edge flips
    /// the box. The orientation handle points the figure toward `point`.
    pub fn track(&self, figure: &mut Figure, point: DVec2) {
        match self {
            Handle::Resize(role) => {
                let bounds = figure.bounds();
                let mut min = bounds.start_point();
                let mut max = bounds.end_point();
                if role.moves_left() {
                    min.x = point.x;
                }
                if role.moves_right() {
                    max.x = point.x;
                }
                if role.moves_top() {
                    min.y = point.y;
                }
                if role.moves_bottom() {
                    max.y = point.y;
                }
                figure.set_bounds(min, max);
            }
            Handle::Orientation => {
                let bounds = figure.bounds();
                let half = dvec2(bounds.width, bounds.height) / 2.0;
                let orientation = Orientation::from_screen_direction(bounds.center(), point, half);
                debug!(?orientation, "orientation handle tracked");
                figure.set_orientation(orientation);
            }
        }
    }

    /// Keyboard or click activation: the orientation handle steps clockwise.
    pub fn cycle(&self, figure: &mut Figure) {
        if let Handle::Orientation = self {
            figure.set_orientation(figure.orientation().next());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;

    fn figure() -> Figure {
        Figure::triangle(BoundingBox::new(0.0, 0.0, 20.0, 10.0))
    }

    #[test]
    fn detail_level_zero_adds_orientation_handle() {
        let fig = figure();
        let handles = create_handles(&fig, 0);
        assert_eq!(handles.len(), 9);
        assert_eq!(handles.last(), Some(&Handle::Orientation));

        let handles = create_handles(&fig, 1);
        assert_eq!(handles.len(), 8);
        assert!(!handles.contains(&Handle::Orientation));
    }

    #[test]
    fn unoriented_family_gets_no_orientation_handle() {
        let fig = Figure::diamond(BoundingBox::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(fig.create_handles(0).len(), 8);
    }

    #[test]
    fn resize_handles_sit_on_box_anchors() {
        let fig = figure();
        assert_eq!(Handle::Resize(ResizeRole::NorthWest).location(&fig), dvec2(0.0, 0.0));
        assert_eq!(Handle::Resize(ResizeRole::East).location(&fig), dvec2(20.0, 5.0));
        assert_eq!(Handle::Resize(ResizeRole::South).location(&fig), dvec2(10.0, 10.0));
    }

    #[test]
    fn orientation_handle_sits_on_tip() {
        let mut fig = figure();
        assert_eq!(Handle::Orientation.location(&fig), dvec2(10.0, 0.0));
        fig.set_orientation(Orientation::SouthWest);
        assert_eq!(Handle::Orientation.location(&fig), dvec2(0.0, 10.0));
    }

    #[test]
    fn resize_track_moves_edges() {
        let mut fig = figure();
        Handle::Resize(ResizeRole::SouthEast).track(&mut fig, dvec2(30.0, 40.0));
        assert_eq!(fig.bounds(), BoundingBox::new(0.0, 0.0, 30.0, 40.0));

        Handle::Resize(ResizeRole::North).track(&mut fig, dvec2(99.0, 10.0));
        assert_eq!(fig.bounds(), BoundingBox::new(0.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn dragging_past_opposite_edge_flips() {
        let mut fig = figure();
        Handle::Resize(ResizeRole::West).track(&mut fig, dvec2(25.0, 3.0));
        assert_eq!(fig.bounds(), BoundingBox::new(20.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn orientation_track_follows_pointer() {
        let mut fig = figure();
        let handle = Handle::Orientation;
        handle.track(&mut fig, dvec2(30.0, 5.0));
        assert_eq!(fig.orientation(), Orientation::East);
        handle.track(&mut fig, dvec2(20.0, 10.0));
        assert_eq!(fig.orientation(), Orientation::SouthEast);
        handle.track(&mut fig, dvec2(10.0, -50.0));
        assert_eq!(fig.orientation(), Orientation::North);
        // Tracking never moves the box
        assert_eq!(fig.bounds(), BoundingBox::new(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn cycle_steps_clockwise() {
        let mut fig = figure();
        Handle::Orientation.cycle(&mut fig);
        assert_eq!(fig.orientation(), Orientation::NorthEast);
        Handle::Resize(ResizeRole::North).cycle(&mut fig);
        assert_eq!(fig.orientation(), Orientation::NorthEast);
    }
}
