//! Connectors: where connecting lines attach to a figure

use glam::DVec2;

use crate::figure::Figure;

/// Attaches lines to the edge of a figure's hit outline.
///
/// Borrowing the figure keeps the connector from outliving it or seeing a
/// half-applied mutation; every query reads the figure's current state.
#[derive(Clone, Copy, Debug)]
pub struct ChopConnector<'a> {
    owner: &'a Figure,
}

impl<'a> ChopConnector<'a> {
    pub fn new(owner: &'a Figure) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &'a Figure {
        self.owner
    }

    /// Reference point a line aims at before chopping: the figure's center.
    pub fn anchor(&self) -> DVec2 {
        self.owner.bounds().center()
    }

    /// Point on the figure's edge for a line coming from `toward`.
    pub fn chop(&self, toward: DVec2) -> DVec2 {
        self.owner.chop(toward)
    }

    /// Endpoints of a straight connection from this figure to `other`.
    ///
    /// Each end is chopped toward the other figure's center, so the line
    /// runs edge to edge.
    pub fn connect(&self, other: &ChopConnector<'_>) -> (DVec2, DVec2) {
        (self.chop(other.anchor()), other.chop(self.anchor()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;
    use crate::types::BoundingBox;
    use glam::dvec2;

    fn unstroked_triangle(x: f64) -> Figure {
        Figure::triangle(BoundingBox::new(x, 0.0, 10.0, 10.0))
            .with_attribute(AttributeValue::StrokeColor(None))
            .unwrap()
    }

    #[test]
    fn anchor_is_center() {
        let fig = unstroked_triangle(0.0);
        assert_eq!(fig.find_connector().anchor(), dvec2(5.0, 5.0));
    }

    #[test]
    fn connect_runs_edge_to_edge() {
        let left = unstroked_triangle(0.0);
        let right = unstroked_triangle(30.0);
        let (start, end) = left.find_connector().connect(&right.find_connector());

        // Both ends sit on the slanted edges at mid-height
        assert!((start.y - 5.0).abs() < 1e-9);
        assert!((start.x - 7.5).abs() < 1e-9);
        assert!((end.y - 5.0).abs() < 1e-9);
        assert!((end.x - 32.5).abs() < 1e-9);
    }

    #[test]
    fn connector_follows_figure_state() {
        let mut fig = unstroked_triangle(0.0);
        fig.set_bounds(dvec2(100.0, 0.0), dvec2(110.0, 10.0));
        let connector = fig.find_connector();
        assert_eq!(connector.chop(dvec2(105.0, 50.0)), dvec2(105.0, 10.0));
        assert!(std::ptr::eq(connector.owner(), &fig));
    }
}
