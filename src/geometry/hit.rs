//! Point containment and chop points against an outline

use glam::DVec2;

use crate::types::Outline;

use super::defaults;

/// Even-odd containment test.
///
/// Open outlines are treated as if closed. Outlines with fewer than three
/// vertices contain nothing.
pub fn contains(outline: &Outline, p: DVec2) -> bool {
    let pts = outline.points();
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (pts[i], pts[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Point where a line from the outline's center toward `toward` leaves the outline.
///
/// The center is the center of the outline's bounds. Of all crossings between
/// that segment and the outline's edges, the one nearest `toward` wins. When
/// the segment crosses nothing (`toward` lies inside) the vertex nearest the
/// center is used instead, so the result is always on the outline.
///
/// Returns `None` only for an empty outline.
pub fn chop(outline: &Outline, toward: DVec2) -> Option<DVec2> {
    let center = outline.bounds()?.center();

    let nearest_crossing = outline
        .edges()
        .chain(closing_edge(outline))
        .filter_map(|(a, b)| segment_intersection(a, b, toward, center))
        .min_by(|p, q| p.distance_squared(toward).total_cmp(&q.distance_squared(toward)));
    if nearest_crossing.is_some() {
        return nearest_crossing;
    }

    outline
        .points()
        .iter()
        .copied()
        .min_by(|p, q| p.distance_squared(center).total_cmp(&q.distance_squared(center)))
}

/// Chopping always works against the filled region, so open outlines get
/// their closing edge too.
fn closing_edge(outline: &Outline) -> Option<(DVec2, DVec2)> {
    match outline.points() {
        [first, .., last] if !outline.is_closed() => Some((*last, *first)),
        _ => None,
    }
}

/// Intersection of segments `a0-a1` and `b0-b1`, endpoints included.
pub fn segment_intersection(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> Option<DVec2> {
    let da = a1 - a0;
    let db = b1 - b0;
    let cross = da.perp_dot(db);
    if cross.abs() < defaults::EPSILON {
        return None;
    }
    let offset = b0 - a0;
    let t = offset.perp_dot(db) / cross;
    let u = offset.perp_dot(da) / cross;
    let eps = defaults::EPSILON;
    if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
        Some(a0 + da * t.clamp(0.0, 1.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn triangle() -> Outline {
        Outline::closed(vec![dvec2(5.0, 0.0), dvec2(10.0, 10.0), dvec2(0.0, 10.0)])
    }

    #[test]
    fn contains_interior_points_only() {
        let t = triangle();
        assert!(contains(&t, dvec2(5.0, 5.0)));
        assert!(contains(&t, dvec2(5.0, 9.9)));
        assert!(!contains(&t, dvec2(1.0, 1.0)));
        assert!(!contains(&t, dvec2(5.0, 10.5)));
        assert!(!contains(&t, dvec2(-1.0, 5.0)));
    }

    #[test]
    fn contains_handles_either_winding() {
        let reversed = Outline::closed(triangle().points().iter().rev().copied().collect());
        assert!(contains(&reversed, dvec2(5.0, 5.0)));
        assert!(!contains(&reversed, dvec2(9.0, 1.0)));
    }

    #[test]
    fn tiny_outlines_contain_nothing() {
        assert!(!contains(&Outline::closed(vec![dvec2(1.0, 1.0)]), dvec2(1.0, 1.0)));
        assert!(!contains(&Outline::default(), DVec2::ZERO));
    }

    #[test]
    fn segment_intersection_cases() {
        let hit = segment_intersection(dvec2(0.0, 0.0), dvec2(10.0, 10.0), dvec2(0.0, 10.0), dvec2(10.0, 0.0));
        assert_eq!(hit, Some(dvec2(5.0, 5.0)));
        // Parallel
        assert_eq!(
            segment_intersection(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(0.0, 1.0), dvec2(10.0, 1.0)),
            None
        );
        // Lines cross, segments don't
        assert_eq!(
            segment_intersection(dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(0.0, 10.0), dvec2(10.0, 0.0)),
            None
        );
    }

    #[test]
    fn chop_lands_on_edge_facing_the_point() {
        let t = triangle();
        // Straight below: leaves through the bottom edge
        assert_eq!(chop(&t, dvec2(5.0, 20.0)), Some(dvec2(5.0, 10.0)));
        // Straight above: leaves through the apex
        let top = chop(&t, dvec2(5.0, -20.0)).unwrap();
        assert!(top.distance(dvec2(5.0, 0.0)) < 1e-9);
    }

    #[test]
    fn chop_from_inside_snaps_to_nearest_vertex() {
        let t = triangle();
        // Center of the bounds is (5, 5); the apex is the closest vertex
        assert_eq!(chop(&t, dvec2(5.0, 6.0)), Some(dvec2(5.0, 0.0)));
    }

    #[test]
    fn chop_empty_outline() {
        assert_eq!(chop(&Outline::default(), dvec2(1.0, 1.0)), None);
    }
}
