//! Stroke offsetting: grow or shrink a closed outline by a signed distance
//!
//! Each edge moves along its outward normal. Where neighbouring offset edges
//! overlap, the vertex becomes their intersection. Where they diverge, the
//! stroke join fills the gap (miter up to the miter limit, bevel, or a round
//! arc).
//!
//! The growth helpers at the bottom turn a figure's stroke attributes into
//! the signed distance used for filling, stroking and hit testing.

use glam::{DVec2, dvec2};

use crate::attributes::{Attributes, FillUnderStroke, StrokeJoin, StrokePlacement, StrokeType};
use crate::log::{debug, trace};
use crate::types::{Outline, signed_area};

use super::defaults;

/// Offset a closed outline by `distance`.
///
/// Positive distances grow the outline, negative ones shrink it; the outward
/// side is taken from the outline's winding, so either direction works.
/// `miter_limit` is the longest allowed miter as a multiple of `|distance|`
/// and is clamped to at least 1.
///
/// Zero distance returns the outline untouched. Outlines that are open, have
/// fewer than three distinct vertices or no area are also returned as-is.
/// Shrinking past the point where the outline vanishes yields a single-point
/// outline at the centroid.
pub fn offset(outline: &Outline, distance: f64, join: StrokeJoin, miter_limit: f64) -> Outline {
    if distance == 0.0 {
        return outline.clone();
    }

    let ring = distinct_ring(outline.points());
    let area = signed_area(&ring);
    if !outline.is_closed() || ring.len() < 3 || area.abs() < defaults::EPSILON {
        debug!(
            vertices = ring.len(),
            area,
            closed = outline.is_closed(),
            "outline cannot be offset, returning it unchanged"
        );
        return outline.clone();
    }

    let winding = area.signum();
    let miter_limit = miter_limit.max(1.0);
    let n = ring.len();

    // Unit direction and outward normal of edge i (ring[i] -> ring[i + 1])
    let dirs: Vec<DVec2> = (0..n)
        .map(|i| (ring[(i + 1) % n] - ring[i]).normalize())
        .collect();
    let normals: Vec<DVec2> = dirs.iter().map(|d| outward_normal(*d, winding)).collect();

    let mut out = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = (i + n - 1) % n;
        let corner = Corner {
            vertex: ring[i],
            dir_in: dirs[prev],
            dir_out: dirs[i],
            normal_in: normals[prev],
            normal_out: normals[i],
        };
        corner.push(&mut out, distance, winding, join, miter_limit);
    }

    // A shrunken ring whose winding flipped has turned inside out
    let result_area = signed_area(&out);
    if distance < 0.0 && (result_area.abs() < defaults::EPSILON || result_area.signum() != winding) {
        let centroid = ring.iter().copied().sum::<DVec2>() / n as f64;
        debug!(distance, area, result_area, "outline collapsed while shrinking");
        return Outline::closed(vec![centroid]);
    }

    trace!(distance, input = n, output = out.len(), "offset outline");
    Outline::closed(out)
}

/// One vertex of the ring with the edges either side of it.
struct Corner {
    vertex: DVec2,
    dir_in: DVec2,
    dir_out: DVec2,
    normal_in: DVec2,
    normal_out: DVec2,
}

impl Corner {
    fn push(&self, out: &mut Vec<DVec2>, distance: f64, winding: f64, join: StrokeJoin, miter_limit: f64) {
        let turn = self.dir_in.perp_dot(self.dir_out) * winding;
        let convex = turn > 0.0;
        let straight = turn.abs() < defaults::EPSILON && self.dir_in.dot(self.dir_out) > 0.0;

        if straight {
            out.push(self.vertex + self.normal_in * distance);
            return;
        }

        // Offset edges diverge on the outer side of a convex vertex when
        // growing, and on the inner side of a reflex vertex when shrinking.
        let diverging = convex == (distance > 0.0);
        if !diverging {
            out.push(self.miter_point(distance));
            return;
        }

        let a = self.vertex + self.normal_in * distance;
        let b = self.vertex + self.normal_out * distance;
        match join {
            StrokeJoin::Miter => {
                let miter = self.miter_vector();
                if miter.length() <= miter_limit {
                    out.push(self.vertex + miter * distance);
                } else {
                    out.push(a);
                    out.push(b);
                }
            }
            StrokeJoin::Bevel => {
                out.push(a);
                out.push(b);
            }
            StrokeJoin::Round => {
                let from = self.normal_in;
                let sweep = from.perp_dot(self.normal_out).atan2(from.dot(self.normal_out));
                let steps = (sweep.abs() / defaults::ROUND_JOIN_STEP - defaults::EPSILON)
                    .ceil()
                    .max(1.0) as usize;
                for k in 0..=steps {
                    let angle = sweep * k as f64 / steps as f64;
                    out.push(self.vertex + DVec2::from_angle(angle).rotate(from) * distance);
                }
            }
        }
    }

    /// Vector from the vertex to the intersection of the two offset lines,
    /// per unit of offset distance.
    fn miter_vector(&self) -> DVec2 {
        let sum = self.normal_in + self.normal_out;
        let denom = 1.0 + self.normal_in.dot(self.normal_out);
        if denom < defaults::EPSILON {
            // Edges fold back onto each other; there is no finite miter
            return DVec2::INFINITY;
        }
        sum / denom
    }

    /// Intersection of the offset lines, falling back to the incoming offset
    /// edge's endpoint when the edges fold back.
    fn miter_point(&self, distance: f64) -> DVec2 {
        let denom = 1.0 + self.normal_in.dot(self.normal_out);
        if denom < defaults::EPSILON {
            return self.vertex + self.normal_in * distance;
        }
        self.vertex + (self.normal_in + self.normal_out) / denom * distance
    }
}

/// Outward normal of an edge with direction `dir` on a ring of the given winding.
fn outward_normal(dir: DVec2, winding: f64) -> DVec2 {
    if winding > 0.0 {
        dvec2(dir.y, -dir.x)
    } else {
        dvec2(-dir.y, dir.x)
    }
}

/// Drop vertices that repeat their predecessor (including the wrap-around).
fn distinct_ring(points: &[DVec2]) -> Vec<DVec2> {
    let mut ring: Vec<DVec2> = Vec::with_capacity(points.len());
    for p in points {
        if ring.last().is_none_or(|last| last.distance(*p) > defaults::EPSILON) {
            ring.push(*p);
        }
    }
    while ring.len() > 1 && ring[0].distance(ring[ring.len() - 1]) <= defaults::EPSILON {
        ring.pop();
    }
    ring
}

// ============================================================================
// Growth Distances
// ============================================================================

/// Model units per screen unit. Anything that is not a positive finite
/// number is treated as 1:1.
fn view_factor(scale_denominator: f64) -> f64 {
    if scale_denominator.is_finite() && scale_denominator > defaults::EPSILON {
        scale_denominator
    } else {
        debug!(scale_denominator, "unusable scale denominator, using 1:1");
        1.0
    }
}

/// Width of both lines and the gap for a double stroke, or the single line
/// width otherwise, in the units the stroke was specified in.
fn nominal_stroke_width(attrs: &Attributes) -> f64 {
    let width = attrs.stroke_width();
    if attrs.stroke_type() == StrokeType::Double {
        width * (1.0 + attrs.stroke_inner_width_factor())
    } else {
        width
    }
}

/// Model-space width of everything the stroke paints when viewed at
/// 1:`scale_denominator`.
///
/// Pixel-sized strokes keep their on-screen width, so their model width is
/// the nominal width times the denominator. Model-sized strokes ignore it.
pub fn total_stroke_width(attrs: &Attributes, scale_denominator: f64) -> f64 {
    let width = nominal_stroke_width(attrs);
    if attrs.stroke_pixel_sized() {
        width * view_factor(scale_denominator)
    } else {
        width
    }
}

/// Offset applied to the outline before filling it.
pub fn fill_growth(attrs: &Attributes, scale_denominator: f64) -> f64 {
    if !attrs.has_stroke() {
        return 0.0;
    }
    let w = total_stroke_width(attrs, scale_denominator);
    match (attrs.fill_under_stroke(), attrs.stroke_placement()) {
        (FillUnderStroke::Full, StrokePlacement::Inside) => 0.0,
        (FillUnderStroke::Full, StrokePlacement::Outside) => w,
        (FillUnderStroke::Full, StrokePlacement::Center) => w / 2.0,
        (FillUnderStroke::None, StrokePlacement::Inside) => -w,
        (FillUnderStroke::None, StrokePlacement::Outside) => 0.0,
        (FillUnderStroke::None, StrokePlacement::Center) => -w / 2.0,
        (FillUnderStroke::Center, StrokePlacement::Inside) => -w / 2.0,
        (FillUnderStroke::Center, StrokePlacement::Outside) => w / 2.0,
        (FillUnderStroke::Center, StrokePlacement::Center) => 0.0,
    }
}

/// Offset applied to the outline before stroking it, so the stroke's center
/// line sits where its placement asks.
pub fn draw_growth(attrs: &Attributes, scale_denominator: f64) -> f64 {
    if !attrs.has_stroke() {
        return 0.0;
    }
    let w = total_stroke_width(attrs, scale_denominator);
    match attrs.stroke_placement() {
        StrokePlacement::Inside => -w / 2.0,
        StrokePlacement::Outside => w / 2.0,
        StrokePlacement::Center => 0.0,
    }
}

/// How far the painted stroke can reach past the nominal outline, counting a
/// full-length miter at every corner.
pub fn stroke_extent(attrs: &Attributes, scale_denominator: f64) -> f64 {
    extent_for_width(attrs, total_stroke_width(attrs, scale_denominator))
}

/// Offset applied to the outline for pointer hit testing.
///
/// The stroke width is taken as an on-screen tolerance for every stroke, so
/// the model-space growth is that width times the denominator: zooming out
/// widens the hit area by exactly as much as it shrinks the figure.
pub fn hit_growth(attrs: &Attributes, scale_denominator: f64) -> f64 {
    extent_for_width(attrs, nominal_stroke_width(attrs) * view_factor(scale_denominator))
}

fn extent_for_width(attrs: &Attributes, w: f64) -> f64 {
    if !attrs.has_stroke() {
        return 0.0;
    }
    let outside = match attrs.stroke_join() {
        StrokeJoin::Miter => w * attrs.stroke_miter_limit(),
        StrokeJoin::Round | StrokeJoin::Bevel => w,
    };
    match attrs.stroke_placement() {
        StrokePlacement::Inside => 0.0,
        StrokePlacement::Outside => outside,
        StrokePlacement::Center => outside / 2.0,
    }
}
