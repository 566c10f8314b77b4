//! Joint angle and body-line slope calculations
//!
//! Pure 2D geometry over landmark positions. Both functions are total:
//! degenerate input yields None (angle) or an epsilon-floored ratio (slope),
//! never a panic.

use crate::pose::frame::Landmark;

/// Side lengths below this are treated as a coincident-point degenerate case
const MIN_SIDE_LENGTH: f32 = 1e-4;

/// Denominator floor for vertical segments
const SLOPE_EPSILON: f32 = 1e-3;

fn distance(p: Landmark, q: Landmark) -> f32 {
    ((q.x - p.x).powi(2) + (q.y - p.y).powi(2)).sqrt()
}

/// Angle in degrees at vertex `b` of the triangle `a-b-c`, via the law of
/// cosines on the three pairwise distances.
///
/// Returns None when any side collapses to zero length - the caller must
/// treat that as "classification unavailable this frame", not as 0 degrees.
pub fn angle_degrees(a: Landmark, b: Landmark, c: Landmark) -> Option<f32> {
    let ab = distance(a, b);
    let bc = distance(b, c);
    let ac = distance(a, c);

    if ab < MIN_SIDE_LENGTH || bc < MIN_SIDE_LENGTH {
        return None;
    }

    // Law of cosines: ac^2 = ab^2 + bc^2 - 2*ab*bc*cos(angle at b)
    let cos_angle = ((ab * ab + bc * bc - ac * ac) / (2.0 * ab * bc)).clamp(-1.0, 1.0);

    Some(cos_angle.acos().to_degrees())
}

/// Signed slope of the segment p -> q: dy / dx with the denominator floored
/// to a small epsilon when the points share an x coordinate.
pub fn slope(p: Landmark, q: Landmark) -> f32 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;

    if dx == 0.0 {
        dy / SLOPE_EPSILON
    } else {
        dy / dx
    }
}
