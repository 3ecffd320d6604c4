//! Pure curve helpers used by the renderer.
//!
//! Free of any drawing backend; everything operates on [`Vec2`].

use std::f32::consts::TAU;

use hexx::Vec2;

/// Seven outline vertices of a hexagon with circumradius `size`.
///
/// Angles are sampled evenly over a full turn starting at 0 rad, so the
/// last vertex closes the polygon on the first.
pub fn hexagon_outline(center: Vec2, size: f32) -> [Vec2; 7] {
    std::array::from_fn(|i| {
        let angle = TAU * i as f32 / 6.0;
        center + size * Vec2::new(angle.cos(), angle.sin())
    })
}

/// Control point that bows a strand toward the cell center.
///
/// Midpoint between the chord's own midpoint and `center`.
pub fn arc_control_point(from: Vec2, to: Vec2, center: Vec2) -> Vec2 {
    let chord_mid = (from + to) / 2.0;
    (chord_mid + center) / 2.0
}

/// Samples a quadratic Bézier at `steps` parameters spread uniformly over `[0, 1]`.
///
/// Blend: `(1−t)²·p0 + 2(1−t)t·p1 + t²·p2`. With `steps >= 2` the first and
/// last samples are exactly `p0` and `p2`. One step yields `[p0]`, zero
/// steps an empty list.
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, steps: usize) -> Vec<Vec2> {
    match steps {
        0 => Vec::new(),
        1 => vec![p0],
        _ => {
            let last = (steps - 1) as f32;
            (0..steps)
                .map(|i| {
                    let t = i as f32 / last;
                    let u = 1.0 - t;
                    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
                })
                .collect()
        }
    }
}
