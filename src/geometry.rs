//! Axial hex coordinates mapped onto the Euclidean plane.
//!
//! Cells are addressed by [`Hex`] (`x` = q, `y` = r). Directions and edges
//! share the same labelling: `0` is the top, increasing clockwise.

use hexx::{Hex, Vec2};

use crate::catalog::Edge;
use crate::error::InvalidDirectionError;

/// Axial deltas for directions `0..=5`, starting at the top and going clockwise.
pub const HEX_DIRECTIONS: [Hex; 6] = [
    Hex::new(0, -1),
    Hex::new(1, -1),
    Hex::new(1, 0),
    Hex::new(0, 1),
    Hex::new(-1, 1),
    Hex::new(-1, 0),
];

const SQRT_3: f32 = 1.732_050_8;

/// Plane position of a cell center.
///
/// `x = size·√3·(q + r/2)`, `y = size·1.5·r`.
///
/// ```
/// # use hex_knot_mosaic::geometry::axial_to_plane;
/// # use hexx::{Hex, Vec2};
/// assert_eq!(axial_to_plane(Hex::ZERO, 1.0), Vec2::ZERO);
/// assert_eq!(axial_to_plane(Hex::new(0, 2), 2.0).y, 6.0);
/// ```
pub fn axial_to_plane(hex: Hex, size: f32) -> Vec2 {
    let (q, r) = (hex.x as f32, hex.y as f32);
    Vec2::new(size * SQRT_3 * (q + r / 2.0), size * 1.5 * r)
}

/// The adjacent cell in `direction`.
///
/// Strict: directions above `5` are rejected rather than wrapped.
pub fn neighbor(hex: Hex, direction: u8) -> Result<Hex, InvalidDirectionError> {
    HEX_DIRECTIONS
        .get(usize::from(direction))
        .map(|&delta| hex + delta)
        .ok_or(InvalidDirectionError(direction))
}

/// Point on the cell boundary for `edge`, at `radius` from `center`.
///
/// The angle is `60°·edge − 30°`, so edge `0` sits at −30° and consecutive
/// edges are 60° apart.
pub fn edge_to_plane(edge: Edge, center: Vec2, radius: f32) -> Vec2 {
    let angle = (60.0 * f32::from(edge) - 30.0).to_radians();
    center + radius * Vec2::new(angle.cos(), angle.sin())
}
