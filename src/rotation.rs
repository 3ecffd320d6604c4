//! Rotation of edge labels by multiples of 60°.

use crate::catalog::{Edge, EdgePair};

/// Rotates an edge index by `rotation` clockwise steps.
///
/// Uses a true modulo, so negative and very large rotations still land in `0..=5`.
///
/// ```
/// # use hex_knot_mosaic::rotation::rotate_edge;
/// assert_eq!(rotate_edge(5, 1), 0);
/// assert_eq!(rotate_edge(0, -1), 5);
/// assert_eq!(rotate_edge(3, 6), 3);
/// ```
pub fn rotate_edge(edge: Edge, rotation: i32) -> Edge {
    // Widen first: `edge + i32::MAX` must not overflow.
    (i64::from(edge) + i64::from(rotation)).rem_euclid(6) as Edge
}

/// Rotates both endpoints of every segment, keeping order and pairing.
pub fn rotate_paths(paths: &[EdgePair], rotation: i32) -> Vec<EdgePair> {
    paths
        .iter()
        .map(|&(a, b)| (rotate_edge(a, rotation), rotate_edge(b, rotation)))
        .collect()
}
