//! Optional consistency report: do strands meet across shared edges?
//!
//! The grid never enforces this; [`check`] only reports. Edge `i` of a cell
//! faces the neighbor in direction `i`, whose matching edge is `(i + 3) mod 6`.

use std::collections::BTreeSet;

use hexx::Hex;

use crate::catalog::{Edge, TileCatalog};
use crate::error::UnknownTileError;
use crate::geometry::HEX_DIRECTIONS;
use crate::grid::MosaicGrid;
use crate::resolver::paths_at;
use crate::rotation::rotate_edge;

/// How a strand endpoint fails to continue into the next cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The facing cell is empty.
    Dangling,
    /// The facing cell is occupied but has no strand on the shared edge.
    Unmatched,
}

/// A strand endpoint with no partner across its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeMismatch {
    /// Cell owning the endpoint.
    pub hex: Hex,
    /// Rotated edge the strand ends on.
    pub edge: Edge,
    /// The cell across that edge.
    pub facing: Hex,
    /// Failure kind.
    pub kind: MismatchKind,
}

/// Edge shared with the neighbor across `edge`.
pub fn opposite_edge(edge: Edge) -> Edge {
    rotate_edge(edge, 3)
}

/// Lists every strand endpoint that does not continue into its neighbor.
///
/// Cells are visited in grid order and each cell's used edges ascending.
pub fn check(
    grid: &MosaicGrid,
    catalog: &TileCatalog,
) -> Result<Vec<EdgeMismatch>, UnknownTileError> {
    let mut mismatches = Vec::new();
    for (hex, _) in grid.iter() {
        for edge in used_edges(grid, catalog, hex)? {
            let facing = hex + HEX_DIRECTIONS[usize::from(edge)];
            let kind = if !grid.contains(facing) {
                MismatchKind::Dangling
            } else if !used_edges(grid, catalog, facing)?.contains(&opposite_edge(edge)) {
                MismatchKind::Unmatched
            } else {
                continue;
            };
            mismatches.push(EdgeMismatch {
                hex,
                edge,
                facing,
                kind,
            });
        }
    }
    Ok(mismatches)
}

fn used_edges(
    grid: &MosaicGrid,
    catalog: &TileCatalog,
    hex: Hex,
) -> Result<BTreeSet<Edge>, UnknownTileError> {
    Ok(paths_at(grid, catalog, hex)?
        .into_iter()
        .flat_map(|(a, b)| [a, b])
        .collect())
}
