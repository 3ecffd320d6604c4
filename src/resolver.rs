//! Per-cell strand query: grid + catalog + rotation.

use hexx::Hex;
use tracing::trace;

use crate::catalog::{EdgePair, TileCatalog};
use crate::error::UnknownTileError;
use crate::grid::MosaicGrid;
use crate::rotation::rotate_paths;

/// Rotated strand segments of the tile at `hex`.
///
/// An empty cell yields an empty list. A placed tile whose id is missing
/// from `catalog` is a configuration error and is returned as such.
pub fn paths_at(
    grid: &MosaicGrid,
    catalog: &TileCatalog,
    hex: Hex,
) -> Result<Vec<EdgePair>, UnknownTileError> {
    let Some(placed) = grid.get(hex) else {
        return Ok(Vec::new());
    };
    let pattern = catalog.lookup(placed.tile)?;
    trace!(
        q = hex.x,
        r = hex.y,
        tile = %placed.tile,
        rotation = placed.rotation,
        "resolving paths"
    );
    Ok(rotate_paths(&pattern.paths, placed.rotation))
}
