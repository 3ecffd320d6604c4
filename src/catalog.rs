//! Tile catalog: the immutable table of strand patterns keyed by tile id.
//!
//! Edges are labelled `0..=5`, `0` at the top and increasing clockwise. A
//! pattern is an ordered list of edge pairs, each pair one strand crossing
//! the cell. Grids reference patterns by [`TileId`] only; the catalog is
//! passed explicitly to whoever needs to resolve them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTileError;

/// Edge index of a hexagon, `0..=5`.
pub type Edge = u8;

/// One strand segment connecting two edges of the same cell.
pub type EdgePair = (Edge, Edge);

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named strand pattern before rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePattern {
    /// Informational display name.
    pub name: String,
    /// Strand segments in catalog order. Empty for the blank tile.
    pub paths: Vec<EdgePair>,
}

impl TilePattern {
    /// Builds a pattern from a name and a segment list.
    pub fn new(name: impl Into<String>, paths: impl Into<Vec<EdgePair>>) -> Self {
        Self {
            name: name.into(),
            paths: paths.into(),
        }
    }
}

/// Read-only table of tile patterns.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: BTreeMap<TileId, TilePattern>,
}

const STANDARD_TILES: &[(u32, &str, &[EdgePair])] = &[
    (1, "empty", &[]),
    (2, "cap_EW", &[(1, 4)]),
    (3, "cap_NESW", &[(0, 3)]),
    (4, "cap_NWSE", &[(5, 2)]),
    (5, "elbow_NE", &[(0, 1)]),
    (6, "elbow_EN", &[(1, 0)]),
    (7, "elbow_ES", &[(1, 2)]),
    (8, "elbow_SE", &[(2, 1)]),
    (9, "elbow_SW", &[(3, 2)]),
    (10, "elbow_WS", &[(2, 3)]),
    (11, "elbow_WN", &[(3, 4)]),
    (12, "elbow_NW", &[(4, 3)]),
    (13, "line_H", &[(1, 4)]),
    (14, "line_diag", &[(0, 3)]),
    (15, "line_diag2", &[(5, 2)]),
    (16, "cross_1", &[(0, 3), (1, 4)]),
    (17, "cross_2", &[(2, 5), (0, 3)]),
    (18, "cross_3", &[(1, 4), (2, 5)]),
    (19, "Y_split", &[(0, 2), (0, 4), (2, 4)]),
    (20, "Y_merge", &[(1, 3), (1, 5), (3, 5)]),
    (21, "T_conn", &[(0, 3), (1, 4), (2, 5)]),
    (22, "T_conn_alt", &[(0, 2), (1, 5), (3, 4)]),
    (23, "loop", &[(1, 2), (4, 5)]),
    (24, "big_curve", &[(0, 5), (2, 3)]),
    (25, "three_way", &[(0, 2), (2, 4), (4, 0)]),
    (26, "triple_knot", &[(0, 3), (1, 4), (2, 5)]),
    (27, "junction", &[(0, 2), (2, 4), (0, 4)]),
];

/// Ids used by the plotting sample: `cap_NWSE`, `line_H` and `cross_1`.
const PLOT_SUBSET: [u32; 3] = [4, 13, 16];

impl TileCatalog {
    /// The full 27-tile standard set (ids `1..=27`).
    pub fn standard() -> Self {
        STANDARD_TILES
            .iter()
            .map(|&(id, name, paths)| (TileId(id), TilePattern::new(name, paths)))
            .collect()
    }

    /// The three tiles the sample grid uses.
    pub fn plot_subset() -> Self {
        STANDARD_TILES
            .iter()
            .filter(|(id, _, _)| PLOT_SUBSET.contains(id))
            .map(|&(id, name, paths)| (TileId(id), TilePattern::new(name, paths)))
            .collect()
    }

    /// Resolves a tile id.
    pub fn lookup(&self, id: TileId) -> Result<&TilePattern, UnknownTileError> {
        self.tiles.get(&id).ok_or(UnknownTileError(id))
    }

    /// Whether `id` is defined.
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Number of defined tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` when no tiles are defined.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TilePattern)> {
        self.tiles.iter().map(|(&id, pattern)| (id, pattern))
    }
}

impl FromIterator<(TileId, TilePattern)> for TileCatalog {
    fn from_iter<I: IntoIterator<Item = (TileId, TilePattern)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_has_27_tiles() {
        let catalog = TileCatalog::standard();
        assert_eq!(catalog.len(), 27);
        let ids: Vec<u32> = catalog.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, (1..=27).collect::<Vec<_>>());
    }

    #[test]
    fn lookup_returns_named_pattern() {
        let catalog = TileCatalog::standard();
        let cross = catalog.lookup(TileId(16)).unwrap();
        assert_eq!(cross.name, "cross_1");
        assert_eq!(cross.paths, vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn empty_tile_has_no_strands() {
        let catalog = TileCatalog::standard();
        assert!(catalog.lookup(TileId(1)).unwrap().paths.is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let catalog = TileCatalog::standard();
        assert_eq!(catalog.lookup(TileId(99)), Err(UnknownTileError(TileId(99))));
        assert_eq!(catalog.lookup(TileId(0)), Err(UnknownTileError(TileId(0))));
    }

    #[test]
    fn standard_edges_are_in_range_and_non_degenerate() {
        for (id, pattern) in TileCatalog::standard().iter() {
            for &(a, b) in &pattern.paths {
                assert!(a <= 5 && b <= 5, "tile {id} has out-of-range edge");
                assert_ne!(a, b, "tile {id} has a degenerate segment");
            }
        }
    }

    #[test]
    fn plot_subset_matches_standard_entries() {
        let subset = TileCatalog::plot_subset();
        let standard = TileCatalog::standard();
        assert_eq!(subset.len(), 3);
        for (id, pattern) in subset.iter() {
            assert_eq!(standard.lookup(id).unwrap(), pattern);
        }
        assert!(!subset.contains(TileId(1)));
    }
}
