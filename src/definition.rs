//! RON definition files for catalogs and grids.
//!
//! Catalog file: a list of `(id: 16, name: "cross_1", paths: [(0, 3), (1, 4)])`.
//! Grid file: a list of `(q: 0, r: 0, tile: 16, rotation: 0, component: "A")`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use hexx::Hex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{EdgePair, TileCatalog, TileId, TilePattern};
use crate::error::DefinitionError;
use crate::grid::{MosaicGrid, PlacedTile};

/// One catalog entry as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Tile id.
    pub id: TileId,
    /// Display name.
    pub name: String,
    /// Ordered edge pairs.
    pub paths: Vec<EdgePair>,
}

/// One placed cell as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDefinition {
    /// Axial q.
    pub q: i32,
    /// Axial r.
    pub r: i32,
    /// Referenced tile id. Not checked against any catalog.
    pub tile: TileId,
    /// Rotation steps, any integer.
    pub rotation: i32,
    /// Component tag.
    #[serde(default)]
    pub component: String,
}

/// Builds a catalog from definitions, rejecting bad edges and repeated ids.
pub fn catalog_from_definitions(
    defs: Vec<TileDefinition>,
) -> Result<TileCatalog, DefinitionError> {
    let mut seen = HashSet::new();
    let mut tiles = Vec::with_capacity(defs.len());
    for TileDefinition { id, name, paths } in defs {
        if !seen.insert(id) {
            return Err(DefinitionError::DuplicateTile(id));
        }
        for &(a, b) in &paths {
            if let Some(edge) = [a, b].into_iter().find(|&e| e > 5) {
                return Err(DefinitionError::EdgeOutOfRange { id, name, edge });
            }
            if a == b {
                warn!(tile = %id, name = %name, edge = a, "degenerate segment");
            }
        }
        tiles.push((id, TilePattern::new(name, paths)));
    }
    Ok(tiles.into_iter().collect())
}

/// Builds a grid from cell definitions. Repeated coordinates: last one wins.
pub fn grid_from_definitions(defs: Vec<CellDefinition>) -> MosaicGrid {
    let mut grid = MosaicGrid::new();
    for cell in defs {
        let hex = Hex::new(cell.q, cell.r);
        let placed = PlacedTile::new(cell.tile, cell.rotation, cell.component);
        if grid.insert(hex, placed).is_some() {
            warn!(q = cell.q, r = cell.r, "cell defined twice, keeping the later entry");
        }
    }
    grid
}

/// Parses a catalog from RON text.
pub fn parse_catalog(text: &str) -> Result<TileCatalog, DefinitionError> {
    catalog_from_definitions(ron::from_str(text)?)
}

/// Parses a grid from RON text.
pub fn parse_grid(text: &str) -> Result<MosaicGrid, DefinitionError> {
    Ok(grid_from_definitions(ron::from_str(text)?))
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: &Path) -> Result<TileCatalog, DefinitionError> {
    let catalog = parse_catalog(&read(path)?)?;
    info!(path = %path.display(), tiles = catalog.len(), "loaded tile catalog");
    Ok(catalog)
}

/// Reads and parses a grid file.
pub fn load_grid(path: &Path) -> Result<MosaicGrid, DefinitionError> {
    let grid = parse_grid(&read(path)?)?;
    info!(path = %path.display(), cells = grid.len(), "loaded grid");
    Ok(grid)
}

/// Serializes a catalog back to RON, ids ascending.
pub fn catalog_to_ron(catalog: &TileCatalog) -> Result<String, ron::Error> {
    let defs: Vec<TileDefinition> = catalog
        .iter()
        .map(|(id, pattern)| TileDefinition {
            id,
            name: pattern.name.clone(),
            paths: pattern.paths.clone(),
        })
        .collect();
    ron::ser::to_string_pretty(&defs, ron::ser::PrettyConfig::default())
}

fn read(path: &Path) -> Result<String, DefinitionError> {
    fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::paths_at;

    const STANDARD_TILES: &str = include_str!("../assets/standard_tiles.ron");
    const SAMPLE_GRID: &str = include_str!("../assets/sample_grid.ron");

    #[test]
    fn shipped_catalog_matches_builtin() {
        let parsed = parse_catalog(STANDARD_TILES).unwrap();
        let builtin = TileCatalog::standard();
        assert_eq!(parsed.len(), builtin.len());
        for (id, pattern) in builtin.iter() {
            assert_eq!(parsed.lookup(id).unwrap(), pattern, "tile {id}");
        }
    }

    #[test]
    fn shipped_grid_matches_sample() {
        let parsed = parse_grid(SAMPLE_GRID).unwrap();
        let sample = MosaicGrid::sample();
        let a: Vec<_> = parsed.iter().collect();
        let b: Vec<_> = sample.iter().collect();
        assert_eq!(a, b);
        let catalog = TileCatalog::standard();
        assert_eq!(paths_at(&parsed, &catalog, Hex::new(2, 0)), Ok(vec![(0, 3)]));
    }

    #[test]
    fn catalog_round_trips_through_ron() {
        let text = catalog_to_ron(&TileCatalog::standard()).unwrap();
        let back = parse_catalog(&text).unwrap();
        assert_eq!(back.len(), 27);
        assert_eq!(back.lookup(TileId(25)).unwrap().name, "three_way");
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let err = parse_catalog(r#"[(id: 3, name: "bad", paths: [(0, 6)])]"#).unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::EdgeOutOfRange { id: TileId(3), edge: 6, .. }
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let text = r#"[
            (id: 1, name: "a", paths: []),
            (id: 1, name: "b", paths: [(0, 3)]),
        ]"#;
        assert!(matches!(
            parse_catalog(text),
            Err(DefinitionError::DuplicateTile(TileId(1)))
        ));
    }

    #[test]
    fn degenerate_segment_is_accepted() {
        let catalog = parse_catalog(r#"[(id: 8, name: "dot", paths: [(2, 2)])]"#).unwrap();
        assert_eq!(catalog.lookup(TileId(8)).unwrap().paths, vec![(2, 2)]);
    }

    #[test]
    fn grid_accepts_unknown_ids_and_repeats() {
        let text = r#"[
            (q: 0, r: 0, tile: 99, rotation: -7, component: "A"),
            (q: 0, r: 0, tile: 16, rotation: 2),
        ]"#;
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.len(), 1);
        let placed = grid.get(Hex::ZERO).unwrap();
        assert_eq!(placed.tile, TileId(16));
        assert_eq!(placed.component, "");
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        assert!(matches!(
            parse_grid("[(q: 0, r: )]"),
            Err(DefinitionError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.ron");
        let err = load_catalog(path).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.ron"));
    }
}
