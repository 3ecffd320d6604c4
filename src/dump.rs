//! Human-readable per-cell listing. Informational only; not a stable format.

use std::io::{self, Write};

use hexx::Hex;

use crate::catalog::TileCatalog;
use crate::grid::MosaicGrid;
use crate::resolver::paths_at;

/// One line per cell: name, id and rotation. Unknown ids print `<unknown>`.
///
/// With `component` set, only cells tagged with it are listed.
pub fn write_tiles(
    out: &mut impl Write,
    grid: &MosaicGrid,
    catalog: &TileCatalog,
    component: Option<&str>,
) -> io::Result<()> {
    for hex in selected(grid, component) {
        let Some(placed) = grid.get(hex) else { continue };
        let name = catalog
            .lookup(placed.tile)
            .map_or("<unknown>", |pattern| pattern.name.as_str());
        writeln!(
            out,
            "Tile at ({}, {}): {} (id={}), rotation={}",
            hex.x, hex.y, name, placed.tile, placed.rotation
        )?;
    }
    Ok(())
}

/// One line per cell with its rotated strand segments.
pub fn write_paths(
    out: &mut impl Write,
    grid: &MosaicGrid,
    catalog: &TileCatalog,
    component: Option<&str>,
) -> io::Result<()> {
    for hex in selected(grid, component) {
        match paths_at(grid, catalog, hex) {
            Ok(paths) => writeln!(out, "At ({}, {}), paths: {:?}", hex.x, hex.y, paths)?,
            Err(err) => writeln!(out, "At ({}, {}), paths: <{err}>", hex.x, hex.y)?,
        }
    }
    Ok(())
}

fn selected(grid: &MosaicGrid, component: Option<&str>) -> Vec<Hex> {
    match component {
        Some(component) => grid.cells_in_component(component).collect(),
        None => grid.iter().map(|(hex, _)| hex).collect(),
    }
}
