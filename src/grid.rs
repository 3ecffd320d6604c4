//! The mosaic grid: placed tiles keyed by axial coordinate.

use std::collections::HashMap;

use hexx::Hex;

use crate::catalog::{TileCatalog, TileId};

/// A tile placed in one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    /// Catalog entry drawn in this cell.
    pub tile: TileId,
    /// Clockwise 60° steps. Any value is accepted and reduced mod 6 on use.
    pub rotation: i32,
    /// Descriptive knot/link component tag.
    pub component: String,
}

impl PlacedTile {
    /// Builds a placed tile.
    pub fn new(tile: TileId, rotation: i32, component: impl Into<String>) -> Self {
        Self {
            tile,
            rotation,
            component: component.into(),
        }
    }
}

/// Sparse mapping from [`Hex`] to [`PlacedTile`].
///
/// Iteration follows first-insertion order so renders and dumps are
/// deterministic. Overwriting a cell keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct MosaicGrid {
    cells: HashMap<Hex, PlacedTile>,
    order: Vec<Hex>,
}

impl MosaicGrid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Three cells of component `A`: `cross_1`, `line_H`, and `cap_NWSE` turned once.
    pub fn sample() -> Self {
        let mut grid = Self::new();
        grid.insert(Hex::new(0, 0), PlacedTile::new(TileId(16), 0, "A"));
        grid.insert(Hex::new(1, 0), PlacedTile::new(TileId(13), 0, "A"));
        grid.insert(Hex::new(2, 0), PlacedTile::new(TileId(4), 1, "A"));
        grid
    }

    /// Places `tile` at `hex`, returning the record it replaced.
    pub fn insert(&mut self, hex: Hex, tile: PlacedTile) -> Option<PlacedTile> {
        let previous = self.cells.insert(hex, tile);
        if previous.is_none() {
            self.order.push(hex);
        }
        previous
    }

    /// The tile at `hex`, or `None` for an empty cell.
    pub fn get(&self, hex: Hex) -> Option<&PlacedTile> {
        self.cells.get(&hex)
    }

    /// Clears `hex`, returning what was there.
    pub fn remove(&mut self, hex: Hex) -> Option<PlacedTile> {
        let removed = self.cells.remove(&hex)?;
        self.order.retain(|&h| h != hex);
        Some(removed)
    }

    /// Whether `hex` is occupied.
    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Occupied cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Hex, &PlacedTile)> {
        self.order.iter().map(|hex| (*hex, &self.cells[hex]))
    }

    /// Coordinates tagged with `component`, in insertion order.
    pub fn cells_in_component<'a>(
        &'a self,
        component: &'a str,
    ) -> impl Iterator<Item = Hex> + 'a {
        self.iter()
            .filter(move |(_, placed)| placed.component == component)
            .map(|(hex, _)| hex)
    }

    /// Cells whose tile id `catalog` does not define, in insertion order.
    pub fn unknown_tiles<'a>(
        &'a self,
        catalog: &'a TileCatalog,
    ) -> impl Iterator<Item = (Hex, TileId)> + 'a {
        self.iter()
            .filter(move |(_, placed)| !catalog.contains(placed.tile))
            .map(|(hex, placed)| (hex, placed.tile))
    }
}
