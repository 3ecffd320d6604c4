use bevy::prelude::*;

use crate::catalog::TileCatalog;
use crate::grid::MosaicGrid;
use crate::render::Scene;

/// Grid and catalog the viewer draws.
#[derive(Resource, Debug, Clone)]
pub struct Mosaic {
    /// Placed tiles.
    pub grid: MosaicGrid,
    /// Catalog the grid's tile ids resolve against.
    pub catalog: TileCatalog,
}

/// Display list produced by the startup render pass.
#[derive(Resource, Debug, Default)]
pub struct MosaicScene {
    /// Recorded outlines, strands and labels.
    pub scene: Scene,
    /// Cells whose strands were skipped for an unknown tile id.
    pub skipped: usize,
}

/// Marker for the 2-D camera looking at the mosaic.
#[derive(Component, Reflect)]
pub struct ViewerCamera;
