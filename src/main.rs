//! Hex knot mosaic viewer and exporter.
//!
//! With the `native` feature this is a CLI (`view`, `dump`, `paths`, `svg`,
//! `check`, `catalog`); the `web` build opens the viewer on the sample mosaic.

#[cfg(feature = "native")]
mod cli;

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "native"))]
fn main() -> bevy::app::AppExit {
    use hex_knot_mosaic::viewer::{self, Mosaic, ViewerConfig};
    use hex_knot_mosaic::{MosaicGrid, TileCatalog};

    viewer::run(
        Mosaic {
            grid: MosaicGrid::sample(),
            catalog: TileCatalog::standard(),
        },
        ViewerConfig::default(),
    )
}
