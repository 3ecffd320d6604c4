use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bevy::app::AppExit;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hex_knot_mosaic::render::{RenderSettings, SvgCanvas, render_grid};
use hex_knot_mosaic::viewer::{self, Mosaic, ViewerConfig};
use hex_knot_mosaic::{MosaicGrid, TileCatalog, adjacency, definition, dump};

#[derive(Parser, Debug)]
#[command(name = "hex-knot-mosaic", version, about = "Hex knot mosaic viewer and exporter")]
struct Cli {
    /// RON tile catalog; the built-in 27-tile set when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// RON grid; the three-cell sample when omitted.
    #[arg(long, global = true)]
    grid: Option<PathBuf>,
    /// Hexagon circumradius in plane units.
    #[arg(long, global = true, default_value_t = 1.0)]
    size: f32,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive viewer (default).
    View,
    /// Print each cell's tile name, id and rotation.
    Dump {
        /// Only list cells tagged with this component.
        #[arg(long)]
        component: Option<String>,
    },
    /// Print each cell's rotated strand segments.
    Paths {
        /// Only list cells tagged with this component.
        #[arg(long)]
        component: Option<String>,
    },
    /// Export the mosaic as SVG.
    Svg {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Pixels per plane unit.
        #[arg(long, default_value_t = 60.0)]
        px_per_unit: f32,
    },
    /// Report strand endpoints that do not continue into a neighbor.
    Check,
    /// Write the active catalog as a RON definition file.
    Catalog {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::View);

    // The viewer's LogPlugin installs its own subscriber.
    if !matches!(command, Command::View) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let catalog = match &cli.catalog {
        Some(path) => definition::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => TileCatalog::standard(),
    };
    let grid = match &cli.grid {
        Some(path) => definition::load_grid(path)
            .with_context(|| format!("loading grid {}", path.display()))?,
        None => MosaicGrid::sample(),
    };
    for (hex, tile) in grid.unknown_tiles(&catalog) {
        warn!(q = hex.x, r = hex.y, %tile, "cell references a tile missing from the catalog");
    }

    match command {
        Command::View => {
            let config = ViewerConfig {
                hex_size: cli.size,
                ..ViewerConfig::default()
            };
            if let AppExit::Error(code) = viewer::run(Mosaic { grid, catalog }, config) {
                bail!("viewer exited with code {code}");
            }
        }
        Command::Dump { component } => {
            dump::write_tiles(&mut io::stdout().lock(), &grid, &catalog, component.as_deref())?
        }
        Command::Paths { component } => {
            dump::write_paths(&mut io::stdout().lock(), &grid, &catalog, component.as_deref())?
        }
        Command::Svg { out, px_per_unit } => {
            let settings = RenderSettings {
                size: cli.size,
                ..RenderSettings::default()
            };
            let mut canvas = SvgCanvas::new(px_per_unit);
            let report = render_grid(&grid, &catalog, &settings, &mut canvas);
            if !report.skipped.is_empty() {
                warn!(cells = report.skipped.len(), "some cells rendered without strands");
            }
            let document = canvas.finish();
            match out {
                Some(path) => write_file(&path, &document)?,
                None => io::stdout().lock().write_all(document.as_bytes())?,
            }
        }
        Command::Catalog { out } => {
            let text = definition::catalog_to_ron(&catalog).context("serializing catalog")?;
            match out {
                Some(path) => write_file(&path, &text)?,
                None => writeln!(io::stdout().lock(), "{text}")?,
            }
        }
        Command::Check => {
            let mismatches = adjacency::check(&grid, &catalog)?;
            let mut stdout = io::stdout().lock();
            for m in &mismatches {
                writeln!(
                    stdout,
                    "({}, {}) edge {} -> ({}, {}): {:?}",
                    m.hex.x, m.hex.y, m.edge, m.facing.x, m.facing.y, m.kind
                )?;
            }
            info!(mismatches = mismatches.len(), cells = grid.len(), "adjacency check done");
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
