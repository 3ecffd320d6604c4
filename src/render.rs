//! Mosaic renderer behind a drawing-primitive interface.
//!
//! [`render_grid`] walks the grid in iteration order and emits, per cell, a
//! hexagon outline, one quadratic Bézier per rotated strand, and a tile-id
//! label. Backends implement [`Canvas`]: [`Scene`] records a display list
//! (consumed by the bevy viewer), [`SvgCanvas`] writes an SVG document.

mod scene;
mod svg;

pub use scene::Scene;
pub use svg::SvgCanvas;

use hexx::{Hex, Vec2};
use tracing::{debug, warn};

use crate::catalog::TileCatalog;
use crate::error::UnknownTileError;
use crate::geometry::{axial_to_plane, edge_to_plane};
use crate::grid::MosaicGrid;
use crate::math::{arc_control_point, hexagon_outline, quadratic_bezier};
use crate::resolver::paths_at;

/// Drawing primitives a rendering backend must provide.
pub trait Canvas {
    /// Closed polygon through `vertices`.
    fn draw_polygon(&mut self, vertices: &[Vec2]);
    /// Open polyline through `points`.
    fn draw_curve(&mut self, points: &[Vec2]);
    /// Text centered on `position`.
    fn draw_label(&mut self, position: Vec2, text: &str);
}

/// Layout and curve parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Hexagon circumradius; also the axial layout scale.
    pub size: f32,
    /// Strand endpoints sit at `size * strand_inset` from the center.
    pub strand_inset: f32,
    /// Samples per strand curve.
    pub bezier_steps: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: 1.0,
            strand_inset: 0.95,
            bezier_steps: 30,
        }
    }
}

/// What a render pass drew.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderReport {
    /// Cells whose outline was drawn.
    pub cells: usize,
    /// Strand curves drawn.
    pub strands: usize,
    /// Cells whose strands were skipped, with the reason.
    pub skipped: Vec<(Hex, UnknownTileError)>,
}

/// Draws every occupied cell of `grid` onto `canvas`.
///
/// A cell referencing an unknown tile keeps its outline and label but loses
/// its strands; the failure is logged and listed in the report, and the
/// remaining cells still render.
pub fn render_grid(
    grid: &MosaicGrid,
    catalog: &TileCatalog,
    settings: &RenderSettings,
    canvas: &mut impl Canvas,
) -> RenderReport {
    let mut report = RenderReport::default();

    for (hex, placed) in grid.iter() {
        let center = axial_to_plane(hex, settings.size);
        canvas.draw_polygon(&hexagon_outline(center, settings.size));
        report.cells += 1;

        match paths_at(grid, catalog, hex) {
            Ok(paths) => {
                let radius = settings.size * settings.strand_inset;
                for (a, b) in paths {
                    let from = edge_to_plane(a, center, radius);
                    let to = edge_to_plane(b, center, radius);
                    let ctrl = arc_control_point(from, to, center);
                    canvas.draw_curve(&quadratic_bezier(from, ctrl, to, settings.bezier_steps));
                    report.strands += 1;
                }
            }
            Err(err) => {
                warn!(q = hex.x, r = hex.y, "skipping strands: {err}");
                report.skipped.push((hex, err));
            }
        }

        canvas.draw_label(center, &placed.tile.to_string());
    }

    debug!(
        cells = report.cells,
        strands = report.strands,
        skipped = report.skipped.len(),
        "render pass finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TileId;
    use crate::grid::PlacedTile;

    const EPS: f32 = 1e-5;

    #[test]
    fn sample_grid_draws_every_cell() {
        let mut scene = Scene::default();
        let report = render_grid(
            &MosaicGrid::sample(),
            &TileCatalog::plot_subset(),
            &RenderSettings::default(),
            &mut scene,
        );
        assert_eq!(report.cells, 3);
        // cross_1 has two strands, line_H and cap_NWSE one each.
        assert_eq!(report.strands, 4);
        assert!(report.skipped.is_empty());
        assert_eq!(scene.outlines.len(), 3);
        assert_eq!(scene.strands.len(), 4);
        let labels: Vec<&str> = scene.labels.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(labels, ["16", "13", "4"]);
    }

    #[test]
    fn strand_curves_use_inset_endpoints() {
        let mut grid = MosaicGrid::new();
        grid.insert(Hex::new(1, 0), PlacedTile::new(TileId(4), 1, "A"));
        let settings = RenderSettings::default();
        let mut scene = Scene::default();
        render_grid(&grid, &TileCatalog::standard(), &settings, &mut scene);

        let center = axial_to_plane(Hex::new(1, 0), 1.0);
        let curve = &scene.strands[0];
        assert_eq!(curve.len(), 30);
        // cap_NWSE rotated once is (0, 3).
        assert!((curve[0] - edge_to_plane(0, center, 0.95)).length() < EPS);
        assert!((curve[29] - edge_to_plane(3, center, 0.95)).length() < EPS);
    }

    #[test]
    fn elbow_strand_bows_toward_center() {
        // elbow_EN joins adjacent edges 1 and 0.
        let mut grid = MosaicGrid::new();
        grid.insert(Hex::new(0, 1), PlacedTile::new(TileId(6), 0, "A"));
        let settings = RenderSettings {
            bezier_steps: 3,
            ..RenderSettings::default()
        };
        let mut scene = Scene::default();
        render_grid(&grid, &TileCatalog::standard(), &settings, &mut scene);

        let center = axial_to_plane(Hex::new(0, 1), 1.0);
        let from = edge_to_plane(1, center, 0.95);
        let to = edge_to_plane(0, center, 0.95);
        let chord_mid = (from + to) / 2.0;
        let ctrl = (chord_mid + center) / 2.0;
        let curve = &scene.strands[0];
        assert_eq!(curve.len(), 3);
        let expected = 0.25 * from + 0.5 * ctrl + 0.25 * to;
        assert!((curve[1] - expected).length() < EPS);
        assert!(curve[1].distance(center) < chord_mid.distance(center));
    }

    #[test]
    fn labels_and_outlines_centered_on_cells() {
        let settings = RenderSettings {
            size: 2.0,
            ..RenderSettings::default()
        };
        let mut scene = Scene::default();
        render_grid(&MosaicGrid::sample(), &TileCatalog::standard(), &settings, &mut scene);
        for ((hex, _), (position, _)) in MosaicGrid::sample().iter().zip(&scene.labels) {
            assert!((*position - axial_to_plane(hex, 2.0)).length() < EPS);
        }
        for outline in &scene.outlines {
            assert_eq!(outline.len(), 7);
        }
    }

    #[test]
    fn unknown_tile_skips_only_that_cell() {
        let mut grid = MosaicGrid::sample();
        grid.insert(Hex::new(3, 0), PlacedTile::new(TileId(42), 0, "B"));
        let mut scene = Scene::default();
        let report = render_grid(
            &grid,
            &TileCatalog::plot_subset(),
            &RenderSettings::default(),
            &mut scene,
        );
        assert_eq!(report.cells, 4);
        assert_eq!(report.strands, 4);
        assert_eq!(
            report.skipped,
            vec![(Hex::new(3, 0), UnknownTileError(TileId(42)))]
        );
        assert_eq!(scene.labels.last().map(|(_, t)| t.as_str()), Some("42"));
    }

    #[test]
    fn empty_tile_draws_outline_only() {
        let mut grid = MosaicGrid::new();
        grid.insert(Hex::ZERO, PlacedTile::new(TileId(1), 3, "A"));
        let mut scene = Scene::default();
        let report = render_grid(
            &grid,
            &TileCatalog::standard(),
            &RenderSettings::default(),
            &mut scene,
        );
        assert_eq!(report.cells, 1);
        assert_eq!(report.strands, 0);
        assert!(scene.strands.is_empty());
    }
}
