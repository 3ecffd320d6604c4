use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::egui;

use super::entities::{Mosaic, MosaicScene, ViewerCamera};
use super::{ViewerConfig, ViewerState};
use crate::render::{Canvas, Scene, render_grid};

/// Window size assumed when no primary window exists yet.
const FALLBACK_WINDOW: Vec2 = Vec2::new(1280.0, 720.0);

/// Adapts bevy gizmos to the renderer's [`Canvas`].
///
/// Labels are painted separately by [`draw_labels`] through egui.
struct GizmoCanvas<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    outline: Color,
    strand: Color,
}

impl Canvas for GizmoCanvas<'_, '_, '_> {
    fn draw_polygon(&mut self, vertices: &[Vec2]) {
        self.gizmos.linestrip_2d(vertices.iter().copied(), self.outline);
    }

    fn draw_curve(&mut self, points: &[Vec2]) {
        self.gizmos.linestrip_2d(points.iter().copied(), self.strand);
    }

    fn draw_label(&mut self, _position: Vec2, _text: &str) {}
}

/// Applies line width and clear color; reruns whenever the config is edited.
pub fn apply_config(
    mut store: ResMut<GizmoConfigStore>,
    mut clear: ResMut<ClearColor>,
    cfg: Res<ViewerConfig>,
) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = cfg.line_width;
    clear.0 = cfg.clear_color;
}

/// Renders the mosaic into a [`MosaicScene`] and spawns a camera fitted to it.
pub fn setup_scene(
    mut commands: Commands,
    mosaic: Res<Mosaic>,
    cfg: Res<ViewerConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let scene = build_scene(&mosaic, &cfg);
    let window = windows
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(FALLBACK_WINDOW);
    let (center, scale) = fit_camera(&scene.scene, window, &cfg);

    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(center.extend(0.0)),
        ViewerCamera,
    ));

    commands.insert_resource(scene);
}

/// Re-renders the scene after layout or curve settings change.
pub fn rebuild_scene(mut commands: Commands, mosaic: Res<Mosaic>, cfg: Res<ViewerConfig>) {
    commands.insert_resource(build_scene(&mosaic, &cfg));
}

fn build_scene(mosaic: &Mosaic, cfg: &ViewerConfig) -> MosaicScene {
    let mut scene = Scene::default();
    let report = render_grid(&mosaic.grid, &mosaic.catalog, &cfg.render_settings(), &mut scene);
    info!(
        cells = report.cells,
        strands = report.strands,
        skipped = report.skipped.len(),
        "mosaic scene built"
    );
    MosaicScene {
        scene,
        skipped: report.skipped.len(),
    }
}

/// `(min, max)` orthographic scale, tolerating limits entered in either order.
fn scale_limits(cfg: &ViewerConfig) -> (f32, f32) {
    (cfg.min_scale.min(cfg.max_scale), cfg.min_scale.max(cfg.max_scale))
}

/// Camera center and orthographic scale that frame the whole scene.
fn fit_camera(scene: &Scene, window: Vec2, cfg: &ViewerConfig) -> (Vec2, f32) {
    let (lo, hi) = scale_limits(cfg);
    let Some((min, max)) = scene.bounds() else {
        return (Vec2::ZERO, (cfg.hex_size * 4.0 / window.min_element()).clamp(lo, hi));
    };
    let extent = (max - min) * (1.0 + cfg.fit_margin);
    let scale = (extent / window).max_element();
    ((min + max) / 2.0, scale.clamp(lo, hi))
}

/// Draws outlines and strands every frame.
pub fn draw_scene(mut gizmos: Gizmos, scene: Option<Res<MosaicScene>>, cfg: Res<ViewerConfig>) {
    let Some(scene) = scene else { return };
    let mut canvas = GizmoCanvas {
        gizmos: &mut gizmos,
        outline: cfg.outline_color,
        strand: cfg.strand_color,
    };
    scene.scene.replay(&mut canvas);
}

/// Paints each cell's tile id at its screen-projected center.
pub fn draw_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<ViewerCamera>>,
    scene: Option<Res<MosaicScene>>,
    cfg: Res<ViewerConfig>,
    mut ready: Local<bool>,
) {
    // Egui fonts aren't available until after the first Context::run() in the render pass.
    if !*ready {
        *ready = true;
        return;
    }
    let Some(scene) = scene else { return };
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    let [r, g, b] = cfg.label_rgb;

    for (position, text) in &scene.scene.labels {
        if let Ok(viewport) = camera.world_to_viewport(cam_gt, position.extend(0.0)) {
            painter.text(
                egui::pos2(viewport.x, viewport.y),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(cfg.label_font_size),
                egui::Color32::from_rgb(r, g, b),
            );
        }
    }

    if scene.skipped > 0 {
        painter.text(
            egui::pos2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            skipped_banner(scene.skipped),
            egui::FontId::proportional(cfg.label_font_size),
            egui::Color32::RED,
        );
    }
}

fn skipped_banner(skipped: usize) -> String {
    match skipped {
        1 => "1 cell has an unknown tile id; its strands are not drawn".to_string(),
        n => format!("{n} cells have unknown tile ids; their strands are not drawn"),
    }
}

/// WASD / arrow-key panning, speed constant in screen space.
pub fn pan_camera(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<ViewerConfig>,
    mut query: Query<(&mut Transform, &Projection), With<ViewerCamera>>,
) {
    let Ok((mut transform, projection)) = query.single_mut() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if direction == Vec2::ZERO {
        return;
    }

    let scale = match projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    };
    let delta = direction.normalize() * cfg.pan_speed * scale * time.delta_secs();
    transform.translation += delta.extend(0.0);
}

/// Mouse-wheel zoom within the configured scale limits.
pub fn zoom_camera(
    mut wheel: MessageReader<MouseWheel>,
    cfg: Res<ViewerConfig>,
    mut query: Query<&mut Projection, With<ViewerCamera>>,
) {
    let lines: f32 = wheel.read().map(|ev| ev.y).sum();
    if lines == 0.0 {
        return;
    }
    let Ok(mut projection) = query.single_mut() else {
        return;
    };
    if let Projection::Orthographic(ortho) = &mut *projection {
        let (lo, hi) = scale_limits(&cfg);
        ortho.scale = (ortho.scale * cfg.zoom_step.powf(-lines)).clamp(lo, hi);
    }
}

/// Tab toggles the world inspector.
pub fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewerState>>,
    mut next: ResMut<NextState<ViewerState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            ViewerState::Viewing => ViewerState::Inspecting,
            ViewerState::Inspecting => ViewerState::Viewing,
        });
    }
}

/// Esc closes the viewer.
pub fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use hexx::Hex;

    use super::*;
    use crate::catalog::{TileCatalog, TileId};
    use crate::grid::{MosaicGrid, PlacedTile};

    #[test]
    fn fit_centers_on_scene_bounds() {
        let mut scene = Scene::default();
        scene.draw_polygon(&[Vec2::new(-2.0, -1.0), Vec2::new(4.0, 3.0)]);
        let cfg = ViewerConfig {
            fit_margin: 0.0,
            ..ViewerConfig::default()
        };
        let (center, scale) = fit_camera(&scene, Vec2::new(600.0, 400.0), &cfg);
        assert_eq!(center, Vec2::new(1.0, 1.0));
        // Width 6 over 600 px vs height 4 over 400 px: both 0.01.
        assert!((scale - 0.01).abs() < 1e-6);
    }

    #[test]
    fn fit_respects_scale_limits() {
        let mut scene = Scene::default();
        scene.draw_polygon(&[Vec2::ZERO, Vec2::splat(1.0e6)]);
        let cfg = ViewerConfig::default();
        let (_, scale) = fit_camera(&scene, FALLBACK_WINDOW, &cfg);
        assert_eq!(scale, cfg.max_scale);
    }

    #[test]
    fn inverted_scale_limits_are_reordered() {
        let mut scene = Scene::default();
        scene.draw_polygon(&[Vec2::ZERO, Vec2::splat(1.0e6)]);
        let cfg = ViewerConfig {
            min_scale: 2.0,
            max_scale: 0.5,
            ..ViewerConfig::default()
        };
        assert_eq!(scale_limits(&cfg), (0.5, 2.0));
        let (_, scale) = fit_camera(&scene, FALLBACK_WINDOW, &cfg);
        assert_eq!(scale, 2.0);
        let (_, scale) = fit_camera(&Scene::default(), FALLBACK_WINDOW, &cfg);
        assert_eq!(scale, 0.5);
    }

    #[test]
    fn scene_follows_curve_settings() {
        let mosaic = Mosaic {
            grid: MosaicGrid::sample(),
            catalog: TileCatalog::standard(),
        };
        let coarse = build_scene(
            &mosaic,
            &ViewerConfig {
                bezier_steps: 5,
                ..ViewerConfig::default()
            },
        );
        assert!(coarse.scene.strands.iter().all(|s| s.len() == 5));
        assert_eq!(coarse.skipped, 0);

        let wide = build_scene(
            &mosaic,
            &ViewerConfig {
                hex_size: 3.0,
                ..ViewerConfig::default()
            },
        );
        let (_, max) = wide.scene.bounds().unwrap();
        let (_, default_max) = build_scene(&mosaic, &ViewerConfig::default())
            .scene
            .bounds()
            .unwrap();
        assert!(max.x > default_max.x * 2.0);
    }

    #[test]
    fn unknown_tiles_are_counted() {
        let mut grid = MosaicGrid::sample();
        grid.insert(Hex::new(0, 1), PlacedTile::new(TileId(99), 0, "A"));
        let scene = build_scene(
            &Mosaic {
                grid,
                catalog: TileCatalog::plot_subset(),
            },
            &ViewerConfig::default(),
        );
        assert_eq!(scene.skipped, 1);
        assert_eq!(skipped_banner(1), "1 cell has an unknown tile id; its strands are not drawn");
        assert!(skipped_banner(3).starts_with("3 cells"));
    }

    #[test]
    fn empty_scene_centers_on_origin() {
        let cfg = ViewerConfig::default();
        let (center, scale) = fit_camera(&Scene::default(), FALLBACK_WINDOW, &cfg);
        assert_eq!(center, Vec2::ZERO);
        assert!(scale > 0.0 && scale <= cfg.max_scale);
    }
}
