//! Interactive mosaic window.
//!
//! Renders the grid into a [`Scene`](crate::render::Scene) at startup and
//! again whenever [`ViewerConfig`] is edited, then draws it every frame with
//! 2-D gizmos. Tile-id labels are painted through egui. WASD/arrows pan,
//! the wheel zooms, Tab toggles the world inspector and Esc quits.

mod entities;
mod systems;

pub use entities::{Mosaic, MosaicScene, ViewerCamera};

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::render::RenderSettings;

/// Viewer state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum ViewerState {
    /// Plain mosaic view.
    #[default]
    Viewing,
    /// World inspector open (Tab to toggle).
    Inspecting,
}

/// Configuration for the viewer plugin.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ViewerConfig {
    /// Hexagon circumradius in world units.
    pub hex_size: f32,
    /// Strand endpoint radius as a fraction of `hex_size`.
    pub strand_inset: f32,
    /// Samples per strand curve.
    pub bezier_steps: usize,
    /// Hexagon outline color.
    pub outline_color: Color,
    /// Strand color.
    pub strand_color: Color,
    /// Background clear color.
    pub clear_color: Color,
    /// Gizmo line width in pixels.
    pub line_width: f32,
    /// Label font size in points.
    pub label_font_size: f32,
    /// Label color as sRGB bytes.
    pub label_rgb: [u8; 3],
    /// Pan speed in screen pixels per second.
    pub pan_speed: f32,
    /// Zoom factor per wheel line.
    pub zoom_step: f32,
    /// Smallest orthographic scale (most zoomed in).
    pub min_scale: f32,
    /// Largest orthographic scale (most zoomed out).
    pub max_scale: f32,
    /// Extra space around the mosaic when fitting the camera, as a fraction.
    pub fit_margin: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            hex_size: 1.0,
            strand_inset: 0.95,
            bezier_steps: 30,
            outline_color: Color::BLACK,
            strand_color: Color::srgb(0.0, 0.5, 0.0),
            clear_color: Color::WHITE,
            line_width: 2.0,
            label_font_size: 11.0,
            label_rgb: [0, 0, 0],
            pan_speed: 400.0,
            zoom_step: 1.1,
            min_scale: 0.001,
            max_scale: 1.0,
            fit_margin: 0.2,
        }
    }
}

impl ViewerConfig {
    /// Renderer parameters derived from this config.
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            size: self.hex_size,
            strand_inset: self.strand_inset,
            bezier_steps: self.bezier_steps,
        }
    }
}

/// Mosaic viewer plugin. Needs [`Mosaic`] inserted and `EguiPlugin` added.
pub struct ViewerPlugin(pub ViewerConfig);

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ViewerConfig>()
            .register_type::<ViewerState>()
            .register_type::<ViewerCamera>()
            .init_state::<ViewerState>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, systems::setup_scene)
            .add_systems(
                Update,
                (
                    systems::apply_config.run_if(resource_changed::<ViewerConfig>),
                    systems::rebuild_scene.run_if(
                        resource_changed::<ViewerConfig>
                            .and(not(resource_added::<ViewerConfig>)),
                    ),
                ),
            )
            .add_systems(
                Update,
                (
                    systems::draw_scene,
                    systems::draw_labels,
                    systems::exit_on_esc,
                    systems::toggle_inspector,
                ),
            )
            .add_systems(
                Update,
                (systems::pan_camera, systems::zoom_camera)
                    .run_if(in_state(ViewerState::Viewing)),
            )
            .add_plugins(WorldInspectorPlugin::new().run_if(in_state(ViewerState::Inspecting)));
    }
}

/// Opens a window showing `mosaic` and blocks until it closes.
pub fn run(mosaic: Mosaic, config: ViewerConfig) -> AppExit {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hex Knot Mosaic".into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(bevy_egui::EguiPlugin::default())
    .insert_resource(mosaic)
    .add_plugins(ViewerPlugin(config));

    app.run()
}
