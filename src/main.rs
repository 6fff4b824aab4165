use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use fracture::arena::ArenaPlugin;
use fracture::config::{self, GameConfig};
use fracture::graphics;
use fracture::hud::HudPlugin;
use fracture::menu::MenuPlugin;
use fracture::particles::ParticlesPlugin;
use fracture::player::PlayerPlugin;
use fracture::round::RoundPlugin;
use fracture::saucer::SaucerPlugin;
use fracture::save::SavePlugin;
use fracture::spawner::SpawnerPlugin;

/// Configure Rapier physics: disable gravity — everything in the arena
/// drifts, nothing falls.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fracture".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/game.toml (if present) in the Startup schedule.
        .insert_resource(GameConfig::default())
        // pixels_per_meter(1.0) keeps world units equal to pixels at the default
        // camera scale; all speeds and radii in constants.rs assume this.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        // MenuPlugin registers GameState and must come before every plugin that
        // gates systems on it.
        .add_plugins(MenuPlugin)
        .add_plugins((
            ArenaPlugin,
            RoundPlugin,
            SpawnerPlugin,
            SaucerPlugin,
            PlayerPlugin,
            ParticlesPlugin,
            HudPlugin,
            SavePlugin,
        ))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                setup_physics_config,
            ),
        )
        .run();
}
