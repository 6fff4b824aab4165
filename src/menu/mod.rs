//! `GameState` definition plus the full-screen menu and game-over overlays.
//!
//! ## States
//!
//! | State        | Description                                        |
//! |--------------|----------------------------------------------------|
//! | `MainMenu`   | Initial state; splash screen over a drifting field |
//! | `RoundIntro` | Between-rounds interlude; "ROUND N" banner shown   |
//! | `Playing`    | Live gameplay; all combat systems active           |
//! | `GameOver`   | Lives exhausted; final-score overlay shown         |
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                    | Schedule              | Purpose                      |
//! |---------------------------|-----------------------|------------------------------|
//! | `setup_main_menu`         | `OnEnter(MainMenu)`   | Spawn full-screen menu UI    |
//! | `cleanup_main_menu`       | `OnExit(MainMenu)`    | Despawn menu UI entities     |
//! | `menu_button_system`      | `Update / MainMenu`   | Handle Start / Quit          |
//! | `setup_game_over`         | `OnEnter(GameOver)`   | Spawn game-over overlay      |
//! | `cleanup_game_over`       | `OnExit(GameOver)`    | Despawn the overlay          |
//! | `game_over_button_system` | `Update / GameOver`   | Handle Menu / Quit, save score |

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

mod game_over;
mod main_menu;

pub use game_over::{cleanup_game_over, game_over_button_system, setup_game_over};
pub use main_menu::{cleanup_main_menu, menu_button_system, setup_main_menu};

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Combat, spawning, and input systems run under
/// `.run_if(in_state(GameState::Playing))`, so they are fully inactive in the
/// other states; the wrap and particle systems run everywhere so the menu
/// diorama keeps drifting.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Main-menu splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Between-rounds interlude: the round banner is up and the next round's
    /// spawn budget has just been seeded.
    RoundIntro,
    /// Active gameplay.
    Playing,
    /// Player has exhausted all lives; game-over overlay shown.
    GameOver,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Start Game" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "Quit" button (shared by the menu and the game-over overlay).
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the game-over overlay; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the "Main Menu" button in the game-over overlay.
#[derive(Component)]
pub struct GameOverMenuButton;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the menu/game-over UI setup and teardown, and the
/// button handlers.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                game_over_button_system.run_if(in_state(GameState::GameOver)),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

pub(crate) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(crate) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(crate) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(crate) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(crate) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(crate) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(crate) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(crate) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(crate) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

/// Spawn a fixed-height invisible spacer node.
pub(crate) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
