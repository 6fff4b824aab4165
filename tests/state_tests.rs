//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. Starting a game walks `MainMenu` → `RoundIntro` → `Playing`.
//! 3. `Playing` state persists across frames with no new transition request.
//! 4. Lives running out transitions `Playing` → `GameOver`, and returning to
//!    the menu is possible from there.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use fracture::menu::GameState;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered via
/// `init_state`.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

/// Request a transition and run one frame so `StateTransition` fires.
fn transition(app: &mut App, to: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(to);
    app.update();
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `MainMenu`.
#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(
        current_state(&app),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

/// Starting a game walks the menu → round-intro → playing sequence.
#[test]
fn start_flow_reaches_playing_via_round_intro() {
    let mut app = app_with_default_state();
    app.update(); // settle into MainMenu

    transition(&mut app, GameState::RoundIntro);
    assert_eq!(current_state(&app), GameState::RoundIntro);

    transition(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

/// `Playing` state persists across additional frames — no accidental
/// reversion.
#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    transition(&mut app, GameState::RoundIntro);
    transition(&mut app, GameState::Playing);

    // Run several more frames without another transition request.
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(
        current_state(&app),
        GameState::Playing,
        "Playing must remain stable without a new transition"
    );
}

/// A cleared round returns to the interlude, and the interlude can hand
/// control back — the repeating round loop.
#[test]
fn round_loop_alternates_intro_and_playing() {
    let mut app = app_with_default_state();
    app.update();

    transition(&mut app, GameState::RoundIntro);
    transition(&mut app, GameState::Playing);
    transition(&mut app, GameState::RoundIntro);
    assert_eq!(current_state(&app), GameState::RoundIntro);

    transition(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

/// Lives running out ends in `GameOver`, from which the menu is reachable.
#[test]
fn game_over_returns_to_menu() {
    let mut app = app_with_default_state();
    app.update();

    transition(&mut app, GameState::RoundIntro);
    transition(&mut app, GameState::Playing);
    transition(&mut app, GameState::GameOver);
    assert_eq!(current_state(&app), GameState::GameOver);

    transition(&mut app, GameState::MainMenu);
    assert_eq!(current_state(&app), GameState::MainMenu);
}
