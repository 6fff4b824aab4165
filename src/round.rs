//! Round progression: level counter, the between-rounds interlude, and
//! session reset.
//!
//! `RoundIntro` is the interlude state between rounds (and before round 1):
//! it shows the "ROUND N" banner for a couple of seconds while the next
//! round's asteroid budget is seeded, then hands control back to `Playing`.
//!
//! | System                    | Schedule               | Purpose                        |
//! |---------------------------|------------------------|--------------------------------|
//! | `reset_session_system`    | `OnExit(MainMenu)`     | Zero score/lives/level         |
//! | `prepare_next_round`      | `OnEnter(RoundIntro)`  | Bump level, seed spawn budget  |
//! | `round_intro_tick_system` | `Update / RoundIntro`  | Count down the banner → play   |

use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::{PlayerLives, PlayerScore};
use crate::spawner::{asteroids_for_level, RoundSpawnQueue, SaucerDirector};
use bevy::prelude::*;
use rand::Rng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// The round the player is on.  0 between sessions; `prepare_next_round`
/// bumps it before each round starts.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CurrentLevel(pub u32);

/// Remaining time on the "ROUND N" banner (s).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RoundCountdown {
    pub remaining: f32,
}

pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .init_resource::<RoundCountdown>()
            .add_systems(OnExit(GameState::MainMenu), reset_session_system)
            .add_systems(OnEnter(GameState::RoundIntro), prepare_next_round)
            .add_systems(
                Update,
                round_intro_tick_system.run_if(in_state(GameState::RoundIntro)),
            );
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Reset score, lives, and level for a fresh session.
pub fn reset_session_system(
    config: Res<GameConfig>,
    mut level: ResMut<CurrentLevel>,
    mut score: ResMut<PlayerScore>,
    mut lives: ResMut<PlayerLives>,
    mut queue: ResMut<RoundSpawnQueue>,
) {
    level.0 = 0;
    score.points = 0;
    lives.remaining = config.player_lives;
    queue.remaining = 0;
    queue.timer = 0.0;
}

/// Bump the level and seed the next round: asteroid budget, saucer director,
/// and banner countdown.
///
/// The budget is `level × m + base` with `m` drawn from the configured
/// inclusive range, so later rounds grow steeper on a high roll.
pub fn prepare_next_round(
    config: Res<GameConfig>,
    mut level: ResMut<CurrentLevel>,
    mut queue: ResMut<RoundSpawnQueue>,
    mut director: ResMut<SaucerDirector>,
    mut countdown: ResMut<RoundCountdown>,
) {
    level.0 += 1;

    let mut rng = rand::thread_rng();
    let multiplier =
        rng.gen_range(config.round_mult_min..=config.round_mult_max.max(config.round_mult_min));

    queue.remaining = asteroids_for_level(level.0, multiplier, config.round_base_count);
    queue.timer = 0.0; // first rock drops as soon as play resumes
    director.reset(config.saucer_roll_interval);
    countdown.remaining = config.round_banner_secs;

    info!("Round {} — {} asteroids inbound", level.0, queue.remaining);
}

/// Count the banner down; when it expires, play begins.
pub fn round_intro_tick_system(
    time: Res<Time>,
    mut countdown: ResMut<RoundCountdown>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    countdown.remaining -= time.delta_secs();
    if countdown.remaining <= 0.0 {
        next_state.set(GameState::Playing);
    }
}
