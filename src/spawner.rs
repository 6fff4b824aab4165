//! Round-based enemy spawning.
//!
//! Each round has an asteroid budget computed from the level.  While the
//! budget lasts, one large rock drips in from the top edge every
//! `spawn_interval` seconds.  In parallel the *saucer director* rolls a die
//! every few seconds and may commit each saucer kind once per round.  When
//! the budget is spent and the last enemy dies, the round is over.
//!
//! The set of living enemies is simply the entities carrying the [`Enemy`]
//! marker — there is no side list to keep in sync with spawns and deaths.
//!
//! | System                  | Schedule            | Purpose                         |
//! |-------------------------|---------------------|---------------------------------|
//! | `round_spawn_system`    | `Update / Playing`  | Drip-spawn the round's rocks    |
//! | `saucer_director_system`| `Update / Playing`  | Roll for big/small saucer entry |
//! | `round_clear_system`    | `Update / Playing`  | Detect an empty field → interlude |
//! | `spawn_menu_field`      | `OnEnter(MainMenu)` | Background diorama              |
//! | `clear_world_system`    | `OnEnter(MainMenu)` | Remove stale session entities   |
//! | `despawn_menu_field`    | `OnExit(MainMenu)`  | Remove the diorama              |

use crate::asteroid::{spawn_asteroid, AsteroidSize};
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::{Player, PlayerScore, Projectile};
use crate::saucer::{spawn_saucer, EnemyProjectile, SaucerKind};
use bevy::prelude::*;
use rand::Rng;

// ── Shared enemy components ───────────────────────────────────────────────────

/// Marker carried by every hostile entity (rocks and saucers).  Round-clear
/// detection and ship-contact handling query this instead of a bookkeeping
/// list.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Points credited to the player when this enemy is destroyed by a shot.
#[derive(Component, Debug, Clone, Copy)]
pub struct PointValue(pub u32);

// ── Resources ─────────────────────────────────────────────────────────────────

/// The current round's remaining asteroid budget and drip timer.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct RoundSpawnQueue {
    /// Rocks still to be spawned this round.
    pub remaining: u32,
    /// Countdown to the next spawn (s).
    pub timer: f32,
}

/// Per-round saucer bookkeeping: the periodic die roll and the once-per-round
/// flags for each kind.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SaucerDirector {
    /// Countdown to the next roll (s).
    pub roll_timer: f32,
    pub has_big: bool,
    pub has_small: bool,
}

impl Default for SaucerDirector {
    fn default() -> Self {
        Self {
            roll_timer: 0.0,
            has_big: false,
            has_small: false,
        }
    }
}

impl SaucerDirector {
    /// Reset the once-per-round flags and restart the roll clock.
    pub fn reset(&mut self, roll_interval: f32) {
        self.roll_timer = roll_interval;
        self.has_big = false;
        self.has_small = false;
    }
}

/// Asteroid budget for a round: `level × multiplier + base`.
pub fn asteroids_for_level(level: u32, multiplier: u32, base: u32) -> u32 {
    level * multiplier + base
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoundSpawnQueue>()
            .init_resource::<SaucerDirector>()
            .add_systems(
                Update,
                // round_clear runs first: a rock spawned this frame is still a
                // deferred command, and the budget it came from must not read
                // as exhausted-and-clear in the same pass.
                (round_clear_system, round_spawn_system, saucer_director_system)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                OnEnter(GameState::MainMenu),
                (clear_world_system, spawn_menu_field).chain(),
            )
            .add_systems(OnExit(GameState::MainMenu), despawn_menu_field);
    }
}

// ── Round spawning ────────────────────────────────────────────────────────────

/// Pick a spawn point on the top edge with a random x.
fn edge_spawn_point<R: Rng>(rng: &mut R, config: &GameConfig) -> Vec2 {
    let x = rng.gen_range(-(config.arena_half_width - 40.0)..(config.arena_half_width - 40.0));
    Vec2::new(x, config.arena_half_height + config.wrap_margin * 0.5)
}

/// Drip one large rock from the top edge every `spawn_interval` seconds until
/// the round's budget is spent.
pub fn round_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut queue: ResMut<RoundSpawnQueue>,
) {
    if queue.remaining == 0 {
        return;
    }

    queue.timer -= time.delta_secs();
    if queue.timer > 0.0 {
        return;
    }
    queue.timer = config.spawn_interval;
    queue.remaining -= 1;

    let mut rng = rand::thread_rng();
    let pos = edge_spawn_point(&mut rng, &config);
    let heading = rng.gen_range(0.0..std::f32::consts::TAU);
    spawn_asteroid(&mut commands, &config, pos, heading, AsteroidSize::Large);
}

/// Roll the saucer die every `saucer_roll_interval` seconds.
///
/// A roll of 1 commits the big saucer, 2 the small one; each kind enters at
/// most once per round.  Once both have appeared the rolls stop until the
/// next round resets the director.
pub fn saucer_director_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    score: Res<PlayerScore>,
    mut director: ResMut<SaucerDirector>,
) {
    if director.has_big && director.has_small {
        return;
    }

    director.roll_timer -= time.delta_secs();
    if director.roll_timer > 0.0 {
        return;
    }
    director.roll_timer = config.saucer_roll_interval;

    let mut rng = rand::thread_rng();
    let roll = rng.gen_range(0..config.saucer_roll_sides.max(1));

    if roll == 1 && !director.has_big {
        director.has_big = true;
        let pos = edge_spawn_point(&mut rng, &config);
        spawn_saucer(&mut commands, &config, SaucerKind::Big, pos, score.points);
        info!("Big saucer entering");
    } else if roll == 2 && !director.has_small {
        director.has_small = true;
        let pos = edge_spawn_point(&mut rng, &config);
        spawn_saucer(&mut commands, &config, SaucerKind::Small, pos, score.points);
        info!("Small saucer entering");
    }
}

/// End the round once the budget is spent and the last enemy is gone.
pub fn round_clear_system(
    queue: Res<RoundSpawnQueue>,
    q_enemies: Query<(), With<Enemy>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if queue.remaining == 0 && q_enemies.is_empty() {
        next_state.set(GameState::RoundIntro);
    }
}

// ── Menu diorama ──────────────────────────────────────────────────────────────

/// Spawn the main-menu background: a handful of drifting rocks and one big
/// saucer, scattered across the arena.
pub fn spawn_menu_field(mut commands: Commands, config: Res<GameConfig>) {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(config.menu_field_min..=config.menu_field_max.max(config.menu_field_min));

    for _ in 0..count {
        let pos = Vec2::new(
            rng.gen_range(-config.arena_half_width..config.arena_half_width),
            rng.gen_range(-config.arena_half_height..config.arena_half_height),
        );
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        spawn_asteroid(&mut commands, &config, pos, heading, AsteroidSize::Large);
    }

    let saucer_pos = Vec2::new(
        rng.gen_range(-config.arena_half_width..config.arena_half_width),
        rng.gen_range(-config.arena_half_height..config.arena_half_height),
    );
    spawn_saucer(&mut commands, &config, SaucerKind::Big, saucer_pos, 0);
}

/// Despawn the menu diorama when leaving the menu.
pub fn despawn_menu_field(mut commands: Commands, q_enemies: Query<Entity, With<Enemy>>) {
    for entity in q_enemies.iter() {
        commands.entity(entity).despawn();
    }
}

/// Remove everything a previous session may have left behind: enemies, both
/// projectile kinds, and the ship.  Runs before the diorama is spawned.
#[allow(clippy::type_complexity)]
pub fn clear_world_system(
    mut commands: Commands,
    q_stale: Query<
        Entity,
        Or<(
            With<Enemy>,
            With<EnemyProjectile>,
            With<Projectile>,
            With<Player>,
        )>,
    >,
) {
    for entity in q_stale.iter() {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_scales_with_level_and_multiplier() {
        assert_eq!(asteroids_for_level(1, 1, 2), 3);
        assert_eq!(asteroids_for_level(1, 2, 2), 4);
        assert_eq!(asteroids_for_level(5, 1, 2), 7);
        assert_eq!(asteroids_for_level(5, 2, 2), 12);
    }

    #[test]
    fn level_zero_still_spawns_the_base_count() {
        assert_eq!(asteroids_for_level(0, 2, 2), 2);
    }

    #[test]
    fn director_reset_clears_round_flags() {
        let mut director = SaucerDirector {
            roll_timer: 0.0,
            has_big: true,
            has_small: true,
        };
        director.reset(3.0);
        assert!(!director.has_big);
        assert!(!director.has_small);
        assert_eq!(director.roll_timer, 3.0);
    }
}
