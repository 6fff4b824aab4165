//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.projectile_speed`, `config.spawn_interval`, etc.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/game.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Arena ────────────────────────────────────────────────────────────────
    pub arena_half_width: f32,
    pub arena_half_height: f32,
    pub wrap_margin: f32,

    // ── Ship: Movement ───────────────────────────────────────────────────────
    pub rotation_speed: f32,
    pub thrust_force: f32,
    pub thrust_burn_secs: f32,
    pub player_linear_damping: f32,
    pub player_angular_damping: f32,
    pub player_collider_radius: f32,

    // ── Ship: Combat & lives ─────────────────────────────────────────────────
    pub fire_cooldown: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub projectile_collider_radius: f32,
    pub player_lives: i32,
    pub invincibility_secs: f32,
    pub hyperspace_secs: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_speed_large: f32,
    pub asteroid_speed_medium: f32,
    pub asteroid_speed_small: f32,
    pub asteroid_radius_large: f32,
    pub asteroid_radius_medium: f32,
    pub asteroid_radius_small: f32,
    pub asteroid_spin_max: f32,
    pub asteroid_shape_jitter: f32,
    pub fracture_scatter: f32,

    // ── Scoring ──────────────────────────────────────────────────────────────
    pub points_large_asteroid: u32,
    pub points_medium_asteroid: u32,
    pub points_small_asteroid: u32,
    pub points_big_saucer: u32,
    pub points_small_saucer: u32,

    // ── Rounds & spawning ────────────────────────────────────────────────────
    pub spawn_interval: f32,
    pub round_base_count: u32,
    pub round_mult_min: u32,
    pub round_mult_max: u32,
    pub round_banner_secs: f32,
    pub saucer_roll_interval: f32,
    pub saucer_roll_sides: u32,
    pub menu_field_min: u32,
    pub menu_field_max: u32,

    // ── Saucers ──────────────────────────────────────────────────────────────
    pub big_saucer_speed: f32,
    pub small_saucer_speed: f32,
    pub big_saucer_radius: f32,
    pub small_saucer_radius: f32,
    pub saucer_wander_interval: f32,
    pub saucer_fire_interval: f32,
    pub big_turret_sweep_rate: f32,
    pub small_turret_turn_speed: f32,
    pub aim_slack_start: i32,
    pub aim_slack_min: i32,
    pub aim_tighten_score: u32,
    pub aim_slack_step: f32,
    pub enemy_projectile_speed: f32,
    pub enemy_projectile_lifetime: f32,
    pub enemy_projectile_collider_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Arena
            arena_half_width: ARENA_HALF_WIDTH,
            arena_half_height: ARENA_HALF_HEIGHT,
            wrap_margin: WRAP_MARGIN,
            // Ship: Movement
            rotation_speed: ROTATION_SPEED,
            thrust_force: THRUST_FORCE,
            thrust_burn_secs: THRUST_BURN_SECS,
            player_linear_damping: PLAYER_LINEAR_DAMPING,
            player_angular_damping: PLAYER_ANGULAR_DAMPING,
            player_collider_radius: PLAYER_COLLIDER_RADIUS,
            // Ship: Combat & lives
            fire_cooldown: FIRE_COOLDOWN,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            projectile_collider_radius: PROJECTILE_COLLIDER_RADIUS,
            player_lives: PLAYER_LIVES,
            invincibility_secs: INVINCIBILITY_SECS,
            hyperspace_secs: HYPERSPACE_SECS,
            // Asteroids
            asteroid_speed_large: ASTEROID_SPEED_LARGE,
            asteroid_speed_medium: ASTEROID_SPEED_MEDIUM,
            asteroid_speed_small: ASTEROID_SPEED_SMALL,
            asteroid_radius_large: ASTEROID_RADIUS_LARGE,
            asteroid_radius_medium: ASTEROID_RADIUS_MEDIUM,
            asteroid_radius_small: ASTEROID_RADIUS_SMALL,
            asteroid_spin_max: ASTEROID_SPIN_MAX,
            asteroid_shape_jitter: ASTEROID_SHAPE_JITTER,
            fracture_scatter: FRACTURE_SCATTER,
            // Scoring
            points_large_asteroid: POINTS_LARGE_ASTEROID,
            points_medium_asteroid: POINTS_MEDIUM_ASTEROID,
            points_small_asteroid: POINTS_SMALL_ASTEROID,
            points_big_saucer: POINTS_BIG_SAUCER,
            points_small_saucer: POINTS_SMALL_SAUCER,
            // Rounds & spawning
            spawn_interval: SPAWN_INTERVAL,
            round_base_count: ROUND_BASE_COUNT,
            round_mult_min: ROUND_MULT_MIN,
            round_mult_max: ROUND_MULT_MAX,
            round_banner_secs: ROUND_BANNER_SECS,
            saucer_roll_interval: SAUCER_ROLL_INTERVAL,
            saucer_roll_sides: SAUCER_ROLL_SIDES,
            menu_field_min: MENU_FIELD_MIN,
            menu_field_max: MENU_FIELD_MAX,
            // Saucers
            big_saucer_speed: BIG_SAUCER_SPEED,
            small_saucer_speed: SMALL_SAUCER_SPEED,
            big_saucer_radius: BIG_SAUCER_RADIUS,
            small_saucer_radius: SMALL_SAUCER_RADIUS,
            saucer_wander_interval: SAUCER_WANDER_INTERVAL,
            saucer_fire_interval: SAUCER_FIRE_INTERVAL,
            big_turret_sweep_rate: BIG_TURRET_SWEEP_RATE,
            small_turret_turn_speed: SMALL_TURRET_TURN_SPEED,
            aim_slack_start: AIM_SLACK_START,
            aim_slack_min: AIM_SLACK_MIN,
            aim_tighten_score: AIM_TIGHTEN_SCORE,
            aim_slack_step: AIM_SLACK_STEP,
            enemy_projectile_speed: ENEMY_PROJECTILE_SPEED,
            enemy_projectile_lifetime: ENEMY_PROJECTILE_LIFETIME,
            enemy_projectile_collider_radius: ENEMY_PROJECTILE_COLLIDER_RADIUS,
        }
    }
}

impl GameConfig {
    /// Half-extents of the playfield as a vector.
    #[inline]
    pub fn arena_half_extents(&self) -> Vec2 {
        Vec2::new(self.arena_half_width, self.arena_half_height)
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors are printed
/// to stderr but do not abort the game.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/game.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded game config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
