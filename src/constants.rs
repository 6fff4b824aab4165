//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::GameConfig`] mirrors every constant and can override it
//! at runtime from `assets/game.toml`.

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Half-width of the playfield (world units).
///
/// The default window is 1200 px wide with a 1:1 camera, so 590 keeps the
/// wrap seam just inside the visible edge.
pub const ARENA_HALF_WIDTH: f32 = 590.0;

/// Half-height of the playfield (world units). Window is 680 px tall.
pub const ARENA_HALF_HEIGHT: f32 = 330.0;

/// How far past an arena edge an object may travel before it is wrapped to
/// the opposite edge. Large enough that a sprite fully leaves the screen
/// before teleporting; small enough that fast projectiles don't vanish for
/// a noticeable beat.
pub const WRAP_MARGIN: f32 = 24.0;

// ── Ship: Movement ────────────────────────────────────────────────────────────

/// Ship rotation rate (rad/s). Roughly 150°/s — quick enough to flip and
/// shoot behind you inside half a second.
pub const ROTATION_SPEED: f32 = 2.6;

/// Continuous thrust force applied along the ship's facing for the duration
/// of one burn window.
pub const THRUST_FORCE: f32 = 90_000.0;

/// Length of one thrust burn (s). While the burn is active the thruster
/// exhaust is shown and a new burn cannot start.
pub const THRUST_BURN_SECS: f32 = 0.5;

/// Linear damping on the ship body. Non-zero so a drifting ship slowly
/// settles rather than coasting forever — arcade feel, not Newton.
pub const PLAYER_LINEAR_DAMPING: f32 = 0.4;

/// Angular damping on the ship body; kills residual spin quickly once the
/// rotate keys are released.
pub const PLAYER_ANGULAR_DAMPING: f32 = 8.0;

/// Ship collider radius (world units).
pub const PLAYER_COLLIDER_RADIUS: f32 = 12.0;

// ── Ship: Combat & lives ──────────────────────────────────────────────────────

/// Minimum interval between consecutive shots (s).
pub const FIRE_COOLDOWN: f32 = 0.25;

/// Muzzle speed of the ship's projectiles (u/s).
pub const PROJECTILE_SPEED: f32 = 520.0;

/// Projectile lifetime (s); shots despawn after this even if they hit nothing.
pub const PROJECTILE_LIFETIME: f32 = 1.0;

/// Projectile collider radius.
pub const PROJECTILE_COLLIDER_RADIUS: f32 = 3.0;

/// Lives at the start of a session.
pub const PLAYER_LIVES: i32 = 3;

/// Invincibility window after a respawn (s). The ship blinks while this is
/// active and enemy contact is ignored.
pub const INVINCIBILITY_SECS: f32 = 3.0;

/// Time the ship is absent during a hyperspace jump (s).
pub const HYPERSPACE_SECS: f32 = 1.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Drift speed per size class (u/s). Smaller fragments fly faster.
pub const ASTEROID_SPEED_LARGE: f32 = 55.0;
pub const ASTEROID_SPEED_MEDIUM: f32 = 85.0;
pub const ASTEROID_SPEED_SMALL: f32 = 125.0;

/// Nominal collider/outline radius per size class (world units).
pub const ASTEROID_RADIUS_LARGE: f32 = 46.0;
pub const ASTEROID_RADIUS_MEDIUM: f32 = 26.0;
pub const ASTEROID_RADIUS_SMALL: f32 = 14.0;

/// Maximum spin magnitude applied to a freshly spawned rock (rad/s).
pub const ASTEROID_SPIN_MAX: f32 = 1.2;

/// Radial jitter applied to each generated outline vertex, as a fraction of
/// the nominal radius. 0.0 would give regular polygons; 0.25 gives the
/// familiar lumpy rock silhouette while keeping the outline convex enough
/// for a hull collider.
pub const ASTEROID_SHAPE_JITTER: f32 = 0.25;

/// Maximum distance a fracture child is displaced from the parent's centre.
pub const FRACTURE_SCATTER: f32 = 24.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Point values per enemy kind — the classic table: the smaller and meaner
/// the target, the more it pays.
pub const POINTS_LARGE_ASTEROID: u32 = 20;
pub const POINTS_MEDIUM_ASTEROID: u32 = 50;
pub const POINTS_SMALL_ASTEROID: u32 = 100;
pub const POINTS_BIG_SAUCER: u32 = 200;
pub const POINTS_SMALL_SAUCER: u32 = 1000;

// ── Rounds & spawning ─────────────────────────────────────────────────────────

/// Seconds between consecutive asteroid spawns while a round's budget lasts.
pub const SPAWN_INTERVAL: f32 = 2.0;

/// Flat part of the per-round asteroid budget: `level × m + ROUND_BASE_COUNT`.
pub const ROUND_BASE_COUNT: u32 = 2;

/// Inclusive bounds for the per-round budget multiplier `m`.
pub const ROUND_MULT_MIN: u32 = 1;
pub const ROUND_MULT_MAX: u32 = 2;

/// How long the "ROUND N" banner is shown between rounds (s).
pub const ROUND_BANNER_SECS: f32 = 2.0;

/// Seconds between saucer-director die rolls.
pub const SAUCER_ROLL_INTERVAL: f32 = 3.0;

/// The director rolls `0..SAUCER_ROLL_SIDES`; a 1 spawns the big saucer and
/// a 2 the small saucer (each at most once per round).
pub const SAUCER_ROLL_SIDES: u32 = 10;

/// Number of background rocks on the main-menu diorama (inclusive bounds).
pub const MENU_FIELD_MIN: u32 = 5;
pub const MENU_FIELD_MAX: u32 = 10;

// ── Saucers ───────────────────────────────────────────────────────────────────

/// Cruise speed per saucer kind (u/s).
pub const BIG_SAUCER_SPEED: f32 = 70.0;
pub const SMALL_SAUCER_SPEED: f32 = 95.0;

/// Saucer collider radii.
pub const BIG_SAUCER_RADIUS: f32 = 22.0;
pub const SMALL_SAUCER_RADIUS: f32 = 13.0;

/// Seconds between wander-direction re-rolls. Each roll picks one of the
/// four cardinal directions.
pub const SAUCER_WANDER_INTERVAL: f32 = 3.0;

/// Seconds between saucer shots.
pub const SAUCER_FIRE_INTERVAL: f32 = 2.0;

/// Constant sweep rate of the big saucer's turret (rad/s). Slow: the big
/// saucer sprays, it does not aim.
pub const BIG_TURRET_SWEEP_RATE: f32 = 0.9;

/// Slerp factor for the small saucer's turret tracking (per second).
pub const SMALL_TURRET_TURN_SPEED: f32 = 10.0;

/// Starting aim slack of the small saucer, in world-steps of lead error.
/// Tightens by one step for every `AIM_TIGHTEN_SCORE` points the player
/// gains, down to `AIM_SLACK_MIN`.
pub const AIM_SLACK_START: i32 = 3;
pub const AIM_SLACK_MIN: i32 = -1;
pub const AIM_TIGHTEN_SCORE: u32 = 100;

/// World units per slack step when offsetting the small saucer's aim point.
pub const AIM_SLACK_STEP: f32 = 26.0;

/// Enemy projectile tuning.
pub const ENEMY_PROJECTILE_SPEED: f32 = 300.0;
pub const ENEMY_PROJECTILE_LIFETIME: f32 = 1.0;
pub const ENEMY_PROJECTILE_COLLIDER_RADIUS: f32 = 3.0;
