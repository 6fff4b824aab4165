//! Player module: ship entity, input handling, combat, and rendering.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `ShipInvincibility`, `Projectile`) and resources (`PlayerIntent`, `PlayerScore`, `PlayerLives`, `HighScore`, cooldowns) |
//! | [`control`] | Input pipeline, thrust burns, hyperspace, invincibility blink |
//! | [`combat`] | Firing, shot lifetime, hit resolution, death and respawn |
//! | [`rendering`] | Ship and projectile mesh attachment |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module
//! layout.

pub mod combat;
pub mod control;
pub mod rendering;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    despawn_old_projectiles_system, player_hit_system, projectile_enemy_hit_system,
    projectile_fire_system,
};
pub use control::{
    apply_player_intent_system, hyperspace_system, invincibility_blink_system,
    keyboard_to_intent_system, player_intent_clear_system, thruster_exhaust_system,
};
pub use rendering::{attach_projectile_mesh_system, attach_ship_mesh_system};
pub use state::{
    FireCooldown, HighScore, HyperspaceJump, Player, PlayerIntent, PlayerLives, PlayerScore,
    Projectile, ShipInvincibility, ThrustBurn,
};

// ── Plugin ────────────────────────────────────────────────────────────────────

use crate::arena::Wraps;
use crate::config::GameConfig;
use crate::menu::GameState;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>()
            .init_resource::<FireCooldown>()
            .init_resource::<ThrustBurn>()
            .init_resource::<HyperspaceJump>()
            .init_resource::<PlayerScore>()
            .init_resource::<PlayerLives>()
            .init_resource::<HighScore>()
            .add_systems(OnExit(GameState::MainMenu), spawn_player)
            // A burn that straddles the end of a round must not keep pushing
            // the ship through the interlude.
            .add_systems(OnExit(GameState::Playing), player_intent_clear_system)
            .add_systems(
                Update,
                (
                    player_intent_clear_system,
                    keyboard_to_intent_system,
                    apply_player_intent_system,
                    thruster_exhaust_system,
                    hyperspace_system,
                    invincibility_blink_system,
                    projectile_fire_system,
                    despawn_old_projectiles_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                (projectile_enemy_hit_system, player_hit_system)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (attach_ship_mesh_system, attach_projectile_mesh_system),
            );
    }
}

// ── Ship spawn ────────────────────────────────────────────────────────────────

/// Spawn the player's ship at the arena centre.
///
/// The ship uses a ball collider rather than a convex polygon collider —
/// this simplifies physics interactions and is visually indistinguishable at
/// normal zoom since the dart hull roughly inscribes the ball.
///
/// Collision groups:
/// - `GROUP_2` — ship belongs to this group
/// - collides with `GROUP_1` (enemies) and `GROUP_4` (enemy shots) only
///
/// The ship starts with a full invincibility window, so a rock drifting over
/// the spawn point can't end the run on frame one.
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Player,
        ShipInvincibility {
            timer: config.invincibility_secs,
        },
        Wraps,
        // Physics
        RigidBody::Dynamic,
        Collider::ball(config.player_collider_radius),
        Velocity::zero(),
        ExternalForce::default(),
        Damping {
            linear_damping: config.player_linear_damping,
            angular_damping: config.player_angular_damping,
        },
        Restitution::coefficient(0.2),
        CollisionGroups::new(
            bevy_rapier2d::geometry::Group::GROUP_2,
            bevy_rapier2d::geometry::Group::GROUP_1 | bevy_rapier2d::geometry::Group::GROUP_4,
        ),
        ActiveEvents::COLLISION_EVENTS,
        // Transform / visibility
        Transform::from_translation(Vec3::ZERO),
        Visibility::default(),
    ));

    println!("✓ Player ship spawned at origin");
}
