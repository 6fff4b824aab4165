//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame while `Playing`)
//!
//! 1. [`player_intent_clear_system`] — resets `PlayerIntent` and `ExternalForce` to zero.
//! 2. [`keyboard_to_intent_system`] — translates keys into `PlayerIntent` fields.
//! 3. [`apply_player_intent_system`] — converts `PlayerIntent` into rotation,
//!    thrust burns, and the forward force while a burn is active.
//! 4. [`hyperspace_system`] — runs the vanish-then-relocate jump.
//!
//! The **input abstraction layer** (`PlayerIntent`) makes the movement logic
//! fully testable: tests populate the resource directly and run only
//! `apply_player_intent_system`.

use super::state::{HyperspaceJump, Player, PlayerIntent, ShipInvincibility, ThrustBurn};
use crate::config::GameConfig;
use crate::particles::spawn_thruster_particles;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Clear `ExternalForce` and `PlayerIntent` to zero at the start of every
/// frame.  Must run before any system that writes to either.
pub fn player_intent_clear_system(
    mut q: Query<&mut ExternalForce, With<Player>>,
    mut intent: ResMut<PlayerIntent>,
) {
    if let Ok(mut force) = q.single_mut() {
        force.force = Vec2::ZERO;
        force.torque = 0.0;
    }
    *intent = PlayerIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate the keyboard into [`PlayerIntent`].
///
/// - **A / ←** → `angvel = Some(+ROTATION_SPEED)` (CCW)
/// - **D / →** → `angvel = Some(−ROTATION_SPEED)` (CW)
/// - **W / ↑** (press) → `thrust = true`
/// - **Space** (hold) → `fire = true`
/// - **Left Shift** (press) → `hyperspace = true`
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
    config: Res<GameConfig>,
) {
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        intent.angvel = Some(config.rotation_speed);
    } else if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        intent.angvel = Some(-config.rotation_speed);
    }

    if keys.just_pressed(KeyCode::KeyW) || keys.just_pressed(KeyCode::ArrowUp) {
        intent.thrust = true;
    }
    if keys.pressed(KeyCode::Space) {
        intent.fire = true;
    }
    if keys.just_pressed(KeyCode::ShiftLeft) {
        intent.hyperspace = true;
    }
}

// ── Step 3: Apply intent → physics ────────────────────────────────────────────

/// Convert [`PlayerIntent`] into rotation and thrust on the ship.
///
/// | Intent field       | Physics effect                                     |
/// |--------------------|----------------------------------------------------|
/// | `angvel = Some(v)` | `velocity.angvel = v`                              |
/// | `angvel = None`    | angular velocity left to Rapier damping            |
/// | `thrust = true`    | starts a burn window if none is active             |
///
/// While a burn window is open, `THRUST_FORCE` is applied along the ship's
/// facing each frame; the window also gates re-thrusting, so mashing W does
/// not stack burns.
pub fn apply_player_intent_system(
    mut q: Query<(&Transform, &mut ExternalForce, &mut Velocity), With<Player>>,
    intent: Res<PlayerIntent>,
    mut burn: ResMut<ThrustBurn>,
    jump: Res<HyperspaceJump>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let Ok((transform, mut force, mut velocity)) = q.single_mut() else {
        return;
    };

    if let Some(angvel) = intent.angvel {
        velocity.angvel = angvel;
    }

    burn.timer = (burn.timer - time.delta_secs()).max(0.0);

    // No thrusting mid-jump; the ship isn't there.
    if intent.thrust && burn.timer <= 0.0 && jump.remaining.is_none() {
        burn.timer = config.thrust_burn_secs;
    }

    if burn.timer > 0.0 {
        let forward = transform.rotation.mul_vec3(Vec3::Y).truncate();
        force.force += forward * config.thrust_force;
    }
}

/// Emit exhaust puffs from the ship's tail while a burn window is open.
pub fn thruster_exhaust_system(
    mut commands: Commands,
    burn: Res<ThrustBurn>,
    jump: Res<HyperspaceJump>,
    q_player: Query<&Transform, With<Player>>,
) {
    if burn.timer <= 0.0 || jump.remaining.is_some() {
        return;
    }
    let Ok(transform) = q_player.single() else {
        return;
    };

    let backward = -transform.rotation.mul_vec3(Vec3::Y).truncate();
    let tail = transform.translation.truncate() + backward * 14.0;
    spawn_thruster_particles(&mut commands, tail, backward);
}

// ── Step 4: Hyperspace ────────────────────────────────────────────────────────

/// Run the hyperspace jump: vanish, wait, reappear somewhere random.
///
/// On activation the ship is hidden and its momentum zeroed; while hidden it
/// is also ignored by the hit system.  After `hyperspace_secs` the ship is
/// placed at a uniformly random arena position and made visible again.
pub fn hyperspace_system(
    intent: Res<PlayerIntent>,
    mut jump: ResMut<HyperspaceJump>,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_player: Query<(&mut Transform, &mut Velocity, &mut Visibility), With<Player>>,
) {
    let Ok((mut transform, mut velocity, mut visibility)) = q_player.single_mut() else {
        return;
    };

    match jump.remaining {
        None => {
            if intent.hyperspace {
                jump.remaining = Some(config.hyperspace_secs);
                velocity.linvel = Vec2::ZERO;
                velocity.angvel = 0.0;
                *visibility = Visibility::Hidden;
            }
        }
        Some(t) => {
            let t = t - time.delta_secs();
            if t > 0.0 {
                jump.remaining = Some(t);
                return;
            }

            let mut rng = rand::thread_rng();
            let margin = 60.0;
            transform.translation.x =
                rng.gen_range(-(config.arena_half_width - margin)..(config.arena_half_width - margin));
            transform.translation.y = rng
                .gen_range(-(config.arena_half_height - margin)..(config.arena_half_height - margin));
            *visibility = Visibility::Visible;
            jump.remaining = None;
        }
    }
}

// ── Invincibility blink ───────────────────────────────────────────────────────

/// Tick the post-respawn grace timer and blink the ship while it runs.
///
/// Leaves visibility alone during a hyperspace jump — the jump owns the
/// hidden state then.
pub fn invincibility_blink_system(
    time: Res<Time>,
    jump: Res<HyperspaceJump>,
    mut q_player: Query<(&mut ShipInvincibility, &mut Visibility), With<Player>>,
) {
    let Ok((mut inv, mut visibility)) = q_player.single_mut() else {
        return;
    };

    if jump.remaining.is_some() {
        return;
    }

    if inv.timer > 0.0 {
        inv.timer = (inv.timer - time.delta_secs()).max(0.0);
        // ~5 Hz blink.
        let phase = (inv.timer * 5.0) as i32;
        *visibility = if phase % 2 == 0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if inv.timer == 0.0 {
            *visibility = Visibility::Visible;
        }
    }
}
