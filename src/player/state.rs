//! Player components and resources.
//!
//! All ECS components and Bevy resources that describe player state live
//! here.  Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input, thrust, hyperspace
//! - [`super::combat`] — firing, hits, death and respawn
//! - [`super::rendering`] — ship and projectile meshes, invincibility blink

use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Player;

/// Post-respawn grace window.  While `timer > 0` the ship blinks and enemy
/// contact is ignored, so a fresh spawn can't be killed by a rock parked on
/// the arena centre.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ShipInvincibility {
    /// Seconds of invincibility remaining; decremented each frame.
    pub timer: f32,
}

impl ShipInvincibility {
    /// Returns `true` while the grace window is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }
}

/// Per-projectile state attached to each fired round.
#[derive(Component, Default)]
pub struct Projectile {
    /// Seconds since this projectile was spawned.
    pub age: f32,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Aggregated player intent for the current frame, derived from all input
/// sources.
///
/// Input systems write to this resource each frame after it is cleared;
/// [`super::control::apply_player_intent_system`] reads it and applies the
/// corresponding physics.  Tests can populate this directly to drive ship
/// behaviour without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Direct angular-velocity override in **rad/s**.
    ///
    /// `Some(value)` overwrites `Velocity::angvel`; `None` leaves the current
    /// angular velocity to Rapier damping.
    pub angvel: Option<f32>,
    /// Begin a thrust burn this frame (edge-triggered).
    pub thrust: bool,
    /// Fire the cannon this frame (level-triggered; cooldown applies).
    pub fire: bool,
    /// Begin a hyperspace jump this frame (edge-triggered).
    pub hyperspace: bool,
}

/// Enforces a minimum interval between consecutive shots.
#[derive(Resource, Default)]
pub struct FireCooldown {
    /// Remaining cooldown in seconds; decremented each frame, clamped to 0.
    pub timer: f32,
}

/// The active thrust burn, if any.
///
/// While `timer > 0` the engine applies forward force and the exhaust is
/// shown; a new burn cannot start until the window ends — one thrust at a
/// time.
#[derive(Resource, Default)]
pub struct ThrustBurn {
    /// Remaining burn time in seconds.
    pub timer: f32,
}

/// The in-flight hyperspace jump, if any.
///
/// `Some(t)`: the ship is hidden and intangible for another `t` seconds,
/// after which it reappears at a random arena position.  `None`: no jump in
/// progress.
#[derive(Resource, Default)]
pub struct HyperspaceJump {
    pub remaining: Option<f32>,
}

/// The player's session score.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerScore {
    pub points: u32,
}

impl PlayerScore {
    /// Credit a destroyed enemy's point value.
    #[inline]
    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

/// Lives remaining, including the current one.  Decremented on each death;
/// reaching 0 triggers game-over.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerLives {
    pub remaining: i32,
}

impl Default for PlayerLives {
    fn default() -> Self {
        Self {
            remaining: crate::constants::PLAYER_LIVES,
        }
    }
}

/// Best committed session score.  Loaded from disk when a session starts and
/// written back when the player returns to the menu after game-over.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct HighScore {
    pub best: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_add_saturates_instead_of_wrapping() {
        let mut score = PlayerScore { points: u32::MAX - 10 };
        score.add(100);
        assert_eq!(score.points, u32::MAX);
    }
}
