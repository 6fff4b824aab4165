//! Fracture — a classic arcade rock-shooter.
//!
//! Rocks drift in from the edges and split when shot; two saucer kinds hunt
//! the player; three lives, round progression, and a persisted high score.
//! Built on Bevy's ECS with Rapier2D supplying collision detection.

pub mod arena;
pub mod asteroid;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod menu;
pub mod particles;
pub mod player;
pub mod round;
pub mod saucer;
pub mod save;
pub mod shapes;
pub mod spawner;
