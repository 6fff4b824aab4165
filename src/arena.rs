//! Toroidal playfield: anything that leaves one edge re-enters from the
//! opposite edge.
//!
//! Every mobile entity (ship, rocks, saucers, both projectile kinds) carries
//! the [`Wraps`] marker; [`screen_wrap_system`] runs unconditionally every
//! frame so menu-diorama rocks wrap exactly like in-game ones.

use crate::config::GameConfig;
use bevy::prelude::*;

/// Marker: this entity teleports to the opposite edge when it exits the arena.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wraps;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, screen_wrap_system);
    }
}

/// Teleport every [`Wraps`] entity that has drifted past an arena edge (plus
/// margin) to the opposite edge, preserving velocity and the orthogonal
/// coordinate.
pub fn screen_wrap_system(
    config: Res<GameConfig>,
    mut query: Query<&mut Transform, With<Wraps>>,
) {
    let half = config.arena_half_extents();
    let margin = config.wrap_margin;

    for mut transform in query.iter_mut() {
        let pos = transform.translation.truncate();
        let wrapped = wrap_position(pos, half, margin);
        if wrapped != pos {
            transform.translation.x = wrapped.x;
            transform.translation.y = wrapped.y;
        }
    }
}

/// Map `pos` back into the arena: a coordinate further than `half + margin`
/// from the centre flips to the opposite edge.  In-bounds positions are
/// returned unchanged.
pub fn wrap_position(pos: Vec2, half: Vec2, margin: f32) -> Vec2 {
    let mut out = pos;

    if pos.x > half.x + margin {
        out.x = -half.x - margin;
    } else if pos.x < -half.x - margin {
        out.x = half.x + margin;
    }

    if pos.y > half.y + margin {
        out.y = -half.y - margin;
    } else if pos.y < -half.y - margin {
        out.y = half.y + margin;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec2 = Vec2::new(590.0, 330.0);
    const MARGIN: f32 = 24.0;

    #[test]
    fn in_bounds_position_is_unchanged() {
        let pos = Vec2::new(120.0, -200.0);
        assert_eq!(wrap_position(pos, HALF, MARGIN), pos);
    }

    #[test]
    fn exit_right_enters_left() {
        let pos = Vec2::new(HALF.x + MARGIN + 1.0, 50.0);
        let wrapped = wrap_position(pos, HALF, MARGIN);
        assert_eq!(wrapped.x, -HALF.x - MARGIN);
        assert_eq!(wrapped.y, 50.0, "orthogonal coordinate must be preserved");
    }

    #[test]
    fn exit_left_enters_right() {
        let pos = Vec2::new(-HALF.x - MARGIN - 3.0, -10.0);
        let wrapped = wrap_position(pos, HALF, MARGIN);
        assert_eq!(wrapped.x, HALF.x + MARGIN);
        assert_eq!(wrapped.y, -10.0);
    }

    #[test]
    fn exit_top_enters_bottom() {
        let pos = Vec2::new(0.0, HALF.y + MARGIN + 0.5);
        let wrapped = wrap_position(pos, HALF, MARGIN);
        assert_eq!(wrapped, Vec2::new(0.0, -HALF.y - MARGIN));
    }

    #[test]
    fn corner_exit_wraps_both_axes() {
        let pos = Vec2::new(HALF.x + MARGIN + 2.0, -HALF.y - MARGIN - 2.0);
        let wrapped = wrap_position(pos, HALF, MARGIN);
        assert_eq!(wrapped, Vec2::new(-HALF.x - MARGIN, HALF.y + MARGIN));
    }

    #[test]
    fn edge_exactly_at_margin_does_not_wrap() {
        let pos = Vec2::new(HALF.x + MARGIN, HALF.y + MARGIN);
        assert_eq!(wrap_position(pos, HALF, MARGIN), pos);
    }
}
