//! Projectile firing, lifetime management, and the collision handling that
//! drives scoring, fracturing, and player death.
//!
//! ## Hit rules
//!
//! | Pair                        | Effect                                            |
//! |-----------------------------|---------------------------------------------------|
//! | player shot × rock          | score + fracture (L→2M, M→2S, S→gone), shot despawns |
//! | player shot × saucer        | score + saucer destroyed, shot despawns           |
//! | enemy body × ship           | ship loses a life (enemy survives)                |
//! | saucer shot × ship          | ship loses a life, shot despawns                  |
//!
//! Contact with the ship is ignored while invincibility or a hyperspace jump
//! is active.

use super::state::{
    FireCooldown, HyperspaceJump, Player, PlayerIntent, PlayerLives, PlayerScore, Projectile,
    ShipInvincibility,
};
use crate::arena::Wraps;
use crate::asteroid::{fracture_asteroid, AsteroidSize};
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::particles::spawn_explosion_particles;
use crate::saucer::EnemyProjectile;
use crate::spawner::{Enemy, PointValue};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

// ── Firing ────────────────────────────────────────────────────────────────────

/// Fire the cannon when the intent says so and the cooldown allows it.
///
/// Shots are kinematic sensors with CCD so a fast round cannot tunnel
/// through a small rock between frames.
pub fn projectile_fire_system(
    mut commands: Commands,
    q_player: Query<&Transform, With<Player>>,
    intent: Res<PlayerIntent>,
    jump: Res<HyperspaceJump>,
    mut cooldown: ResMut<FireCooldown>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    cooldown.timer = (cooldown.timer - time.delta_secs()).max(0.0);

    if !intent.fire || cooldown.timer > 0.0 || jump.remaining.is_some() {
        return;
    }

    let Ok(transform) = q_player.single() else {
        return;
    };
    cooldown.timer = config.fire_cooldown;

    let fire_dir = transform.rotation.mul_vec3(Vec3::Y).truncate();
    let muzzle =
        transform.translation.truncate() + fire_dir * (config.player_collider_radius + 6.0);

    commands.spawn((
        Projectile::default(),
        Wraps,
        Transform::from_translation(muzzle.extend(0.2)).with_rotation(transform.rotation),
        Visibility::default(),
        RigidBody::KinematicVelocityBased,
        Velocity {
            linvel: fire_dir * config.projectile_speed,
            angvel: 0.0,
        },
        Collider::ball(config.projectile_collider_radius),
        // Sensor: detects collision events for game logic but generates no
        // contact forces — a shot must not shove a rock off course.
        Sensor,
        Ccd { enabled: true },
        CollisionGroups::new(
            bevy_rapier2d::geometry::Group::GROUP_3,
            bevy_rapier2d::geometry::Group::GROUP_1,
        ),
        ActiveCollisionTypes::DYNAMIC_KINEMATIC,
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Age shots each frame and despawn the expired.
pub fn despawn_old_projectiles_system(
    mut commands: Commands,
    mut q: Query<(Entity, &mut Projectile)>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let dt = time.delta_secs();
    for (entity, mut proj) in q.iter_mut() {
        proj.age += dt;
        if proj.age >= config.projectile_lifetime {
            commands.entity(entity).despawn();
        }
    }
}

// ── Shot × enemy ──────────────────────────────────────────────────────────────

/// Resolve player shots connecting with enemies.
///
/// Every kill credits the enemy's [`PointValue`]; rocks additionally run the
/// fracture table at their last position.  Each shot and each enemy is
/// processed at most once per frame even if Rapier reports several contacts.
#[allow(clippy::too_many_arguments)]
pub fn projectile_enemy_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    q_shots: Query<(), With<Projectile>>,
    q_enemies: Query<(&PointValue, &Transform, &Velocity, Option<&AsteroidSize>), With<Enemy>>,
    mut score: ResMut<PlayerScore>,
    config: Res<GameConfig>,
) {
    let mut processed_shots: HashSet<Entity> = HashSet::new();
    let mut processed_enemies: HashSet<Entity> = HashSet::new();

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let (shot_entity, enemy_entity) = if q_shots.contains(e1) && q_enemies.contains(e2) {
            (e1, e2)
        } else if q_shots.contains(e2) && q_enemies.contains(e1) {
            (e2, e1)
        } else {
            continue;
        };

        if processed_shots.contains(&shot_entity) || processed_enemies.contains(&enemy_entity) {
            continue;
        }
        processed_shots.insert(shot_entity);
        processed_enemies.insert(enemy_entity);

        let Ok((points, transform, velocity, asteroid_size)) = q_enemies.get(enemy_entity) else {
            continue;
        };
        let pos = transform.translation.truncate();

        score.add(points.0);
        spawn_explosion_particles(&mut commands, pos, velocity.linvel, 1.0);

        if let Some(size) = asteroid_size {
            fracture_asteroid(&mut commands, &config, pos, *size);
        }

        commands.entity(shot_entity).despawn();
        commands.entity(enemy_entity).despawn();
    }
}

// ── Enemy × ship ──────────────────────────────────────────────────────────────

/// Resolve enemy bodies and saucer shots connecting with the ship.
///
/// A hit costs one life and resets the ship to the arena centre with a fresh
/// invincibility window; on the last life the ship despawns and the game
/// transitions to `GameOver`.  The enemy body survives the contact, exactly
/// as the rock that clips you keeps drifting.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn player_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut q_player: Query<
        (Entity, &mut Transform, &mut Velocity, &mut ShipInvincibility),
        With<Player>,
    >,
    q_enemies: Query<(), With<Enemy>>,
    q_enemy_shots: Query<(), With<EnemyProjectile>>,
    jump: Res<HyperspaceJump>,
    mut lives: ResMut<PlayerLives>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok((player_entity, mut transform, mut velocity, mut inv)) = q_player.single_mut() else {
        return;
    };

    if inv.is_active() || jump.remaining.is_some() {
        return;
    }

    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let other = if e1 == player_entity {
            e2
        } else if e2 == player_entity {
            e1
        } else {
            continue;
        };

        let hit_by_enemy = q_enemies.contains(other);
        let hit_by_shot = q_enemy_shots.contains(other);
        if !hit_by_enemy && !hit_by_shot {
            continue;
        }

        if hit_by_shot {
            commands.entity(other).despawn();
        }

        let pos = transform.translation.truncate();
        spawn_explosion_particles(&mut commands, pos, velocity.linvel, 2.0);

        lives.remaining -= 1;

        if lives.remaining > 0 {
            // Back to the centre with everything zeroed, briefly untouchable.
            transform.translation = Vec3::new(0.0, 0.0, transform.translation.z);
            transform.rotation = Quat::IDENTITY;
            velocity.linvel = Vec2::ZERO;
            velocity.angvel = 0.0;
            inv.timer = config.invincibility_secs;
            info!("Ship destroyed — {} lives remaining", lives.remaining);
        } else {
            commands.entity(player_entity).despawn();
            next_state.set(GameState::GameOver);
            info!("Game over");
        }

        // One death per frame is plenty.
        break;
    }
}
