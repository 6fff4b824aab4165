//! Saucer enemies: the big spray-and-pray saucer and the small hunter.
//!
//! Both kinds wander the arena by re-rolling one of the four cardinal
//! directions every few seconds, wrap at the edges, and fire on a fixed
//! cadence.  They differ only in the turret:
//!
//! | Kind  | Turret                                         | Points |
//! |-------|------------------------------------------------|--------|
//! | Big   | constant slow sweep; undirected spray          | 200    |
//! | Small | tracks the player, accuracy tightens with score| 1000   |
//!
//! The small saucer's aim starts sloppy ([`AimSlack`]) and loses one step of
//! slack every time the player gains another 100 points — the better you do,
//! the better it gets.

use crate::arena::Wraps;
use crate::config::GameConfig;
use crate::menu::GameState;
use crate::player::{Player, PlayerScore};
use crate::shapes::{enemy_projectile_color, filled_polygon_mesh, saucer_color, saucer_vertices};
use crate::spawner::{Enemy, PointValue};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// Which saucer this is; decides speed, size, score, and turret behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaucerKind {
    Big,
    Small,
}

impl SaucerKind {
    pub fn speed(self, config: &GameConfig) -> f32 {
        match self {
            SaucerKind::Big => config.big_saucer_speed,
            SaucerKind::Small => config.small_saucer_speed,
        }
    }

    pub fn radius(self, config: &GameConfig) -> f32 {
        match self {
            SaucerKind::Big => config.big_saucer_radius,
            SaucerKind::Small => config.small_saucer_radius,
        }
    }

    pub fn point_value(self, config: &GameConfig) -> u32 {
        match self {
            SaucerKind::Big => config.points_big_saucer,
            SaucerKind::Small => config.points_small_saucer,
        }
    }
}

/// Marker + kind for a saucer entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Saucer {
    pub kind: SaucerKind,
}

/// Countdown to the next wander-direction re-roll.
#[derive(Component, Debug, Clone, Copy)]
pub struct SaucerWander {
    pub timer: f32,
}

/// World-space heading of the saucer's turret (radians).
#[derive(Component, Debug, Clone, Copy)]
pub struct SaucerTurret {
    pub heading: f32,
}

/// Countdown to the next shot.
#[derive(Component, Debug, Clone, Copy)]
pub struct SaucerFireTimer {
    pub timer: f32,
}

/// Small-saucer aim error, in discrete slack steps.
///
/// `score_baseline` records the player score at spawn (and after each
/// tightening); once the player gains `aim_tighten_score` more points the
/// slack decreases by one step, down to `aim_slack_min`.
#[derive(Component, Debug, Clone, Copy)]
pub struct AimSlack {
    pub steps: i32,
    pub score_baseline: u32,
}

impl AimSlack {
    /// Tighten the aim if the player has gained enough points since the last
    /// tightening.
    pub fn note_score(&mut self, score: u32, per: u32, floor: i32) {
        if score >= self.score_baseline.saturating_add(per) {
            self.score_baseline = score;
            if self.steps > floor {
                self.steps -= 1;
            }
        }
    }
}

/// Per-shot state attached to each saucer round.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EnemyProjectile {
    /// Seconds since this shot was spawned.
    pub age: f32,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SaucerPlugin;

impl Plugin for SaucerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                saucer_wander_system,
                big_saucer_turret_system,
                small_saucer_aim_system,
                saucer_fire_system,
                despawn_old_enemy_projectiles_system,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (attach_saucer_mesh_system, attach_enemy_projectile_mesh_system),
        );
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn a saucer of the given kind at `pos`.
///
/// The saucer starts moving in a random cardinal direction; the small kind
/// additionally records the current player score as its aim baseline.
pub fn spawn_saucer(
    commands: &mut Commands,
    config: &GameConfig,
    kind: SaucerKind,
    pos: Vec2,
    score_now: u32,
) -> Entity {
    let mut rng = rand::thread_rng();
    let direction = random_cardinal(&mut rng);

    let entity = commands
        .spawn((
            (
                Saucer { kind },
                Enemy,
                PointValue(kind.point_value(config)),
                SaucerWander {
                    timer: config.saucer_wander_interval,
                },
                SaucerTurret {
                    heading: rng.gen_range(0.0..std::f32::consts::TAU),
                },
                SaucerFireTimer {
                    timer: config.saucer_fire_interval,
                },
                Wraps,
                Transform::from_translation(pos.extend(0.15)),
                Visibility::default(),
            ),
            (
                RigidBody::Dynamic,
                Collider::ball(kind.radius(config)),
                Velocity {
                    linvel: direction * kind.speed(config),
                    angvel: 0.0,
                },
                Damping {
                    linear_damping: 0.0,
                    angular_damping: 1.0,
                },
                LockedAxes::ROTATION_LOCKED,
                CollisionGroups::new(
                    bevy_rapier2d::geometry::Group::GROUP_1,
                    bevy_rapier2d::geometry::Group::GROUP_2
                        | bevy_rapier2d::geometry::Group::GROUP_3,
                ),
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id();

    if kind == SaucerKind::Small {
        commands.entity(entity).insert(AimSlack {
            steps: config.aim_slack_start,
            score_baseline: score_now,
        });
    }

    entity
}

/// Pick one of the four cardinal directions.
fn random_cardinal<R: Rng>(rng: &mut R) -> Vec2 {
    match rng.gen_range(0..4) {
        0 => Vec2::X,
        1 => Vec2::NEG_X,
        2 => Vec2::Y,
        _ => Vec2::NEG_Y,
    }
}

// ── AI systems ────────────────────────────────────────────────────────────────

/// Re-roll each saucer's travel direction every `saucer_wander_interval`
/// seconds.  The roll writes the body's velocity; Rapier does the rest.
pub fn saucer_wander_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_saucers: Query<(&Saucer, &mut SaucerWander, &mut Velocity)>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for (saucer, mut wander, mut velocity) in q_saucers.iter_mut() {
        wander.timer -= dt;
        if wander.timer > 0.0 {
            continue;
        }
        wander.timer = config.saucer_wander_interval;
        velocity.linvel = random_cardinal(&mut rng) * saucer.kind.speed(&config);
    }
}

/// Sweep the big saucer's turret at a constant rate.
pub fn big_saucer_turret_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_turrets: Query<(&Saucer, &mut SaucerTurret), Without<AimSlack>>,
) {
    let dt = time.delta_secs();
    for (saucer, mut turret) in q_turrets.iter_mut() {
        if saucer.kind == SaucerKind::Big {
            turret.heading =
                (turret.heading + config.big_turret_sweep_rate * dt) % std::f32::consts::TAU;
        }
    }
}

/// Track the player with the small saucer's turret.
///
/// The aim point is the player's position offset by the current slack, and
/// the turret eases toward it rather than snapping — the slack shrinks as
/// the player's score grows (see [`AimSlack::note_score`]).
pub fn small_saucer_aim_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    score: Res<PlayerScore>,
    q_player: Query<&Transform, With<Player>>,
    mut q_turrets: Query<(&Transform, &mut SaucerTurret, &mut AimSlack), Without<Player>>,
) {
    let Ok(player_transform) = q_player.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();
    let dt = time.delta_secs();

    for (transform, mut turret, mut slack) in q_turrets.iter_mut() {
        slack.note_score(score.points, config.aim_tighten_score, config.aim_slack_min);

        let offset = slack.steps as f32 * config.aim_slack_step;
        let target = player_pos + Vec2::splat(offset);
        let to_target = target - transform.translation.truncate();
        let desired = to_target.y.atan2(to_target.x);

        // Shortest-path angular difference, normalised to (−π, π].
        let mut diff = desired - turret.heading;
        while diff > std::f32::consts::PI {
            diff -= std::f32::consts::TAU;
        }
        while diff < -std::f32::consts::PI {
            diff += std::f32::consts::TAU;
        }

        turret.heading += diff * (config.small_turret_turn_speed * dt).min(1.0);
    }
}

/// Fire a shot from each saucer's turret every `saucer_fire_interval` seconds.
pub fn saucer_fire_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_saucers: Query<(&Saucer, &Transform, &SaucerTurret, &mut SaucerFireTimer)>,
) {
    let dt = time.delta_secs();

    for (saucer, transform, turret, mut fire) in q_saucers.iter_mut() {
        fire.timer -= dt;
        if fire.timer > 0.0 {
            continue;
        }
        fire.timer = config.saucer_fire_interval;

        let dir = Vec2::new(turret.heading.cos(), turret.heading.sin());
        let muzzle = transform.translation.truncate()
            + dir * (saucer.kind.radius(&config) + 8.0);

        commands.spawn((
            EnemyProjectile::default(),
            Wraps,
            Transform::from_translation(muzzle.extend(0.2))
                .with_rotation(Quat::from_rotation_z(turret.heading)),
            Visibility::default(),
            RigidBody::KinematicVelocityBased,
            Velocity {
                linvel: dir * config.enemy_projectile_speed,
                angvel: 0.0,
            },
            Collider::ball(config.enemy_projectile_collider_radius),
            // Sensor: detects collision events for game logic but generates no
            // contact forces on the ship.
            Sensor,
            Ccd { enabled: true },
            CollisionGroups::new(
                bevy_rapier2d::geometry::Group::GROUP_4,
                bevy_rapier2d::geometry::Group::GROUP_2,
            ),
            ActiveCollisionTypes::DYNAMIC_KINEMATIC,
            ActiveEvents::COLLISION_EVENTS,
        ));
    }
}

/// Age saucer shots and despawn them when they expire.
pub fn despawn_old_enemy_projectiles_system(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut q_shots: Query<(Entity, &mut EnemyProjectile)>,
) {
    let dt = time.delta_secs();
    for (entity, mut shot) in q_shots.iter_mut() {
        shot.age += dt;
        if shot.age >= config.enemy_projectile_lifetime {
            commands.entity(entity).despawn();
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Attach the saucer hull mesh to every newly spawned saucer.
pub fn attach_saucer_mesh_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<(Entity, &Saucer), Added<Saucer>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, saucer) in query.iter() {
        let vertices = saucer_vertices(saucer.kind.radius(&config));
        let mesh_handle = meshes.add(filled_polygon_mesh(&vertices));
        let material_handle = materials.add(ColorMaterial::from_color(saucer_color()));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)));
    }
}

/// Attach a small elongated bolt mesh to every newly spawned saucer shot.
pub fn attach_enemy_projectile_mesh_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<Entity, Added<EnemyProjectile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in query.iter() {
        let r = config.enemy_projectile_collider_radius;
        let bolt = vec![
            Vec2::new(r * 2.0, 0.0),
            Vec2::new(0.0, r),
            Vec2::new(-r * 2.0, 0.0),
            Vec2::new(0.0, -r),
        ];
        let mesh_handle = meshes.add(filled_polygon_mesh(&bolt));
        let material_handle =
            materials.add(ColorMaterial::from_color(enemy_projectile_color()));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aim_slack_tightens_per_score_step() {
        let mut slack = AimSlack {
            steps: 3,
            score_baseline: 0,
        };

        slack.note_score(50, 100, -1);
        assert_eq!(slack.steps, 3, "not enough points gained yet");

        slack.note_score(100, 100, -1);
        assert_eq!(slack.steps, 2);
        assert_eq!(slack.score_baseline, 100, "baseline moves on tightening");

        slack.note_score(150, 100, -1);
        assert_eq!(slack.steps, 2, "needs another full step over the new baseline");

        slack.note_score(200, 100, -1);
        assert_eq!(slack.steps, 1);
    }

    #[test]
    fn aim_slack_floors_at_minimum() {
        let mut slack = AimSlack {
            steps: 0,
            score_baseline: 0,
        };

        slack.note_score(100, 100, -1);
        assert_eq!(slack.steps, -1);

        slack.note_score(200, 100, -1);
        assert_eq!(slack.steps, -1, "must not tighten past the floor");
    }

    #[test]
    fn saucer_points_follow_classic_table() {
        let config = GameConfig::default();
        assert_eq!(SaucerKind::Big.point_value(&config), 200);
        assert_eq!(SaucerKind::Small.point_value(&config), 1000);
    }
}
