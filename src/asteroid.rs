//! Asteroid components and utilities: spawning, drifting, and the fracture
//! rules applied when a shot connects.
//!
//! Rocks are dynamic Rapier bodies with a fixed drift velocity and spin.
//! They never collide with each other (collision groups), only with the ship
//! and with shots.  The fracture table:
//!
//! | Size   | On projectile hit           |
//! |--------|-----------------------------|
//! | Large  | splits into two Medium      |
//! | Medium | splits into two Small       |
//! | Small  | destroyed outright          |

use crate::arena::Wraps;
use crate::config::GameConfig;
use crate::shapes::{asteroid_vertices, filled_polygon_mesh, rock_color};
use crate::spawner::{Enemy, PointValue};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for any asteroid entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asteroid;

/// Size class of a rock; decides speed, silhouette, score, and what is left
/// behind when it fractures.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

/// Polygon outline vertices (local space), shared by the render mesh and the
/// hull collider.
#[derive(Component, Debug, Clone)]
pub struct Vertices(pub Vec<Vec2>);

impl AsteroidSize {
    /// Drift speed for this size class (u/s). Fragments fly faster.
    pub fn speed(self, config: &GameConfig) -> f32 {
        match self {
            AsteroidSize::Small => config.asteroid_speed_small,
            AsteroidSize::Medium => config.asteroid_speed_medium,
            AsteroidSize::Large => config.asteroid_speed_large,
        }
    }

    /// Nominal outline/collider radius for this size class.
    pub fn radius(self, config: &GameConfig) -> f32 {
        match self {
            AsteroidSize::Small => config.asteroid_radius_small,
            AsteroidSize::Medium => config.asteroid_radius_medium,
            AsteroidSize::Large => config.asteroid_radius_large,
        }
    }

    /// Points credited when a shot destroys a rock of this size.
    pub fn point_value(self, config: &GameConfig) -> u32 {
        match self {
            AsteroidSize::Small => config.points_small_asteroid,
            AsteroidSize::Medium => config.points_medium_asteroid,
            AsteroidSize::Large => config.points_large_asteroid,
        }
    }

    /// Outline vertex count; bigger rocks get more detail.
    pub fn sides(self) -> usize {
        match self {
            AsteroidSize::Small => 8,
            AsteroidSize::Medium => 9,
            AsteroidSize::Large => 10,
        }
    }

    /// What a fracture leaves behind: `Some((child_size, count))`, or `None`
    /// for a small rock, which just disappears.
    pub fn fragments(self) -> Option<(AsteroidSize, u32)> {
        match self {
            AsteroidSize::Large => Some((AsteroidSize::Medium, 2)),
            AsteroidSize::Medium => Some((AsteroidSize::Small, 2)),
            AsteroidSize::Small => None,
        }
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn a single rock at `pos` drifting along `heading` (radians).
///
/// The outline is freshly generated per rock, so no two silhouettes repeat.
/// Spin is drawn uniformly from ±`asteroid_spin_max`.
pub fn spawn_asteroid(
    commands: &mut Commands,
    config: &GameConfig,
    pos: Vec2,
    heading: f32,
    size: AsteroidSize,
) -> Entity {
    let mut rng = rand::thread_rng();

    let vertices = asteroid_vertices(
        &mut rng,
        size.radius(config),
        size.sides(),
        config.asteroid_shape_jitter,
    );
    let direction = Vec2::new(heading.cos(), heading.sin());
    let spin = rng.gen_range(-config.asteroid_spin_max..config.asteroid_spin_max);

    commands
        .spawn((
            (
                Asteroid,
                size,
                Enemy,
                PointValue(size.point_value(config)),
                Vertices(vertices.clone()),
                Wraps,
                Transform::from_translation(pos.extend(0.1)),
                Visibility::default(),
            ),
            (
                RigidBody::Dynamic,
                Collider::convex_hull(&vertices).unwrap_or_else(|| Collider::ball(size.radius(config))),
                Velocity {
                    linvel: direction * size.speed(config),
                    angvel: spin,
                },
                Damping {
                    linear_damping: 0.0,
                    angular_damping: 0.0,
                },
                CollisionGroups::new(
                    bevy_rapier2d::geometry::Group::GROUP_1,
                    bevy_rapier2d::geometry::Group::GROUP_2
                        | bevy_rapier2d::geometry::Group::GROUP_3,
                ),
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id()
}

/// Spawn the fracture children of a rock that was just shot at `pos`.
///
/// Children appear near the impact site, each displaced by up to
/// `fracture_scatter` and launched on an independent random heading.
/// Small rocks leave nothing behind.
pub fn fracture_asteroid(commands: &mut Commands, config: &GameConfig, pos: Vec2, size: AsteroidSize) {
    let Some((child_size, count)) = size.fragments() else {
        return;
    };

    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let scatter = Vec2::new(
            rng.gen_range(-config.fracture_scatter..config.fracture_scatter),
            rng.gen_range(-config.fracture_scatter..config.fracture_scatter),
        );
        let heading = rng.gen_range(0.0..std::f32::consts::TAU);
        spawn_asteroid(commands, config, pos + scatter, heading, child_size);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Attach a filled `Mesh2d` polygon to every newly spawned rock.
///
/// Uses [`Added<Asteroid>`] so this only executes for entities that appeared
/// since the previous frame.  The entity's `Transform` is managed entirely by
/// Rapier; the vertices are local-space, so rotation comes for free.
pub fn attach_asteroid_mesh_system(
    mut commands: Commands,
    query: Query<(Entity, &Vertices), Added<Asteroid>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (entity, vertices) in query.iter() {
        if vertices.0.len() < 3 {
            continue;
        }

        let mesh_handle = meshes.add(filled_polygon_mesh(&vertices.0));
        let material_handle = materials.add(ColorMaterial::from_color(rock_color(entity.index())));

        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_fractures_into_two_mediums() {
        assert_eq!(
            AsteroidSize::Large.fragments(),
            Some((AsteroidSize::Medium, 2))
        );
    }

    #[test]
    fn medium_fractures_into_two_smalls() {
        assert_eq!(
            AsteroidSize::Medium.fragments(),
            Some((AsteroidSize::Small, 2))
        );
    }

    #[test]
    fn small_leaves_no_fragments() {
        assert_eq!(AsteroidSize::Small.fragments(), None);
    }

    #[test]
    fn point_values_follow_classic_table() {
        let config = GameConfig::default();
        assert_eq!(AsteroidSize::Large.point_value(&config), 20);
        assert_eq!(AsteroidSize::Medium.point_value(&config), 50);
        assert_eq!(AsteroidSize::Small.point_value(&config), 100);
    }

    #[test]
    fn fragments_fly_faster_than_their_parent() {
        let config = GameConfig::default();
        assert!(
            AsteroidSize::Small.speed(&config) > AsteroidSize::Medium.speed(&config)
        );
        assert!(
            AsteroidSize::Medium.speed(&config) > AsteroidSize::Large.speed(&config)
        );
    }
}
