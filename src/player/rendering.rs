//! Ship and projectile meshes.
//!
//! Both use the shared [`Added`]-query pattern: geometry is attached one
//! frame after spawn, which is imperceptible at 60 Hz and keeps the spawn
//! helpers free of `Assets` access.

use super::state::{Player, Projectile};
use crate::config::GameConfig;
use crate::shapes::{filled_polygon_mesh, projectile_color, ship_color, ship_vertices};
use bevy::prelude::*;

/// Attach the dart-shaped hull mesh to a newly spawned ship.
pub fn attach_ship_mesh_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<Entity, Added<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in query.iter() {
        let vertices = ship_vertices(config.player_collider_radius);
        let mesh_handle = meshes.add(filled_polygon_mesh(&vertices));
        let material_handle = materials.add(ColorMaterial::from_color(ship_color()));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)));
    }
}

/// Attach a small bolt mesh to each newly fired shot.
pub fn attach_projectile_mesh_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<Entity, Added<Projectile>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for entity in query.iter() {
        let r = config.projectile_collider_radius;
        let bolt = vec![
            Vec2::new(0.0, r * 2.2),
            Vec2::new(r, 0.0),
            Vec2::new(0.0, -r * 2.2),
            Vec2::new(-r, 0.0),
        ];
        let mesh_handle = meshes.add(filled_polygon_mesh(&bolt));
        let material_handle = materials.add(ColorMaterial::from_color(projectile_color()));
        commands
            .entity(entity)
            .insert((Mesh2d(mesh_handle), MeshMaterial2d(material_handle)));
    }
}
