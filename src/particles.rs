//! Particle effects: explosion bursts and thruster exhaust.
//!
//! ## Design
//!
//! Particles are lightweight ECS entities with a [`Particle`] component that
//! stores physics state (velocity, age, colour).  A two-system pipeline
//! handles them:
//!
//! | System                        | Schedule | Purpose                                      |
//! |-------------------------------|----------|----------------------------------------------|
//! | `attach_particle_mesh_system` | Update   | Attach `Mesh2d` to freshly-spawned particles |
//! | `particle_update_system`      | Update   | Move, fade, and despawn expired particles    |
//!
//! Particle entities are spawned by free functions
//! (`spawn_explosion_particles`, `spawn_thruster_particles`) that take only
//! `&mut Commands` — no `Assets` access needed at spawn time.  The
//! `attach_particle_mesh_system` supplies the Mesh2d one frame later, which
//! is imperceptible at 60 Hz.
//!
//! A single shared circle-mesh [`ParticleMesh`] resource is created at plugin
//! startup to avoid per-particle mesh allocation.  Each particle receives its
//! own unique [`ColorMaterial`] so its alpha can be faded individually.

use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use rand::Rng;

// ── Resources ────────────────────────────────────────────────────────────────

/// Shared circle mesh used by all particle entities (created once at startup).
#[derive(Resource)]
pub struct ParticleMesh(pub Handle<Mesh>);

// ── Component ────────────────────────────────────────────────────────────────

/// Short-lived visual particle entity.
///
/// After spawning, `attach_particle_mesh_system` inserts the `Mesh2d` /
/// `MeshMaterial2d` pair and writes the material handle into `material`.
/// `particle_update_system` then moves, fades, and eventually despawns it.
#[derive(Component)]
pub struct Particle {
    /// World-space velocity (units/s).
    pub velocity: Vec2,
    /// Time alive so far (s).
    pub age: f32,
    /// Total lifetime (s); entity is despawned when `age >= lifetime`.
    pub lifetime: f32,
    /// Base colour red channel (sRGB, 0–1).
    pub r: f32,
    /// Base colour green channel.
    pub g: f32,
    /// Base colour blue channel.
    pub b: f32,
    /// Handle to this particle's unique `ColorMaterial` so
    /// `particle_update_system` can update the alpha.  `None` until
    /// `attach_particle_mesh_system` runs.
    pub material: Option<Handle<ColorMaterial>>,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_particle_mesh).add_systems(
            Update,
            (attach_particle_mesh_system, particle_update_system).chain(),
        );
    }
}

// ── Startup system ────────────────────────────────────────────────────────────

/// Create the shared circle mesh and store it as a [`ParticleMesh`] resource.
fn init_particle_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(circle_mesh(2.0, 6));
    commands.insert_resource(ParticleMesh(handle));
}

// ── Update systems ────────────────────────────────────────────────────────────

/// Attach `Mesh2d` + `MeshMaterial2d` to every newly-spawned [`Particle`].
///
/// Uses [`Added<Particle>`] so it only runs for particles that appeared since
/// the last frame — zero overhead for the steady-state particle population.
pub fn attach_particle_mesh_system(
    mut commands: Commands,
    particle_mesh: Res<ParticleMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &mut Particle), Added<Particle>>,
) {
    for (entity, mut particle) in query.iter_mut() {
        let mat_handle = materials.add(ColorMaterial::from_color(Color::srgba(
            particle.r, particle.g, particle.b, 1.0,
        )));
        particle.material = Some(mat_handle.clone());
        commands
            .entity(entity)
            .insert((Mesh2d(particle_mesh.0.clone()), MeshMaterial2d(mat_handle)));
    }
}

/// Advance all particles: translate by velocity, fade alpha quadratically,
/// and despawn any whose age has exceeded their lifetime.
pub fn particle_update_system(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &mut Transform, &mut Particle)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut particle) in query.iter_mut() {
        particle.age += dt;

        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }

        // Translate by velocity.
        transform.translation.x += particle.velocity.x * dt;
        transform.translation.y += particle.velocity.y * dt;

        // Quadratic ease-out alpha: bright at birth, rapid fade at end.
        let t = particle.age / particle.lifetime; // 0 → 1
        let alpha = (1.0 - t).powi(2);

        if let Some(ref handle) = particle.material {
            if let Some(mat) = materials.get_mut(handle) {
                mat.color = Color::srgba(particle.r, particle.g, particle.b, alpha);
            }
        }
    }
}

// ── Public spawn helpers ──────────────────────────────────────────────────────

/// Spawn an omnidirectional explosion burst at `pos`.
///
/// `base_vel` is added (damped) to each particle's velocity so the burst
/// inherits the motion of whatever just blew up.  `scale` stretches particle
/// count, speed, and lifetime together: 1.0 for a small rock or a shot-down
/// saucer, ~2.0 for the player ship.
pub fn spawn_explosion_particles(commands: &mut Commands, pos: Vec2, base_vel: Vec2, scale: f32) {
    let mut rng = rand::thread_rng();
    let count = (14.0 * scale) as u32;

    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(40.0_f32..180.0_f32) * scale;
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed + base_vel * 0.3;

        // White-hot core fading through orange.
        let r = rng.gen_range(0.92_f32..1.0_f32);
        let g = rng.gen_range(0.55_f32..0.90_f32);
        let b = rng.gen_range(0.10_f32..0.35_f32);

        let lifetime = rng.gen_range(0.35_f32..0.70_f32) * scale.sqrt();
        let offset = Vec2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));

        commands.spawn((
            Particle {
                velocity,
                age: 0.0,
                lifetime,
                r,
                g,
                b,
                material: None,
            },
            Transform::from_translation((pos + offset).extend(0.9)),
            Visibility::default(),
        ));
    }
}

/// Spawn a short exhaust puff behind a thrusting ship.
///
/// `reverse_dir` is expected to point opposite the ship's facing.
pub fn spawn_thruster_particles(commands: &mut Commands, pos: Vec2, reverse_dir: Vec2) {
    let mut rng = rand::thread_rng();
    let count = 3_u32;

    for _ in 0..count {
        let base_angle = reverse_dir.y.atan2(reverse_dir.x);
        let spread = 0.35; // ±20° cone
        let angle = base_angle + rng.gen_range(-spread..spread);
        let speed = rng.gen_range(70.0_f32..140.0_f32);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;

        // Blue-white flame.
        let r = rng.gen_range(0.55_f32..0.75_f32);
        let g = rng.gen_range(0.70_f32..0.85_f32);
        let b = rng.gen_range(0.92_f32..1.0_f32);

        let lifetime = rng.gen_range(0.12_f32..0.25_f32);
        let offset = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

        commands.spawn((
            Particle {
                velocity,
                age: 0.0,
                lifetime,
                r,
                g,
                b,
                material: None,
            },
            Transform::from_translation((pos + offset).extend(0.9)),
            Visibility::default(),
        ));
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Build a small filled circle approximated by `segments` triangles.
fn circle_mesh(radius: f32, segments: u32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0]];
    let mut indices: Vec<u32> = Vec::with_capacity(segments as usize * 3);

    for i in 0..=segments {
        let angle = i as f32 * std::f32::consts::TAU / segments as f32;
        positions.push([angle.cos() * radius, angle.sin() * radius, 0.0]);
    }
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    let n = positions.len();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    let uvs: Vec<[f32; 2]> = vec![[0.5, 0.5]; n];

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
