//! Mesh2d geometry builders shared by the ship, rocks, saucers, and shots.
//!
//! Every game entity is a flat-shaded convex polygon.  Geometry is built once
//! at spawn time and lives on the GPU until the entity despawns; Bevy batches
//! compatible `Mesh2d` + `ColorMaterial` draws, so even a busy round stays a
//! handful of GPU dispatches.

use bevy::prelude::*;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::{Indices, PrimitiveTopology};
use rand::Rng;

// ── Polygon triangulation ─────────────────────────────────────────────────────

/// Fan-triangulate a convex polygon into a renderable [`Mesh`].
///
/// Triangle fan from vertex 0: triangles `(0, i, i+1)` for `i ∈ 1..n-2`.
/// Valid for any convex polygon.
pub fn filled_polygon_mesh(vertices: &[Vec2]) -> Mesh {
    let n = vertices.len();
    debug_assert!(n >= 3, "polygon must have ≥ 3 vertices");

    let positions: Vec<[f32; 3]> = vertices.iter().map(|v| [v.x, v.y, 0.0]).collect();
    let normals: Vec<[f32; 3]> = vec![[0.0, 0.0, 1.0]; n];
    // Map ±50 world-unit local coords to roughly 0–1 UV range.
    let uvs: Vec<[f32; 2]> = vertices
        .iter()
        .map(|v| [(v.x / 100.0) + 0.5, (v.y / 100.0) + 0.5])
        .collect();

    let mut indices: Vec<u32> = Vec::with_capacity((n - 2) * 3);
    for i in 1..(n as u32 - 1) {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

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

// ── Hull generators ───────────────────────────────────────────────────────────

/// Ship hull: a narrow dart pointing along local +Y.
pub fn ship_vertices(radius: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, radius * 1.3),
        Vec2::new(radius * 0.8, -radius),
        Vec2::new(0.0, -radius * 0.55),
        Vec2::new(-radius * 0.8, -radius),
    ]
}

/// Saucer hull: a squat hexagonal disc, wider than it is tall.
pub fn saucer_vertices(radius: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(-radius * 1.4, 0.0),
        Vec2::new(-radius * 0.6, -radius * 0.55),
        Vec2::new(radius * 0.6, -radius * 0.55),
        Vec2::new(radius * 1.4, 0.0),
        Vec2::new(radius * 0.6, radius * 0.55),
        Vec2::new(-radius * 0.6, radius * 0.55),
    ]
}

/// Generate the lumpy outline of a rock: `sides` vertices spaced evenly
/// around a circle, each pushed in or out by up to `jitter × radius`.
///
/// The jitter is small enough that the outline stays convex in practice, so
/// it can double as a `convex_hull` collider shape.
pub fn asteroid_vertices<R: Rng>(rng: &mut R, radius: f32, sides: usize, jitter: f32) -> Vec<Vec2> {
    let mut vertices = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = i as f32 * std::f32::consts::TAU / sides as f32;
        let r = radius * (1.0 + rng.gen_range(-jitter..jitter));
        vertices.push(Vec2::new(angle.cos(), angle.sin()) * r);
    }
    vertices
}

// ── Palette ───────────────────────────────────────────────────────────────────

/// Generate a rocky grey-brown fill colour seeded by the entity index.
///
/// Uses a multiplicative hash so every rock gets a deterministic but
/// visually distinct tone without an external noise library.
pub fn rock_color(seed: u32) -> Color {
    // Knuth multiplicative hash → 0.0–1.0
    let h = seed.wrapping_mul(2_654_435_761).wrapping_add(0xDEAD_BEEF);
    let t = (h & 0xFFFF) as f32 / 65_535.0;

    let lum = 0.18 + t * 0.18;
    let r = (lum + t * 0.06).min(1.0);
    let g = (lum + t * 0.02).min(1.0);
    let b = (lum.max(0.14) - t * 0.03).max(0.0);
    Color::srgb(r, g, b)
}

/// Ship fill colour.
pub fn ship_color() -> Color {
    Color::srgb(0.82, 0.88, 0.95)
}

/// Saucer fill colour — sickly green, unmistakably not a rock.
pub fn saucer_color() -> Color {
    Color::srgb(0.35, 0.78, 0.42)
}

/// Player shot colour.
pub fn projectile_color() -> Color {
    Color::srgb(1.0, 0.95, 0.6)
}

/// Enemy shot colour.
pub fn enemy_projectile_color() -> Color {
    Color::srgb(1.0, 0.45, 0.35)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn asteroid_outline_has_requested_vertex_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let verts = asteroid_vertices(&mut rng, 40.0, 10, 0.25);
        assert_eq!(verts.len(), 10);
    }

    #[test]
    fn asteroid_outline_stays_within_jitter_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 30.0;
        let jitter = 0.25;
        for v in asteroid_vertices(&mut rng, radius, 12, jitter) {
            let r = v.length();
            assert!(r >= radius * (1.0 - jitter) - f32::EPSILON);
            assert!(r <= radius * (1.0 + jitter) + f32::EPSILON);
        }
    }

    #[test]
    fn hull_builders_produce_valid_polygons() {
        assert!(ship_vertices(12.0).len() >= 3);
        assert!(saucer_vertices(22.0).len() >= 3);
    }
}
