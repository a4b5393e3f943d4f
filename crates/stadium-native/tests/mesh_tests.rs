// Host-side tests for mesh builders.
// The native crate is a binary, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}

use glam::Vec3;
use mesh::*;

fn assert_outward_winding(m: &Mesh) {
    assert_eq!(m.indices.len() % 3, 0);
    for tri in m.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| {
            assert!((i as usize) < m.vertices.len(), "index {i} out of range");
            m.vertices[i as usize]
        });
        let pa = Vec3::from(a.position);
        let face = (Vec3::from(b.position) - pa).cross(Vec3::from(c.position) - pa);
        if face.length_squared() < 1e-12 {
            continue;
        }
        let normal = Vec3::from(a.normal);
        assert!(face.dot(normal) > 0.0, "triangle {tri:?} winds against its normal");
    }
}

#[test]
fn cuboid_has_six_faces_and_matches_size() {
    let m = cuboid([0.5, 0.3, 0.4]);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.triangle_count(), 12);
    assert_outward_winding(&m);
    let max = m
        .vertices
        .iter()
        .fold(Vec3::splat(f32::MIN), |acc, v| acc.max(Vec3::from(v.position)));
    assert!((max - Vec3::new(0.25, 0.15, 0.2)).length() < 1e-6);
}

#[test]
fn cylinder_is_closed_and_wound_outward() {
    let m = cylinder(8.0, 8.0, 1.0, 32);
    assert_eq!(m.triangle_count(), 32 * 2 + 32 * 2);
    assert_outward_winding(&m);
}

#[test]
fn frustum_side_normals_tilt_up_when_narrowing() {
    let m = cylinder(25.0, 50.0, 0.5, 16);
    assert_outward_winding(&m);
    let side = m.vertices[0];
    assert!(side.normal[1] > 0.0);
}

#[test]
fn inner_tube_faces_the_axis() {
    let m = inner_tube(55.0, 15.0, 32);
    assert_outward_winding(&m);
    for v in &m.vertices {
        let p = Vec3::new(v.position[0], 0.0, v.position[2]);
        assert!(p.dot(Vec3::from(v.normal)) < 0.0);
    }
}

#[test]
fn annulus_faces_up_between_radii() {
    let m = annulus(29.5, 30.5, 64);
    assert_eq!(m.triangle_count(), 128);
    assert_outward_winding(&m);
    for v in &m.vertices {
        let r = Vec3::from(v.position).length();
        assert!((29.5 - 1e-3..=30.5 + 1e-3).contains(&r));
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
    }
}

#[test]
fn flipping_twice_restores_the_mesh() {
    let m = cuboid([1.0, 2.0, 3.0]);
    let twice = m.clone().flipped().flipped();
    assert_eq!(twice.vertices, m.vertices);
    assert_eq!(twice.indices, m.indices);
}
