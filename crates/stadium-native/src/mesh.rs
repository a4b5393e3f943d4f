// Indexed triangle meshes for the bowl. Faces wind counter-clockwise when
// seen from the side their normals point to.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let b = self.base();
        for c in corners {
            self.vertices.push(Vertex::new(c, normal));
        }
        self.indices.extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
    }

    /// Turn the mesh inside out.
    pub fn flipped(mut self) -> Self {
        for v in &mut self.vertices {
            v.normal = (-Vec3::from(v.normal)).to_array();
        }
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Box centred on the origin with `size = [width, height, depth]`.
pub fn cuboid(size: [f32; 3]) -> Mesh {
    let half = Vec3::from(size) * 0.5;
    let faces = [
        (Vec3::X, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::Z, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y),
        (Vec3::Y, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::Z),
    ];
    let mut mesh = Mesh::default();
    for (n, v) in faces {
        let u = v.cross(n);
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .map(|(su, sv)| (n + u * su + v * sv) * half);
        mesh.push_quad(corners, n);
    }
    mesh
}

#[inline]
fn ring_point(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Side wall of a (possibly tapered) cylinder centred on the origin.
fn cylinder_side(mesh: &mut Mesh, radius_top: f32, radius_bottom: f32, height: f32, segments: u32) {
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let mid = 0.5 * (a0 + a1);
        let normal = Vec3::new(mid.cos(), slope, mid.sin()).normalize();
        let b0 = ring_point(radius_bottom, a0, -half);
        let b1 = ring_point(radius_bottom, a1, -half);
        let t0 = ring_point(radius_top, a0, half);
        let t1 = ring_point(radius_top, a1, half);
        mesh.push_quad([b1, b0, t0, t1], normal);
    }
}

/// Flat disc cap facing +Y (`up`) or -Y.
fn cap(mesh: &mut Mesh, radius: f32, y: f32, segments: u32, up: bool) {
    let normal = if up { Vec3::Y } else { Vec3::NEG_Y };
    let centre = mesh.base();
    mesh.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * TAU;
        mesh.vertices.push(Vertex::new(ring_point(radius, a, y), normal));
    }
    for i in 0..segments {
        let p0 = centre + 1 + i;
        let p1 = p0 + 1;
        if up {
            mesh.indices.extend_from_slice(&[centre, p1, p0]);
        } else {
            mesh.indices.extend_from_slice(&[centre, p0, p1]);
        }
    }
}

/// Closed cylinder (or frustum) centred on the origin, axis along Y.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    cylinder_side(&mut mesh, radius_top, radius_bottom, height, segments);
    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, height * 0.5, segments, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, -height * 0.5, segments, false);
    }
    mesh
}

/// Open tube visible only from inside, so the near side of an enclosing wall
/// is culled and the bowl stays in view.
pub fn inner_tube(radius: f32, height: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    cylinder_side(&mut mesh, radius, radius, height, segments);
    mesh.flipped()
}

/// Flat ring in the XZ plane facing +Y.
pub fn annulus(inner: f32, outer: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * TAU;
        let a1 = (i + 1) as f32 / segments as f32 * TAU;
        let b = mesh.base();
        for p in [
            ring_point(inner, a0, 0.0),
            ring_point(outer, a0, 0.0),
            ring_point(outer, a1, 0.0),
            ring_point(inner, a1, 0.0),
        ] {
            mesh.vertices.push(Vertex::new(p, Vec3::Y));
        }
        // inner0, outer1, outer0 / inner0, inner1, outer1
        mesh.indices.extend_from_slice(&[b, b + 2, b + 1, b, b + 3, b + 2]);
    }
    mesh
}
