//! Indexed triangle meshes for the sixteen geometry templates.
//!
//! Templates are built once at startup and shared by every shape instance that
//! references them. Vertex layout and segment counts follow the usual
//! parametric primitives (box, circle, cylinder, polyhedra, sphere, torus...)
//! so a template index means the same outline everywhere.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub const TEMPLATE_COUNT: usize = 16;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Largest distance of any vertex from the local origin.
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| Vec3::from(*p).length())
            .fold(0.0, f32::max)
    }

    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

#[derive(Clone, Debug)]
pub struct GeometryTemplate {
    pub name: &'static str,
    pub mesh: Mesh,
}

/// All templates in their fixed order; the position in this list is the
/// `choice` index handed to the shader.
pub fn templates() -> Vec<GeometryTemplate> {
    let t = |name: &'static str, mesh: Mesh| GeometryTemplate { name, mesh };
    vec![
        t("box", box_mesh(50.0, 50.0, 50.0)),
        t("circle", circle(1.0, 8)),
        t("circle_wide", circle(3.0, 8)),
        t("cone", cylinder(0.0, 1.0, 1.0, 8)),
        t("cylinder", cylinder(1.0, 1.0, 1.0, 8)),
        t("dodecahedron", dodecahedron(50.0)),
        t("icosahedron", icosahedron(50.0)),
        t("octahedron", octahedron(50.0)),
        t("plane", plane(20.0, 20.0)),
        t("ring", ring(40.0, 1.0, 8)),
        t("ring_triangle", ring(40.0, 60.0, 3)),
        t("sphere", sphere(1.0, 8, 6, 0.0, TAU, 0.0, PI)),
        t("sphere_shard", sphere(50.0, 3, 2, 0.0, TAU, 1.0, TAU)),
        t("tetrahedron", tetrahedron(50.0)),
        t("torus", torus(50.0, 0.4, 8, 6, TAU)),
        t("torus_knot", torus_knot(50.0, 0.4, 64, 8, 2.0, 3.0)),
    ]
}

pub fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = Mesh::default();
    for i in 0..8u32 {
        mesh.positions.push([
            if i & 1 != 0 { hx } else { -hx },
            if i & 2 != 0 { hy } else { -hy },
            if i & 4 != 0 { hz } else { -hz },
        ]);
    }
    // +X, -X, +Y, -Y, +Z, -Z
    for [a, b, c, d] in [
        [1, 3, 7, 5],
        [0, 4, 6, 2],
        [2, 6, 7, 3],
        [0, 1, 5, 4],
        [4, 5, 7, 6],
        [0, 2, 3, 1],
    ] {
        mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    mesh
}

pub fn circle(radius: f32, segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.positions.push([0.0, 0.0, 0.0]);
    for s in 0..=segments {
        let theta = s as f32 / segments as f32 * TAU;
        mesh.positions
            .push([radius * theta.cos(), radius * theta.sin(), 0.0]);
    }
    for i in 1..=segments {
        mesh.indices.extend_from_slice(&[i, i + 1, 0]);
    }
    mesh
}

/// Closed cylinder; a zero top radius gives a cone (no top cap).
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial: u32) -> Mesh {
    let mut mesh = Mesh::default();
    let half = height * 0.5;
    let row = radial + 1;
    for (y, r) in [(half, radius_top), (-half, radius_bottom)] {
        for x in 0..=radial {
            let theta = x as f32 / radial as f32 * TAU;
            mesh.positions.push([r * theta.sin(), y, r * theta.cos()]);
        }
    }
    for x in 0..radial {
        mesh.push_quad(x, x + row, x + 1 + row, x + 1);
    }
    for (y, r, top) in [(half, radius_top, true), (-half, radius_bottom, false)] {
        if r <= 0.0 {
            continue;
        }
        let center = mesh.positions.len() as u32;
        mesh.positions.push([0.0, y, 0.0]);
        let start = center + 1;
        for x in 0..=radial {
            let theta = x as f32 / radial as f32 * TAU;
            mesh.positions.push([r * theta.sin(), y, r * theta.cos()]);
        }
        for x in 0..radial {
            let (a, b) = (start + x, start + x + 1);
            if top {
                mesh.indices.extend_from_slice(&[a, b, center]);
            } else {
                mesh.indices.extend_from_slice(&[b, a, center]);
            }
        }
    }
    mesh
}

pub fn plane(width: f32, height: f32) -> Mesh {
    let (hx, hy) = (width * 0.5, height * 0.5);
    Mesh {
        positions: vec![
            [-hx, hy, 0.0],
            [hx, hy, 0.0],
            [-hx, -hy, 0.0],
            [hx, -hy, 0.0],
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// Flat annulus with a single radial band.
pub fn ring(inner: f32, outer: f32, theta_segments: u32) -> Mesh {
    let mut mesh = Mesh::default();
    for r in [inner, outer] {
        for i in 0..=theta_segments {
            let theta = i as f32 / theta_segments as f32 * TAU;
            mesh.positions.push([r * theta.cos(), r * theta.sin(), 0.0]);
        }
    }
    let row = theta_segments + 1;
    for i in 0..theta_segments {
        mesh.push_quad(i, i + row, i + row + 1, i + 1);
    }
    mesh
}

pub fn sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    phi_start: f32,
    phi_length: f32,
    theta_start: f32,
    theta_length: f32,
) -> Mesh {
    let mut mesh = Mesh::default();
    let theta_end = (theta_start + theta_length).min(PI);
    let row = width_segments + 1;
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = theta_start + v * theta_length;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = phi_start + u * phi_length;
            mesh.positions.push([
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ]);
        }
    }
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 || theta_start > 0.0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 || theta_end < PI {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32, arc: f32) -> Mesh {
    let mut mesh = Mesh::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * arc;
            let ring_r = radius + tube * v.cos();
            mesh.positions
                .push([ring_r * u.cos(), ring_r * u.sin(), tube * v.sin()]);
        }
    }
    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}

pub fn torus_knot(radius: f32, tube: f32, tubular: u32, radial: u32, p: f32, q: f32) -> Mesh {
    let curve = |u: f32| {
        let qu = q / p * u;
        let cs = qu.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * qu.sin() * 0.5,
        )
    };
    let mut mesh = Mesh::default();
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);
        let t = p2 - p1;
        let b = t.cross(p2 + p1);
        let n = b.cross(t).normalize_or_zero();
        let b = b.normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            mesh.positions.push((p1 + n * cx + b * cy).to_array());
        }
    }
    let row = radial + 1;
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.push_quad(a, b, c, d);
        }
    }
    mesh
}

fn polyhedron(vertices: &[[f32; 3]], indices: &[u32], radius: f32) -> Mesh {
    Mesh {
        positions: vertices
            .iter()
            .map(|v| (Vec3::from(*v).normalize() * radius).to_array())
            .collect(),
        indices: indices.to_vec(),
    }
}

pub fn tetrahedron(radius: f32) -> Mesh {
    polyhedron(
        &[
            [1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0],
        ],
        &[2, 1, 0, 0, 3, 2, 1, 3, 0, 2, 3, 1],
        radius,
    )
}

pub fn octahedron(radius: f32) -> Mesh {
    polyhedron(
        &[
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
        ],
        &[
            0, 2, 4, 0, 4, 3, 0, 3, 5, 0, 5, 2, 1, 2, 5, 1, 5, 3, 1, 3, 4, 1, 4, 2,
        ],
        radius,
    )
}

pub fn icosahedron(radius: f32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    polyhedron(
        &[
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ],
        &[
            0, 11, 5, 0, 5, 1, 0, 1, 7, 0, 7, 10, 0, 10, 11, 1, 5, 9, 5, 11, 4, 11, 10, 2, 10,
            7, 6, 7, 1, 8, 3, 9, 4, 3, 4, 2, 3, 2, 6, 3, 6, 8, 3, 8, 9, 4, 9, 5, 2, 4, 11, 6, 2,
            10, 8, 6, 7, 9, 8, 1,
        ],
        radius,
    )
}

pub fn dodecahedron(radius: f32) -> Mesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let r = 1.0 / t;
    polyhedron(
        &[
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [0.0, -r, -t],
            [0.0, -r, t],
            [0.0, r, -t],
            [0.0, r, t],
            [-r, -t, 0.0],
            [-r, t, 0.0],
            [r, -t, 0.0],
            [r, t, 0.0],
            [-t, 0.0, -r],
            [t, 0.0, -r],
            [-t, 0.0, r],
            [t, 0.0, r],
        ],
        &[
            3, 11, 7, 3, 7, 15, 3, 15, 13, 7, 19, 17, 7, 17, 6, 7, 6, 15, 17, 4, 8, 17, 8, 10,
            17, 10, 6, 8, 0, 16, 8, 16, 2, 8, 2, 10, 0, 12, 1, 0, 1, 18, 0, 18, 16, 6, 10, 2, 6,
            2, 13, 6, 13, 15, 2, 16, 18, 2, 18, 3, 2, 3, 13, 18, 1, 9, 18, 9, 11, 18, 11, 3, 4,
            14, 12, 4, 12, 0, 4, 0, 8, 11, 9, 5, 11, 5, 19, 11, 19, 7, 19, 5, 14, 19, 14, 4, 19,
            4, 17, 1, 12, 14, 1, 14, 5, 1, 5, 9,
        ],
        radius,
    )
}
