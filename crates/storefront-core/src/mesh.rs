//! Mesh descriptions and CPU-side geometry generation.
//!
//! A [`MeshInstance`] is the concrete visual placed in a view's scene; the
//! renderer turns each distinct [`Shape`] into one vertex buffer and draws
//! instances of it.

use crate::scene::{Visual, VisualId};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Flat disc facing +z.
    Circle { radius: f32, segments: u32 },
    /// Octahedron projected onto a sphere; `detail` subdivides each face.
    Octahedron { radius: f32, detail: u32 },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Shape {
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere {
            radius,
            width_segments: 32,
            height_segments: 16,
        }
    }

    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Circle { radius, .. }
            | Shape::Octahedron { radius, .. }
            | Shape::Sphere { radius, .. } => radius,
        }
    }
}

/// Lighting model; the renderer packs this into the instance color alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Unlit flat color.
    Basic,
    /// Diffuse response to the view's directional light.
    Lambert,
}

impl Shading {
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            Shading::Basic => 0.0,
            Shading::Lambert => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshInstance {
    pub id: VisualId,
    pub name: &'static str,
    pub shape: Shape,
    pub shading: Shading,
    pub color: [f32; 3],
    pub scale: f32,
    pub position: Vec3,
}

impl MeshInstance {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.position)
    }

    /// World-space radius used for ray picking.
    #[inline]
    pub fn pick_radius(&self) -> f32 {
        self.shape.bounding_radius() * self.scale
    }
}

impl Visual for MeshInstance {
    fn id(&self) -> VisualId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn translate_x(&mut self, dx: f32) {
        // instances are never rotated, so local x is world x
        self.position.x += dx;
    }
}

/// Non-indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push(&mut self, p: Vec3, n: Vec3) {
        self.positions.push(p.to_array());
        self.normals.push(n.to_array());
    }

    fn push_flat(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let n = (b - a).cross(c - a).normalize_or_zero();
        self.push(a, n);
        self.push(b, n);
        self.push(c, n);
    }
}

pub fn build_geometry(shape: &Shape) -> Geometry {
    match *shape {
        Shape::Circle { radius, segments } => circle(radius, segments.max(3)),
        Shape::Octahedron { radius, detail } => octahedron(radius, detail),
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere(radius, width_segments.max(3), height_segments.max(2)),
    }
}

fn circle(radius: f32, segments: u32) -> Geometry {
    let mut g = Geometry::default();
    let step = std::f32::consts::TAU / segments as f32;
    for s in 0..segments {
        let a0 = s as f32 * step;
        let a1 = a0 + step;
        g.push(Vec3::ZERO, Vec3::Z);
        g.push(Vec3::new(a0.cos(), a0.sin(), 0.0) * radius, Vec3::Z);
        g.push(Vec3::new(a1.cos(), a1.sin(), 0.0) * radius, Vec3::Z);
    }
    g
}

const OCTA_VERTICES: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

const OCTA_FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

fn octahedron(radius: f32, detail: u32) -> Geometry {
    let mut g = Geometry::default();
    let cols = detail as usize + 1;
    for face in OCTA_FACES {
        let [a, b, c] = face.map(|i| OCTA_VERTICES[i]);
        // grid of points over the face, row i holds cols - i + 1 points
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let t = i as f32 / cols as f32;
            let aj = a.lerp(c, t);
            let bj = b.lerp(c, t);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let (p0, p1, p2) = if j % 2 == 0 {
                    (grid[i][k + 1], grid[i + 1][k], grid[i][k])
                } else {
                    (grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k])
                };
                let [p0, p1, p2] = [p0, p1, p2].map(|p| p.normalize() * radius);
                if detail == 0 {
                    g.push_flat(p0, p1, p2);
                } else {
                    for p in [p0, p1, p2] {
                        g.push(p, p.normalize());
                    }
                }
            }
        }
    }
    g
}

fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let mut g = Geometry::default();
    let point = |ix: u32, iy: u32| {
        let u = ix as f32 / width_segments as f32;
        let v = iy as f32 / height_segments as f32;
        let phi = u * std::f32::consts::TAU;
        let theta = v * std::f32::consts::PI;
        let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
        (n * radius, n)
    };
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = point(ix + 1, iy);
            let b = point(ix, iy);
            let c = point(ix, iy + 1);
            let d = point(ix + 1, iy + 1);
            // pole rows collapse one triangle of each quad
            if iy != 0 {
                for (p, n) in [a, b, d] {
                    g.push(p, n);
                }
            }
            if iy != height_segments - 1 {
                for (p, n) in [b, c, d] {
                    g.push(p, n);
                }
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(g: &Geometry) {
        for n in &g.normals {
            let len = Vec3::from_array(*n).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn circle_is_a_triangle_fan() {
        let g = build_geometry(&Shape::Circle {
            radius: 0.15,
            segments: 32,
        });
        assert_eq!(g.vertex_count(), 32 * 3);
        assert_unit_normals(&g);
        for p in &g.positions {
            assert!(Vec3::from_array(*p).length() <= 0.15 + 1e-6);
        }
    }

    #[test]
    fn octahedron_detail_multiplies_faces() {
        for detail in 0..5 {
            let g = build_geometry(&Shape::Octahedron {
                radius: 0.05,
                detail,
            });
            let cols = (detail + 1) as usize;
            assert_eq!(g.vertex_count(), 8 * cols * cols * 3);
            assert_unit_normals(&g);
        }
    }

    #[test]
    fn octahedron_vertices_lie_on_sphere() {
        let g = build_geometry(&Shape::Octahedron {
            radius: 0.03,
            detail: 4,
        });
        for p in &g.positions {
            assert!((Vec3::from_array(*p).length() - 0.03).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_skips_degenerate_pole_triangles() {
        let g = build_geometry(&Shape::sphere(0.4));
        assert_eq!(g.vertex_count(), (32 * (2 * 16 - 2) * 3) as usize);
        assert_unit_normals(&g);
    }

    #[test]
    fn translate_x_leaves_other_axes() {
        let mut m = MeshInstance {
            id: VisualId(0),
            name: "probe",
            shape: Shape::sphere(1.0),
            shading: Shading::Basic,
            color: [1.0; 3],
            scale: 1.0,
            position: Vec3::new(1.0, 2.0, 3.0),
        };
        m.translate_x(0.5);
        assert_eq!(m.position(), Vec3::new(1.5, 2.0, 3.0));
    }
}
