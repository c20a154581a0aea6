use crate::mesh::MeshInstance;
use glam::Vec3;

/// Distance along the ray to the first hit with the sphere, if in front of
/// the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere: take the exit point
    let t = -b + sq;
    (t >= 0.0).then_some(t)
}

/// Index (into `meshes`) of the nearest mesh hit by the ray. Each mesh is
/// treated as a sphere of at least `min_radius`.
pub fn nearest_hit<'a>(
    meshes: impl IntoIterator<Item = &'a MeshInstance>,
    ray_origin: Vec3,
    ray_dir: Vec3,
    min_radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, m) in meshes.into_iter().enumerate() {
        let radius = m.pick_radius().max(min_radius);
        if let Some(t) = ray_sphere(ray_origin, ray_dir, m.position, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Pick the dominant wheel axis, so both vertical wheels and horizontal
/// trackpad swipes drive the carousel.
#[inline]
pub fn wheel_scroll_delta(delta_x: f32, delta_y: f32) -> f32 {
    if delta_x.abs() > delta_y.abs() {
        delta_x
    } else {
        delta_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_sphere_hits_front_surface() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_misses_sideways() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn ray_sphere_ignores_spheres_behind() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit_distance() {
        let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0)
            .unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn dominant_wheel_axis_wins() {
        assert_eq!(wheel_scroll_delta(0.0, 120.0), 120.0);
        assert_eq!(wheel_scroll_delta(-80.0, 10.0), -80.0);
        assert_eq!(wheel_scroll_delta(5.0, -5.0), -5.0);
    }
}
