//! Ray-based piece picking.
//!
//! A screen ray is transformed into each piece's local space with the
//! inverse model matrix and tested against the piece's own unit box, so
//! picking follows pieces through slice sweeps and manual drags for free.

use glam::{Mat4, Vec3};

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Result of picking a piece
#[derive(Clone, Copy, Debug)]
pub struct PieceHit {
    pub id: usize,
    /// Ray parameter at the hit point (world units for a unit direction)
    pub distance: f32,
}

/// Half extent of the piece cube in its local space (mesh spans ±0.5)
const HALF_EXTENT: f32 = 0.5;

/// Ray vs. axis-aligned unit box in local space, slab method.
/// Returns the ray parameter of the nearest hit in front of the origin.
fn ray_unit_box(origin: Vec3, direction: Vec3) -> Option<f32> {
    let inv_dir = Vec3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z);

    let t1 = (-HALF_EXTENT - origin.x) * inv_dir.x;
    let t2 = (HALF_EXTENT - origin.x) * inv_dir.x;
    let t3 = (-HALF_EXTENT - origin.y) * inv_dir.y;
    let t4 = (HALF_EXTENT - origin.y) * inv_dir.y;
    let t5 = (-HALF_EXTENT - origin.z) * inv_dir.z;
    let t6 = (HALF_EXTENT - origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Test a world-space ray against one piece's model transform.
///
/// The ray parameter is preserved by the affine transform, so distances
/// from different pieces stay comparable.
pub fn ray_piece(ray: &Ray, model: &Mat4) -> Option<f32> {
    let inv = model.inverse();
    let local_origin = inv.transform_point3(ray.origin);
    let local_dir = inv.transform_vector3(ray.direction);
    ray_unit_box(local_origin, local_dir)
}

/// Pick the nearest piece hit by the ray, if any
pub fn pick_piece(ray: &Ray, models: &[(usize, Mat4)]) -> Option<PieceHit> {
    let mut best: Option<PieceHit> = None;

    for (id, model) in models {
        if let Some(distance) = ray_piece(ray, model) {
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(PieceHit { id: *id, distance });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    #[test]
    fn ray_hits_box_at_origin() {
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = ray_piece(&r, &Mat4::IDENTITY).expect("should hit");
        assert!((hit - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_box() {
        let r = ray(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(ray_piece(&r, &Mat4::IDENTITY).is_none());
    }

    #[test]
    fn translated_box_is_hit_in_world_space() {
        let model = Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0));
        let r = ray(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = ray_piece(&r, &model).expect("should hit");
        assert!((hit - 4.5).abs() < 1e-5);
    }

    #[test]
    fn scaled_box_keeps_world_distance() {
        // Shrunken piece: surface moves from 0.5 to 0.25 in world units.
        let model = Mat4::from_scale(Vec3::splat(0.5));
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = ray_piece(&r, &model).expect("should hit");
        assert!((hit - 4.75).abs() < 1e-5);
    }

    #[test]
    fn pick_prefers_the_nearer_piece() {
        let models = vec![
            (0, Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0))),
            (1, Mat4::from_translation(Vec3::ZERO)),
        ];
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = pick_piece(&r, &models).expect("should hit");
        assert_eq!(hit.id, 1);
        assert!((hit.distance - 4.5).abs() < 1e-5);
    }

    #[test]
    fn pick_returns_none_when_everything_is_missed() {
        let models = vec![(0, Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)))];
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(pick_piece(&r, &models).is_none());
    }

    #[test]
    fn origin_inside_box_hits_the_exit_face() {
        let r = ray(Vec3::ZERO, Vec3::X);
        let hit = ray_piece(&r, &Mat4::IDENTITY).expect("should hit");
        assert!((hit - 0.5).abs() < 1e-5);
    }
}
