//! Hittable trait, HitRecord and the world's nearest-hit query.

use crate::Sphere;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-sphere intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, always pointing out of the sphere
    pub normal: Vec3,
    /// The sphere that was struck
    pub sphere: &'a Sphere,
}

impl<'a> HitRecord<'a> {
    /// True when the ray travels from inside the sphere to the outside.
    #[inline]
    pub fn is_exiting(&self, ray: &Ray) -> bool {
        ray.direction().dot(self.normal) > 0.0
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// The spheres of a scene, scanned linearly for the nearest hit.
#[derive(Debug, Clone, Default)]
pub struct World {
    spheres: Vec<Sphere>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Sphere> for World {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            spheres: iter.into_iter().collect(),
        }
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for sphere in &self.spheres {
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = sphere.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}
