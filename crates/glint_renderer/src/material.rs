//! Surface scattering for the three material kinds.

use crate::hittable::HitRecord;
use crate::sampling::random_vec01;
use glint_core::MaterialKind;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear RGB, may exceed 1.0 before tone mapping)
pub type Color = Vec3;

/// Fraction of the albedo a diffuse bounce keeps.
pub const DIFFUSE_ATTENUATION: f64 = 0.5;

/// Scale of the random offset added to metal reflections.
pub const METAL_FUZZ: f64 = 0.05;

/// Result of scattering a ray off a surface.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Component-wise factor applied to the radiance carried by `scattered`
    pub attenuation: Color,
    /// Continuation ray leaving the hit point
    pub scattered: Ray,
}

/// Scatter an incoming ray off the struck sphere's surface.
///
/// Returns `None` if the ray is absorbed. None of the current material kinds
/// absorb, but the integrator treats absorption as black.
pub fn scatter(ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
    let sphere = rec.sphere;

    match sphere.kind() {
        MaterialKind::Diffuse => {
            let mut direction = rec.normal + random_vec01(rng);

            // Catch degenerate scatter direction
            if direction.length_squared() < 1e-16 {
                direction = rec.normal;
            }

            Some(Scatter {
                attenuation: DIFFUSE_ATTENUATION * sphere.color(),
                scattered: Ray::new(rec.p, direction),
            })
        }
        MaterialKind::Metal => {
            let reflected = reflect(ray_in.direction().normalize(), rec.normal);
            let direction = reflected + METAL_FUZZ * random_vec01(rng);

            Some(Scatter {
                attenuation: sphere.color(),
                scattered: Ray::new(rec.p, direction),
            })
        }
        MaterialKind::Glass => {
            let unit_direction = ray_in.direction().normalize();
            let exiting = rec.is_exiting(ray_in);

            let (refraction_ratio, normal) = if exiting {
                (sphere.refractive_index(), -rec.normal)
            } else {
                (1.0 / sphere.refractive_index(), rec.normal)
            };

            // Total internal reflection falls back to a mirror bounce
            let direction = refract(unit_direction, normal, refraction_ratio)
                .unwrap_or_else(|| reflect(unit_direction, normal));

            Some(Scatter {
                attenuation: Color::ONE,
                scattered: Ray::new(rec.p, direction),
            })
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface whose normal `n` faces the
/// incoming side.
///
/// Returns `None` on total internal reflection.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Option<Vec3> {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let k = 1.0 - r_out_perp.length_squared();
    if k < 0.0 {
        return None;
    }
    let r_out_parallel = -k.sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}
