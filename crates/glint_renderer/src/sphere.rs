//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::Color;
use glint_core::{MaterialKind, SphereDescription};
use glint_math::{Interval, Ray, Vec3};
use thiserror::Error;

/// Rejected sphere parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("refractive index must be at least 1.0, got {0}")]
    InvalidRefractiveIndex(f64),
}

/// A sphere primitive with its surface parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    color: Color,
    reflectivity: f64,
    refractive_index: f64,
    kind: MaterialKind,
}

impl Sphere {
    /// Create a new sphere, rejecting parameters that would produce NaNs
    /// during rendering.
    pub fn new(
        center: Vec3,
        radius: f64,
        color: Color,
        reflectivity: f64,
        refractive_index: f64,
        kind: MaterialKind,
    ) -> Result<Self, PrimitiveError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PrimitiveError::InvalidRadius(radius));
        }
        if !(refractive_index >= 1.0) {
            return Err(PrimitiveError::InvalidRefractiveIndex(refractive_index));
        }

        Ok(Self {
            center,
            radius,
            color,
            reflectivity,
            refractive_index,
            kind,
        })
    }

    /// Diffuse sphere with the given albedo.
    pub fn diffuse(center: Vec3, radius: f64, albedo: Color) -> Result<Self, PrimitiveError> {
        Self::new(center, radius, albedo, 0.0, 1.0, MaterialKind::Diffuse)
    }

    /// Metal sphere. `reflectivity` is stored but not used when scattering.
    pub fn metal(
        center: Vec3,
        radius: f64,
        albedo: Color,
        reflectivity: f64,
    ) -> Result<Self, PrimitiveError> {
        Self::new(center, radius, albedo, reflectivity, 1.0, MaterialKind::Metal)
    }

    /// Glass sphere with the given index of refraction.
    pub fn glass(center: Vec3, radius: f64, refractive_index: f64) -> Result<Self, PrimitiveError> {
        Self::new(center, radius, Color::ONE, 0.0, refractive_index, MaterialKind::Glass)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Albedo for diffuse and metal surfaces.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }
}

impl TryFrom<&SphereDescription> for Sphere {
    type Error = PrimitiveError;

    fn try_from(desc: &SphereDescription) -> Result<Self, Self::Error> {
        Self::new(
            desc.center,
            desc.radius,
            desc.color,
            desc.reflectivity,
            desc.refractive_index,
            desc.material,
        )
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first, then the far one
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            sphere: self,
        })
    }
}
