//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over a list of spheres lit only by a sky
//! gradient. Rows are rendered in parallel with rayon, each with its own
//! seeded random generator.

mod camera;
mod framebuffer;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;

pub use camera::Camera;
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable, World};
pub use material::{reflect, refract, scatter, Color, Scatter, DIFFUSE_ATTENUATION, METAL_FUZZ};
pub use output::{color_to_rgb, linear_to_gamma, save_image, write_ppm, OutputError};
pub use renderer::{
    radiance, render, render_pixel, sky_gradient, RenderConfig, RenderError, RenderResult, T_MIN,
};
pub use sampling::{gen_f64, random_vec01, row_rng};
pub use sphere::{PrimitiveError, Sphere};

/// Re-export scene description and math types
pub use glint_core::{MaterialKind, SceneDescription};
pub use glint_math::{Interval, Ray, Vec3};
