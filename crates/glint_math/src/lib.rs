//! Glint math types.
//!
//! Double-precision vectors come straight from glam; `Vec3` is the name the
//! rest of the workspace uses for points, directions and linear RGB colors.

pub use glam::{dvec3, DVec3};

/// 3D vector used for points, directions and colors.
pub type Vec3 = DVec3;

mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;
