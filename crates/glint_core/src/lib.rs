//! Glint Core - Scene description for the Glint path tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDescription`,
//!   `CameraDescription`, `ImageSettings`, `MaterialKind`
//! - **Scene files**: JSON loading and saving
//!
//! The types here are renderer-agnostic; `glint_renderer` turns them into
//! validated spheres and a camera.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/classic.json")?;
//! println!("Loaded {} spheres at {}x{}",
//!     scene.spheres.len(),
//!     scene.image.width,
//!     scene.image.height());
//! ```

pub mod loader;
pub mod scene;

pub use loader::{
    load_scene, load_scene_from_str, save_scene, LoadError, LoadResult, MAX_IMAGE_DIMENSION,
};
pub use scene::{
    CameraDescription, ImageSettings, MaterialKind, SceneDescription, SphereDescription,
};
