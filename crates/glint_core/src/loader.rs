//! JSON scene files.
//!
//! A scene file is a JSON object with optional `image`, `camera` and
//! `spheres` keys. Vectors are written as `[x, y, z]` arrays:
//!
//! ```json
//! {
//!   "image": { "width": 200, "samples_per_pixel": 16 },
//!   "spheres": [
//!     { "center": [0, 0, -1], "radius": 0.5, "color": [0.1, 0.2, 0.5] },
//!     { "center": [1, 0, -1], "radius": 0.5, "color": [0.8, 0.6, 0.2],
//!       "material": "metal", "reflectivity": 0.8 }
//!   ]
//! }
//! ```
//!
//! Sphere parameters are checked when the renderer builds its world; the
//! loader only checks the image settings and the camera.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::scene::{CameraDescription, ImageSettings, SceneDescription};

/// Largest accepted image width or height, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 1 << 16;

/// Errors that can occur while loading or saving a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid image settings: {0}")]
    InvalidImage(String),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

impl ImageSettings {
    /// Check that the settings describe a renderable image.
    ///
    /// Pixel coordinates are normalized by `width - 1` and `height - 1`, so
    /// both dimensions need at least two pixels. Both are also capped at
    /// [`MAX_IMAGE_DIMENSION`].
    pub fn validate(&self) -> LoadResult<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(LoadError::InvalidImage(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }

        // Computed unsaturated; `height()` would clamp to u32::MAX
        let height = self.width as f64 / self.aspect_ratio;
        if !height.is_finite() || height >= (MAX_IMAGE_DIMENSION + 1) as f64 {
            return Err(LoadError::InvalidImage(format!(
                "image height must be at most {} pixels, got {:.0} (aspect ratio {})",
                MAX_IMAGE_DIMENSION, height, self.aspect_ratio
            )));
        }
        if self.width > MAX_IMAGE_DIMENSION {
            return Err(LoadError::InvalidImage(format!(
                "image width must be at most {} pixels, got {}",
                MAX_IMAGE_DIMENSION, self.width
            )));
        }
        if self.width < 2 || self.height() < 2 {
            return Err(LoadError::InvalidImage(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.width,
                self.height()
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(LoadError::InvalidImage(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl CameraDescription {
    /// Check that the camera spans a real image plane at a positive distance.
    pub fn validate(&self) -> LoadResult<()> {
        for (name, v) in [
            ("origin", self.origin),
            ("horizontal", self.horizontal),
            ("vertical", self.vertical),
        ] {
            if !v.is_finite() {
                return Err(LoadError::InvalidCamera(format!(
                    "{} must be finite, got {}",
                    name, v
                )));
            }
        }
        if self.horizontal.length_squared() == 0.0 || self.vertical.length_squared() == 0.0 {
            return Err(LoadError::InvalidCamera(
                "horizontal and vertical extents must be non-zero".to_string(),
            ));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(LoadError::InvalidCamera(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        Ok(())
    }
}

impl SceneDescription {
    /// Validate the image settings and the camera.
    pub fn validate(&self) -> LoadResult<()> {
        self.image.validate()?;
        self.camera.validate()
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    debug!("Loading scene from {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;

    if scene.spheres.is_empty() {
        warn!("Scene has no spheres, only the sky will be visible");
    }
    debug!(
        "Parsed scene: {} spheres, {}x{} @ {} spp",
        scene.spheres.len(),
        scene.image.width,
        scene.image.height(),
        scene.image.samples_per_pixel
    );

    Ok(scene)
}

/// Write a scene description to a pretty-printed JSON file.
pub fn save_scene(scene: &SceneDescription, path: impl AsRef<Path>) -> LoadResult<()> {
    let json = serde_json::to_string_pretty(scene)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
