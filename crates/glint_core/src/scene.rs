//! Scene description types.
//!
//! A scene is a list of spheres, a pinhole camera and the image settings the
//! render should use. Every field has a default so partial JSON files work.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// How a sphere's surface interacts with light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Rough surface scattering around the normal
    #[default]
    Diffuse,
    /// Specular reflector with a small fixed fuzz
    Metal,
    /// Colorless refractive dielectric
    Glass,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MaterialKind::Diffuse => "diffuse",
            MaterialKind::Metal => "metal",
            MaterialKind::Glass => "glass",
        };
        f.write_str(name)
    }
}

/// A sphere as written in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    /// Center point
    pub center: Vec3,

    /// Radius, must be positive
    pub radius: f64,

    /// Albedo (RGB, 0-1)
    pub color: Vec3,

    /// Stored per sphere; metal scattering does not consult it
    #[serde(default)]
    pub reflectivity: f64,

    /// Index of refraction, must be at least 1.0
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f64,

    /// Surface kind
    #[serde(default)]
    pub material: MaterialKind,
}

fn default_refractive_index() -> f64 {
    1.0
}

impl SphereDescription {
    /// Create a diffuse sphere description.
    pub fn diffuse(center: Vec3, radius: f64, albedo: Vec3) -> Self {
        Self {
            center,
            radius,
            color: albedo,
            reflectivity: 0.0,
            refractive_index: 1.0,
            material: MaterialKind::Diffuse,
        }
    }

    /// Create a metal sphere description.
    pub fn metal(center: Vec3, radius: f64, albedo: Vec3, reflectivity: f64) -> Self {
        Self {
            reflectivity,
            material: MaterialKind::Metal,
            ..Self::diffuse(center, radius, albedo)
        }
    }

    /// Create a glass sphere description.
    pub fn glass(center: Vec3, radius: f64, color: Vec3, refractive_index: f64) -> Self {
        Self {
            refractive_index,
            material: MaterialKind::Glass,
            ..Self::diffuse(center, radius, color)
        }
    }
}

/// Fixed pinhole camera looking down -Z.
///
/// The image plane sits `focal_length` in front of `origin`, spanning
/// `horizontal` by `vertical`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub origin: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub focal_length: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            horizontal: Vec3::new(4.0, 0.0, 0.0),
            vertical: Vec3::new(0.0, 2.25, 0.0),
            focal_length: 1.0,
        }
    }
}

/// Output resolution and sampling quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Image width in pixels
    pub width: u32,

    /// Width divided by height
    pub aspect_ratio: f64,

    /// Samples averaged per pixel
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per camera ray
    pub max_depth: u32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 50,
            max_depth: 25,
        }
    }
}

impl ImageSettings {
    /// Image height in pixels, truncated from `width / aspect_ratio`.
    ///
    /// Saturates for extreme aspect ratios; `validate` rejects those.
    pub fn height(&self) -> u32 {
        (self.width as f64 / self.aspect_ratio) as u32
    }
}

/// A complete scene: image settings, camera and spheres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub image: ImageSettings,

    #[serde(default)]
    pub camera: CameraDescription,

    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl Default for SceneDescription {
    /// Ground plane plus a diffuse, a glass and a metal sphere in a row.
    fn default() -> Self {
        Self {
            image: ImageSettings::default(),
            camera: CameraDescription::default(),
            spheres: vec![
                SphereDescription::diffuse(
                    Vec3::new(0.0, -100.5, -1.0),
                    100.0,
                    Vec3::new(0.8, 0.8, 0.0),
                ),
                SphereDescription::diffuse(
                    Vec3::new(0.0, 0.0, -1.0),
                    0.5,
                    Vec3::new(0.1, 0.2, 0.5),
                ),
                SphereDescription::glass(
                    Vec3::new(-1.0, 0.0, -1.0),
                    0.5,
                    Vec3::new(0.8, 0.8, 0.8),
                    1.5,
                ),
                SphereDescription::metal(
                    Vec3::new(1.0, 0.0, -1.0),
                    0.5,
                    Vec3::new(0.8, 0.6, 0.2),
                    0.8,
                ),
            ],
        }
    }
}

impl SceneDescription {
    /// Count spheres of the given kind.
    pub fn count_of(&self, kind: MaterialKind) -> usize {
        self.spheres.iter().filter(|s| s.material == kind).count()
    }
}
