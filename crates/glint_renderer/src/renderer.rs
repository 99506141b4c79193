//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing bounded by a maximum depth
//! - A sky gradient as the only light source
//! - Anti-aliasing via jittered multi-sampling
//! - Row-parallel rendering on a fixed-size rayon pool

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use crate::material::scatter;
use crate::sampling::row_rng;
use crate::{Camera, Color, Framebuffer, Hittable, PrimitiveError, Sphere, World};
use glint_core::{ImageSettings, SceneDescription};
use glint_math::{Interval, Ray};
use log::{debug, info};
use rand::RngCore;
use rayon::prelude::*;
use thiserror::Error;

/// Lower bound on hit distance, keeps bounced rays off their own surface.
pub const T_MIN: f64 = 1e-3;

/// Errors that prevent a render from starting.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid sphere at index {index}: {source}")]
    InvalidPrimitive {
        index: usize,
        #[source]
        source: PrimitiveError,
    },

    #[error("image must be at least 2x2 pixels, got {width}x{height}")]
    ImageTooSmall { width: u32, height: u32 },

    #[error("samples_per_pixel must be at least 1")]
    NoSamples,

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-row generators; drawn from entropy when unset
    pub seed: Option<u64>,
    /// Worker thread count; rayon's default when unset
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&ImageSettings::default())
    }
}

impl From<&ImageSettings> for RenderConfig {
    fn from(image: &ImageSettings) -> Self {
        Self {
            samples_per_pixel: image.samples_per_pixel,
            max_depth: image.max_depth,
            seed: None,
            threads: None,
        }
    }
}

impl World {
    /// Build a world from a scene description, validating every sphere.
    pub fn from_description(scene: &SceneDescription) -> RenderResult<Self> {
        scene
            .spheres
            .iter()
            .enumerate()
            .map(|(index, desc)| {
                Sphere::try_from(desc)
                    .map_err(|source| RenderError::InvalidPrimitive { index, source })
            })
            .collect()
    }
}

/// Compute the radiance arriving along a ray.
///
/// Follows the ray through at most `depth` surface interactions. Running out
/// of depth contributes black.
pub fn radiance(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match scatter(ray, &rec, rng) {
        Some(s) => s.attenuation * radiance(&s.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Background radiance: white looking straight down, blending to sky blue
/// looking straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Render a single pixel with multi-sampling.
///
/// `j` counts rows from the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += radiance(&ray, world, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f64
}

/// Render the entire scene to a framebuffer.
///
/// Each row is one rayon task with its own generator seeded from the base
/// seed and the row index, so a seeded render is reproducible regardless of
/// thread count.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    let (width, height) = (camera.image_width(), camera.image_height());
    if config.samples_per_pixel == 0 {
        return Err(RenderError::NoSamples);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    info!(
        "Rendering {}x{} @ {} spp, max depth {} on {} threads",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        pool.current_num_threads()
    );
    debug!("Base seed: {}", seed);

    let start = Instant::now();
    let rows_done = AtomicU32::new(0);
    let progress_step = (height / 10).max(1);
    let mut image = Framebuffer::new(width, height);

    pool.install(|| {
        image
            .pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                // Framebuffer row 0 is the top; camera row 0 is the bottom
                let j = height - 1 - y as u32;
                let mut rng = row_rng(seed, j);

                for (i, pixel) in row.iter_mut().enumerate() {
                    *pixel = render_pixel(camera, world, i as u32, j, config, &mut rng);
                }

                let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                if done % progress_step == 0 {
                    debug!("{}/{} rows done", done, height);
                }
            });
    });

    let elapsed = start.elapsed();
    let samples = width as u64 * height as u64 * config.samples_per_pixel as u64;
    info!(
        "Rendered in {:.2?} ({:.0} samples/s)",
        elapsed,
        samples as f64 / elapsed.as_secs_f64().max(1e-9)
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_diffuse_world() -> World {
        [Sphere::diffuse(Vec3::new(0.0, 0.0, -1.0), 0.5, Color::new(0.1, 0.2, 0.5)).unwrap()]
            .into_iter()
            .collect()
    }

    fn classic_camera(width: u32, height: u32) -> Camera {
        let horizontal = Vec3::new(4.0, 0.0, 0.0);
        let vertical = Vec3::new(0.0, 2.25, 0.0);
        Camera::new(Vec3::ZERO, horizontal, vertical, 1.0, width, height).unwrap()
    }

    fn small_config(seed: u64) -> RenderConfig {
        RenderConfig {
            samples_per_pixel: 4,
            max_depth: 8,
            seed: Some(seed),
            threads: Some(2),
        }
    }

    #[test]
    fn test_sky_gradient() {
        let up = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::Y));
        let down = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::NEG_Y));
        let level = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)));

        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);
        assert!((down - Color::ONE).length() < 1e-12);
        assert!((level - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_miss_returns_background_within_bounds() {
        let world = World::new();
        let mut rng = StdRng::seed_from_u64(1);

        for i in 0..50 {
            let angle = i as f64 * 0.37;
            let ray = Ray::new(Vec3::ZERO, Vec3::new(angle.cos(), angle.sin() * 3.0, -1.0));
            let color = radiance(&ray, &world, 10, &mut rng);

            assert_eq!(color, sky_gradient(&ray));
            assert!((0.5..=1.0).contains(&color.x));
            assert!((0.7..=1.0).contains(&color.y));
            assert!((color.z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_depth_zero_is_black() {
        let world = single_diffuse_world();
        let mut rng = StdRng::seed_from_u64(1);

        for direction in [Vec3::NEG_Z, Vec3::Y, Vec3::new(0.3, 0.2, -1.0)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(radiance(&ray, &world, 0, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_diffuse_sphere_darker_than_sky_but_not_black() {
        let world = single_diffuse_world();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let background = sky_gradient(&ray);
        let mut rng = StdRng::seed_from_u64(99);

        let n = 2000;
        let mut sum = Color::ZERO;
        for _ in 0..n {
            sum += radiance(&ray, &world, 25, &mut rng);
        }
        let mean = sum / n as f64;

        assert!(mean.min_element() > 0.0);
        assert!(mean.x < background.x);
        assert!(mean.y < background.y);
        assert!(mean.z < background.z);
    }

    #[test]
    fn test_glass_index_one_is_invisible() {
        let world: World = [Sphere::glass(Vec3::new(0.0, 0.0, -2.0), 0.5, 1.0).unwrap()]
            .into_iter()
            .collect();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.05, 0.1, -1.0));
        let mut rng = StdRng::seed_from_u64(3);

        let color = radiance(&ray, &world, 10, &mut rng);
        assert!((color - sky_gradient(&ray)).length() < 1e-9);
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let world = single_diffuse_world();
        let camera = classic_camera(17, 9);
        let config = small_config(42);
        let mut rng = StdRng::seed_from_u64(42);

        let center = render_pixel(&camera, &world, 8, 4, &config, &mut rng);
        let corner = render_pixel(&camera, &world, 0, 8, &config, &mut rng);

        // Center pixel sees the blue-ish sphere, not the sky
        assert!(center.length() > 0.0);
        assert!(center.x < corner.x);
    }

    #[test]
    fn test_render_is_reproducible_with_seed() {
        let world = World::from_description(&SceneDescription::default()).unwrap();
        let camera = classic_camera(16, 9);

        let a = render(&camera, &world, &small_config(7)).unwrap();
        let single_thread = RenderConfig {
            threads: Some(1),
            ..small_config(7)
        };
        let b = render(&camera, &world, &single_thread).unwrap();
        let c = render(&camera, &world, &small_config(8)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.pixels.len(), 16 * 9);
    }

    #[test]
    fn test_render_empty_world_is_sky() {
        let world = World::new();
        let camera = classic_camera(8, 4);
        let image = render(&camera, &world, &small_config(1)).unwrap();

        // Top row is bluer than the bottom row
        assert!(image.get(4, 0).x < image.get(4, 3).x);
        assert!(image.pixels.iter().all(|p| (p.z - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_render_rejects_zero_samples() {
        let world = World::new();
        let config = small_config(1);

        let camera = classic_camera(4, 4);
        let no_samples = RenderConfig { samples_per_pixel: 0, ..config };
        assert!(matches!(render(&camera, &world, &no_samples), Err(RenderError::NoSamples)));
    }

    #[test]
    fn test_world_from_description_reports_bad_index() {
        let mut scene = SceneDescription::default();
        scene.spheres[2].refractive_index = 0.5;

        match World::from_description(&scene) {
            Err(RenderError::InvalidPrimitive { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source, PrimitiveError::InvalidRefractiveIndex(0.5));
            }
            other => panic!("expected InvalidPrimitive, got {:?}", other),
        }
    }
}
