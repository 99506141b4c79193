//! Camera for ray generation.

use crate::renderer::{RenderError, RenderResult};
use crate::sampling::gen_f64;
use glint_core::{CameraDescription, ImageSettings};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Fixed pinhole camera with an axis-aligned image plane.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings, both at least 2
    image_width: u32,
    image_height: u32,

    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Vec3,
}

impl Camera {
    /// Create a camera whose image plane sits `focal_length` down -Z from
    /// `origin`, centered on the view axis.
    ///
    /// Pixel coordinates are normalized by `width - 1` and `height - 1`, so
    /// both dimensions must be at least 2.
    pub fn new(
        origin: Vec3,
        horizontal: Vec3,
        vertical: Vec3,
        focal_length: f64,
        image_width: u32,
        image_height: u32,
    ) -> RenderResult<Self> {
        if image_width < 2 || image_height < 2 {
            return Err(RenderError::ImageTooSmall {
                width: image_width,
                height: image_height,
            });
        }

        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Ok(Self {
            image_width,
            image_height,
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        })
    }

    /// Build the camera for a scene description.
    pub fn from_description(
        camera: &CameraDescription,
        image: &ImageSettings,
    ) -> RenderResult<Self> {
        Self::new(
            camera.origin,
            camera.horizontal,
            camera.vertical,
            camera.focal_length,
            image.width,
            image.height(),
        )
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Ray through normalized image-plane coordinates, (0, 0) at the lower left.
    #[inline]
    pub fn ray_through(&self, u: f64, v: f64) -> Ray {
        let target = self.lower_left_corner + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, target - self.origin)
    }

    /// Generate a jittered ray for pixel (i, j), with j = 0 the bottom row.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let u = (i as f64 + gen_f64(rng)) / (self.image_width - 1) as f64;
        let v = (j as f64 + gen_f64(rng)) / (self.image_height - 1) as f64;
        self.ray_through(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn default_camera() -> Camera {
        Camera::from_description(&CameraDescription::default(), &ImageSettings::default())
            .unwrap()
    }

    #[test]
    fn test_default_camera_geometry() {
        let camera = default_camera();

        assert_eq!(camera.image_width(), 400);
        assert_eq!(camera.image_height(), 225);

        let ray = camera.ray_through(0.0, 0.0);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert_eq!(ray.direction(), Vec3::new(-2.0, -1.125, -1.0));
    }

    #[test]
    fn test_ray_through_corners_and_center() {
        let camera = default_camera();

        assert_eq!(camera.ray_through(1.0, 1.0).direction(), Vec3::new(2.0, 1.125, -1.0));
        assert_eq!(camera.ray_through(0.5, 0.5).direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_get_ray_jitter_stays_within_pixel_footprint() {
        let horizontal = Vec3::new(2.0, 0.0, 0.0);
        let vertical = Vec3::new(0.0, 2.0, 0.0);
        let camera = Camera::new(Vec3::ZERO, horizontal, vertical, 1.0, 11, 11).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        // Pixel (5, 5) maps to u, v in [0.5, 0.6)
        for _ in 0..256 {
            let ray = camera.get_ray(5, 5, &mut rng);
            let d = ray.direction();
            assert_eq!(ray.origin(), Vec3::ZERO);
            assert_eq!(d.z, -1.0);
            assert!(d.x >= 0.0 && d.x < 0.2 + 1e-12);
            assert!(d.y >= 0.0 && d.y < 0.2 + 1e-12);
        }
    }

    #[test]
    fn test_get_ray_bottom_row_points_down() {
        let camera = default_camera();
        let mut rng = StdRng::seed_from_u64(7);

        let bottom = camera.get_ray(200, 0, &mut rng);
        let top = camera.get_ray(200, camera.image_height() - 1, &mut rng);
        assert!(bottom.direction().y < 0.0);
        assert!(top.direction().y > 0.0);
    }

    #[test]
    fn test_camera_rejects_degenerate_resolution() {
        for (width, height) in [(0, 0), (0, 10), (1, 10), (10, 1)] {
            let result = Camera::new(Vec3::ZERO, Vec3::X, Vec3::Y, 1.0, width, height);
            assert!(matches!(
                result,
                Err(RenderError::ImageTooSmall { width: w, height: h }) if w == width && h == height
            ));
        }
        assert!(Camera::new(Vec3::ZERO, Vec3::X, Vec3::Y, 1.0, 2, 2).is_ok());
    }
}
