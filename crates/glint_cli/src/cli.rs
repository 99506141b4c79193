use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::SceneDescription;
use glint_renderer::RenderConfig;
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render a scene of spheres with a CPU path tracer")]
pub struct Args {
    /// Scene description (JSON); the built-in four-sphere scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output file (.ppm for ASCII PPM, .png or other formats via the image crate)
    #[arg(short, long, default_value = "images/output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels (height follows the scene's aspect ratio)
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum bounce depth per camera ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Base seed for reproducible renders
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of render threads (defaults to one per core)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Also write the effective scene description to this JSON file
    #[arg(long)]
    pub write_scene: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of the scene's image settings.
    pub fn apply_overrides(&self, scene: &mut SceneDescription) {
        if let Some(width) = self.width {
            scene.image.width = width;
        }
        if let Some(samples) = self.samples_per_pixel {
            scene.image.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            scene.image.max_depth = max_depth;
        }
    }

    /// Render settings for a scene that already has overrides applied.
    pub fn render_config(&self, scene: &SceneDescription) -> RenderConfig {
        RenderConfig {
            seed: self.seed,
            threads: self.threads,
            ..RenderConfig::from(&scene.image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        assert_eq!(args.output, PathBuf::from("images/output.ppm"));
        assert!(args.scene.is_none());
        assert!(args.seed.is_none());

        let mut scene = SceneDescription::default();
        args.apply_overrides(&mut scene);
        assert_eq!(scene, SceneDescription::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "glint", "--width", "64", "-s", "8", "--max-depth", "5", "--seed", "9", "-j", "2",
            "-o", "out.png",
        ]);

        let mut scene = SceneDescription::default();
        args.apply_overrides(&mut scene);
        assert_eq!(scene.image.width, 64);
        assert_eq!(scene.image.height(), 36);

        let config = args.render_config(&scene);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.threads, Some(2));
        assert_eq!(args.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["glint", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
