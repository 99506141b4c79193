use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, save_scene, MaterialKind, SceneDescription};
use glint_renderer::{render, save_image, Camera, World};
use log::{debug, info};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneDescription::default(),
    };
    args.apply_overrides(&mut scene);
    scene.validate().context("Invalid scene settings")?;

    info!(
        "Scene: {} spheres ({} diffuse, {} metal, {} glass)",
        scene.spheres.len(),
        scene.count_of(MaterialKind::Diffuse),
        scene.count_of(MaterialKind::Metal),
        scene.count_of(MaterialKind::Glass)
    );

    if let Some(path) = &args.write_scene {
        save_scene(&scene, path)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        info!("Wrote scene description to {}", path.display());
    }

    let world = World::from_description(&scene)?;
    let camera = Camera::from_description(&scene.camera, &scene.image)?;
    let config = args.render_config(&scene);

    let image = render(&camera, &world, &config)?;
    debug!("Mean pixel radiance: {:?}", image.average());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write image {}", args.output.display()))?;
    info!("Saved to {}", args.output.display());

    Ok(())
}
