//! `phong` - render a scene script to a PNG.
//!
//! ```text
//! phong scenes/three_spheres.txt -o out.png --screen 200x150 --size 800x600
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use phong_scene::{load_scene, Scene};
use phong_tracer::{render_frame, RayTracer, RenderConfig, RootPolicy};

/// Ray trace spheres under point lights with Phong shading.
#[derive(Parser, Debug)]
#[command(name = "phong", version, about)]
struct Args {
    /// Scene script (one command per line) or a `.json` scene snapshot
    scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Traced resolution, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "256x256")]
    screen: (u32, u32),

    /// Output canvas size, WIDTHxHEIGHT (defaults to the traced resolution)
    #[arg(long, value_parser = parse_size)]
    size: Option<(u32, u32)>,

    /// Ignore intersections behind the camera
    #[arg(long)]
    in_front: bool,

    /// Trace rows on a single thread
    #[arg(long)]
    serial: bool,

    /// Print the loaded scene as JSON instead of rendering
    #[arg(long)]
    dump_json: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{}`", s))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width `{}`: {}", w, e))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height `{}`: {}", h, e))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got `{}`", s));
    }
    // Pixel indices are u32
    if w.checked_mul(h).is_none() {
        return Err(format!("size `{}` has too many pixels", s));
    }
    Ok((w, h))
}

fn read_scene(path: &Path) -> Result<Scene> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Scene::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    } else {
        load_scene(path).with_context(|| format!("Failed to load {}", path.display()))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting Phong tracer");

    let scene = read_scene(&args.scene)?;

    if args.dump_json {
        println!("{}", scene.to_json()?);
        return Ok(());
    }

    let (screen_width, screen_height) = args.screen;
    let (width, height) = args.size.unwrap_or(args.screen);
    let root_policy = if args.in_front {
        RootPolicy::InFront
    } else {
        RootPolicy::Nearest
    };

    let config = RenderConfig::default()
        .with_screen(screen_width, screen_height)
        .with_canvas(width, height)
        .with_root_policy(root_policy)
        .with_parallel(!args.serial);

    let mut tracer = RayTracer::with_scene(scene, screen_width, screen_height);
    let image = render_frame(&mut tracer, &config);

    image
        .save_png(&args.output, config.width, config.height)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved {}x{} image to {}", width, height, args.output.display());

    Ok(())
}
