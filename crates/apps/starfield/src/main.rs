mod camera;
mod script;
mod surface;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use scene::prefabs::{DEFAULT_SPHERE_RESOLUTION, reference_sphere};
use scene::{
    DEFAULT_BASE_RADIUS, DEFAULT_INITIAL_STARS, DEFAULT_OFFSET_LOWER, DEFAULT_OFFSET_UPPER,
    DEFAULT_SNAP_TOLERANCE, DEFAULT_TEXTURE_SIZE, InteractionController, OffsetRange, Session,
    StarfieldConfig, Viewport,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::camera::OrbitCamera;
use crate::script::ClickSpec;
use crate::surface::{HeadlessSurface, run_clicks};

/// Random stars on a sphere, clicked through a headless 3D/2D view pair.
#[derive(Debug, Parser)]
#[command(name = "starfield", version)]
struct Args {
    #[arg(long, env = "STARFIELD_BASE_RADIUS", default_value_t = DEFAULT_BASE_RADIUS)]
    base_radius: f64,

    #[arg(long, env = "STARFIELD_OFFSET_MIN", default_value_t = DEFAULT_OFFSET_LOWER)]
    offset_min: f64,

    #[arg(long, env = "STARFIELD_OFFSET_MAX", default_value_t = DEFAULT_OFFSET_UPPER)]
    offset_max: f64,

    /// Number of stars sampled at startup.
    #[arg(long, env = "STARFIELD_STARS", default_value_t = DEFAULT_INITIAL_STARS)]
    stars: usize,

    /// Texture width and height in texels.
    #[arg(long, env = "STARFIELD_TEXTURE_SIZE", default_value_t = DEFAULT_TEXTURE_SIZE)]
    texture_size: u32,

    /// Snap radius in texels (2D clicks) or screen pixels (3D clicks).
    #[arg(long, env = "STARFIELD_SNAP_TOLERANCE", default_value_t = DEFAULT_SNAP_TOLERANCE)]
    snap_tolerance: f64,

    #[arg(long, env = "STARFIELD_SEED")]
    seed: Option<u64>,

    /// Let unmatched 3D clicks create stars on the base sphere.
    #[arg(long, env = "STARFIELD_ALLOW_INSERT_3D")]
    allow_insert_3d: bool,

    /// Scripted click, `2d:X,Y` (texels) or `3d:X,Y` (screen pixels). Repeatable.
    #[arg(long = "click", value_name = "VIEW:X,Y")]
    clicks: Vec<ClickSpec>,

    #[arg(long, default_value_t = 0.6)]
    yaw: f64,

    #[arg(long, default_value_t = 0.4)]
    pitch: f64,

    #[arg(long, default_value_t = 45.0)]
    distance: f64,

    #[arg(long, default_value_t = 800.0)]
    viewport_width: f64,

    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Write the final texture as a binary PGM image.
    #[arg(long, value_name = "PATH")]
    texture_out: Option<PathBuf>,

    /// Print the final frame (stars, highlight) as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> StarfieldConfig {
        StarfieldConfig {
            base_radius: self.base_radius,
            offset_range: OffsetRange::new(self.offset_min, self.offset_max),
            initial_stars: self.stars,
            texture_size: self.texture_size,
            snap_tolerance: self.snap_tolerance,
            allow_insert_from_view3d: self.allow_insert_3d,
            seed: self.seed,
        }
    }

    fn camera(&self) -> OrbitCamera {
        OrbitCamera {
            yaw: self.yaw,
            pitch: self.pitch,
            distance: self.distance,
            viewport: Viewport::new(self.viewport_width, self.viewport_height),
            ..OrbitCamera::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let args = Args::parse();
    let config = args.config();
    let camera = args.camera();

    let session = Session::new(&config).map_err(|e| e.to_string())?;
    let controller = InteractionController::from_config(&config);
    let sphere = reference_sphere(config.base_radius, DEFAULT_SPHERE_RESOLUTION);
    info!(
        vertices = sphere.vertex_count(),
        snap_tolerance = controller.tolerance().radius,
        "reference sphere ready"
    );

    let mut surface = HeadlessSurface::new(&session);
    let session = run_clicks(session, &controller, &camera, &args.clicks, &mut surface);

    info!(
        points = session.store().len(),
        lit_texels = session.texture().lit_texels(),
        scatter = surface.scatter().len(),
        texel_updates = surface.texel_updates(),
        transactions = surface.bus().events().len(),
        inserted = surface.bus().count_kind("inserted"),
        highlighted = ?surface.highlight().map(|h| h.index.index()),
        metrics = %surface.metrics().snapshot().to_log_line(),
        "script finished"
    );

    if let Some(path) = &args.texture_out {
        let file = File::create(path).map_err(|e| format!("create {path:?}: {e}"))?;
        formats::write_pgm(session.texture(), BufWriter::new(file))
            .map_err(|e| format!("write {path:?}: {e}"))?;
        eprintln!("wrote {}", path.display());
    }

    if args.json {
        formats::FrameDump::capture(&session)
            .write_json(io::stdout().lock())
            .map_err(|e| format!("json: {e}"))?;
    }

    Ok(())
}
