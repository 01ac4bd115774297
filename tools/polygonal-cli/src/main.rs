//! polygonal - generate, inspect and export the demo's procedural meshes
//!
//! # Commands
//!
//! - `polygonal sphere` / `torus` / `cube` / `floor` / `skybox` / `wall` -
//!   generate one mesh, print its statistics or write it as OBJ with `-o`
//! - `polygonal scene -o <dir>` - export every scene mesh to a directory
//! - `polygonal config` - print the effective configuration
//!
//! Parameters not given on the command line come from `polygonal.toml`
//! (see `--config`), falling back to built-in defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polygonal::cache::{MeshCache, MeshKey};
use polygonal::config::Config;
use polygonal::procedural::{Mesh, write_obj};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "polygonal")]
#[command(about = "Procedural mesh generator for the polygonal scene")]
#[command(version)]
struct Cli {
    /// Path to the config file (missing file means defaults)
    #[arg(long, global = true, default_value = "polygonal.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Unit UV sphere (triangle strip)
    Sphere {
        /// Longitudinal segments
        #[arg(short = 'x', long)]
        x_segments: Option<u32>,

        /// Latitudinal segments
        #[arg(short = 'y', long)]
        y_segments: Option<u32>,

        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Torus (triangle strip)
    Torus {
        /// Tube radius
        #[arg(long)]
        minor_radius: Option<f32>,

        /// Distance from the center to the tube
        #[arg(long)]
        major_radius: Option<f32>,

        /// Segments around the tube
        #[arg(long)]
        ring_segments: Option<u32>,

        /// Segments around the central axis
        #[arg(long)]
        cross_segments: Option<u32>,

        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Axis-aligned cube
    Cube {
        /// Distance from the center to each face
        #[arg(long)]
        half_extent: Option<f32>,

        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Textured floor plane
    Floor {
        /// Half the side length
        #[arg(long)]
        half_extent: Option<f32>,

        /// Y coordinate of the plane
        #[arg(long, allow_hyphen_values = true)]
        height: Option<f32>,

        /// Texture repetitions across the floor
        #[arg(long)]
        uv_repeat: Option<f32>,

        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Position-only skybox cube
    Skybox {
        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parallax wall quad with tangent frames
    Wall {
        /// Output OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every scene mesh as OBJ
    Scene {
        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Commands::Sphere {
            x_segments,
            y_segments,
            output,
        } => {
            let key = MeshKey::Sphere {
                x_segments: x_segments.unwrap_or(config.sphere.x_segments),
                y_segments: y_segments.unwrap_or(config.sphere.y_segments),
            };
            emit("sphere", key, output.as_deref())
        }
        Commands::Torus {
            minor_radius,
            major_radius,
            ring_segments,
            cross_segments,
            output,
        } => {
            let key = MeshKey::torus(
                minor_radius.unwrap_or(config.torus.minor_radius),
                major_radius.unwrap_or(config.torus.major_radius),
                ring_segments.unwrap_or(config.torus.ring_segments),
                cross_segments.unwrap_or(config.torus.cross_segments),
            );
            emit("torus", key, output.as_deref())
        }
        Commands::Cube {
            half_extent,
            output,
        } => {
            let key = MeshKey::cube(half_extent.unwrap_or(config.cube.half_extent));
            emit("cube", key, output.as_deref())
        }
        Commands::Floor {
            half_extent,
            height,
            uv_repeat,
            output,
        } => {
            let key = MeshKey::floor(
                half_extent.unwrap_or(config.floor.half_extent),
                height.unwrap_or(config.floor.height),
                uv_repeat.unwrap_or(config.floor.uv_repeat),
            );
            emit("floor", key, output.as_deref())
        }
        Commands::Skybox { output } => emit("skybox", MeshKey::Skybox, output.as_deref()),
        Commands::Wall { output } => emit("wall", MeshKey::Wall, output.as_deref()),
        Commands::Scene { output } => export_scene(&config, &output),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Generate one mesh, then write it as OBJ or print its statistics
fn emit(name: &str, key: MeshKey, output: Option<&Path>) -> Result<()> {
    let mesh = key
        .generate()
        .with_context(|| format!("Failed to generate {name}"))?;

    match output {
        Some(path) => {
            write_obj(&mesh, path, name)
                .with_context(|| format!("Failed to write OBJ: {:?}", path))?;
            tracing::info!(
                "Wrote {}: {} vertices, {} triangles to {:?}",
                name,
                mesh.vertex_count(),
                mesh.triangle_count(),
                path
            );
        }
        None => print_stats(name, &mesh),
    }

    Ok(())
}

fn export_scene(config: &Config, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    let mut cache = MeshCache::new();
    for (name, key) in config.scene_meshes() {
        let mesh = cache
            .get_or_generate(key)
            .with_context(|| format!("Failed to generate {name}"))?;
        let path = dir.join(format!("{name}.obj"));
        write_obj(mesh, &path, name).with_context(|| format!("Failed to write OBJ: {:?}", path))?;
        tracing::info!("Wrote {:?}", path);
    }

    tracing::info!("Exported {} scene meshes to {:?}", cache.len(), dir);
    Ok(())
}

fn print_stats(name: &str, mesh: &Mesh) {
    println!("{name}");
    println!("  topology:  {:?}", mesh.topology);
    println!(
        "  layout:    {:?} ({} bytes/vertex)",
        mesh.layout,
        mesh.layout.stride_bytes()
    );
    println!("  vertices:  {}", mesh.vertex_count());
    println!("  indices:   {}", mesh.index_count());
    println!("  triangles: {}", mesh.triangle_count());
    for attribute in mesh.layout.attributes() {
        println!(
            "  attribute {}: {} floats at offset {}",
            attribute.location, attribute.components, attribute.offset_bytes
        );
    }
}
