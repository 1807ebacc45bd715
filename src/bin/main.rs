//! COLLADA Export CLI
//!
//! Convert JSON scene descriptions into COLLADA 1.3.1 documents.

use clap::{Parser, Subcommand};
use collada_export::{export_dae_to_path, ExportConfig, ObjectKind, Scene};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "collada-export")]
#[command(author, version, about = "Export 3D scenes to COLLADA 1.3.1", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene to a .dae file
    Export {
        /// Input JSON scene description
        #[arg(short, long)]
        input: PathBuf,

        /// Output .dae file path
        #[arg(short, long)]
        output: PathBuf,

        /// Only export selected objects
        #[arg(long)]
        selected: bool,

        /// Write one matrix per node instead of translate/rotate/scale
        #[arg(long)]
        bake_transforms: bool,

        /// Digits after the decimal point
        #[arg(long, default_value = "6")]
        precision: usize,

        /// Write the geometric camera field of view instead of the legacy value
        #[arg(long)]
        true_fov: bool,

        /// Write without indentation
        #[arg(long)]
        compact: bool,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// Author written into the asset header
        #[arg(long, default_value = "")]
        author: String,
    },

    /// Show information about a scene file
    Info {
        /// Input JSON scene description
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Export {
            input,
            output,
            selected,
            bake_transforms,
            true_fov,
            precision,
            compact,
            force,
            author,
        } => {
            let mut config = ExportConfig::default()
                .with_selected_only(selected)
                .with_bake_transforms(bake_transforms)
                .with_precision(precision)
                .with_true_fov(true_fov)
                .with_author(author)
                .with_overwrite(force);
            if compact {
                config = config.compact();
            }
            if let Some(dir) = input.parent().filter(|d| !d.as_os_str().is_empty()) {
                config = config.with_base_dir(dir);
            }
            export_scene(&input, &output, &config)?;
        }
        Commands::Info { input } => {
            show_scene_info(&input)?;
        }
    }

    Ok(())
}

fn export_scene(
    input: &PathBuf,
    output: &PathBuf,
    config: &ExportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading scene from {:?}...", input);
    let scene = Scene::from_path(input)?;
    println!("  Loaded {} objects", scene.objects.len());

    println!("Exporting with config:");
    println!("  - Selected only: {}", config.selected_only);
    println!("  - Bake transforms: {}", config.bake_transforms);
    println!("  - Precision: {}", config.precision);

    let report = export_dae_to_path(&scene, config, output)?;

    println!("Exported to {:?}", output);
    println!("  Geometries: {}", report.geometries);
    println!("  Materials: {}", report.materials);
    println!("  Textures: {}", report.textures);
    println!("  Images: {}", report.images);
    println!("  Lights: {}", report.lights);
    println!("  Cameras: {}", report.cameras);
    println!("  Nodes: {}", report.nodes);
    if report.has_warnings() {
        println!("  Warnings: {}", report.warnings.len());
    }
    Ok(())
}

fn show_scene_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading scene from {:?}...", input);
    let scene = Scene::from_path(input)?;

    let count = |kind: ObjectKind| scene.objects.iter().filter(|o| o.kind == kind).count();
    println!("\nScene Info: {}", scene.name);
    println!("  Objects: {}", scene.objects.len());
    println!("    Meshes: {}", count(ObjectKind::Mesh));
    println!("    Lamps: {}", count(ObjectKind::Lamp));
    println!("    Cameras: {}", count(ObjectKind::Camera));
    println!("    Selected: {}", scene.objects.iter().filter(|o| o.selected).count());
    println!("  Mesh data: {}", scene.meshes.len());
    println!("  Materials: {}", scene.materials.len());
    println!("  Textures: {}", scene.textures.len());
    println!("  Images: {}", scene.images.len());
    println!("  Lights: {}", scene.lights.len());
    println!("  Cameras: {}", scene.cameras.len());
    Ok(())
}
