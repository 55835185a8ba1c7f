use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use imgg_chart::{Color, Scene};
use imgg_rs::{FontConfig, FontResource, FontSource, ImageGraphics};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// imgg: render chart scenes into PNG images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON scene and write it as a PNG image
    Render {
        /// Path to the input scene JSON file
        #[arg(short, long)]
        scene: PathBuf,

        /// Path to the output PNG file to be created
        #[arg(short, long)]
        output: PathBuf,

        /// TrueType font file used for text (default: bundled DejaVu Sans Mono)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Font rasterization resolution in dots per inch
        #[arg(long)]
        dpi: Option<u32>,

        /// Pixels per inch recorded in the PNG metadata
        #[arg(long)]
        ppi: Option<f32>,

        /// Override the scene width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Override the scene height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Override the scene background color (CSS color)
        #[arg(long)]
        background: Option<String>,

        /// Draw wedges with an inner radius as ring segments
        #[arg(long)]
        inner_radius: bool,
    },

    /// Load a font and print its family and units per em
    CheckFont {
        /// TrueType font file (default: bundled DejaVu Sans Mono)
        #[arg(long)]
        font: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render {
            scene,
            output,
            font,
            dpi,
            ppi,
            width,
            height,
            background,
            inner_radius,
        } => {
            let json = std::fs::read_to_string(&scene)
                .with_context(|| format!("Failed to read scene file {}", scene.display()))?;
            let mut scene_def = Scene::from_json(&json)
                .with_context(|| format!("Failed to parse scene file {}", scene.display()))?;
            if let Some(width) = width {
                scene_def.width = width;
            }
            if let Some(height) = height {
                scene_def.height = height;
            }
            if let Some(background) = background {
                scene_def.background = Color::parse(&background)
                    .with_context(|| format!("Invalid background color {:?}", background))?;
            }
            scene_def.inner_radius |= inner_radius;
            render(&scene_def, font, dpi, ppi, &output)
        }
        Commands::CheckFont { font } => {
            let resource = load_font(font, None)?;
            println!(
                "{} ({} units/em)",
                resource.family(),
                resource.units_per_em()
            );
            Ok(())
        }
    }
}

/// Font from the command line flags layered over the environment settings.
fn load_font(path: Option<PathBuf>, dpi: Option<u32>) -> Result<FontResource> {
    let mut config = FontConfig::from_env();
    if let Some(path) = path {
        config.source = FontSource::File(path);
    }
    if let Some(dpi) = dpi {
        if dpi == 0 {
            bail!("--dpi must be positive");
        }
        config.dpi = dpi;
    }
    FontResource::load(&config).with_context(|| format!("Failed to load font {:?}", config.source))
}

fn render(
    scene: &Scene,
    font: Option<PathBuf>,
    dpi: Option<u32>,
    ppi: Option<f32>,
    output: &Path,
) -> Result<()> {
    let mut graphics = ImageGraphics::new(scene.width, scene.height, scene.background)
        .with_context(|| format!("Cannot create a {}x{} image", scene.width, scene.height))?
        .with_inner_radius(scene.inner_radius);
    // Explicit font flags fail fast; otherwise text follows the process font
    if font.is_some() || dpi.is_some() {
        let resource = load_font(font, dpi)?;
        graphics = graphics.with_font(Ok(Arc::new(resource)));
    } else if let Some(err) = graphics.font_error() {
        log::warn!("Rendering without text: {}", err);
    }

    scene.replay(&mut graphics);
    log::info!(
        "Replayed {} commands onto {}x{} image",
        scene.commands.len(),
        scene.width,
        scene.height
    );

    let png = graphics.to_png(ppi).context("Failed to encode PNG")?;
    std::fs::write(output, png)
        .with_context(|| format!("Failed to write output file {}", output.display()))?;
    Ok(())
}
