use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use afterglow::models::config::CONFIG_ENV;
use afterglow::models::{AppConfig, GradientCustomizationSettings, DIRECTION_TEMPLATES};
use afterglow::services::{PaletteExtractor, SharedGradientCache};

#[derive(Parser)]
#[command(name = "afterglow")]
#[command(about = "Afterglow - CSS gradients from the colors of a photo")]
struct Cli {
    /// YAML configuration file (falls back to $AFTERGLOW_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the band-ordered palette of an image and print it as JSON
    Palette {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        image: PathBuf,

        /// Number of colors (2-12)
        #[arg(short = 'n', long)]
        colors: Option<usize>,
    },
    /// Extract a palette and print the gradients synthesized from it
    Gradients {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        image: PathBuf,

        /// Number of colors (2-12)
        #[arg(short = 'n', long)]
        colors: Option<usize>,

        /// Blend hardness, 0 (distinct bands) to 100 (fully blended)
        #[arg(long)]
        hardness: Option<u8>,

        /// Explicit stop positions, one per color (e.g. "0,40,100")
        #[arg(long, value_delimiter = ',')]
        positions: Option<Vec<f64>>,

        /// Output format
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Css,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "afterglow=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Palette { image, colors }) => {
            run_palette_command(&config, &image, colors).await
        }
        Some(Commands::Gradients {
            image,
            colors,
            hardness,
            positions,
            format,
        }) => run_gradients_command(&config, &image, colors, hardness, positions, format).await,
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

async fn extract(
    config: &AppConfig,
    image: &Path,
    colors: Option<usize>,
) -> anyhow::Result<afterglow::models::ColorPalette> {
    let bytes = tokio::fs::read(image)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", image.display()))?;

    let extractor = PaletteExtractor::new(config.max_analysis_dimension);
    let extraction = extractor
        .extract_in_background(bytes, colors.unwrap_or(config.color_count))
        .await?;

    extraction
        .into_current()
        .ok_or_else(|| anyhow::anyhow!("Extraction was superseded"))
}

/// Print the palette of an image as JSON
async fn run_palette_command(
    config: &AppConfig,
    image: &Path,
    colors: Option<usize>,
) -> anyhow::Result<()> {
    let palette = extract(config, image, colors).await?;
    println!("{}", serde_json::to_string_pretty(&palette)?);
    Ok(())
}

/// Print the gradients for an image as CSS or JSON
async fn run_gradients_command(
    config: &AppConfig,
    image: &Path,
    colors: Option<usize>,
    hardness: Option<u8>,
    positions: Option<Vec<f64>>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let palette = extract(config, image, colors).await?;

    let mut settings =
        GradientCustomizationSettings::new(hardness.unwrap_or(config.blend_hardness));
    if let Some(positions) = positions {
        if positions.len() != palette.len() {
            eprintln!(
                "Ignoring --positions: {} values given for {} colors",
                positions.len(),
                palette.len()
            );
        }
        settings = settings.with_positions(positions);
    }

    let cache = SharedGradientCache::new(config.cache_capacity);
    let gradients = cache.get_or_compute(&palette, &settings);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&*gradients)?),
        OutputFormat::Css => {
            for gradient in gradients.iter() {
                println!("/* {} */", gradient.direction);
                println!("{}", gradient.css);
            }
        }
    }
    Ok(())
}

fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Afterglow v{VERSION}");
    println!("CSS gradients from the colors of a photo\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        std::env::var(CONFIG_ENV).as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfiguration ({config_source}):");
    println!("  color_count            = {}", config.color_count);
    println!("  blend_hardness         = {}", config.blend_hardness);
    println!("  cache_capacity         = {}", config.cache_capacity);
    println!("  debounce_ms            = {}", config.debounce_ms);
    println!("  max_analysis_dimension = {}", config.max_analysis_dimension);

    println!("\nTemplates ({}):", DIRECTION_TEMPLATES.len());
    for template in &DIRECTION_TEMPLATES {
        println!("  {:<24} {}", template.label, template.direction);
    }

    println!("\nCommands:");
    println!("  afterglow palette <IMAGE>     Print the image palette as JSON");
    println!("  afterglow gradients <IMAGE>   Print synthesized gradients");
    println!("\nRun 'afterglow --help' for more details.");
}
