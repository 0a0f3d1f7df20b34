use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cxr_prep::models::{AppConfig, PairingTable, CONFIG_ENV};
use cxr_prep::services::dataset::{read_gray, save_png};
use cxr_prep::services::{Downscaler, MaskApplier, MetricsScanner};
use mask_roi::{Interpolation, RoiExtractor};

#[derive(Parser)]
#[command(name = "cxr-prep")]
#[command(about = "Chest X-ray dataset preparation - masks, ROIs, downscaling and metrics")]
struct Cli {
    /// YAML configuration file (falls back to $CXR_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply lung masks to every image in a folder
    ApplyMasks {
        /// Folder with the source images
        #[arg(short, long, required_unless_present = "manifest")]
        images: Option<PathBuf>,

        /// Folder with the masks (mask name = prefix + image name)
        #[arg(short, long, required_unless_present = "manifest")]
        masks: Option<PathBuf>,

        /// Folder for the masked images
        #[arg(short, long)]
        output: PathBuf,

        /// YAML manifest listing explicit image/mask pairs instead of folders
        #[arg(long, conflicts_with_all = ["images", "masks"])]
        manifest: Option<PathBuf>,
    },
    /// Extract the contour-enclosed region of one image
    Roi {
        /// Source image
        #[arg(short, long)]
        image: PathBuf,

        /// Segmentation mask (any size)
        #[arg(short, long)]
        mask: PathBuf,

        /// Output PNG for the extracted region
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the image with the contour drawn on top
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Also write the filled region mask
        #[arg(long)]
        region_mask: Option<PathBuf>,

        /// Contour thickness in pixels
        #[arg(short, long)]
        thickness: Option<u32>,

        /// Mask resampling filter
        #[arg(long)]
        interpolation: Option<Interpolation>,
    },
    /// Resize every image in a folder
    Downscale {
        /// Folder with the source images
        #[arg(short, long)]
        input: PathBuf,

        /// Parent folder; results go to {output}/{W}x{H}/
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        width: u32,

        #[arg(long)]
        height: u32,

        /// Resampling filter
        #[arg(long)]
        interpolation: Option<Interpolation>,
    },
    /// Compute quality metrics for every image in a folder
    Metrics {
        /// Folder with the images
        #[arg(short, long)]
        dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cxr_prep=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(AppConfig::resolve_path(cli.config).as_deref());

    match command {
        Commands::ApplyMasks {
            images,
            masks,
            output,
            manifest,
        } => run_apply_masks_command(
            &config,
            images.as_deref(),
            masks.as_deref(),
            &output,
            manifest.as_deref(),
        ),
        Commands::Roi {
            image,
            mask,
            output,
            overlay,
            region_mask,
            thickness,
            interpolation,
        } => run_roi_command(
            &config,
            &image,
            &mask,
            &output,
            overlay.as_deref(),
            region_mask.as_deref(),
            thickness,
            interpolation,
        ),
        Commands::Downscale {
            input,
            output,
            width,
            height,
            interpolation,
        } => run_downscale_command(&config, &input, &output, width, height, interpolation),
        Commands::Metrics { dir, format } => run_metrics_command(&config, &dir, format),
    }
}

fn run_apply_masks_command(
    config: &AppConfig,
    images: Option<&Path>,
    masks: Option<&Path>,
    output: &Path,
    manifest: Option<&Path>,
) -> anyhow::Result<()> {
    let applier = MaskApplier::from_config(config);

    let report = match (manifest, images, masks) {
        (Some(manifest), _, _) => {
            let table = PairingTable::from_manifest(manifest)?;
            applier.apply_table(&table, output)?
        }
        (None, Some(images), Some(masks)) => applier.apply_dir(images, masks, output)?,
        _ => anyhow::bail!("Either --manifest or both --images and --masks are required"),
    };

    println!(
        "Masked {} images into {} ({} skipped)",
        report.processed_count(),
        output.display(),
        report.skip_count()
    );
    for item in &report.skipped {
        println!("  skipped {}: {}", item.name, item.reason);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_roi_command(
    config: &AppConfig,
    image_path: &Path,
    mask_path: &Path,
    output: &Path,
    overlay: Option<&Path>,
    region_mask: Option<&Path>,
    thickness: Option<u32>,
    interpolation: Option<Interpolation>,
) -> anyhow::Result<()> {
    let mut options = config.roi.clone();
    if let Some(thickness) = thickness {
        options = options.thickness(thickness);
    }
    if let Some(interpolation) = interpolation {
        options = options.interpolation(interpolation);
    }

    let image = read_gray(image_path)?;
    let mask = read_gray(mask_path)?;
    let result = RoiExtractor::new(options).extract(&image, &mask)?;

    save_png(result.roi(), output)?;
    tracing::info!(
        path = %output.display(),
        contours = result.contours().len(),
        region_pixels = result.region_coverage(),
        "Wrote region of interest"
    );

    // Presentation outputs never fail the command
    if let Some(path) = overlay {
        match result.overlay().save_with_format(path, image::ImageFormat::Png) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote contour overlay"),
            Err(e) => tracing::warn!(%e, path = %path.display(), "Failed to write overlay"),
        }
    }
    if let Some(path) = region_mask {
        match save_png(result.region_mask(), path) {
            Ok(()) => tracing::info!(path = %path.display(), "Wrote region mask"),
            Err(e) => tracing::warn!(%e, path = %path.display(), "Failed to write region mask"),
        }
    }

    Ok(())
}

fn run_downscale_command(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    interpolation: Option<Interpolation>,
) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Target size must be non-zero, got {width}x{height}");
    }

    let mut downscaler = Downscaler::from_config(config);
    if let Some(interpolation) = interpolation {
        downscaler = downscaler.interpolation(interpolation);
    }

    let summary = downscaler.downscale_folder(input, output, width, height)?;
    println!(
        "Downscaled {} images to {}",
        summary.count(),
        summary.output_dir.display()
    );
    Ok(())
}

fn run_metrics_command(config: &AppConfig, dir: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let records = MetricsScanner::from_config(config).scan(dir)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            for r in &records {
                println!(
                    "{}: mean={:.2} variance={:.2} blurriness={:.2} contrast={} entropy={:.3}{}",
                    r.name,
                    r.metrics.mean_intensity,
                    r.metrics.variance,
                    r.metrics.blurriness,
                    r.metrics.contrast,
                    r.metrics.entropy,
                    if r.black_frame { " [black frame]" } else { "" }
                );
            }
        }
    }
    Ok(())
}

/// Print version, configuration sources and available commands
fn run_status_command(config_flag: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var(CONFIG_ENV).ok();

    println!("cxr-prep v{VERSION}");
    println!("Chest X-ray dataset preparation\n");

    println!("Configuration:");
    println!(
        "  --config    = {}",
        config_flag
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  {CONFIG_ENV:<11} = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::load(
        AppConfig::resolve_path(config_flag.map(Path::to_path_buf)).as_deref(),
    );
    println!("\nEffective settings:");
    println!(
        "  mask name   = {}<image name>",
        config.naming.mask_prefix
    );
    println!(
        "  output name = {}<image name>",
        config.naming.output_prefix
    );
    println!("  mask resize = {}", config.mask_interpolation);
    println!(
        "  roi         = thickness {}, {} resize",
        config.roi.thickness, config.roi.interpolation
    );
    println!("  downscale   = {}", config.downscale.interpolation);
    println!("  extensions  = {}", config.image_extensions.join(", "));

    println!("\nCommands:");
    println!("  cxr-prep apply-masks  Apply masks to a folder of images");
    println!("  cxr-prep roi          Extract the contour region of one image");
    println!("  cxr-prep downscale    Resize a folder of images");
    println!("  cxr-prep metrics      Compute image quality metrics");
    println!("  cxr-prep --help       Show all options");
}
