use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linefill::color::{TransformMode, apply_transform, parse_hex_color};
use linefill::io::{read_template, write_template};
use linefill::region::{FloodFillOptions, floodfill};
use linefill::session::{SessionOptions, TemplateRecord, replay};

#[derive(Parser)]
#[command(name = "linefill")]
#[command(about = "Flood fill line-art templates and replay fill records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the area around one point of a template
    Fill {
        /// Template PNG
        #[arg(short, long)]
        template: PathBuf,

        /// Seed column
        #[arg(short, long)]
        x: u32,

        /// Seed row
        #[arg(short, long)]
        y: u32,

        /// Fill color as #rrggbb or #rrggbbaa
        #[arg(short, long)]
        color: String,

        /// Per-channel tolerance (0-254)
        #[arg(long, default_value_t = 0)]
        tolerance: u8,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print a palette transform of a color
    Transform {
        /// Base color as #rrggbb
        #[arg(short, long)]
        color: String,

        /// none, shade, tint, complement, analog-ccw or analog-cw
        #[arg(short, long, default_value = "none")]
        mode: String,
    },
    /// Rebuild a colored template from a JSON fill record
    Replay {
        /// Template PNG
        #[arg(short, long)]
        template: PathBuf,

        /// JSON record
        #[arg(short, long)]
        record: PathBuf,

        /// Per-channel tolerance (0-254)
        #[arg(long, default_value_t = 0)]
        tolerance: u8,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linefill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Fill {
            template,
            x,
            y,
            color,
            tolerance,
            output,
        } => run_fill_command(&template, x, y, &color, tolerance, &output),
        Commands::Transform { color, mode } => run_transform_command(&color, &mode),
        Commands::Replay {
            template,
            record,
            tolerance,
            output,
        } => run_replay_command(&template, &record, tolerance, &output),
    }
}

/// Fill one area and save the result
fn run_fill_command(
    template: &Path,
    x: u32,
    y: u32,
    color: &str,
    tolerance: u8,
    output: &Path,
) -> anyhow::Result<()> {
    let fill = parse_hex_color(color).context("Invalid fill color")?;
    let mut buffer = read_template(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;

    let options = FloodFillOptions::default().with_tolerance(tolerance);
    let outcome = floodfill(&mut buffer, x, y, fill, &options).context("Fill failed")?;

    write_template(&buffer, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        x,
        y,
        color = %fill,
        pixels = outcome.pixels_filled,
        output = %output.display(),
        "fill written"
    );
    println!("Filled {} pixels -> {}", outcome.pixels_filled, output.display());
    Ok(())
}

/// Print the transformed color as hex
fn run_transform_command(color: &str, mode: &str) -> anyhow::Result<()> {
    let base = parse_hex_color(color).context("Invalid base color")?;
    let mode: TransformMode = mode.parse().context("Invalid transform mode")?;
    println!("{}", apply_transform(base.rgb(), mode));
    Ok(())
}

/// Replay a record onto its template and save the result
fn run_replay_command(
    template: &Path,
    record: &Path,
    tolerance: u8,
    output: &Path,
) -> anyhow::Result<()> {
    let buffer = read_template(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let json = std::fs::read_to_string(record)
        .with_context(|| format!("Failed to read record {}", record.display()))?;
    let record = TemplateRecord::from_json(&json).context("Invalid fill record")?;

    let options = SessionOptions::default().with_tolerance(tolerance);
    let session = replay(buffer, &record, options).context("Replay failed")?;
    let fills = session.undo_depth();

    write_template(session.buffer(), output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        fills,
        regions = record.fill.len(),
        output = %output.display(),
        "replay written"
    );
    println!("Replayed {} fills -> {}", fills, output.display());
    Ok(())
}
