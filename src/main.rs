use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixelkit::models::MatrixConfig;
use pixelkit::services::ThresholdService;
use pixelkit::{min, saturating_add};

#[derive(Parser)]
#[command(name = "pixelkit")]
#[command(about = "Saturating pixel arithmetic and threshold tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an error term to a pixel value, clamped to 0..=255
    Add {
        /// Pixel value (0-255)
        base: u8,

        /// Signed error term
        #[arg(allow_negative_numbers = true)]
        error: i32,
    },
    /// Print the smaller of two integers
    Min {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Print the active threshold matrix
    Matrix {
        /// Config file (defaults to $PIXELKIT_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the two-level threshold (0.0-256.0)
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Print as a JSON array instead of a 16-column grid
        #[arg(long)]
        json: bool,
    },
    /// Pass pixel values through the threshold matrix
    Map {
        /// Config file (defaults to $PIXELKIT_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the two-level threshold (0.0-256.0)
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Override the diffusion shift (error >> shift)
        #[arg(short, long)]
        shift: Option<u32>,

        /// Pixel values (0-255)
        #[arg(required = true)]
        values: Vec<u8>,
    },
    /// Write a default config file
    Init {
        /// Output YAML path
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { base, error } => {
            println!("{}", saturating_add(base, error));
        }
        Commands::Min { a, b } => {
            println!("{}", min(a, b));
        }
        Commands::Matrix {
            config,
            threshold,
            json,
        } => {
            let config = resolve_config(config.as_deref(), threshold, None)?;
            let service = ThresholdService::from_config(&config)?;
            print_matrix(&service, json)?;
        }
        Commands::Map {
            config,
            threshold,
            shift,
            values,
        } => {
            let config = resolve_config(config.as_deref(), threshold, shift)?;
            let service = ThresholdService::from_config(&config)?;
            for report in service.quantize_pixels(&values) {
                println!(
                    "{} -> {} (error {}, diffused {})",
                    report.input, report.output, report.error, report.diffused
                );
            }
        }
        Commands::Init { output, force } => {
            MatrixConfig::write_default(&output, force)?;
            println!("Wrote {}", output.display());
        }
    }

    Ok(())
}

/// Load config from file/env, then apply command-line overrides
fn resolve_config(
    path: Option<&Path>,
    threshold: Option<f32>,
    shift: Option<u32>,
) -> anyhow::Result<MatrixConfig> {
    Ok(MatrixConfig::resolve(path)?.with_overrides(threshold, shift))
}

fn print_matrix(service: &ThresholdService, json: bool) -> anyhow::Result<()> {
    let matrix = service.matrix();
    if json {
        println!("{}", serde_json::to_string(&matrix.as_array()[..])?);
        return Ok(());
    }
    for row in matrix.as_array().chunks(16) {
        let line: Vec<String> = row.iter().map(|v| format!("{v:3}")).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
