// IconGen - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the generation pipeline and reporting the outcome

use clap::Parser;
use icongen::core::pipeline::{self, GenerateConfig};
use icongen::util;
use std::path::PathBuf;

/// IconGen - render the tray icon SVGs to PNG, ICO and ICNS.
///
/// With no arguments, reads `tray-icon.svg` and `tray-icon-recording.svg`
/// from the working directory and writes everything to `assets/`.
#[derive(Parser, Debug)]
#[command(name = "icongen", version, about)]
struct Cli {
    /// Directory containing the SVG sources.
    #[arg(short = 'i', long = "input-dir", default_value = util::constants::DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory to write rasters and icon containers to.
    #[arg(short = 'o', long = "output-dir", default_value = util::constants::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        input = %cli.input_dir.display(),
        output = %cli.output_dir.display(),
        "IconGen starting"
    );

    let config = GenerateConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        ..Default::default()
    };

    match pipeline::run(&config) {
        Ok(sets) => {
            tracing::info!(sources = sets.len(), "All sources processed");
            println!("{}", util::constants::COMPLETION_MESSAGE);
        }
        Err(e) => {
            tracing::error!(error = %e, "Icon generation failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
