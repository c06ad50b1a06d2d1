//! Build command implementation.
//!
//! Loads strip files, rasterizes every strip and writes PNG/TGA images.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::discover_strip_files;
use crate::error::{GradError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_strip_file;
use crate::render::{rasterize, write_image, PixelBuffer};
use crate::types::StripDefinition;

/// Build strip textures from definition files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Strip files or directories containing `.strip.yaml` files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Rasterize strips without writing images
    #[arg(long)]
    pub dry_run: bool,
}

/// Totals for a build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: usize,
    pub rasterized: usize,
    pub failed: usize,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<BuildSummary> {
    let files = discover_strip_files(&args.paths)?;
    if files.is_empty() {
        return Err(GradError::Build {
            message: "No strip files found".to_string(),
            help: Some("Strip files end in .strip.yaml or .strip.yml".to_string()),
        });
    }

    let mut summary = BuildSummary::default();

    for file in &files {
        printer.info("Loading", &display_path(file));
        let strips = load_strip_file(file)?;

        for strip in &strips {
            for warning in &strip.warnings {
                printer.warning("Warning", &format!("{}: {}", strip.label(), warning));
            }

            let buffer = rasterize(&strip.gradients, &strip.layout);
            summary.rasterized += 1;

            if args.dry_run {
                printer.status("Rasterized", &describe(strip, &buffer));
                continue;
            }

            match export(strip, &buffer, &args.output) {
                Ok(path) => {
                    summary.written += 1;
                    printer.status(
                        "Writing",
                        &format!("{} -> {}", describe(strip, &buffer), display_path(&path)),
                    );
                }
                Err(e) => {
                    summary.failed += 1;
                    printer.error("Failed", &format!("{}: {}", strip.label(), e));
                }
            }
        }
    }

    if summary.failed > 0 {
        return Err(GradError::Build {
            message: format!(
                "{} could not be written",
                plural(summary.failed, "strip", "strips")
            ),
            help: None,
        });
    }

    let verb = if args.dry_run { "Checked" } else { "Finished" };
    printer.status(
        verb,
        &format!(
            "{} from {}",
            plural(summary.rasterized, "strip", "strips"),
            plural(files.len(), "file", "files")
        ),
    );

    Ok(summary)
}

/// Write a rasterized strip to its resolved destination.
pub fn export(strip: &StripDefinition, buffer: &PixelBuffer, output_dir: &Path) -> Result<PathBuf> {
    let destination = strip
        .destination(output_dir)
        .ok_or_else(|| GradError::MissingOutputDestination {
            strip: strip.label(),
        })?;

    write_image(buffer, Some(destination.as_path()))
}

fn describe(strip: &StripDefinition, buffer: &PixelBuffer) -> String {
    format!("{} ({}x{})", strip.label(), buffer.width(), buffer.height())
}
