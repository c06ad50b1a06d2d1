pub mod build;
pub mod completions;
pub mod sample;

use clap::{Parser, Subcommand};

/// gradstrip - Gradient strip texture generator
#[derive(Parser, Debug)]
#[command(name = "gradstrip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rasterize strip files and write PNG/TGA textures
    Build(build::BuildArgs),

    /// Print gradient colours at evenly spaced times
    Sample(sample::SampleArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::parse_from(["gradstrip", "build", "ramps", "-o", "out", "--dry-run"]);
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.paths, vec![std::path::PathBuf::from("ramps")]);
                assert_eq!(args.output, std::path::PathBuf::from("out"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
