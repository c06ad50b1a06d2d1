use clap::Parser;
use gradstrip::cli::{Cli, Commands};
use gradstrip::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => {
            gradstrip::cli::build::run(args, &printer)?;
        }
        Commands::Sample(args) => gradstrip::cli::sample::run(args, &printer)?,
        Commands::Completions(args) => gradstrip::cli::completions::run(args)?,
    }

    Ok(())
}
