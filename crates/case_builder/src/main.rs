//! Case Builder CLI
//!
//! Generates synthetic player CSVs and converts SSV answers to sport names

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tb_core::Distribution;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "case_builder")]
#[command(about = "Build TeamBuilder test cases and normalize sport names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic player CSV
    Generate {
        /// Number of players to generate
        player_count: usize,

        /// Any value enables balanced distribution
        balanced_dist: Option<String>,

        /// Balance players over SSVs and sexes
        #[arg(long, default_value = "false")]
        balanced: bool,

        /// Output directory
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// RNG seed for reproducible random cases
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replace the SSV column of a player CSV with a sport column
    Normalize {
        /// Player CSV with a column containing "SSV"
        input: PathBuf,
    },
}

/// Parse `args`; on a wrong argument shape print usage and return `None`
#[cfg(feature = "cli")]
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) => {
            let _ = e.print();
            None
        }
    }
}

/// Any `BALANCED` positional value or `--balanced` selects balanced mode
#[cfg(feature = "cli")]
fn distribution_for(balanced: bool, balanced_dist: Option<&str>) -> Distribution {
    if balanced || balanced_dist.is_some() {
        Distribution::Balanced
    } else {
        Distribution::Random
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage errors exit cleanly without touching any file
    let Some(cli) = parse_args(std::env::args_os()) else {
        return Ok(());
    };

    match cli.command {
        Commands::Generate {
            player_count,
            balanced_dist,
            balanced,
            out_dir,
            seed,
        } => {
            let distribution = distribution_for(balanced, balanced_dist.as_deref());

            println!("🔨 Generating test case...");
            println!("   Players:      {}", player_count);
            println!("   Distribution: {:?}", distribution);
            println!("   Output dir:   {}", out_dir.display());

            let options = case_builder::GenerateOptions {
                player_count,
                distribution,
                out_dir,
                seed,
            };
            let path = case_builder::build_test_case(&options)
                .context("Failed to build test case")?;

            println!("\n✅ Test case saved to {}.", path.display());
        }

        Commands::Normalize { input } => {
            println!("🔨 Converting sport names...");
            println!("   Input: {}", input.display());

            let report = case_builder::normalize_file(&input)
                .with_context(|| format!("Failed to normalize {}", input.display()))?;

            println!("   Column: {}", report.source_column);
            println!("{}", report.stats);
            println!(
                "\n✅ CSV with converted sport names written to {}",
                report.output_path.display()
            );
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("case_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
