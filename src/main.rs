use clap::Parser;
use jobfile::utils::logger;
use jobfile::{load_with_policy, HexPolicy};

#[derive(Debug, Parser)]
#[command(name = "jobfile")]
#[command(about = "Load and resolve a declarative job-description file")]
struct Cli {
    /// Path to the job-description JSON file
    path: String,

    /// Reject inline hex data with an odd number of digits instead of
    /// truncating the trailing nibble
    #[arg(long)]
    strict_hex: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting jobfile loader");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let policy = if cli.strict_hex {
        HexPolicy::Strict
    } else {
        HexPolicy::Truncate
    };

    match load_with_policy(&cli.path, policy) {
        Ok(result) => {
            println!("✅ {} loaded successfully!", cli.path);
            println!(
                "  -- NAME: {}",
                result.name.as_deref().unwrap_or("(unnamed)")
            );
            println!("  -- INPUT: {} bytes of raw data", result.raw_data.len());
            println!("  -- OUTPUT: {}", result.output);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
