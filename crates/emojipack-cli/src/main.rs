//! Emojipack CLI
//!
//! Generates emoji snippet packs and compares them against published ones

use clap::{Parser, Subcommand};
use emojipack_core::logging_facility::{init_with_default, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "emojipack")]
#[command(about = "Emojipack - Emoji snippet pack generator and comparator", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. info, emojipack_store=debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a snippet pack from the gemoji database
    Generate(commands::generate::GenerateArgs),
    /// Compare a pack against another pack or a freshly generated one
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    init_with_default(profile, &cli.log_level);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
