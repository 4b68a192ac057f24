//! Generate command
//!
//! Usage: emojipack generate [--macos] [-o <PATH>] [--icon <PATH>]

use super::{CommandResult, SourceArgs};
use clap::Args;
use emojipack_store::{write_macos_plist, write_pack};
use std::path::PathBuf;

const DEFAULT_PACK_PATH: &str = "Emoji Pack.alfredsnippets";
const DEFAULT_MACOS_PATH: &str = "Snippet Pack.plist";

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Write a macOS text replacement plist instead of a snippet archive
    #[arg(long)]
    pub macos: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// PNG icon to embed in the archive
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute generate command
pub fn execute(args: GenerateArgs) -> CommandResult {
    let pack = args.source.generate_pack()?;

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(if args.macos {
            DEFAULT_MACOS_PATH
        } else {
            DEFAULT_PACK_PATH
        })
    });

    if args.macos {
        if args.icon.is_some() {
            tracing::warn!("--icon has no effect with --macos");
        }
        write_macos_plist(&pack, &output)?;
    } else {
        let icon = match &args.icon {
            Some(path) => Some(
                std::fs::read(path)
                    .map_err(|e| format!("Cannot read icon {}: {}", path.display(), e))?,
            ),
            None => None,
        };
        write_pack(&pack, &output, icon.as_deref())?;
    }

    println!(
        "Generated {} with {} snippets",
        output.display(),
        pack.snippets.len()
    );
    Ok(())
}
