//! Compare command
//!
//! Usage: emojipack compare <THEIRS> [MINE] [--json]

use super::{CommandResult, SourceArgs};
use clap::Args;
use emojipack_core::{compare_packs, render_human_summary};
use emojipack_store::read_pack;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference pack (.alfredsnippets)
    pub theirs: PathBuf,

    /// Candidate pack; generated from the source when omitted
    pub mine: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> CommandResult {
    let theirs = read_pack(&args.theirs)?;
    let mine = match &args.mine {
        Some(path) => read_pack(path)?,
        None => args.source.generate_pack()?,
    };

    let report = compare_packs(&theirs, &mine)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_human_summary(&report));
    }
    Ok(())
}
