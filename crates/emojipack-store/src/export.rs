//! macOS text replacement export
//!
//! System Settings → Keyboard → Text Replacements accepts a plist array of
//! `{phrase, shortcut}` dictionaries dragged into its table.

use crate::atomic::atomic_write;
use crate::errors::{from_plist, Result};
use emojipack_core::{log_op_end, log_op_error, log_op_start, SnippetPack};
use std::path::Path;
use std::time::Instant;

/// Encode the pack's shortcuts as an XML plist
///
/// # Errors
///
/// - `Serialization` — the plist encoder failed
pub fn encode_macos_plist(pack: &SnippetPack) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    plist::to_writer_xml(&mut out, &pack.macos_shortcuts())
        .map_err(|e| from_plist("write_macos_plist", e))?;
    Ok(out)
}

/// Write the pack's shortcuts to `path` as an XML plist
///
/// # Errors
///
/// - `Serialization` — the plist encoder failed
/// - `Io` — the file could not be written
pub fn write_macos_plist(pack: &SnippetPack, path: &Path) -> Result<()> {
    let start = Instant::now();
    log_op_start!("write_macos_plist", path = %path.display());

    let result = encode_macos_plist(pack).and_then(|bytes| atomic_write(path, &bytes));

    let duration = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("write_macos_plist", duration_ms = duration);
        }
        Err(e) => {
            log_op_error!("write_macos_plist", e.clone(), duration_ms = duration);
        }
    }
    result
}
