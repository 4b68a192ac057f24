use super::info_plist::parse_info_plist;
use super::record::SnippetDocument;
use super::INFO_PLIST;
use crate::errors::{archive_error, io_error, missing_field, Result};
use emojipack_core::{log_op_end, log_op_error, log_op_start, Snippet, SnippetPack};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use std::time::Instant;
use zip::ZipArchive;

/// Read an `.alfredsnippets` archive from `path`
///
/// Snippets keep archive entry order. Entries that are neither `info.plist`
/// nor `*.json` (the icon, for instance) are skipped.
///
/// # Errors
///
/// - `Io` — the file could not be read
/// - `InvalidArchive` — not a zip, or an entry is not a snippet document
/// - `MissingField` — a snippet document lacks a required field
/// - `Serialization` — `info.plist` is present but unreadable
pub fn read_pack(path: &Path) -> Result<SnippetPack> {
    let start = Instant::now();
    log_op_start!("read_pack", path = %path.display());

    let result = fs::read(path)
        .map_err(|e| io_error("read_pack", path, e))
        .and_then(|bytes| decode_pack(&bytes, path));

    let duration = start.elapsed().as_millis() as u64;
    match &result {
        Ok(pack) => {
            log_op_end!(
                "read_pack",
                duration_ms = duration,
                snippet_count = pack.snippets.len()
            );
        }
        Err(e) => {
            log_op_error!("read_pack", e.clone(), duration_ms = duration);
        }
    }
    result
}

/// Decode archive bytes; `path` is only used for error context
///
/// # Errors
///
/// Same as [`read_pack`], minus `Io`.
pub fn decode_pack(bytes: &[u8], path: &Path) -> Result<SnippetPack> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| archive_error(path, format!("Not a zip archive: {}", e)))?;

    let mut delimiters = None;
    let mut snippets = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| archive_error(path, e.to_string()))?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if name != INFO_PLIST && !name.ends_with(".json") {
            continue;
        }

        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(|e| archive_error(path, format!("{}: {}", name, e)))?;

        if name == INFO_PLIST {
            delimiters = Some(parse_info_plist(&content)?);
        } else {
            snippets.push(parse_snippet(path, &name, &content)?);
        }
    }

    let (prefix, suffix) = delimiters.unwrap_or_else(|| {
        tracing::warn!(
            path = %path.display(),
            "Archive has no info.plist; using empty prefix and suffix"
        );
        (String::new(), String::new())
    });

    Ok(SnippetPack::new(prefix, suffix, snippets))
}

fn parse_snippet(path: &Path, entry: &str, content: &[u8]) -> Result<Snippet> {
    match serde_json::from_slice::<SnippetDocument>(content) {
        Ok(doc) => Ok(doc.into()),
        Err(e) if e.is_data() && e.to_string().starts_with("missing field") => {
            Err(missing_field(path, entry, e.to_string()))
        }
        Err(e) => Err(archive_error(path, format!("{}: {}", entry, e))),
    }
}
