use super::info_plist::create_info_plist;
use super::record::SnippetDocument;
use super::{ICON_PNG, INFO_PLIST};
use crate::atomic::atomic_write;
use crate::errors::{from_zip_write, serialization_error, Result};
use emojipack_core::errors::{ExError, ExErrorKind};
use emojipack_core::{log_op_end, log_op_error, log_op_start, SnippetPack};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::Path;
use std::time::Instant;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write a pack to `path` as an `.alfredsnippets` archive
///
/// The archive is assembled in memory and lands on disk atomically.
///
/// # Errors
///
/// - `InvalidInput` — two snippets share a uid (entry names would collide)
/// - `Serialization` — zip, plist or JSON encoding failed
/// - `Io` — the file could not be written
pub fn write_pack(pack: &SnippetPack, path: &Path, icon: Option<&[u8]>) -> Result<()> {
    let start = Instant::now();
    log_op_start!(
        "write_pack",
        path = %path.display(),
        snippet_count = pack.snippets.len()
    );

    let result = encode_pack(pack, icon).and_then(|bytes| atomic_write(path, &bytes));

    let duration = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("write_pack", duration_ms = duration);
        }
        Err(e) => {
            log_op_error!("write_pack", e.clone(), duration_ms = duration);
        }
    }
    result
}

/// Encode a pack into archive bytes
///
/// # Errors
///
/// Same as [`write_pack`], minus `Io`.
pub fn encode_pack(pack: &SnippetPack, icon: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut seen = HashSet::new();
    for snippet in &pack.snippets {
        if !seen.insert(snippet.uid.as_str()) {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("write_pack")
                .with_subject(&snippet.uid)
                .with_message("Snippet uid is used more than once"));
        }
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let info = create_info_plist(&pack.prefix, &pack.suffix)?;
    add_entry(&mut zip, INFO_PLIST, &info, options)?;

    for snippet in &pack.snippets {
        let doc = SnippetDocument::from(snippet);
        let json = serde_json::to_vec(&doc)
            .map_err(|e| serialization_error("write_pack", e.to_string()))?;
        add_entry(&mut zip, &format!("{}.json", snippet.uid), &json, options)?;
    }

    if let Some(icon) = icon {
        add_entry(&mut zip, ICON_PNG, icon, options)?;
    }

    let cursor = zip.finish().map_err(from_zip_write)?;
    Ok(cursor.into_inner())
}

fn add_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    content: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(name, options).map_err(from_zip_write)?;
    zip.write_all(content)
        .map_err(|e| serialization_error("write_pack", e.to_string()))
}
