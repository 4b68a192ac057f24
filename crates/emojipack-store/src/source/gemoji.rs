use super::cache::fetch_with_cache;
use super::transport::HttpTransport;
use super::SourceConfig;
use crate::errors::{serialization_error, Result};
use emojipack_core::GemojiEntry;

/// Parse the gemoji database (a JSON array of entries)
///
/// # Errors
///
/// - `Serialization` — not a JSON array of gemoji entries
pub fn parse_gemoji_json(text: &str) -> Result<Vec<GemojiEntry>> {
    serde_json::from_str(text).map_err(|e| serialization_error("parse_gemoji_json", e.to_string()))
}

/// Fetch (or revalidate) and parse the gemoji database
///
/// # Errors
///
/// Everything [`fetch_with_cache`] and [`parse_gemoji_json`] can return, plus
/// `Serialization` when the body is not UTF-8.
pub fn fetch_gemoji_data(
    transport: &dyn HttpTransport,
    config: &SourceConfig,
) -> Result<Vec<GemojiEntry>> {
    let body = fetch_with_cache(transport, config)?;
    let text = std::str::from_utf8(&body)
        .map_err(|e| serialization_error("parse_gemoji_json", e.to_string()))?;
    let entries = parse_gemoji_json(text)?;
    tracing::info!(entries = entries.len(), "Loaded gemoji database");
    Ok(entries)
}
