use crate::errors::{from_plist, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct InfoPlist {
    #[serde(default)]
    snippetkeywordprefix: String,
    #[serde(default)]
    snippetkeywordsuffix: String,
}

/// Create `info.plist` content (XML) with prefix and suffix settings
///
/// # Errors
///
/// - `Serialization` — the plist encoder failed
pub fn create_info_plist(prefix: &str, suffix: &str) -> Result<Vec<u8>> {
    let info = InfoPlist {
        snippetkeywordprefix: prefix.to_string(),
        snippetkeywordsuffix: suffix.to_string(),
    };
    let mut out = Vec::new();
    plist::to_writer_xml(&mut out, &info).map_err(|e| from_plist("create_info_plist", e))?;
    Ok(out)
}

/// Parse `info.plist` content into `(prefix, suffix)`; absent keys are empty
///
/// # Errors
///
/// - `Serialization` — the bytes are not a plist dictionary
pub fn parse_info_plist(bytes: &[u8]) -> Result<(String, String)> {
    let info: InfoPlist =
        plist::from_bytes(bytes).map_err(|e| from_plist("parse_info_plist", e))?;
    Ok((info.snippetkeywordprefix, info.snippetkeywordsuffix))
}
