use serde::{Deserialize, Serialize};

/// One entry of the gemoji database, reduced to the fields emojipack uses.
///
/// Unknown fields in the source feed (category, unicode_version, ...) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemojiEntry {
    /// The emoji payload
    pub emoji: String,
    /// Human-readable description, not the unicode name
    pub description: String,
    /// Keywords for the emoji, without colons
    pub aliases: Vec<String>,
    /// Additional search tags
    pub tags: Vec<String>,
}
