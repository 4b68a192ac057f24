use crate::model::gemoji::GemojiEntry;
use serde::{Deserialize, Serialize};

/// A single text-expansion snippet
///
/// Each snippet:
/// - Is triggered by `keyword` (stored bare, without pack prefix/suffix)
/// - Expands to `snippet`, usually one emoji grapheme cluster
/// - Is a comment when `name` starts with `#`; comments take no part in
///   comparisons
/// - Has a `uid` that is derived from keyword and payload when generated,
///   or carried over verbatim when read back from an archive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snippet {
    pub keyword: String,
    pub name: String,
    pub snippet: String,
    pub uid: String,
}

impl Snippet {
    /// Create a snippet from its four fields
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        snippet: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            snippet: snippet.into(),
            uid: uid.into(),
        }
    }

    /// Build the snippet for one alias of a gemoji entry
    ///
    /// The display name is the emoji, the capitalised description and, when
    /// the entry has tags, ` - ` followed by the comma-separated tags.
    pub fn from_gemoji(entry: &GemojiEntry, alias: &str) -> Self {
        let mut name = format!("{} {}", entry.emoji, capitalize(&entry.description));
        if !entry.tags.is_empty() {
            name.push_str(" - ");
            name.push_str(&entry.tags.join(", "));
        }
        Self {
            keyword: alias.to_string(),
            name,
            snippet: entry.emoji.clone(),
            uid: generate_uid(alias, &entry.emoji),
        }
    }

    /// True when this record is a free-text annotation rather than a snippet
    pub fn is_comment(&self) -> bool {
        self.name.starts_with('#')
    }
}

/// Generate a stable UID from a keyword and the payload's code points
///
/// `generate_uid("thumbsup", "👍") == "thumbsup-1F44D"`; multi code point
/// payloads join each code point with `-`.
pub fn generate_uid(keyword: &str, payload: &str) -> String {
    let hex_codes: Vec<String> = payload.chars().map(|c| format!("{:X}", c as u32)).collect();
    format!("{}-{}", keyword, hex_codes.join("-"))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
