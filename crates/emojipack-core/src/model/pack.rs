use crate::model::gemoji::GemojiEntry;
use crate::model::snippet::Snippet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared packs a record or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackSide {
    /// The reference pack
    Theirs,
    /// The candidate pack
    Mine,
}

impl fmt::Display for PackSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackSide::Theirs => f.write_str("theirs"),
            PackSide::Mine => f.write_str("mine"),
        }
    }
}

/// An ordered collection of snippets plus the keyword delimiters
///
/// The launcher wraps every keyword in `prefix` and `suffix`, so a keyword
/// `smile` in a pack with prefix and suffix `:` is triggered by `:smile:`.
/// Several snippets may share one payload (keyword synonyms).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetPack {
    pub prefix: String,
    pub suffix: String,
    pub snippets: Vec<Snippet>,
}

/// One entry of the macOS text replacement export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacosShortcut {
    pub phrase: String,
    pub shortcut: String,
}

impl SnippetPack {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, snippets: Vec<Snippet>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            snippets,
        }
    }

    /// Generate a pack with one snippet per alias of every entry, in source order
    pub fn from_gemoji(
        entries: &[GemojiEntry],
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        let snippets = entries
            .iter()
            .flat_map(|entry| {
                entry
                    .aliases
                    .iter()
                    .map(move |alias| Snippet::from_gemoji(entry, alias))
            })
            .collect();
        Self::new(prefix, suffix, snippets)
    }

    /// Snippets that take part in comparisons (comments excluded)
    pub fn active_snippets(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter().filter(|s| !s.is_comment())
    }

    /// Flat `{phrase, shortcut}` list for the macOS text replacement format
    ///
    /// Spaces inside keywords become hyphens; comments are skipped.
    pub fn macos_shortcuts(&self) -> Vec<MacosShortcut> {
        self.active_snippets()
            .map(|s| MacosShortcut {
                phrase: s.snippet.clone(),
                shortcut: format!(
                    "{}{}{}",
                    self.prefix,
                    s.keyword.replace(' ', "-"),
                    self.suffix
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<GemojiEntry> {
        vec![
            GemojiEntry {
                emoji: "😃".to_string(),
                description: "grinning face with big eyes".to_string(),
                aliases: vec!["smiley".to_string()],
                tags: vec!["happy".to_string()],
            },
            GemojiEntry {
                emoji: "👍".to_string(),
                description: "thumbs up".to_string(),
                aliases: vec!["+1".to_string(), "thumbsup".to_string()],
                tags: vec![],
            },
        ]
    }

    #[test]
    fn test_from_gemoji_one_snippet_per_alias() {
        let pack = SnippetPack::from_gemoji(&entries(), ":", ":");
        let uids: Vec<&str> = pack.snippets.iter().map(|s| s.uid.as_str()).collect();
        assert_eq!(uids, vec!["smiley-1F603", "+1-1F44D", "thumbsup-1F44D"]);
        assert_eq!(pack.prefix, ":");
        assert_eq!(pack.suffix, ":");
    }

    #[test]
    fn test_macos_shortcuts_replace_spaces_and_wrap() {
        let pack = SnippetPack::new(
            ":",
            ":",
            vec![
                Snippet::new("thumbs up", "👍 Thumbs up", "👍", "u1"),
                Snippet::new("note", "# note", "📝", "u2"),
            ],
        );
        assert_eq!(
            pack.macos_shortcuts(),
            vec![MacosShortcut {
                phrase: "👍".to_string(),
                shortcut: ":thumbs-up:".to_string(),
            }]
        );
    }

    #[test]
    fn test_default_pack_has_empty_delimiters() {
        let pack = SnippetPack::default();
        assert!(pack.prefix.is_empty());
        assert!(pack.suffix.is_empty());
        assert!(pack.snippets.is_empty());
    }

    #[test]
    fn test_pack_side_display() {
        assert_eq!(PackSide::Theirs.to_string(), "theirs");
        assert_eq!(PackSide::Mine.to_string(), "mine");
    }
}
