//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. Buckets are
//! `IndexMap`s so entries keep the order in which the packs listed them.

use crate::model::Snippet;
use indexmap::IndexMap;
use serde::Serialize;

/// Records sharing one payload, on each side of an emoji match
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EmojiMatch {
    pub theirs: Vec<Snippet>,
    pub mine: Vec<Snippet>,
}

/// Result of comparing two packs by snippet payload
///
/// Every payload of the reference pack lands in exactly one of `found`,
/// `added_emoji_presentation`, `removed_space` or `removed`; every candidate
/// payload not claimed by one of those matches lands in `added`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EmojiComparison {
    /// Payload present verbatim in both packs (keyed by that payload)
    pub found: IndexMap<String, EmojiMatch>,
    /// Candidate adds a presentation selector (keyed by the candidate payload)
    pub added_emoji_presentation: IndexMap<String, EmojiMatch>,
    /// Candidate drops spaces (keyed by the reference payload)
    pub removed_space: IndexMap<String, EmojiMatch>,
    /// Reference payloads with no counterpart
    pub removed: IndexMap<String, Vec<Snippet>>,
    /// Candidate payloads not claimed by any match
    pub added: IndexMap<String, Vec<Snippet>>,
}

impl EmojiComparison {
    /// True when the packs cover exactly the same payloads verbatim
    pub fn is_identical(&self) -> bool {
        self.added_emoji_presentation.is_empty()
            && self.removed_space.is_empty()
            && self.removed.is_empty()
            && self.added.is_empty()
    }
}

/// Both sides of a keyword bound in both packs
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeywordMatch {
    pub theirs: Snippet,
    pub mine: Snippet,
}

/// Result of comparing two packs by keyword
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct KeywordComparison {
    /// Same keyword, same normalized payload (candidate record)
    pub matching: IndexMap<String, Snippet>,
    /// Keyword only in the reference pack
    pub removed: IndexMap<String, Snippet>,
    /// Keyword only in the candidate pack
    pub added: IndexMap<String, Snippet>,
    /// Same keyword, different normalized payload
    pub modified: IndexMap<String, KeywordMatch>,
}

impl KeywordComparison {
    /// True when every keyword matches
    pub fn is_identical(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.modified.is_empty()
    }
}

/// Aggregated report over one pair of packs
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PackComparison {
    pub emojis: EmojiComparison,
    pub keywords: KeywordComparison,
}
