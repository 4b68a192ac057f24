//! Emojipack Core - in-memory snippet model and pack comparison engine
//!
//! This crate provides the pure, synchronous part of emojipack:
//! - Snippet records and snippet packs (with generation from gemoji entries)
//! - Emoji payload normalization (presentation selector, keycaps, spaces)
//! - Emoji and keyword comparators plus the aggregated comparison report
//! - Human-readable report rendering
//!
//! Filesystem and network access live in `emojipack-store`.

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;

// Re-export commonly used types
pub use compare::{
    compare_emojis, compare_keywords, compare_packs, render_human_summary, EmojiComparison,
    EmojiMatch, KeywordComparison, KeywordMatch, PackComparison,
};
pub use errors::{EmojiPackError, ExError, ExErrorKind, Result};
pub use model::{generate_uid, GemojiEntry, MacosShortcut, PackSide, Snippet, SnippetPack};
pub use normalize::normalize_emoji;
