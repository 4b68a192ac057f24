//! Snippet pack comparison engine.
//!
//! Compares a reference pack ("theirs") with a candidate pack ("mine") in two
//! independent ways and bundles both results into one report.
//!
//! ## Entry points
//!
//! ```ignore
//! use emojipack_core::compare::{compare_packs, render_human_summary};
//!
//! let report = compare_packs(&theirs, &mine)?;
//! println!("{}", render_human_summary(&report));
//! ```
//!
//! ## Guarantees
//!
//! - **Comment exclusion**: records whose name starts with `#` never reach a bucket.
//! - **Determinism**: buckets are insertion-ordered maps filled in pack order,
//!   so identical inputs produce identical (and identically serialized) output.
//! - **Fail fast**: a keyword bound twice in one pack aborts the whole
//!   comparison with [`EmojiPackError::DuplicateKeyword`](crate::errors::EmojiPackError).

pub mod emoji;
pub mod human_summary;
pub mod keyword;
pub mod model;
pub mod report;

pub use emoji::compare_emojis;
pub use human_summary::render_human_summary;
pub use keyword::compare_keywords;
pub use model::{EmojiComparison, EmojiMatch, KeywordComparison, KeywordMatch, PackComparison};
pub use report::compare_packs;
