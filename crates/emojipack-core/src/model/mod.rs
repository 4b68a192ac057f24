//! Data model: snippet records, snippet packs and the gemoji source record.

pub mod gemoji;
pub mod pack;
pub mod snippet;

pub use gemoji::GemojiEntry;
pub use pack::{MacosShortcut, PackSide, SnippetPack};
pub use snippet::{generate_uid, Snippet};
