//! `.alfredsnippets` archive format
//!
//! A zip archive holding:
//! - `info.plist` — keyword prefix/suffix configuration
//! - `<uid>.json` — one `{"alfredsnippet": {...}}` document per snippet
//! - optionally `icon.png`, ignored when reading

mod info_plist;
mod reader;
mod record;
mod writer;

pub use info_plist::{create_info_plist, parse_info_plist};
pub use reader::{decode_pack, read_pack};
pub use writer::{encode_pack, write_pack};

/// Archive entry holding the prefix/suffix configuration
pub const INFO_PLIST: &str = "info.plist";

/// Archive entry holding the optional pack icon
pub const ICON_PNG: &str = "icon.png";
