//! Emojipack Store - file and network adapters around the core model
//!
//! Provides:
//! - `.alfredsnippets` archive reading and writing (zip + plist + JSON)
//! - macOS text replacement plist export
//! - gemoji source fetching with HTTP conditional caching
//! - Atomic file writes (no partially written packs)

pub mod archive;
pub mod atomic;
pub mod errors;
pub mod export;
pub mod source;

// Re-export key types
pub use archive::{read_pack, write_pack};
pub use errors::Result;
pub use export::write_macos_plist;
pub use source::{fetch_gemoji_data, HttpTransport, ReqwestTransport, SourceConfig};
