//! Gemoji data feed
//!
//! The feed is fetched over HTTP and cached on disk. Requests go through the
//! [`HttpTransport`] seam so tests never touch the network.

mod cache;
mod gemoji;
mod transport;

pub use cache::{cache_paths, fetch_with_cache, CachePaths};
pub use gemoji::{fetch_gemoji_data, parse_gemoji_json};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, Validators};

use std::path::PathBuf;
use std::time::Duration;

/// Canonical location of the gemoji database
pub const GEMOJI_JSON_URL: &str =
    "https://raw.githubusercontent.com/github/gemoji/master/db/emoji.json";

/// Default on-disk cache location, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = ".emojipack/cache";

/// Where to fetch the feed from and where to cache it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub url: String,
    pub cache_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: GEMOJI_JSON_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            timeout: Duration::from_secs(30),
        }
    }
}
