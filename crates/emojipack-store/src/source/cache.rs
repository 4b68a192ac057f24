use super::transport::{HttpTransport, Validators};
use super::SourceConfig;
use crate::atomic::atomic_write;
use crate::errors::{fetch_error, io_error, Result};
use emojipack_core::{log_op_end, log_op_error, log_op_start};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const NOT_MODIFIED: u16 = 304;

/// Cache files for one source URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    /// Last successful response body
    pub body: PathBuf,
    /// Validators that came with it
    pub meta: PathBuf,
}

/// Cache file locations for `url`, keyed by the SHA-256 of the URL
pub fn cache_paths(cache_dir: &Path, url: &str) -> CachePaths {
    let digest = hex::encode(Sha256::digest(url.as_bytes()));
    CachePaths {
        body: cache_dir.join(format!("{}.json", digest)),
        meta: cache_dir.join(format!("{}.meta.json", digest)),
    }
}

/// Fetch `config.url`, revalidating against the on-disk cache
///
/// # Errors
///
/// - `ExternalService` — request failed, unexpected status, or a
///   `304 Not Modified` arrived with nothing cached
/// - `Io` — the cached body exists but cannot be read
pub fn fetch_with_cache(transport: &dyn HttpTransport, config: &SourceConfig) -> Result<Vec<u8>> {
    let start = Instant::now();
    log_op_start!("fetch_source", url = %config.url);

    let result = fetch_inner(transport, config);

    let duration = start.elapsed().as_millis() as u64;
    match &result {
        Ok(body) => {
            log_op_end!("fetch_source", duration_ms = duration, bytes = body.len());
        }
        Err(e) => {
            log_op_error!("fetch_source", e.clone(), duration_ms = duration);
        }
    }
    result
}

fn fetch_inner(transport: &dyn HttpTransport, config: &SourceConfig) -> Result<Vec<u8>> {
    let paths = cache_paths(&config.cache_dir, &config.url);
    let cached = read_cached_body(&paths.body)?;
    let validators = if cached.is_some() {
        read_validators(&paths.meta)
    } else {
        Validators::default()
    };

    let response = transport.get(&config.url, &validators)?;

    match response.status {
        NOT_MODIFIED => {
            tracing::debug!(url = %config.url, "Source not modified; using cached copy");
            cached.ok_or_else(|| {
                fetch_error(&config.url, "Got 304 Not Modified but nothing is cached")
            })
        }
        200..=299 => {
            store(&paths, &response.body, &response.validators);
            Ok(response.body)
        }
        status => Err(fetch_error(
            &config.url,
            format!("Unexpected HTTP status {}", status),
        )),
    }
}

fn read_cached_body(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error("read_cache", path, e)),
    }
}

/// A missing or unreadable meta file means an unconditional request.
fn read_validators(path: &Path) -> Validators {
    let Ok(bytes) = fs::read(path) else {
        return Validators::default();
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt cache metadata");
        Validators::default()
    })
}

/// Cache failures only cost a re-download next time, so they are logged.
fn store(paths: &CachePaths, body: &[u8], validators: &Validators) {
    if let Err(e) = atomic_write(&paths.body, body) {
        tracing::warn!(error = %e, "Could not cache source body");
        return;
    }
    if validators.is_empty() {
        let _ = fs::remove_file(&paths.meta);
        return;
    }
    let written = serde_json::to_vec(validators)
        .map_err(|e| e.to_string())
        .and_then(|meta| atomic_write(&paths.meta, &meta).map_err(|e| e.to_string()));
    if let Err(e) = written {
        tracing::warn!(error = %e, "Could not cache source validators");
    }
}
