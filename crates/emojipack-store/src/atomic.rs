//! Atomic write primitive
//!
//! Uses temp→rename so readers never observe a partially written file

use crate::errors::{io_error, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling temp path: `Emoji Pack.alfredsnippets` → `Emoji Pack.alfredsnippets.tmp`
fn temp_path(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically write bytes to a file, creating parent directories as needed
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_dir", parent, e))?;
        }
    }

    let temp = temp_path(target_path);
    fs::write(&temp, content).map_err(|e| io_error("write_temp", &temp, e))?;
    if let Err(e) = fs::rename(&temp, target_path) {
        let _ = fs::remove_file(&temp);
        return Err(io_error("rename_temp", target_path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("packs").join("Emoji Pack.alfredsnippets");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("pack.plist");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("pack.alfredsnippets");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path(Path::new("out/Emoji Pack.alfredsnippets")),
            PathBuf::from("out/Emoji Pack.alfredsnippets.tmp")
        );
    }
}
