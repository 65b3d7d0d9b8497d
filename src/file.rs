// src/file.rs

use std::{
    ffi::OsStr,
    fs,
    path::Path,
};

use crate::error::{GenError, Result};

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(GenError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| GenError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Make `dir` exist, then delete every regular file directly inside it whose
/// extension is `ext`. Subdirectories and other files are left alone.
/// Returns how many files were removed.
pub fn reset_output_dir(dir: &Path, ext: &str) -> Result<usize> {
    ensure_directory(dir)?;

    let read_err = |source| GenError::Read { path: dir.to_path_buf(), source };
    let mut removed = 0usize;

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() { continue; }
        if path.extension() != Some(OsStr::new(ext)) { continue; }

        fs::remove_file(&path).map_err(|source| GenError::Remove { path: path.clone(), source })?;
        removed += 1;
    }

    logd!("cleared {} .{} file(s) from {}", removed, ext, dir.display());
    Ok(removed)
}

/// Create/truncate `path` with `contents`.
pub fn write_page(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| GenError::Write { path: path.to_path_buf(), source })
}
