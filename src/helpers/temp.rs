use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tempfile::{Builder, NamedTempFile, TempDir, TempPath};
use tracing::info;

/// Rejects prefixes that would place the entry outside its parent.
pub fn check_prefix(prefix: &str) -> Result<()> {
    if prefix.chars().any(std::path::is_separator) {
        bail!("Prefix {prefix:?} contains a path separator")
    }
    Ok(())
}

/// Creates and opens a uniquely named file under `parent`, or under the
/// system temporary directory when no parent is given.
pub fn create_temp_file(prefix: &str, parent: Option<&Path>) -> Result<NamedTempFile> {
    check_prefix(prefix)?;
    let mut builder = Builder::new();
    builder.prefix(prefix);
    let file = match parent {
        Some(parent) => builder
            .tempfile_in(parent)
            .with_context(|| format!("Failed to create temp file in {}", parent.display()))?,
        None => builder.tempfile().context("Failed to create temp file")?,
    };
    info!("📄 Temporary file created at: {}", file.path().display());
    Ok(file)
}

pub fn write_bytes(file: &mut NamedTempFile, bytes: &[u8]) -> Result<()> {
    file.write_all(bytes)
        .with_context(|| format!("Failed to write into {}", file.path().display()))?;
    file.flush()
        .with_context(|| format!("Flushing {} failed", file.path().display()))?;
    Ok(())
}

/// Syncs and closes the open handle. The returned path still deletes the
/// file when it goes out of scope.
pub fn close_temp_file(file: NamedTempFile) -> Result<TempPath> {
    file.as_file()
        .sync_all()
        .with_context(|| format!("Syncing {} failed", file.path().display()))?;
    Ok(file.into_temp_path())
}

pub fn create_temp_dir(prefix: &str, parent: Option<&Path>) -> Result<TempDir> {
    check_prefix(prefix)?;
    let mut builder = Builder::new();
    builder.prefix(prefix);
    let tmp_dir = match parent {
        Some(parent) => builder
            .tempdir_in(parent)
            .with_context(|| format!("Failed to create temp directory in {}", parent.display()))?,
        None => builder.tempdir().context("Failed to create temp directory")?,
    };
    info!(
        "📂 Temporary directory created at: {}",
        tmp_dir.path().display()
    );
    Ok(tmp_dir)
}

pub fn write_file_in(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("📄 Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

pub fn remove_temp_file(path: TempPath) -> Result<()> {
    let display = path.display().to_string();
    path.close()
        .with_context(|| format!("Failed to remove {display}"))?;
    info!("🧹 Temporary file removed");
    Ok(())
}

pub fn clear_temp_dir(tmp_dir: TempDir) -> Result<()> {
    let display = tmp_dir.path().display().to_string();
    tmp_dir
        .close()
        .with_context(|| format!("Failed to clear {display}"))?;
    info!("🧹 Temporary directory cleared");
    Ok(())
}

pub fn keep_temp_file(path: TempPath) -> Result<PathBuf> {
    path.keep().context("Failed to persist temp file")
}

pub fn keep_temp_dir(tmp_dir: TempDir) -> PathBuf {
    tmp_dir.keep()
}
