use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::{config::Config, helpers::temp};

pub const FILE_CONTENTS: [u8; 4] = [1, 2, 3, 4];
pub const INNER_FILE_NAME: &str = "file1";
pub const INNER_FILE_CONTENTS: [u8; 2] = [1, 2];

#[derive(Serialize, Debug)]
pub struct Report {
    pub file_path: PathBuf,
    pub file_len: usize,
    pub dir_path: PathBuf,
    pub inner_file_path: PathBuf,
    pub inner_file_len: usize,
    pub removed: bool,
}

/// Creates a temp file and a temp dir, writes into both, then removes them.
///
/// Both entries are owned by guards from the moment they exist, so an error
/// at any step still deletes whatever was already created.
pub fn run(config: &Config) -> Result<Report> {
    let root = config.tmp_root.as_deref();

    // Step 1
    let mut file = temp::create_temp_file(&config.file_prefix, root)?;
    println!("Temp file name: {}", file.path().display());

    // Step 2
    temp::write_bytes(&mut file, &FILE_CONTENTS)?;

    // Step 3
    // The handle must be closed before removal on some platforms
    let file = temp::close_temp_file(file)?;

    // Step 4
    let dir = temp::create_temp_dir(&config.dir_prefix, root)?;
    println!("Temp dir name: {}", dir.path().display());

    // Step 5
    let inner_file_path = temp::write_file_in(dir.path(), INNER_FILE_NAME, &INNER_FILE_CONTENTS)?;

    let mut report = Report {
        file_path: file.to_path_buf(),
        file_len: FILE_CONTENTS.len(),
        dir_path: dir.path().to_path_buf(),
        inner_file_path,
        inner_file_len: INNER_FILE_CONTENTS.len(),
        removed: false,
    };

    // Step 6
    if config.keep {
        temp::keep_temp_file(file)?;
        temp::keep_temp_dir(dir);
        warn!(
            "❗ Keeping {} and {}",
            report.file_path.display(),
            report.dir_path.display()
        );
    } else {
        temp::remove_temp_file(file)?;
        temp::clear_temp_dir(dir)?;
        report.removed = true;
    }

    info!("✅ Temporary files round done");
    Ok(report)
}
