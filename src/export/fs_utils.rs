// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Make sure the output directory exists.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Check whether the output targets may be (over)written.
///
/// - none of them exists, or `force` → Ok
/// - otherwise ask once for all of them; a closed stdin counts as "no"
pub(crate) fn ensure_writable(paths: &[&Path], force: bool) -> AppResult<()> {
    let existing: Vec<&&Path> = paths.iter().filter(|p| p.exists()).collect();
    if existing.is_empty() || force {
        return Ok(());
    }

    for p in &existing {
        warning(format!("The file '{}' already exists.", p.display()));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing files will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing files not overwritten (use --force)".to_string(),
        ))
    }
}
