// src/export/archive.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Write `(entry name, bytes)` pairs into a Deflate ZIP archive.
pub(crate) fn write_archive(path: &Path, entries: &[(String, Vec<u8>)]) -> AppResult<()> {
    info(format!("Packaging {} files into {}", entries.len(), path.display()));

    let file = fs::File::create(path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, bytes) in entries {
        zip.start_file(name.as_str(), options)
            .map_err(|e| AppError::Export(e.to_string()))?;
        zip.write_all(bytes)?;
    }

    zip.finish().map_err(|e| AppError::Export(e.to_string()))?;

    notify_export_success("ZIP", path);
    Ok(())
}
