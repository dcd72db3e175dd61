use crate::errors::{AppError, AppResult};
use encoding_rs::WINDOWS_1252;

const UTF8_BOM: &str = "\u{feff}";

/// Decode file bytes as UTF-8, falling back to Latin-1 (Windows-1252).
pub fn decode_report(name: &str, bytes: &[u8]) -> AppResult<String> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Ok(s.strip_prefix(UTF8_BOM).unwrap_or(s).to_string());
    }

    WINDOWS_1252
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|s| s.into_owned())
        .ok_or_else(|| AppError::Decode(name.to_string()))
}
