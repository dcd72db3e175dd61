//! Store identification from the vendor's brand lines (`Popeyes #12`).

use regex::Regex;
use std::sync::LazyLock;

/// Brand spellings seen in exports.
pub const BRAND_MARKERS: [&str; 4] = ["Popeye's", "Popeyes", "POPEYES", "POPEYE'S"];

static BRANDED_STORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Popeye's|Popeyes|POPEYES)\s*#?\s*(\d+)").unwrap());

static HASH_STORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());

pub fn has_brand_marker(text: &str) -> bool {
    BRAND_MARKERS.iter().any(|m| text.contains(m))
}

/// Store number following the brand name, else any bare `#<digits>`.
pub fn extract_store_id(text: &str) -> Option<String> {
    BRANDED_STORE
        .captures(text)
        .or_else(|| HASH_STORE.captures(text))
        .map(|c| c[1].to_string())
}
