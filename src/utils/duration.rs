/// Round to two decimals, the precision of every hour figure in the reports.
///
/// Exact binary ties go to the even digit (`8.125` → `8.12`).
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

/// Convert a duration token to decimal hours.
///
/// - `"8.5"`  → `Some(8.5)`
/// - `"8:30"` → `Some(8.5)` (`H + MM/60`)
/// - anything malformed → `None` (missing, not zero)
pub fn parse_duration_to_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();

    let Some((h, m)) = s.split_once(':') else {
        let v: f64 = s.parse().ok()?;
        return v.is_finite().then(|| round2(v));
    };

    // "H:MM" or "H:MM:SS": only hours and minutes are taken
    let m = m.split(':').next().unwrap_or(m);
    let hours: i64 = h.trim().parse().ok()?;
    let minutes: i64 = m.trim().parse().ok()?;

    Some(round2(hours as f64 + minutes as f64 / 60.0))
}
