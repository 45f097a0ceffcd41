//! Shared utility functions for output formatting

/// Format a kilobyte size for display.
///
/// Integral values print with no decimal point. Fractional values print with
/// two fractional digits, then trailing zeros are stripped, then a trailing
/// decimal point if the digits are gone: 4.50 -> "4.5", 4.00 -> "4",
/// 4.20 -> "4.2". The decimal separator is always "." regardless of locale.
pub fn format_kb(size: f64) -> String {
    if size.fract() == 0.0 {
        return format!("{}", size as i64);
    }
    let rendered = format!("{:.2}", size);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// The summary line printed ahead of the listing.
pub fn summary_line(total_kb: f64) -> String {
    format!("total: {}KB", format_kb(total_kb))
}
