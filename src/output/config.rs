//! Output configuration types

/// Configuration for report output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Whether the `total:` summary line precedes the listing.
    pub show_total: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_total: true,
        }
    }
}
