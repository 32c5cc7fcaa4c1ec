//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Intersection tracking defaults
pub mod tracker {
    /// Fraction of a region that must intersect the viewport before it counts as visible
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Expansion of the comparison window on both edges
    pub const DEFAULT_ROOT_MARGIN: f64 = 0.0;
}

/// Scroll-spy defaults, in document pixels
pub mod spy {
    /// Added to the scroll position so a section activates just before its top edge
    pub const DEFAULT_LOOK_AHEAD: f64 = 100.0;

    /// Scroll offset past which the header switches to its "scrolled" style
    pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
}

/// Scroll-spy defaults for row-based (terminal) documents
pub mod terminal {
    /// Look-ahead in rows
    pub const LOOK_AHEAD_ROWS: f64 = 3.0;

    /// Scrolled threshold in rows
    pub const SCROLLED_ROWS: f64 = 1.0;
}

/// Filesystem layout
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "folio.log";
}
