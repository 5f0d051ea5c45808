//! Logging facilities for multiselect.
//!
//! multiselect uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("multiselect::manager=debug")
//!     .init();
//! ```
//!
//! Every event is emitted with one of the targets below so hosts can filter
//! per subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Selection store target.
    pub const SELECTION: &str = "multiselect::selection";
    /// Selection manager target (taps, long-presses, vetoes, list changes).
    pub const MANAGER: &str = "multiselect::manager";
    /// Gesture composition target.
    pub const GESTURE: &str = "multiselect::gesture";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multiselect::signal";
    /// Configuration loading target.
    pub const CONFIG: &str = "multiselect::config";
}
