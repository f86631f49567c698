//! Logging facilities.
//!
//! stylenest uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylenest=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Rule creation and sheet processing.
    pub const SHEET: &str = "stylenest::sheet";
    /// Nested selector resolution.
    pub const NESTED: &str = "stylenest::nested";
}
