//! Stable exit codes for the binary.

/// Session ended normally, including a quit-on-error stop.
pub const OK: i32 = 0;
/// Startup failed (bad config, bad `-e` value) or the terminal loop failed.
pub const FATAL: i32 = 1;
