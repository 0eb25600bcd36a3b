//! Exit codes returned by [`run`](crate::run).

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, unreadable input, missing assets, failed
/// delivery or failed diagnostics.
pub const ERROR: i32 = 2;
