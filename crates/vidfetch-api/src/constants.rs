//! API constants.

/// All API routes are versioned under this prefix.
pub const API_PREFIX: &str = "/api/v0";
