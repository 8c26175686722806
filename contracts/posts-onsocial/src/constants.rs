//! Defaults for the posts contract.

/// Byte limit applied to new posts until the owner changes it.
pub const DEFAULT_MAX_POST_LENGTH: u32 = 280;

/// Schema version that had the limit fixed at `DEFAULT_MAX_POST_LENGTH`.
pub const LEGACY_STATE_VERSION: &str = "0.1.0";
