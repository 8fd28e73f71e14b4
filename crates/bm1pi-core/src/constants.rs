//! Constants for the base (−1+i) numeral system and its variants.

/// Maximum number of digits in a digit string.
pub const MAX_DIGITS: u32 = 128;

/// Number of digits evaluated together as one coefficient group.
pub const GROUP_BITS: u32 = 8;

/// Number of groups in a full-width digit string.
pub const GROUP_COUNT: u32 = MAX_DIGITS / GROUP_BITS;

/// Shift applied per group: b^8 = 16, so group `g` is scaled by 16^g.
pub const GROUP_SCALE_SHIFT: u32 = 4;

/// Forward variant: bit accumulation over fixed groups (default).
pub const SCALAR_VARIANT: usize = 0;

/// Forward variant: grouped dot products.
pub const BATCH_VARIANT: usize = 1;

/// Forward variant: running power of the radix.
pub const RECURRENCE_VARIANT: usize = 2;

/// Inverse variant: parity-based digit extraction (the only one).
pub const PARITY_VARIANT: usize = 0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Variant results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or malformed input.
    pub const ERROR_CONFIG: i32 = 4;
    /// The value has no expansion within [`MAX_DIGITS`](super::MAX_DIGITS) digits.
    pub const ERROR_OVERFLOW: i32 = 5;
}
