//! Version information.

use bm1pi_core::batch::BatchKernel;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with the batch kernel this machine selects.
#[must_use]
pub fn full_version() -> String {
    let kernel = BatchKernel::detect();
    let mode = if kernel.is_vectorized() {
        "vectorized"
    } else {
        "scalar fallback"
    };
    format!("bm1pi {} (batch kernel: {kernel}, {mode})", version())
}
