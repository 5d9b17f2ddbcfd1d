//! Status macros layered on top of `tracing`.
//!
//! The terminal formatter picks the symbol from the event target, so these
//! only differ from the plain `tracing` macros in where they point.

/// Target used for lines that must be printed verbatim.
pub const PRINT_TARGET: &str = "dotquad::print";
/// Target used for positive status lines.
pub const SUCCESS_TARGET: &str = "dotquad::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
