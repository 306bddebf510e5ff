pub mod config;
pub mod network;

/// Logs a completion message at INFO level.
///
/// Call sites read as outcome reports rather than progress notes; the CLI
/// formatter renders both with the same symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}
