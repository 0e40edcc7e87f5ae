//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
