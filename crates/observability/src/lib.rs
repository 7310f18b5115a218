//! Tracing setup and the logging notice sink.

/// Subscriber installation (filters, JSON output).
pub mod tracing;

mod notify;

pub use notify::TracingNotifier;

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
