//! Process-wide logging setup for gatehouse hosts and tests.

/// Subscriber construction (filters, output format).
pub mod subscriber;

pub use subscriber::LogFormat;

/// Install the global tracing subscriber.
///
/// Safe to call multiple times; only the first call installs anything.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
