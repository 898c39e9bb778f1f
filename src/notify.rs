//! User-facing notifications
//!
//! Recoverable failures (an unreadable catalog, a rejected card, a removal
//! without a selection) are reported through [`Notify`] and never stop the
//! application. The front end decides how a message is shown.

use tracing::warn;

/// Trait for notification sinks - allows both logged and silent/test modes
pub trait Notify {
    fn notify(&mut self, message: impl Into<String>);
}

/// Emits every notification as a `warn` event
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notify for LogNotifier {
    fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
    }
}

/// Silent notifier for testing and non-interactive use
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl SilentNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notify for SilentNotifier {
    fn notify(&mut self, _message: impl Into<String>) {}
}

/// Keeps every message, for callers that show them later
impl Notify for Vec<String> {
    fn notify(&mut self, message: impl Into<String>) {
        self.push(message.into());
    }
}
