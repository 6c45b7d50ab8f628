//! Notifier that writes to the terminal.

use shelf_core::Notifier;

use crate::output;

/// Prints successes to stdout and errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        output::success(message);
    }

    fn error(&self, message: &str) {
        output::error(message);
    }
}
