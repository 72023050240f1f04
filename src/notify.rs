//! User notifications
//!
//! The front end reports the outcome of each action as a message with a
//! severity. Storage trouble never comes through here; it only reaches the
//! log.

use std::fmt;
use std::io::Write;

/// How an action turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receives `(message, severity)` pairs
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Prints success and info to stdout, warnings and errors to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => {
                let _ = writeln!(std::io::stdout(), "{}", message);
            }
            Severity::Warning | Severity::Error => {
                let _ = writeln!(std::io::stderr(), "{}", message);
            }
        }
    }
}

/// Keeps every notification in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CollectingNotifier {
    received: std::sync::Mutex<Vec<(String, Severity)>>,
}

#[cfg(test)]
impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first
    pub fn received(&self) -> Vec<(String, Severity)> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if let Ok(mut received) = self.received.lock() {
            received.push((message.to_string(), severity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_notifier() {
        let notifier = CollectingNotifier::new();
        notifier.notify("saved", Severity::Success);
        notifier.notify("bad file", Severity::Error);

        assert_eq!(
            notifier.received(),
            vec![
                ("saved".to_string(), Severity::Success),
                ("bad file".to_string(), Severity::Error)
            ]
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
