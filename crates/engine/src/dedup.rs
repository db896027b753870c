//! Failure deduplication: suppresses identical consecutive failure notifications.
//!
//! A broken endpoint or an expired token fails the same way every cycle. Only
//! the first occurrence of a given failure text is sent to the chat; it is sent
//! again only after a different failure text has been seen in between.
//!
//! State is in-memory and resets on restart.

/// Prefix of every failure notification.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Format the chat text for a cycle failure.
pub fn failure_message(error: &impl std::fmt::Display) -> String {
    format!("{FAILURE_PREFIX}: {error}")
}

/// Remembers the last failure message a send was attempted for.
#[derive(Debug, Default)]
pub struct FailureDeduplicator {
    last_message: Option<String>,
}

impl FailureDeduplicator {
    pub fn new() -> Self {
        Self { last_message: None }
    }

    /// Decide whether `message` should be sent, recording it if so.
    ///
    /// Returns `false` when `message` equals the previously recorded one. The
    /// record is updated on every `true` result, whether or not the caller's
    /// send then succeeds.
    pub fn should_send(&mut self, message: &str) -> bool {
        if self.last_message.as_deref() == Some(message) {
            tracing::debug!(
                text = message,
                "Failure notification suppressed, identical to previous"
            );
            return false;
        }
        self.last_message = Some(message.to_string());
        true
    }

    /// The last failure message recorded, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }
}
