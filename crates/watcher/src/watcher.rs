//! Polling loop: fetch, validate, extract, notify, sleep.
//!
//! Each cycle runs to completion before the next one starts. No error inside a
//! cycle escapes it: fetch, validation and extraction failures become a single
//! failure notification (deduplicated against the previous one), and send
//! failures are only logged.
//!
//! The cursor advances to the server's `current_date` only after a cycle that
//! got past extraction, so an unvalidated window is never skipped.

use std::time::Duration;

use serde_json::Value;

use homework_common::error::CycleError;
use homework_common::types::PollCursor;
use homework_engine::dedup::{FailureDeduplicator, failure_message};
use homework_engine::{status, validator};
use homework_notifier::Notifier;

use crate::client::HomeworkApi;

/// What a single polling cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The latest homework changed status and a notification was attempted.
    StatusChanged { message: String, delivered: bool },
    /// The response was valid but held no homework updates.
    NoUpdates,
    /// The cycle failed. `reported` is false when the failure text repeated the
    /// previous one and the notification was suppressed.
    Failed { message: String, reported: bool },
}

/// Single-user homework status watcher.
///
/// Owns the poll cursor and the failure deduplication state.
pub struct StatusWatcher<A, N> {
    api: A,
    notifier: N,
    cursor: PollCursor,
    failures: FailureDeduplicator,
    retry_time: Duration,
}

impl<A, N> StatusWatcher<A, N>
where
    A: HomeworkApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N, cursor: PollCursor, retry_time: Duration) -> Self {
        Self {
            api,
            notifier,
            cursor,
            failures: FailureDeduplicator::new(),
            retry_time,
        }
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn last_failure_message(&self) -> Option<&str> {
        self.failures.last_message()
    }

    /// Start the polling loop. Runs until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            notifier = self.notifier.type_name(),
            from_date = self.cursor.timestamp(),
            retry_time_secs = self.retry_time.as_secs(),
            "Status watcher started"
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, cursor = self.cursor.timestamp(), "Cycle finished");

            tokio::time::sleep(self.retry_time).await;
        }
    }

    /// Run one fetch → validate → extract → send cycle.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let payload = self.api.fetch(self.cursor).await?;
        let homeworks = validator::validate(&payload)?;

        // Only the most recent homework matters.
        let Some(latest) = homeworks.first() else {
            tracing::debug!("No new homework statuses");
            self.advance(&payload);
            return Ok(CycleOutcome::NoUpdates);
        };

        let message = status::parse_status(latest)?;

        tracing::info!(
            homework = latest.homework_name.as_deref().unwrap_or_default(),
            status = latest.status.as_deref().unwrap_or_default(),
            lesson = latest.lesson_name.as_deref().unwrap_or_default(),
            reviewer_comment = latest.reviewer_comment.as_deref().unwrap_or_default(),
            "Homework status changed"
        );

        let delivered = self.deliver(&message).await;
        self.advance(&payload);

        Ok(CycleOutcome::StatusChanged { message, delivered })
    }

    async fn report_failure(&mut self, error: CycleError) -> CycleOutcome {
        tracing::error!(error = %error, "Polling cycle failed");

        let message = failure_message(&error);
        if !self.failures.should_send(&message) {
            return CycleOutcome::Failed {
                message,
                reported: false,
            };
        }

        self.deliver(&message).await;
        CycleOutcome::Failed {
            message,
            reported: true,
        }
    }

    /// Send `message`, logging instead of propagating any delivery error.
    async fn deliver(&self, message: &str) -> bool {
        match self.notifier.send_text(message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    notifier = self.notifier.type_name(),
                    error = %e,
                    text = message,
                    "Failed to send notification"
                );
                false
            }
        }
    }

    fn advance(&mut self, payload: &Value) {
        self.cursor = match validator::current_date(payload) {
            Some(ts) => PollCursor::new(ts),
            None => {
                tracing::warn!("Response has no usable current_date, falling back to local clock");
                PollCursor::now()
            }
        };
    }
}
