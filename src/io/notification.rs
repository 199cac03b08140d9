//! Auto-dismissing user messages
//!
//! One success slot and one error slot: a new message replaces the one in
//! its slot, and each expires after a fixed display time. Every message is
//! also emitted as a `tracing` event so headless runs keep a record.

use crate::io::configuration::{ERROR_DISPLAY_TIME, SUCCESS_DISPLAY_TIME};
use crate::io::error::{EngineError, Result};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Kind of message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Completed action
    Success,
    /// Failed action
    Error,
}

/// A message and its visibility window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Kind of message
    pub level: NotificationLevel,
    /// Text shown to the user
    pub message: String,
    /// When the message appeared
    pub shown_at: Instant,
    /// How long it stays visible
    pub display_time: Duration,
}

impl Notification {
    /// Whether the message is still visible at `now`
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.display_time
    }
}

/// Boundary where errors become messages instead of propagating
#[derive(Debug, Default)]
pub struct Notifier {
    success: Option<Notification>,
    error: Option<Notification>,
}

impl Notifier {
    /// Notifier with nothing showing
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success message, replacing any previous one
    pub fn success(&mut self, message: impl Into<String>) {
        self.success_at(message, Instant::now());
    }

    /// Show a success message appearing at `now`
    pub fn success_at(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        info!(notification = %message, "Success");
        self.success = Some(Notification {
            level: NotificationLevel::Success,
            message,
            shown_at: now,
            display_time: SUCCESS_DISPLAY_TIME,
        });
    }

    /// Show an error message, replacing any previous one
    pub fn error(&mut self, err: &EngineError) {
        self.error_at(err, Instant::now());
    }

    /// Show an error message appearing at `now`
    pub fn error_at(&mut self, err: &EngineError, now: Instant) {
        let message = err.to_string();
        error!(notification = %message, "Error");
        self.error = Some(Notification {
            level: NotificationLevel::Error,
            message,
            shown_at: now,
            display_time: ERROR_DISPLAY_TIME,
        });
    }

    /// Unwrap a result, turning a failure into an error message
    pub fn report<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error(&err);
                None
            }
        }
    }

    /// Messages still visible at `now`, errors first
    pub fn visible(&self, now: Instant) -> Vec<&Notification> {
        [self.error.as_ref(), self.success.as_ref()]
            .into_iter()
            .flatten()
            .filter(|notification| notification.is_visible(now))
            .collect()
    }

    /// Whether an error has been reported
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
