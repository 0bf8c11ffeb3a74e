//! Best-effort share hook.
//!
//! Sharing is a capability injected into the presentation layer so the game
//! core stays testable without a real host facility. A share may fail; the
//! caller records the failure and moves on. It never affects game state and
//! is never retried.

use std::fmt;

/// Where a shared game claims to live. The terminal analog of a page URL.
pub const SHARE_LOCATION: &str = concat!("seesaw v", env!("CARGO_PKG_VERSION"));

/// Payload handed to a [`Sharer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Short title.
    pub title: String,
    /// Free-text summary containing both totals.
    pub text: String,
    /// Location string identifying the game.
    pub location: String,
}

impl SharePayload {
    /// Build the standard payload for the current totals.
    #[must_use]
    pub fn from_totals(left_total: f64, right_total: f64) -> Self {
        Self {
            title: "Number Balance Game".to_string(),
            text: format!(
                "I balanced the numbers! Left total: {left_total}, Right total: {right_total}"
            ),
            location: SHARE_LOCATION.to_string(),
        }
    }
}

/// Error raised by a [`Sharer`] implementation.
///
/// Callers swallow this after recording it; it must never propagate into
/// game state.
#[derive(Debug, Clone)]
pub struct ShareError {
    message: String,
}

impl ShareError {
    /// Create a new share error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ShareError {}

/// Capability for handing a share payload to the host environment.
pub trait Sharer {
    /// Perform the share.
    ///
    /// # Errors
    ///
    /// Returns an error if the host facility rejects the payload. Failures
    /// are fire-and-forget: callers log and continue.
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// The absent share capability: sharing silently succeeds as a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSharer;

impl Sharer for NullSharer {
    fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSharer {
        shared: RefCell<Vec<SharePayload>>,
    }

    impl Sharer for RecordingSharer {
        fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            self.shared.borrow_mut().push(payload.clone());
            Ok(())
        }
    }

    struct FailingSharer;

    impl Sharer for FailingSharer {
        fn share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
            Err(ShareError::new("share facility unavailable"))
        }
    }

    #[test]
    fn test_payload_contains_totals() {
        let payload = SharePayload::from_totals(8.0, 7.5);
        assert!(payload.text.contains("Left total: 8"));
        assert!(payload.text.contains("Right total: 7.5"));
    }

    #[test]
    fn test_null_sharer_is_silent() {
        let payload = SharePayload::from_totals(0.0, 0.0);
        assert!(NullSharer.share(&payload).is_ok());
    }

    #[test]
    fn test_recording_sharer_receives_payload() {
        let sharer = RecordingSharer {
            shared: RefCell::new(Vec::new()),
        };
        let payload = SharePayload::from_totals(3.0, 3.0);
        sharer.share(&payload).unwrap();
        assert_eq!(sharer.shared.borrow().len(), 1);
        assert_eq!(sharer.shared.borrow()[0], payload);
    }

    #[test]
    fn test_failure_is_reportable() {
        let payload = SharePayload::from_totals(1.0, 2.0);
        let err = FailingSharer.share(&payload).unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
