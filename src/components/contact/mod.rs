//! Contact form: submit through the EmailJS relay and report the outcome on
//! the submit button.

#[cfg(target_arch = "wasm32")]
pub mod relay;
#[cfg(target_arch = "wasm32")]
pub mod render;

use crate::config::ContactConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

/// What the page should do once the relay answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    /// Restore the original label after this delay.
    pub revert_after_ms: Option<u32>,
    pub reset_form: bool,
    /// Blocking message for the visitor.
    pub alert: Option<String>,
}

/// State of the submit button. The original label is captured once, so a
/// second submission never mistakes a status message for it.
#[derive(Debug)]
pub struct SubmitButton {
    original: String,
    phase: SubmitPhase,
}

impl SubmitButton {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a submission. `None` while one is already in flight.
    pub fn begin<'a>(&mut self, config: &'a ContactConfig) -> Option<&'a str> {
        if self.phase == SubmitPhase::Sending {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        Some(&config.sending_label)
    }

    pub fn finish(&mut self, delivered: bool, config: &ContactConfig) -> Outcome {
        if delivered {
            self.phase = SubmitPhase::Sent;
            Outcome {
                label: config.sent_label.clone(),
                revert_after_ms: Some(config.sent_revert_ms),
                reset_form: true,
                alert: None,
            }
        } else {
            self.phase = SubmitPhase::Idle;
            Outcome {
                label: self.original.clone(),
                revert_after_ms: None,
                reset_form: false,
                alert: Some(config.failure_alert.clone()),
            }
        }
    }

    /// Restore the original label after a success. `None` if another
    /// submission has started since.
    pub fn revert(&mut self) -> Option<&str> {
        if self.phase != SubmitPhase::Sent {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        Some(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_shows_sending() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        assert_eq!(button.begin(&config), Some("Sending..."));
        assert_eq!(button.phase(), SubmitPhase::Sending);
    }

    #[test]
    fn duplicate_submit_is_ignored_while_sending() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        button.begin(&config);
        assert_eq!(button.begin(&config), None);
    }

    #[test]
    fn success_shows_sent_then_reverts_and_resets() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        button.begin(&config);
        let outcome = button.finish(true, &config);
        assert_eq!(
            outcome,
            Outcome {
                label: "Message Sent!".to_string(),
                revert_after_ms: Some(2000),
                reset_form: true,
                alert: None,
            }
        );
        assert_eq!(button.revert(), Some("Send Message"));
        assert_eq!(button.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn failure_reverts_immediately_and_alerts() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        button.begin(&config);
        let outcome = button.finish(false, &config);
        assert_eq!(outcome.label, "Send Message");
        assert_eq!(outcome.revert_after_ms, None);
        assert!(!outcome.reset_form);
        assert_eq!(
            outcome.alert.as_deref(),
            Some("Failed to send message. Please try again.")
        );
    }

    #[test]
    fn revert_skipped_if_resubmitted() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        button.begin(&config);
        button.finish(true, &config);
        button.begin(&config);
        assert_eq!(button.revert(), None);
        assert_eq!(button.phase(), SubmitPhase::Sending);
    }

    #[test]
    fn can_resubmit_after_failure() {
        let config = ContactConfig::default();
        let mut button = SubmitButton::new("Send Message");
        button.begin(&config);
        button.finish(false, &config);
        assert_eq!(button.begin(&config), Some("Sending..."));
    }
}
