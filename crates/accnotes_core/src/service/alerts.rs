//! User-facing notifications for save outcomes.

/// Severity shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Success,
    Failure,
}

/// One notification destined for the alerting collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    pub fn note_saved() -> Self {
        Self {
            severity: AlertSeverity::Success,
            title: "Success",
            message: "Note saved successfully".to_string(),
        }
    }

    pub fn note_save_failed() -> Self {
        Self {
            severity: AlertSeverity::Failure,
            title: "Error",
            message: "Failed to save the note".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == AlertSeverity::Success
    }
}

/// Sink for alerts raised by the notes screen.
pub trait Notifier {
    fn notify(&mut self, alert: Alert);
}

/// Buffers alerts until the caller drains them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQueue {
    pending: Vec<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Alert] {
        &self.pending
    }

    /// Returns and clears all buffered alerts, oldest first.
    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for AlertQueue {
    fn notify(&mut self, alert: Alert) {
        self.pending.push(alert);
    }
}
