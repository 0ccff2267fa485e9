mod policy;

pub use policy::{mismatch_feedback, screen};

use serde::{Deserialize, Serialize};

use super::domain::ApplicationStatus;

/// Result of applying the auto-reject rule to one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScreeningOutcome {
    AcceptedForReview,
    AutoRejected { feedback: String },
}

impl ScreeningOutcome {
    pub fn status(&self) -> ApplicationStatus {
        match self {
            ScreeningOutcome::AcceptedForReview => ApplicationStatus::Pending,
            ScreeningOutcome::AutoRejected { .. } => ApplicationStatus::Rejected,
        }
    }

    pub fn auto_rejected(&self) -> bool {
        matches!(self, ScreeningOutcome::AutoRejected { .. })
    }

    pub fn feedback(&self) -> Option<&str> {
        match self {
            ScreeningOutcome::AcceptedForReview => None,
            ScreeningOutcome::AutoRejected { feedback } => Some(feedback),
        }
    }

    pub fn into_feedback(self) -> Option<String> {
        match self {
            ScreeningOutcome::AcceptedForReview => None,
            ScreeningOutcome::AutoRejected { feedback } => Some(feedback),
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ScreeningOutcome::AcceptedForReview => "accepted for review",
            ScreeningOutcome::AutoRejected { .. } => "automatically rejected for skills mismatch",
        }
    }
}
