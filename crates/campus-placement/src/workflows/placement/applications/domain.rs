use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::screening::ScreeningOutcome;
use crate::workflows::placement::domain::{ApplicationId, Job, JobId, Student, StudentId};

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub const fn is_decided(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }
}

/// Non-blank recruiter explanation required for every manual rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RejectionReason(String);

impl RejectionReason {
    pub fn new(raw: impl Into<String>) -> Result<Self, DecisionError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DecisionError::MissingRejectionReason);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Refusals raised when a recruiter decision cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("a non-empty reason is mandatory for rejection")]
    MissingRejectionReason,
    #[error("application {id} was already {}", .status.label())]
    AlreadyDecided {
        id: ApplicationId,
        status: ApplicationStatus,
    },
}

/// Application fields produced by screening, before the repository assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: JobId,
    pub student_id: Option<StudentId>,
    pub student_name: String,
    pub status: ApplicationStatus,
    pub auto_rejected: bool,
    pub feedback: Option<String>,
}

impl NewApplication {
    pub fn screened(student: &Student, job: &Job, outcome: ScreeningOutcome) -> Self {
        let status = outcome.status();
        let auto_rejected = outcome.auto_rejected();
        Self {
            job_id: job.id,
            student_id: Some(student.id),
            student_name: student.name.clone(),
            status,
            auto_rejected,
            feedback: outcome.into_feedback(),
        }
    }
}

/// Stored application with its decision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub student_id: Option<StudentId>,
    pub student_name: String,
    pub status: ApplicationStatus,
    pub auto_rejected: bool,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn from_new(id: ApplicationId, application: NewApplication) -> Self {
        Self {
            id,
            job_id: application.job_id,
            student_id: application.student_id,
            student_name: application.student_name,
            status: application.status,
            auto_rejected: application.auto_rejected,
            feedback: application.feedback,
            created_at: Utc::now(),
        }
    }

    pub fn accept(&mut self, message: &str) -> Result<(), DecisionError> {
        self.ensure_pending()?;
        self.status = ApplicationStatus::Accepted;
        self.feedback = Some(message.to_string());
        Ok(())
    }

    pub fn reject(&mut self, reason: RejectionReason) -> Result<(), DecisionError> {
        self.ensure_pending()?;
        self.status = ApplicationStatus::Rejected;
        self.feedback = Some(reason.0);
        Ok(())
    }

    /// Rejected applications must always carry a reason.
    pub fn feedback_invariant_holds(&self) -> bool {
        self.status != ApplicationStatus::Rejected
            || self
                .feedback
                .as_deref()
                .is_some_and(|feedback| !feedback.trim().is_empty())
    }

    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.id,
            job_id: self.job_id,
            student_name: self.student_name.clone(),
            status: self.status.label(),
            auto_rejected: self.auto_rejected,
            feedback: self.feedback.clone(),
        }
    }

    fn ensure_pending(&self) -> Result<(), DecisionError> {
        if self.status.is_decided() {
            return Err(DecisionError::AlreadyDecided {
                id: self.id,
                status: self.status,
            });
        }
        Ok(())
    }
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub student_name: String,
    pub status: &'static str,
    pub auto_rejected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
