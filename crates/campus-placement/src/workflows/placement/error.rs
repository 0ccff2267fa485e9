use super::applications::domain::DecisionError;
use super::domain::{ApplicationId, JobId, StudentId};
use super::repository::RepositoryError;

/// Error raised by the placement services.
#[derive(Debug, thiserror::Error)]
pub enum PlacementServiceError {
    #[error("student name is required")]
    MissingStudentName,
    #[error("no profile exists for '{name}'; create your profile first")]
    ProfileRequired { name: String },
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("rating must be between 1 and 5, found {0}")]
    RatingOutOfRange(u8),
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error(transparent)]
    Decision(#[from] DecisionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, PlacementServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlacementServiceError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn student_name(value: &str) -> Result<String, PlacementServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlacementServiceError::MissingStudentName);
    }
    Ok(trimmed.to_string())
}
