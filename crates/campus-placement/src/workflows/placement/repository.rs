//! Storage abstractions so the placement services can be exercised in isolation.
//!
//! Each trait covers one record family. Implementations own id assignment and are
//! responsible for whatever isolation concurrent writers need; the services hold no
//! state of their own between calls.

use super::applications::domain::{ApplicationRecord, DecisionError, NewApplication};
use super::assessment::{AssessmentQuestion, AssessmentResponse};
use super::domain::{ApplicationId, Job, JobId, NewJob, NewStudent, Student, StudentId};
use super::ratings::CompanyRating;

pub trait StudentRepository: Send + Sync {
    /// Fails with `Conflict` when the name is already taken.
    fn insert_student(&self, student: NewStudent) -> Result<Student, RepositoryError>;
    fn update_student(&self, student: Student) -> Result<(), RepositoryError>;
    fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError>;
    fn student_by_name(&self, name: &str) -> Result<Option<Student>, RepositoryError>;
    /// Replace the latest aggregate assessment score.
    fn set_soft_skills_score(&self, id: StudentId, score: f64) -> Result<(), RepositoryError>;
}

pub trait JobRepository: Send + Sync {
    fn insert_job(&self, job: NewJob) -> Result<Job, RepositoryError>;
    fn job(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError>;
}

pub trait ApplicationRepository: Send + Sync {
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError>;
    /// Run a recruiter decision against the stored record as one isolated step. `decide`
    /// sees the current stored state and nothing is written when it refuses. Fails with
    /// `NotFound` for unknown ids.
    fn decide_application<F>(
        &self,
        id: ApplicationId,
        decide: F,
    ) -> Result<Result<ApplicationRecord, DecisionError>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord) -> Result<(), DecisionError>;
    fn application(&self, id: ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

pub trait AssessmentRepository: Send + Sync {
    fn questions(&self) -> Result<Vec<AssessmentQuestion>, RepositoryError>;
    /// Store the bank only when no questions exist yet; returns how many were added.
    fn seed_questions(&self, questions: Vec<AssessmentQuestion>) -> Result<usize, RepositoryError>;
    /// Append without touching earlier attempts.
    fn append_responses(&self, responses: Vec<AssessmentResponse>) -> Result<(), RepositoryError>;
    fn responses_for(&self, student: StudentId) -> Result<Vec<AssessmentResponse>, RepositoryError>;
}

pub trait RatingRepository: Send + Sync {
    fn append_rating(&self, rating: CompanyRating) -> Result<(), RepositoryError>;
    fn ratings(&self) -> Result<Vec<CompanyRating>, RepositoryError>;
}

/// Everything the HTTP surface needs from a single backing store.
pub trait PlacementStore:
    StudentRepository + JobRepository + ApplicationRepository + AssessmentRepository + RatingRepository
{
}

impl<T> PlacementStore for T where
    T: StudentRepository
        + JobRepository
        + ApplicationRepository
        + AssessmentRepository
        + RatingRepository
{
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
