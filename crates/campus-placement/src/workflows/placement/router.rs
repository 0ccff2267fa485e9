use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::applications::{ApplicationRecord, ApplicationStatusView, DecisionError};
use super::assessment::SubmittedAnswers;
use super::domain::{ApplicationId, JobId, JobPosting, ProfileSubmission, Student, StudentId};
use super::profiles::ProfileChange;
use super::ratings::RatingSubmission;
use super::repository::{PlacementStore, RepositoryError};
use super::{PlacementServiceError, PlacementServices};

type Services<S> = State<Arc<PlacementServices<S>>>;

/// Router builder exposing the placement workflow over JSON.
pub fn placement_router<S>(services: Arc<PlacementServices<S>>) -> Router
where
    S: PlacementStore + 'static,
{
    Router::new()
        .route("/api/v1/students", post(save_profile_handler::<S>))
        .route("/api/v1/students/:student_id", get(student_handler::<S>))
        .route("/api/v1/students/:student_id/applications", get(student_applications_handler::<S>))
        .route("/api/v1/jobs", post(post_job_handler::<S>).get(list_jobs_handler::<S>))
        .route("/api/v1/jobs/:job_id/applications", post(apply_handler::<S>))
        .route("/api/v1/applications", get(list_applications_handler::<S>))
        .route("/api/v1/applications/:application_id", get(application_handler::<S>))
        .route("/api/v1/applications/:application_id/accept", post(accept_handler::<S>))
        .route("/api/v1/applications/:application_id/reject", post(reject_handler::<S>))
        .route("/api/v1/recommendations", post(recommendations_handler::<S>))
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessment/submissions", post(assessment_handler::<S>))
        .route("/api/v1/ratings", post(rate_handler::<S>))
        .route("/api/v1/ratings/companies", get(company_stats_handler::<S>))
        .with_state(services)
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileResponse {
    pub(crate) student: Student,
    pub(crate) change: ProfileChange,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    #[serde(default)]
    pub(crate) student_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RejectRequest {
    #[serde(default)]
    pub(crate) reason: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    pub(crate) skills: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) student_name: String,
    #[serde(default)]
    pub(crate) answers: SubmittedAnswers,
}

pub(crate) fn error_response(error: PlacementServiceError) -> Response {
    let status = match &error {
        PlacementServiceError::MissingStudentName
        | PlacementServiceError::ProfileRequired { .. }
        | PlacementServiceError::MissingField { .. }
        | PlacementServiceError::RatingOutOfRange(_)
        | PlacementServiceError::Decision(DecisionError::MissingRejectionReason) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PlacementServiceError::StudentNotFound(_)
        | PlacementServiceError::JobNotFound(_)
        | PlacementServiceError::ApplicationNotFound(_)
        | PlacementServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        PlacementServiceError::Decision(DecisionError::AlreadyDecided { .. })
        | PlacementServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        PlacementServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

fn views(records: Vec<ApplicationRecord>) -> Vec<ApplicationStatusView> {
    records.iter().map(|record| record.status_view()).collect()
}

pub(crate) async fn save_profile_handler<S>(
    State(services): Services<S>,
    Json(submission): Json<ProfileSubmission>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.profiles.save(submission) {
        Ok((student, change)) => {
            let status = match change {
                ProfileChange::Created => StatusCode::CREATED,
                ProfileChange::Updated => StatusCode::OK,
            };
            (status, Json(ProfileResponse { student, change })).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_handler<S>(
    State(services): Services<S>,
    Path(student_id): Path<u64>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.profiles.get(StudentId(student_id)) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_applications_handler<S>(
    State(services): Services<S>,
    Path(student_id): Path<u64>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.applications.for_student(StudentId(student_id)) {
        Ok(records) => (StatusCode::OK, Json(views(records))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn post_job_handler<S>(
    State(services): Services<S>,
    Json(posting): Json<JobPosting>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.jobs.post(posting) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_jobs_handler<S>(State(services): Services<S>) -> Response
where
    S: PlacementStore + 'static,
{
    match services.jobs.listings() {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn apply_handler<S>(
    State(services): Services<S>,
    Path(job_id): Path<u64>,
    Json(request): Json<ApplyRequest>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services
        .applications
        .apply(JobId(job_id), &request.student_name)
    {
        Ok(record) => (StatusCode::CREATED, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_applications_handler<S>(State(services): Services<S>) -> Response
where
    S: PlacementStore + 'static,
{
    match services.applications.all() {
        Ok(records) => (StatusCode::OK, Json(views(records))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn application_handler<S>(
    State(services): Services<S>,
    Path(application_id): Path<u64>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.applications.get(ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn accept_handler<S>(
    State(services): Services<S>,
    Path(application_id): Path<u64>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.applications.accept(ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reject_handler<S>(
    State(services): Services<S>,
    Path(application_id): Path<u64>,
    Json(request): Json<RejectRequest>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services
        .applications
        .reject(ApplicationId(application_id), &request.reason)
    {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<S>(
    State(services): Services<S>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.jobs.recommendations(&request.skills) {
        Ok(recommended) => (StatusCode::OK, Json(json!({ "recommended": recommended })))
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questions_handler<S>(State(services): Services<S>) -> Response
where
    S: PlacementStore + 'static,
{
    match services.assessment.questions() {
        Ok(questions) => (StatusCode::OK, Json(questions)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn assessment_handler<S>(
    State(services): Services<S>,
    Json(request): Json<AssessmentRequest>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services
        .assessment
        .submit(&request.student_name, &request.answers)
    {
        Ok(attempt) => (StatusCode::CREATED, Json(attempt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rate_handler<S>(
    State(services): Services<S>,
    Json(submission): Json<RatingSubmission>,
) -> Response
where
    S: PlacementStore + 'static,
{
    match services.ratings.rate(submission) {
        Ok(rating) => (StatusCode::CREATED, Json(rating)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn company_stats_handler<S>(State(services): Services<S>) -> Response
where
    S: PlacementStore + 'static,
{
    match services.ratings.company_stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}
