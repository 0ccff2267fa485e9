//! Campus placement workflow: profiles, job postings, skill screening at application time,
//! recommendations, the soft-skills assessment and company ratings.

pub mod applications;
pub mod assessment;
pub mod domain;
mod error;
pub mod jobs;
pub mod memory;
pub mod profiles;
pub mod ratings;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod skills;

use std::sync::Arc;

use crate::config::PlacementConfig;

pub use applications::{
    ApplicationRecord, ApplicationService, ApplicationStatus, ApplicationStatusView,
    ScreeningOutcome,
};
pub use assessment::{AssessmentAttempt, AssessmentService, SubmittedAnswers};
pub use domain::{ApplicationId, Job, JobId, JobPosting, ProfileSubmission, Student, StudentId};
pub use error::PlacementServiceError;
pub use jobs::{JobBoard, JobImportError};
pub use memory::InMemoryPlacementStore;
pub use profiles::{ProfileChange, ProfileService};
pub use ratings::{CompanyRating, CompanyStats, RatingService, RatingSubmission};
pub use recommendations::{recommend, recommend_jobs};
pub use repository::{PlacementStore, RepositoryError};
pub use router::placement_router;
pub use skills::SkillSet;

/// Every placement service wired to one shared store.
pub struct PlacementServices<S> {
    pub profiles: ProfileService<S>,
    pub jobs: JobBoard<S>,
    pub applications: ApplicationService<S>,
    pub assessment: AssessmentService<S>,
    pub ratings: RatingService<S>,
}

impl<S> PlacementServices<S>
where
    S: PlacementStore + 'static,
{
    pub fn new(store: Arc<S>, config: &PlacementConfig) -> Self {
        Self {
            profiles: ProfileService::new(store.clone()),
            jobs: JobBoard::new(store.clone()),
            applications: ApplicationService::new(store.clone(), config),
            assessment: AssessmentService::new(store.clone()),
            ratings: RatingService::new(store),
        }
    }
}
