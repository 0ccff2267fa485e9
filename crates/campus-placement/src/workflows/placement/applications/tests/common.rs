use std::sync::Arc;
use std::thread;
use std::time::Duration;

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::config::PlacementConfig;
use crate::workflows::placement::applications::domain::{
    ApplicationRecord, DecisionError, NewApplication,
};
use crate::workflows::placement::assessment::{AssessmentQuestion, AssessmentResponse};
use crate::workflows::placement::domain::{
    ApplicationId, Job, JobId, JobPosting, NewJob, NewStudent, ProfileSubmission, Student,
    StudentId,
};
use crate::workflows::placement::ratings::CompanyRating;
use crate::workflows::placement::repository::{
    ApplicationRepository, AssessmentRepository, JobRepository, RatingRepository,
    RepositoryError, StudentRepository,
};
use crate::workflows::placement::skills::SkillSet;
use crate::workflows::placement::{
    placement_router, ApplicationService, InMemoryPlacementStore, PlacementServices,
};

pub(super) fn student(id: u64, name: &str, skills: &str) -> Student {
    Student {
        id: StudentId(id),
        name: name.to_string(),
        skills: SkillSet::parse(skills),
        github_url: format!("https://github.com/{}", name.to_lowercase()),
        projects: "Campus portal".to_string(),
        credential_locker_id: String::new(),
        soft_skills_score: 0.0,
        created_at: Utc::now(),
    }
}

pub(super) fn job(id: u64, skills: &str) -> Job {
    Job {
        id: JobId(id),
        title: "Data Analyst".to_string(),
        company_name: "Goldman Sachs".to_string(),
        description: "Analyze financial trends.".to_string(),
        required_skills: SkillSet::parse(skills),
        posted_at: Utc::now(),
    }
}

pub(super) fn postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            title: "Machine Learning Intern".to_string(),
            company_name: "DeepMind".to_string(),
            description: "Work on LLMs.".to_string(),
            skills: "Python, Pytorch, AI".to_string(),
        },
        JobPosting {
            title: "Web Developer".to_string(),
            company_name: "Google".to_string(),
            description: "Build React dashboards.".to_string(),
            skills: "React, JavaScript, CSS".to_string(),
        },
        JobPosting {
            title: "Data Analyst".to_string(),
            company_name: "Goldman Sachs".to_string(),
            description: "Analyze financial trends.".to_string(),
            skills: "SQL, Excel, Python".to_string(),
        },
    ]
}

pub(super) fn profile(name: &str, skills: Option<&str>) -> ProfileSubmission {
    ProfileSubmission {
        name: name.to_string(),
        skills: skills.map(str::to_string),
        ..ProfileSubmission::default()
    }
}

/// Services over a store holding the three demo jobs (ids 1 to 3).
pub(super) fn build_services() -> (
    Arc<PlacementServices<InMemoryPlacementStore>>,
    Arc<InMemoryPlacementStore>,
) {
    let store = Arc::new(InMemoryPlacementStore::default());
    let services = PlacementServices::new(store.clone(), &PlacementConfig::default());
    for posting in postings() {
        services.jobs.post(posting).expect("demo job posts");
    }
    (Arc::new(services), store)
}

pub(super) fn application_service_with(
    store: Arc<InMemoryPlacementStore>,
    config: PlacementConfig,
) -> ApplicationService<InMemoryPlacementStore> {
    ApplicationService::new(store, &config)
}

pub(super) fn router_with_services(
    services: Arc<PlacementServices<InMemoryPlacementStore>>,
) -> axum::Router {
    placement_router(services)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

impl StudentRepository for UnavailableStore {
    fn insert_student(&self, _student: NewStudent) -> Result<Student, RepositoryError> {
        offline()
    }

    fn update_student(&self, _student: Student) -> Result<(), RepositoryError> {
        offline()
    }

    fn student(&self, _id: StudentId) -> Result<Option<Student>, RepositoryError> {
        offline()
    }

    fn student_by_name(&self, _name: &str) -> Result<Option<Student>, RepositoryError> {
        offline()
    }

    fn set_soft_skills_score(&self, _id: StudentId, _score: f64) -> Result<(), RepositoryError> {
        offline()
    }
}

impl JobRepository for UnavailableStore {
    fn insert_job(&self, _job: NewJob) -> Result<Job, RepositoryError> {
        offline()
    }

    fn job(&self, _id: JobId) -> Result<Option<Job>, RepositoryError> {
        offline()
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        offline()
    }
}

impl ApplicationRepository for UnavailableStore {
    fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        offline()
    }

    fn decide_application<F>(
        &self,
        _id: ApplicationId,
        _decide: F,
    ) -> Result<Result<ApplicationRecord, DecisionError>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord) -> Result<(), DecisionError>,
    {
        offline()
    }

    fn application(&self, _id: ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        offline()
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        offline()
    }
}

impl AssessmentRepository for UnavailableStore {
    fn questions(&self) -> Result<Vec<AssessmentQuestion>, RepositoryError> {
        offline()
    }

    fn seed_questions(&self, _questions: Vec<AssessmentQuestion>) -> Result<usize, RepositoryError> {
        offline()
    }

    fn append_responses(&self, _responses: Vec<AssessmentResponse>) -> Result<(), RepositoryError> {
        offline()
    }

    fn responses_for(&self, _student: StudentId) -> Result<Vec<AssessmentResponse>, RepositoryError> {
        offline()
    }
}

impl RatingRepository for UnavailableStore {
    fn append_rating(&self, _rating: CompanyRating) -> Result<(), RepositoryError> {
        offline()
    }

    fn ratings(&self) -> Result<Vec<CompanyRating>, RepositoryError> {
        offline()
    }
}

/// In-memory store that stalls on application reads and inside decisions, widening the
/// window in which concurrent recruiter decisions overlap.
#[derive(Clone, Default)]
pub(super) struct SlowDecisionStore {
    pub(super) inner: InMemoryPlacementStore,
}

const DECISION_DELAY: Duration = Duration::from_millis(20);

impl StudentRepository for SlowDecisionStore {
    fn insert_student(&self, student: NewStudent) -> Result<Student, RepositoryError> {
        self.inner.insert_student(student)
    }

    fn update_student(&self, student: Student) -> Result<(), RepositoryError> {
        self.inner.update_student(student)
    }

    fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        self.inner.student(id)
    }

    fn student_by_name(&self, name: &str) -> Result<Option<Student>, RepositoryError> {
        self.inner.student_by_name(name)
    }

    fn set_soft_skills_score(&self, id: StudentId, score: f64) -> Result<(), RepositoryError> {
        self.inner.set_soft_skills_score(id, score)
    }
}

impl JobRepository for SlowDecisionStore {
    fn insert_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        self.inner.insert_job(job)
    }

    fn job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        self.inner.job(id)
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        self.inner.jobs()
    }
}

impl ApplicationRepository for SlowDecisionStore {
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        self.inner.insert_application(application)
    }

    fn decide_application<F>(
        &self,
        id: ApplicationId,
        decide: F,
    ) -> Result<Result<ApplicationRecord, DecisionError>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord) -> Result<(), DecisionError>,
    {
        self.inner.decide_application(id, |record| {
            thread::sleep(DECISION_DELAY);
            decide(record)
        })
    }

    fn application(&self, id: ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        thread::sleep(DECISION_DELAY);
        self.inner.application(id)
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        self.inner.applications()
    }
}
