use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::applications::domain::{ApplicationRecord, DecisionError, NewApplication};
use super::assessment::{AssessmentQuestion, AssessmentResponse, QuestionId};
use super::domain::{ApplicationId, Job, JobId, NewJob, NewStudent, Student, StudentId};
use super::ratings::CompanyRating;
use super::repository::{
    ApplicationRepository, AssessmentRepository, JobRepository, RatingRepository,
    RepositoryError, StudentRepository,
};

/// Process-local store backing the demo CLI and the HTTP service.
#[derive(Default, Clone)]
pub struct InMemoryPlacementStore {
    state: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    students: BTreeMap<StudentId, Student>,
    jobs: BTreeMap<JobId, Job>,
    applications: BTreeMap<ApplicationId, ApplicationRecord>,
    questions: BTreeMap<QuestionId, AssessmentQuestion>,
    responses: Vec<AssessmentResponse>,
    ratings: Vec<CompanyRating>,
    next_student: u64,
    next_job: u64,
    next_application: u64,
}

impl InMemoryPlacementStore {
    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
    }

    pub fn response_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.responses.len())
    }
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

impl StudentRepository for InMemoryPlacementStore {
    fn insert_student(&self, student: NewStudent) -> Result<Student, RepositoryError> {
        let mut state = self.lock()?;
        if state.students.values().any(|existing| existing.name == student.name) {
            return Err(RepositoryError::Conflict);
        }

        let id = StudentId(next_id(&mut state.next_student));
        let stored = Student {
            id,
            name: student.name,
            skills: student.skills,
            github_url: student.github_url,
            projects: student.projects,
            credential_locker_id: student.credential_locker_id,
            soft_skills_score: 0.0,
            created_at: Utc::now(),
        };
        state.students.insert(id, stored.clone());
        Ok(stored)
    }

    fn update_student(&self, student: Student) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        match state.students.get_mut(&student.id) {
            Some(existing) => {
                *existing = student;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn student(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        Ok(self.lock()?.students.get(&id).cloned())
    }

    fn student_by_name(&self, name: &str) -> Result<Option<Student>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .students
            .values()
            .find(|student| student.name == name)
            .cloned())
    }

    fn set_soft_skills_score(&self, id: StudentId, score: f64) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        let student = state
            .students
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        student.soft_skills_score = score;
        Ok(())
    }
}

impl JobRepository for InMemoryPlacementStore {
    fn insert_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        let mut state = self.lock()?;
        let id = JobId(next_id(&mut state.next_job));
        let stored = Job {
            id,
            title: job.title,
            company_name: job.company_name,
            description: job.description,
            required_skills: job.required_skills,
            posted_at: Utc::now(),
        };
        state.jobs.insert(id, stored.clone());
        Ok(stored)
    }

    fn job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.get(&id).cloned())
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.values().cloned().collect())
    }
}

impl ApplicationRepository for InMemoryPlacementStore {
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError> {
        let mut state = self.lock()?;
        if !state.jobs.contains_key(&application.job_id) {
            return Err(RepositoryError::NotFound);
        }

        let id = ApplicationId(next_id(&mut state.next_application));
        let record = ApplicationRecord::from_new(id, application);
        state.applications.insert(id, record.clone());
        Ok(record)
    }

    fn decide_application<F>(
        &self,
        id: ApplicationId,
        decide: F,
    ) -> Result<Result<ApplicationRecord, DecisionError>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord) -> Result<(), DecisionError>,
    {
        let mut state = self.lock()?;
        let stored = state
            .applications
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;

        let mut decided = stored.clone();
        if let Err(refusal) = decide(&mut decided) {
            return Ok(Err(refusal));
        }
        *stored = decided.clone();
        Ok(Ok(decided))
    }

    fn application(&self, id: ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.applications.get(&id).cloned())
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.applications.values().cloned().collect())
    }
}

impl AssessmentRepository for InMemoryPlacementStore {
    fn questions(&self) -> Result<Vec<AssessmentQuestion>, RepositoryError> {
        Ok(self.lock()?.questions.values().cloned().collect())
    }

    fn seed_questions(&self, questions: Vec<AssessmentQuestion>) -> Result<usize, RepositoryError> {
        let mut state = self.lock()?;
        if !state.questions.is_empty() {
            return Ok(0);
        }

        let added = questions.len();
        state.questions = questions
            .into_iter()
            .map(|question| (question.id, question))
            .collect();
        Ok(added)
    }

    fn append_responses(&self, responses: Vec<AssessmentResponse>) -> Result<(), RepositoryError> {
        self.lock()?.responses.extend(responses);
        Ok(())
    }

    fn responses_for(&self, student: StudentId) -> Result<Vec<AssessmentResponse>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .responses
            .iter()
            .filter(|response| response.student_id == student)
            .cloned()
            .collect())
    }
}

impl RatingRepository for InMemoryPlacementStore {
    fn append_rating(&self, rating: CompanyRating) -> Result<(), RepositoryError> {
        self.lock()?.ratings.push(rating);
        Ok(())
    }

    fn ratings(&self) -> Result<Vec<CompanyRating>, RepositoryError> {
        Ok(self.lock()?.ratings.clone())
    }
}
