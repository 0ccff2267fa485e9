use std::cmp::Reverse;
use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{ApplicationRecord, DecisionError, NewApplication, RejectionReason};
use super::screening::screen;
use crate::config::PlacementConfig;
use crate::workflows::placement::domain::{ApplicationId, JobId, StudentId};
use crate::workflows::placement::error::{student_name, PlacementServiceError};
use crate::workflows::placement::repository::{
    ApplicationRepository, JobRepository, RepositoryError, StudentRepository,
};

/// Service composing skill screening with student, job and application storage.
pub struct ApplicationService<S> {
    store: Arc<S>,
    acceptance_message: String,
}

impl<S> ApplicationService<S>
where
    S: StudentRepository + JobRepository + ApplicationRepository + 'static,
{
    pub fn new(store: Arc<S>, config: &PlacementConfig) -> Self {
        Self {
            store,
            acceptance_message: config.acceptance_message.clone(),
        }
    }

    /// Submit an application for `job_id`. Screening runs exactly once, here; the stored
    /// record is either pending review or already rejected with generated feedback.
    pub fn apply(
        &self,
        job_id: JobId,
        name: &str,
    ) -> Result<ApplicationRecord, PlacementServiceError> {
        let name = student_name(name)?;
        let Some(student) = self.store.student_by_name(&name)? else {
            warn!(student = %name, %job_id, "application refused without a profile");
            return Err(PlacementServiceError::ProfileRequired { name });
        };
        let job = self
            .store
            .job(job_id)?
            .ok_or(PlacementServiceError::JobNotFound(job_id))?;

        let outcome = screen(&student.skills, &job.required_skills);
        let summary = outcome.summary();
        let record = self
            .store
            .insert_application(NewApplication::screened(&student, &job, outcome))?;

        info!(
            application_id = %record.id,
            %job_id,
            student = %student.name,
            outcome = summary,
            "application screened"
        );

        Ok(record)
    }

    pub fn accept(
        &self,
        application_id: ApplicationId,
    ) -> Result<ApplicationRecord, PlacementServiceError> {
        let message = self.acceptance_message.as_str();
        let record = self.decide(application_id, |record| record.accept(message))?;

        info!(%application_id, "application accepted");
        Ok(record)
    }

    /// Reject a pending application. The reason is checked before anything is loaded.
    pub fn reject(
        &self,
        application_id: ApplicationId,
        reason: &str,
    ) -> Result<ApplicationRecord, PlacementServiceError> {
        let reason = RejectionReason::new(reason)?;
        let record = self.decide(application_id, move |record| record.reject(reason))?;

        info!(%application_id, "application rejected with feedback");
        Ok(record)
    }

    fn decide<F>(
        &self,
        application_id: ApplicationId,
        decide: F,
    ) -> Result<ApplicationRecord, PlacementServiceError>
    where
        F: FnOnce(&mut ApplicationRecord) -> Result<(), DecisionError>,
    {
        match self.store.decide_application(application_id, decide) {
            Ok(Ok(record)) => Ok(record),
            Ok(Err(refusal)) => {
                warn!(%application_id, reason = %refusal, "decision refused");
                Err(refusal.into())
            }
            Err(RepositoryError::NotFound) => {
                Err(PlacementServiceError::ApplicationNotFound(application_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn get(
        &self,
        application_id: ApplicationId,
    ) -> Result<ApplicationRecord, PlacementServiceError> {
        self.store
            .application(application_id)?
            .ok_or(PlacementServiceError::ApplicationNotFound(application_id))
    }

    /// All applications, newest first.
    pub fn all(&self) -> Result<Vec<ApplicationRecord>, PlacementServiceError> {
        let mut records = self.store.applications()?;
        records.sort_by_key(|record| Reverse(record.id));
        Ok(records)
    }

    /// One student's applications, newest first.
    pub fn for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<ApplicationRecord>, PlacementServiceError> {
        if self.store.student(student_id)?.is_none() {
            return Err(PlacementServiceError::StudentNotFound(student_id));
        }

        let mut records: Vec<_> = self
            .store
            .applications()?
            .into_iter()
            .filter(|record| record.student_id == Some(student_id))
            .collect();
        records.sort_by_key(|record| Reverse(record.id));
        Ok(records)
    }
}
