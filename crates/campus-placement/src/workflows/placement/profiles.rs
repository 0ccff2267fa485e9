use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{NewStudent, ProfileSubmission, Student, StudentId};
use super::error::{student_name, PlacementServiceError};
use super::repository::StudentRepository;
use super::skills::SkillSet;

/// Whether saving a profile created a new student or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileChange {
    Created,
    Updated,
}

/// Student profile upserts keyed by the student's name.
pub struct ProfileService<S> {
    store: Arc<S>,
}

impl<S> ProfileService<S>
where
    S: StudentRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create the profile for an unknown name, otherwise update only the supplied fields.
    pub fn save(
        &self,
        submission: ProfileSubmission,
    ) -> Result<(Student, ProfileChange), PlacementServiceError> {
        let name = student_name(&submission.name)?;

        match self.store.student_by_name(&name)? {
            Some(mut student) => {
                if let Some(skills) = submission.skills {
                    student.skills = SkillSet::parse(&skills);
                }
                if let Some(github_url) = submission.github_url {
                    student.github_url = github_url;
                }
                if let Some(projects) = submission.projects {
                    student.projects = projects;
                }
                if let Some(locker_id) = submission.credential_locker_id {
                    student.credential_locker_id = locker_id;
                }
                self.store.update_student(student.clone())?;

                info!(student = %student.name, skills = %student.skills, "profile updated");
                Ok((student, ProfileChange::Updated))
            }
            None => {
                let student = self.store.insert_student(NewStudent {
                    name,
                    skills: SkillSet::parse(submission.skills.as_deref().unwrap_or_default()),
                    github_url: submission.github_url.unwrap_or_default(),
                    projects: submission.projects.unwrap_or_default(),
                    credential_locker_id: submission.credential_locker_id.unwrap_or_default(),
                })?;

                info!(student = %student.name, skills = %student.skills, "profile created");
                Ok((student, ProfileChange::Created))
            }
        }
    }

    pub fn get(&self, id: StudentId) -> Result<Student, PlacementServiceError> {
        self.store
            .student(id)?
            .ok_or(PlacementServiceError::StudentNotFound(id))
    }
}
