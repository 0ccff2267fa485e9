use std::cmp::Reverse;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::domain::{Job, JobId, JobPosting, NewJob};
use super::error::{required, PlacementServiceError};
use super::recommendations::recommend_jobs;
use super::repository::JobRepository;
use super::skills::SkillSet;

/// Recruiter-facing job listings and the student recommendation feed.
pub struct JobBoard<S> {
    store: Arc<S>,
}

impl<S> JobBoard<S>
where
    S: JobRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn post(&self, posting: JobPosting) -> Result<Job, PlacementServiceError> {
        let job = self.store.insert_job(NewJob {
            title: required(&posting.title, "title")?,
            company_name: required(&posting.company_name, "company")?,
            description: required(&posting.description, "description")?,
            required_skills: SkillSet::parse(&posting.skills),
        })?;

        info!(
            job_id = %job.id,
            company = %job.company_name,
            skills = %job.required_skills,
            "job posted"
        );
        Ok(job)
    }

    pub fn get(&self, id: JobId) -> Result<Job, PlacementServiceError> {
        self.store
            .job(id)?
            .ok_or(PlacementServiceError::JobNotFound(id))
    }

    /// All jobs, newest first.
    pub fn listings(&self) -> Result<Vec<Job>, PlacementServiceError> {
        let mut jobs = self.store.jobs()?;
        jobs.sort_by_key(|job| Reverse(job.id));
        Ok(jobs)
    }

    /// Recommended job ids for raw skill text, newest first.
    pub fn recommendations(&self, raw_skills: &str) -> Result<Vec<JobId>, PlacementServiceError> {
        let listings = self.listings()?;
        Ok(recommend_jobs(raw_skills, &listings))
    }

    /// Bulk-post jobs from CSV with `title,company,description,skills` headers.
    pub fn import_csv<R: Read>(&self, reader: R) -> Result<Vec<Job>, JobImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut posted = Vec::new();

        for (index, row) in csv_reader.deserialize::<JobRow>().enumerate() {
            let row = row?;
            let job = self
                .post(row.into_posting())
                .map_err(|source| JobImportError::Row {
                    line: index + 2,
                    source,
                })?;
            posted.push(job);
        }

        info!(jobs = posted.len(), "job import finished");
        Ok(posted)
    }

    pub fn import_path(&self, path: &Path) -> Result<Vec<Job>, JobImportError> {
        let file = File::open(path)?;
        self.import_csv(file)
    }
}

#[derive(Debug, Deserialize)]
struct JobRow {
    title: String,
    company: String,
    description: String,
    #[serde(default)]
    skills: String,
}

impl JobRow {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.title,
            company_name: self.company,
            description: self.description,
            skills: self.skills,
        }
    }
}

#[derive(Debug)]
pub enum JobImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row {
        line: usize,
        source: PlacementServiceError,
    },
}

impl std::fmt::Display for JobImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobImportError::Io(err) => write!(f, "failed to read job file: {}", err),
            JobImportError::Csv(err) => write!(f, "invalid job CSV data: {}", err),
            JobImportError::Row { line, source } => {
                write!(f, "could not post job on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for JobImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobImportError::Io(err) => Some(err),
            JobImportError::Csv(err) => Some(err),
            JobImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for JobImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JobImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
