use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::skills::SkillSet;

/// Identifier wrapper for student profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

/// Identifier wrapper for posted jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student-{}", self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job-{}", self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "application-{}", self.0)
    }
}

/// Student profile. The name is the external key students use to identify themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub skills: SkillSet,
    pub github_url: String,
    pub projects: String,
    pub credential_locker_id: String,
    /// Percentage from the most recent assessment attempt.
    pub soft_skills_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Profile form payload. Absent fields keep their stored values on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub name: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub projects: Option<String>,
    #[serde(default)]
    pub credential_locker_id: Option<String>,
}

/// Fields of a profile that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub skills: SkillSet,
    pub github_url: String,
    pub projects: String,
    pub credential_locker_id: String,
}

/// Posted job. Only `required_skills` is consulted by screening and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub required_skills: SkillSet,
    pub posted_at: DateTime<Utc>,
}

/// Recruiter job form payload with raw, comma-separated skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(alias = "company")]
    pub company_name: String,
    pub description: String,
    #[serde(default)]
    pub skills: String,
}

/// Validated job fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub required_skills: SkillSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_render_with_prefixes() {
        assert_eq!(StudentId(4).to_string(), "student-4");
        assert_eq!(JobId(12).to_string(), "job-12");
        assert_eq!(ApplicationId(7).to_string(), "application-7");
    }

    #[test]
    fn job_posting_accepts_company_alias() {
        let posting: JobPosting = serde_json::from_str(
            r#"{"title":"Web Developer","company":"Google","description":"Build dashboards"}"#,
        )
        .expect("valid posting");
        assert_eq!(posting.company_name, "Google");
        assert!(posting.skills.is_empty());
    }
}
