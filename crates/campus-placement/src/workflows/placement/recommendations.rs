//! Job recommendations by shared skills.
//!
//! Unlike screening, a student without declared skills gets no recommendations at all.

use super::domain::{Job, JobId};
use super::skills::SkillSet;

/// Ids of jobs sharing at least one skill with the student, in input order.
pub fn recommend(student_skills: &SkillSet, jobs: &[Job]) -> Vec<JobId> {
    jobs.iter()
        .filter(|job| student_skills.overlaps(&job.required_skills))
        .map(|job| job.id)
        .collect()
}

/// Normalize raw, comma-separated skills and recommend from `jobs`.
pub fn recommend_jobs(student_skills_raw: &str, jobs: &[Job]) -> Vec<JobId> {
    recommend(&SkillSet::parse(student_skills_raw), jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(id: u64, skills: &str) -> Job {
        Job {
            id: JobId(id),
            title: format!("Role {id}"),
            company_name: "Acme".to_string(),
            description: "Campus hire".to_string(),
            required_skills: SkillSet::parse(skills),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn recommends_jobs_sharing_a_skill() {
        let jobs = vec![job(1, "Python, AI"), job(2, "React")];
        assert_eq!(recommend(&SkillSet::parse("python"), &jobs), vec![JobId(1)]);
    }

    #[test]
    fn empty_skills_get_no_recommendations() {
        let jobs = vec![job(1, "Python, AI"), job(2, "React")];
        assert!(recommend(&SkillSet::default(), &jobs).is_empty());
        assert!(recommend_jobs("  , ", &jobs).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let jobs = vec![job(3, "sql, python"), job(1, "python, ai"), job(2, "react")];
        assert_eq!(
            recommend_jobs("PYTHON , react", &jobs),
            vec![JobId(3), JobId(1), JobId(2)]
        );
    }
}
