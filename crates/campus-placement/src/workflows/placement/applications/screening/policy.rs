use super::ScreeningOutcome;
use crate::workflows::placement::skills::SkillSet;

/// Auto-reject rule. Students without declared skills get the benefit of the doubt.
pub fn screen(student_skills: &SkillSet, job_skills: &SkillSet) -> ScreeningOutcome {
    if student_skills.is_empty() || student_skills.overlaps(job_skills) {
        return ScreeningOutcome::AcceptedForReview;
    }

    ScreeningOutcome::AutoRejected {
        feedback: mismatch_feedback(student_skills, job_skills),
    }
}

pub fn mismatch_feedback(student_skills: &SkillSet, job_skills: &SkillSet) -> String {
    format!(
        "Your skills ({}) do not match the required skills ({}).",
        student_skills, job_skills
    )
}
