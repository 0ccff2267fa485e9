use super::common::*;
use crate::workflows::placement::applications::screening::{mismatch_feedback, screen};
use crate::workflows::placement::applications::{ApplicationStatus, ScreeningOutcome};
use crate::workflows::placement::skills::SkillSet;

#[test]
fn overlapping_skills_are_accepted_for_review() {
    let outcome = screen(
        &SkillSet::parse("SQL, Python"),
        &SkillSet::parse("Python, Pytorch, AI"),
    );

    assert_eq!(outcome, ScreeningOutcome::AcceptedForReview);
    assert_eq!(outcome.status(), ApplicationStatus::Pending);
    assert!(!outcome.auto_rejected());
    assert!(outcome.feedback().is_none());
}

#[test]
fn matching_ignores_case_and_whitespace() {
    let outcome = screen(&SkillSet::parse("  PYTHON "), &SkillSet::parse("python,sql"));
    assert_eq!(outcome, ScreeningOutcome::AcceptedForReview);
}

#[test]
fn disjoint_skills_are_rejected_with_both_lists() {
    let outcome = screen(
        &SkillSet::parse("Python, Pytorch"),
        &SkillSet::parse("React, JavaScript, CSS"),
    );

    assert_eq!(outcome.status(), ApplicationStatus::Rejected);
    assert!(outcome.auto_rejected());
    assert_eq!(
        outcome.feedback(),
        Some("Your skills (python, pytorch) do not match the required skills (css, javascript, react).")
    );
}

#[test]
fn students_without_skills_are_never_auto_rejected() {
    let outcome = screen(&SkillSet::parse(""), &SkillSet::parse("React"));
    assert_eq!(outcome, ScreeningOutcome::AcceptedForReview);

    let outcome = screen(&SkillSet::parse(" , ,"), &SkillSet::parse("React"));
    assert_eq!(outcome, ScreeningOutcome::AcceptedForReview);
}

#[test]
fn jobs_without_skills_reject_skilled_students() {
    let outcome = screen(&SkillSet::parse("Python"), &SkillSet::parse(""));

    assert!(outcome.auto_rejected());
    assert_eq!(
        outcome.feedback(),
        Some("Your skills (python) do not match the required skills ().")
    );
}

#[test]
fn feedback_lists_normalized_skills() {
    let feedback = mismatch_feedback(&SkillSet::parse("Excel , SQL"), &SkillSet::parse("AI"));
    assert_eq!(
        feedback,
        "Your skills (excel, sql) do not match the required skills (ai)."
    );
}

#[test]
fn screening_reads_profile_and_job_skills() {
    let analyst = job(1, "SQL, Excel, Python");

    let accepted = screen(&student(1, "Alice", "Python").skills, &analyst.required_skills);
    assert_eq!(accepted, ScreeningOutcome::AcceptedForReview);

    let rejected = screen(&student(2, "Bob", "Java").skills, &analyst.required_skills);
    assert!(rejected.auto_rejected());
}
