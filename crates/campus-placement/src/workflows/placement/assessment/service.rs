use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::bank::{standard_bank, QuestionView};
use super::scoring::{responses_for, score, AssessmentScore, SubmittedAnswers};
use crate::workflows::placement::domain::StudentId;
use crate::workflows::placement::error::{student_name, PlacementServiceError};
use crate::workflows::placement::repository::{AssessmentRepository, StudentRepository};

/// Outcome of one recorded assessment attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentAttempt {
    pub student_id: StudentId,
    pub student_name: String,
    pub score: AssessmentScore,
    pub responses_recorded: usize,
}

/// Service scoring submissions and keeping the append-only response history.
pub struct AssessmentService<S> {
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: StudentRepository + AssessmentRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Seed the standard bank into an empty store.
    pub fn seed_standard_bank(&self) -> Result<usize, PlacementServiceError> {
        let added = self.store.seed_questions(standard_bank())?;
        if added > 0 {
            info!(questions = added, "seeded soft-skills question bank");
        }
        Ok(added)
    }

    pub fn questions(&self) -> Result<Vec<QuestionView>, PlacementServiceError> {
        let questions = self.store.questions()?;
        Ok(questions.iter().map(|question| question.view()).collect())
    }

    /// Score a submission, append one response per question and replace the student's
    /// latest score.
    pub fn submit(
        &self,
        name: &str,
        answers: &SubmittedAnswers,
    ) -> Result<AssessmentAttempt, PlacementServiceError> {
        let name = student_name(name)?;
        let Some(student) = self.store.student_by_name(&name)? else {
            warn!(student = %name, "assessment refused without a profile");
            return Err(PlacementServiceError::ProfileRequired { name });
        };

        let questions = self.store.questions()?;
        let result = score(&questions, answers);
        let responses = responses_for(&student, &questions, answers, &result);
        let responses_recorded = responses.len();

        self.store.append_responses(responses)?;
        self.store.set_soft_skills_score(student.id, result.percentage)?;

        info!(
            student = %student.name,
            score = %result.summary(),
            "assessment scored"
        );

        Ok(AssessmentAttempt {
            student_id: student.id,
            student_name: student.name,
            score: result,
            responses_recorded,
        })
    }
}
