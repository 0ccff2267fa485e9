use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank::{AssessmentQuestion, QuestionId};
use crate::workflows::placement::domain::{Student, StudentId};

/// Submitted option per question. Letters are matched case-insensitively.
pub type SubmittedAnswers = BTreeMap<QuestionId, String>;

/// Aggregate and per-question result of one assessment attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub percentage: f64,
    pub correct: usize,
    pub total: usize,
    pub per_question: BTreeMap<QuestionId, bool>,
}

impl AssessmentScore {
    pub fn summary(&self) -> String {
        format!("{:.1}% ({}/{})", self.percentage, self.correct, self.total)
    }
}

/// Score an attempt. Unanswered questions count as incorrect; an empty bank scores 0.
pub fn score(questions: &[AssessmentQuestion], answers: &SubmittedAnswers) -> AssessmentScore {
    let per_question: BTreeMap<QuestionId, bool> = questions
        .iter()
        .map(|question| {
            let correct = answers
                .get(&question.id)
                .is_some_and(|submitted| question.is_correct(submitted));
            (question.id, correct)
        })
        .collect();

    let total = questions.len();
    let correct = per_question.values().filter(|correct| **correct).count();
    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };

    AssessmentScore {
        percentage,
        correct,
        total,
        per_question,
    }
}

/// Append-only record of one answered (or skipped) question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub student_id: StudentId,
    pub student_name: String,
    pub question_id: QuestionId,
    /// Empty when the question was left unanswered.
    pub answer: String,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

/// One response per question in bank order, including unanswered ones.
pub fn responses_for(
    student: &Student,
    questions: &[AssessmentQuestion],
    answers: &SubmittedAnswers,
    score: &AssessmentScore,
) -> Vec<AssessmentResponse> {
    let created_at = Utc::now();
    questions
        .iter()
        .map(|question| AssessmentResponse {
            student_id: student.id,
            student_name: student.name.clone(),
            question_id: question.id,
            answer: answers.get(&question.id).cloned().unwrap_or_default(),
            is_correct: score
                .per_question
                .get(&question.id)
                .copied()
                .unwrap_or(false),
            created_at,
        })
        .collect()
}
