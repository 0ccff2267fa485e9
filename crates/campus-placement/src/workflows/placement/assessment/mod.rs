//! Soft-skills assessment: the fixed question bank, the pure scorer and the service that
//! records every attempt.

mod bank;
mod scoring;
mod service;

pub use bank::{
    standard_bank, AssessmentQuestion, OptionLetter, OptionView, QuestionId, QuestionView,
};
pub use scoring::{responses_for, score, AssessmentResponse, AssessmentScore, SubmittedAnswers};
pub use service::{AssessmentAttempt, AssessmentService};
