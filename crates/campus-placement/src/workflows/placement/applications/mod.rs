//! Application intake, skill screening and recruiter decisions.

pub mod domain;
pub mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationRecord, ApplicationStatus, ApplicationStatusView, DecisionError, NewApplication,
    RejectionReason,
};
pub use screening::{screen, ScreeningOutcome};
pub use service::ApplicationService;
