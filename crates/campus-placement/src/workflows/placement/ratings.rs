use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::JobId;
use super::error::{required, student_name, PlacementServiceError};
use super::repository::{JobRepository, RatingRepository};

/// Student's star rating of a company they applied to. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRating {
    pub student_name: String,
    pub company_name: String,
    pub job_id: JobId,
    pub rating: u8,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}

/// Rating form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    pub student_name: String,
    pub company_name: String,
    pub job_id: JobId,
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
}

/// Aggregate view of one company's ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyStats {
    pub total: u32,
    pub count: u32,
    pub average: f64,
    pub ratings: Vec<CompanyRating>,
}

/// Group ratings by company, keeping the input order inside each group.
pub fn company_stats(ratings: &[CompanyRating]) -> BTreeMap<String, CompanyStats> {
    let mut stats: BTreeMap<String, CompanyStats> = BTreeMap::new();

    for rating in ratings {
        let entry = stats
            .entry(rating.company_name.clone())
            .or_insert_with(|| CompanyStats {
                total: 0,
                count: 0,
                average: 0.0,
                ratings: Vec::new(),
            });
        entry.total += u32::from(rating.rating);
        entry.count += 1;
        entry.ratings.push(rating.clone());
    }

    for entry in stats.values_mut() {
        entry.average = f64::from(entry.total) / f64::from(entry.count);
    }

    stats
}

pub struct RatingService<S> {
    store: Arc<S>,
}

impl<S> RatingService<S>
where
    S: RatingRepository + JobRepository + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn rate(
        &self,
        submission: RatingSubmission,
    ) -> Result<CompanyRating, PlacementServiceError> {
        let student_name = student_name(&submission.student_name)?;
        let company_name = required(&submission.company_name, "company")?;
        if !(1..=5).contains(&submission.rating) {
            return Err(PlacementServiceError::RatingOutOfRange(submission.rating));
        }
        if self.store.job(submission.job_id)?.is_none() {
            return Err(PlacementServiceError::JobNotFound(submission.job_id));
        }

        let rating = CompanyRating {
            student_name,
            company_name,
            job_id: submission.job_id,
            rating: submission.rating,
            feedback: submission.feedback,
            created_at: Utc::now(),
        };
        self.store.append_rating(rating.clone())?;

        info!(
            company = %rating.company_name,
            rating = rating.rating,
            "company rated"
        );
        Ok(rating)
    }

    /// Per-company statistics over all ratings, newest first within each company.
    pub fn company_stats(&self) -> Result<BTreeMap<String, CompanyStats>, PlacementServiceError> {
        let mut ratings = self.store.ratings()?;
        ratings.reverse();
        ratings.sort_by_key(|rating| Reverse(rating.created_at));
        Ok(company_stats(&ratings))
    }
}
