use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One screened applicant. Created exactly once per processed non-duplicate
/// upload; never mutated afterwards. `file_hash` is the sole dedup key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantEntry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub score: i32,
    pub decision: String,
    pub resume_path: String,
    pub file_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub score: i32,
    pub decision: String,
    pub resume_path: String,
    pub file_hash: String,
}
