use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applicants::spec::{ApplicantEntry, NewApplicant};
use crate::prelude::Result;

pub struct ApplicantMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicantMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicantMutator { pool }
    }

    /// Inserts a screened applicant. Returns `None` when another upload with
    /// the same file hash won the race; the unique constraint on `file_hash`
    /// makes this equivalent to a detected duplicate.
    pub async fn create(&mut self, applicant: &NewApplicant) -> Result<Option<ApplicantEntry>> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            r#"
            INSERT INTO applicants (name, email, phone, skills, score, decision, resume_path, file_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (file_hash) DO NOTHING
            RETURNING id, name, email, phone, skills, score, decision, resume_path, file_hash, created_at
            "#,
        )
        .bind(&applicant.name)
        .bind(&applicant.email)
        .bind(&applicant.phone)
        .bind(&applicant.skills)
        .bind(applicant.score)
        .bind(&applicant.decision)
        .bind(&applicant.resume_path)
        .bind(&applicant.file_hash)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
