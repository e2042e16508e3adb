use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applicants::spec::ApplicantEntry;
use crate::prelude::Result;

pub struct ApplicantSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicantSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicantSelector { pool }
    }

    pub async fn get_by_hash(&mut self, file_hash: &str) -> Result<Option<ApplicantEntry>> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            "SELECT id, name, email, phone, skills, score, decision, resume_path, file_hash, created_at
             FROM applicants WHERE file_hash = $1",
        )
        .bind(file_hash)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    /// Rankings are ordered by score descending; ties break on insertion
    /// order (ascending id) so the output is deterministic.
    pub async fn list_ranked(&mut self) -> Result<Vec<ApplicantEntry>> {
        let rows = sqlx::query_as::<_, ApplicantEntry>(
            "SELECT id, name, email, phone, skills, score, decision, resume_path, file_hash, created_at
             FROM applicants ORDER BY score DESC, id ASC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
