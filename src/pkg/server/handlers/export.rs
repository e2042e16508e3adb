use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use standard_error::{Interpolate, StandardError};

use crate::pkg::internal::adaptors::applicants::selectors::ApplicantSelector;
use crate::pkg::server::state::{AppState, GetTxn};
use crate::prelude::Result;

/// CSV dump of the rankings, one row per stored applicant, ordered by score
/// descending with the insertion-order tie-break from the selector.
pub async fn applicants_csv(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let mut tx = state.db_pool.begin_txn().await?;
    let rows = ApplicantSelector::new(&mut *tx).list_ranked().await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Name", "Email", "Phone", "Skills", "Score", "Decision"])
        .map_err(|e| StandardError::new("ERR-EXPORT-001").interpolate_err(e.to_string()))?;
    for row in rows {
        let score = row.score.to_string();
        writer
            .write_record([
                row.name.as_str(),
                row.email.as_str(),
                row.phone.as_str(),
                row.skills.as_str(),
                score.as_str(),
                row.decision.as_str(),
            ])
            .map_err(|e| StandardError::new("ERR-EXPORT-001").interpolate_err(e.to_string()))?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| StandardError::new("ERR-EXPORT-002").interpolate_err(e.to_string()))?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=applicants.csv",
            ),
        ],
        data,
    ))
}
