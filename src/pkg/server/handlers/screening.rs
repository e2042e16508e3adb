use std::path::Path;

use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use standard_error::{Interpolate, StandardError, Status};
use uuid::Uuid;

use crate::conf::settings;
use crate::pkg::internal::adaptors::applicants::{
    selectors::ApplicantSelector, spec::ApplicantEntry,
};
use crate::pkg::internal::scoring::Decision;
use crate::pkg::internal::screening::{screen, ScreeningOutcome};
use crate::pkg::server::state::{AppState, GetTxn};
use crate::pkg::server::uispec::{Home, ScreeningView};
use crate::prelude::Result;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn render_home(
    result: Option<ScreeningView>,
    duplicate: bool,
    ranking: Vec<ApplicantEntry>,
) -> Result<Html<String>> {
    let page = Home {
        result,
        duplicate,
        ranking,
    }
    .render()
    .map_err(|e| StandardError::new("ERR-TEMPLATE-001").interpolate_err(e.to_string()))?;
    Ok(Html(page))
}

fn screening_view(entry: &ApplicantEntry) -> ScreeningView {
    let status = if entry.decision == Decision::Proceed.to_string() {
        "pass"
    } else {
        "fail"
    };
    ScreeningView {
        name: entry.name.clone(),
        email: entry.email.clone(),
        phone: entry.phone.clone(),
        skills: entry.skills.clone(),
        score: entry.score,
        decision: entry.decision.clone(),
        status,
    }
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let ranking = ApplicantSelector::new(&mut *tx).list_ranked().await?;
    render_home(None, false, ranking)
}

pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-001: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-002: {}", e)))?;
                upload = Some((file_name, data.into()));
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-003: {}", e)))?;
            }
        }
    }

    let (original_filename, data) = upload.ok_or_else(|| {
        StandardError::new("ERR-UPLOAD-004: no resume file in request").code(StatusCode::BAD_REQUEST)
    })?;
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(StandardError::new("ERR-UPLOAD-005: file too large, maximum size is 10MB")
            .code(StatusCode::PAYLOAD_TOO_LARGE));
    }

    tokio::fs::create_dir_all(&settings.upload_dir).await?;
    let resume_path = format!(
        "{}/{}-{}",
        &settings.upload_dir,
        Uuid::new_v4(),
        original_filename
    );
    tokio::fs::write(&resume_path, &data).await?;

    let mut tx = state.db_pool.begin_txn().await?;
    let outcome = screen(
        &mut *tx,
        &state.matcher,
        &state.taxonomy,
        Path::new(&resume_path),
    )
    .await?;
    let ranking = ApplicantSelector::new(&mut *tx).list_ranked().await?;
    tx.commit().await?;

    match outcome {
        ScreeningOutcome::Screened(entry) => {
            render_home(Some(screening_view(&entry)), false, ranking)
        }
        ScreeningOutcome::Duplicate => render_home(None, true, ranking),
    }
}
