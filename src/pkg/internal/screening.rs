use std::path::Path;

use async_trait::async_trait;
use sqlx::PgConnection;
use tokio::fs;

use crate::pkg::internal::adaptors::applicants::{
    mutators::ApplicantMutator,
    selectors::ApplicantSelector,
    spec::{ApplicantEntry, NewApplicant},
};
use crate::pkg::internal::extract::{contact, read, skills::SkillMatcher};
use crate::pkg::internal::{hash, scoring, taxonomy::SkillTaxonomy};
use crate::prelude::Result;

/// Sentinel used when assembling the stored record; inside the pipeline
/// absence stays an `Option`.
pub const NOT_FOUND: &str = "Not Found";

/// Store contract the pipeline needs: atomic save with a uniqueness guarantee
/// on `file_hash`, lookup by hash, and score-ordered listing with
/// read-your-writes consistency within one pipeline invocation.
#[async_trait]
pub trait ApplicantStore {
    async fn find_by_hash(&mut self, file_hash: &str) -> Result<Option<ApplicantEntry>>;
    /// `None` means the unique constraint on `file_hash` rejected the row,
    /// i.e. a concurrent duplicate won the race.
    async fn save(&mut self, applicant: NewApplicant) -> Result<Option<ApplicantEntry>>;
    async fn list_ranked(&mut self) -> Result<Vec<ApplicantEntry>>;
}

#[async_trait]
impl ApplicantStore for PgConnection {
    async fn find_by_hash(&mut self, file_hash: &str) -> Result<Option<ApplicantEntry>> {
        ApplicantSelector::new(self).get_by_hash(file_hash).await
    }

    async fn save(&mut self, applicant: NewApplicant) -> Result<Option<ApplicantEntry>> {
        ApplicantMutator::new(self).create(&applicant).await
    }

    async fn list_ranked(&mut self) -> Result<Vec<ApplicantEntry>> {
        ApplicantSelector::new(self).list_ranked().await
    }
}

#[derive(Debug)]
pub enum ScreeningOutcome {
    Screened(ApplicantEntry),
    /// Recognized outcome, not a failure: the artifact is discarded and the
    /// rankings are left untouched.
    Duplicate,
}

/// Document-to-decision pipeline: fingerprint, dedup gate, text extraction,
/// contact/skill extraction, scoring, save. Runs to completion for one upload
/// before returning; a failure aborts only this upload.
pub async fn screen<S: ApplicantStore + Send>(
    store: &mut S,
    matcher: &SkillMatcher,
    taxonomy: &SkillTaxonomy,
    resume_path: &Path,
) -> Result<ScreeningOutcome> {
    let file_hash = hash::file_sha256(resume_path).await?;

    if store.find_by_hash(&file_hash).await?.is_some() {
        fs::remove_file(resume_path).await?;
        tracing::info!("duplicate resume discarded: {}", resume_path.display());
        return Ok(ScreeningOutcome::Duplicate);
    }

    let text = read::extract_text(resume_path)?;
    let details = contact::extract_contact_details(&text);
    let matched_skills = matcher.extract_skills(&text);

    let result = scoring::score(taxonomy, &matched_skills);
    let (score, decision) = scoring::decide(taxonomy, result);
    tracing::debug!(
        "scored {} at {} ({:?})",
        resume_path.display(),
        score,
        decision
    );

    let applicant = NewApplicant {
        name: details.name.unwrap_or_else(|| NOT_FOUND.into()),
        email: details.email.unwrap_or_else(|| NOT_FOUND.into()),
        phone: details.phone.unwrap_or_else(|| NOT_FOUND.into()),
        skills: matched_skills.into_iter().collect::<Vec<_>>().join(", "),
        score,
        decision: decision.to_string(),
        resume_path: resume_path.display().to_string(),
        file_hash,
    };

    match store.save(applicant).await? {
        Some(entry) => Ok(ScreeningOutcome::Screened(entry)),
        None => {
            // Lost a race against an identical concurrent upload.
            fs::remove_file(resume_path).await?;
            Ok(ScreeningOutcome::Duplicate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::cmp::Reverse;

    #[derive(Default)]
    struct MemStore {
        rows: Vec<ApplicantEntry>,
    }

    #[async_trait]
    impl ApplicantStore for MemStore {
        async fn find_by_hash(&mut self, file_hash: &str) -> Result<Option<ApplicantEntry>> {
            Ok(self.rows.iter().find(|r| r.file_hash == file_hash).cloned())
        }

        async fn save(&mut self, applicant: NewApplicant) -> Result<Option<ApplicantEntry>> {
            if self.rows.iter().any(|r| r.file_hash == applicant.file_hash) {
                return Ok(None);
            }
            let entry = ApplicantEntry {
                id: self.rows.len() as i32 + 1,
                name: applicant.name,
                email: applicant.email,
                phone: applicant.phone,
                skills: applicant.skills,
                score: applicant.score,
                decision: applicant.decision,
                resume_path: applicant.resume_path,
                file_hash: applicant.file_hash,
                created_at: Utc::now(),
            };
            self.rows.push(entry.clone());
            Ok(Some(entry))
        }

        async fn list_ranked(&mut self) -> Result<Vec<ApplicantEntry>> {
            let mut rows = self.rows.clone();
            rows.sort_by_key(|r| Reverse(r.score));
            Ok(rows)
        }
    }

    fn fixtures() -> (SkillMatcher, SkillTaxonomy) {
        let taxonomy = SkillTaxonomy::default();
        let matcher = SkillMatcher::new(&taxonomy).unwrap();
        (matcher, taxonomy)
    }

    #[tokio::test]
    async fn submitting_the_same_bytes_twice_stores_one_record() {
        let (matcher, taxonomy) = fixtures();
        let mut store = MemStore::default();
        let dir = tempfile::tempdir().unwrap();

        let first = dir.path().join("first.txt");
        std::fs::write(&first, b"identical resume content").unwrap();
        let outcome = screen(&mut store, &matcher, &taxonomy, &first).await.unwrap();
        assert!(matches!(outcome, ScreeningOutcome::Screened(_)));

        // Same bytes under a different filename are the same applicant event.
        let second = dir.path().join("second.txt");
        std::fs::write(&second, b"identical resume content").unwrap();
        let outcome = screen(&mut store, &matcher, &taxonomy, &second).await.unwrap();
        assert!(matches!(outcome, ScreeningOutcome::Duplicate));

        assert_eq!(store.rows.len(), 1);
        assert!(!second.exists(), "duplicate artifact must be removed");
        assert!(first.exists());
    }

    #[tokio::test]
    async fn save_race_loser_is_treated_as_duplicate() {
        let (matcher, taxonomy) = fixtures();
        let mut store = MemStore::default();
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("resume.txt");
        std::fs::write(&path, b"raced upload").unwrap();
        let digest = hash::file_sha256(&path).await.unwrap();

        // Another invocation stored the same hash between our gate check
        // and our save.
        store
            .save(NewApplicant {
                name: NOT_FOUND.into(),
                email: NOT_FOUND.into(),
                phone: NOT_FOUND.into(),
                skills: String::new(),
                score: 0,
                decision: scoring::Decision::Rejected.to_string(),
                resume_path: "elsewhere".into(),
                file_hash: digest,
            })
            .await
            .unwrap();

        // find_by_hash sees it now, so the gate short-circuits; the point is
        // the outcome and the artifact cleanup.
        let outcome = screen(&mut store, &matcher, &taxonomy, &path).await.unwrap();
        assert!(matches!(outcome, ScreeningOutcome::Duplicate));
        assert_eq!(store.rows.len(), 1);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn unmatched_document_is_recorded_with_sentinels_and_zero_score() {
        let (matcher, taxonomy) = fixtures();
        let mut store = MemStore::default();
        let dir = tempfile::tempdir().unwrap();

        // Unknown extension extracts to empty text by policy.
        let path = dir.path().join("resume.odt");
        std::fs::write(&path, b"python java sql").unwrap();
        let outcome = screen(&mut store, &matcher, &taxonomy, &path).await.unwrap();

        match outcome {
            ScreeningOutcome::Screened(entry) => {
                assert_eq!(entry.name, NOT_FOUND);
                assert_eq!(entry.email, NOT_FOUND);
                assert_eq!(entry.phone, NOT_FOUND);
                assert_eq!(entry.skills, "");
                assert_eq!(entry.score, 0);
                assert_eq!(entry.decision, scoring::Decision::Rejected.to_string());
            }
            other => panic!("expected a screened entry, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn rankings_order_by_score_with_insertion_tie_break() {
        let mut store = MemStore::default();
        for (name, score) in [("a", 10), ("b", 40), ("c", 40), ("d", 75)] {
            store
                .save(NewApplicant {
                    name: name.into(),
                    email: NOT_FOUND.into(),
                    phone: NOT_FOUND.into(),
                    skills: String::new(),
                    score,
                    decision: scoring::Decision::Rejected.to_string(),
                    resume_path: name.into(),
                    file_hash: name.into(),
                })
                .await
                .unwrap();
        }
        let ranked = store.list_ranked().await.unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["d", "b", "c", "a"]);
    }
}
