use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pkg::internal::taxonomy::SkillTaxonomy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i32,
    pub qualifies: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Proceed,
    Rejected,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Proceed => write!(f, "Proceed to Interview"),
            Decision::Rejected => write!(f, "Screening Requirement Not Met: Rejected"),
        }
    }
}

/// Accumulates category points plus the multi-skill bonus, and tracks whether
/// the qualifying category matched at all.
pub fn score(taxonomy: &SkillTaxonomy, matched_skills: &BTreeSet<String>) -> ScoreResult {
    let mut score = 0;
    let mut qualifies = false;

    for category in &taxonomy.categories {
        let matched = matched_skills.intersection(&category.skills).count() as i32;
        if matched == 0 {
            continue;
        }
        score += category.default_points;
        if matched > 1 {
            score += (matched - 1) * taxonomy.extra_skill_bonus;
        }
        if category.name == taxonomy.qualifying_category {
            qualifies = true;
        }
    }

    ScoreResult { score, qualifies }
}

/// Applies the decision rule to a computed score.
///
/// Scoring policy, intentional asymmetry: with no qualifying-category match
/// the applicant is rejected and the reported score is forced to 0, voiding
/// credit earned in other categories. Below-threshold rejections keep the
/// computed score.
pub fn decide(taxonomy: &SkillTaxonomy, result: ScoreResult) -> (i32, Decision) {
    if !result.qualifies {
        (0, Decision::Rejected)
    } else if result.score >= taxonomy.pass_threshold {
        (result.score, Decision::Proceed)
    } else {
        (result.score, Decision::Rejected)
    }
}
