use std::collections::BTreeSet;

use regex::Regex;
use standard_error::{Interpolate, StandardError};

use crate::{pkg::internal::taxonomy::SkillTaxonomy, prelude::Result};

/// Whole-word matcher over every canonical skill token in the taxonomy.
/// Patterns are compiled once up front; matching is then allocation-light.
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        let mut patterns = Vec::new();
        for category in &taxonomy.categories {
            for skill in &category.skills {
                let pattern = format!(r"\b{}\b", regex::escape(skill));
                let re = Regex::new(&pattern)
                    .map_err(|e| StandardError::new("ERR-SKILL-001").interpolate_err(e.to_string()))?;
                patterns.push((skill.clone(), re));
            }
        }
        Ok(SkillMatcher { patterns })
    }

    /// A skill is reported at most once no matter how often it occurs.
    /// Tokens absent from the taxonomy are never produced.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| skill.clone())
            .collect()
    }
}
