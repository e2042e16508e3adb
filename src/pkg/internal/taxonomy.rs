use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub default_points: i32,
    pub skills: BTreeSet<String>,
}

/// The category -> points -> skills table, carried as an explicit value rather
/// than a process-wide constant so tests and deployments can substitute it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    pub categories: Vec<SkillCategory>,
    /// Category that must match for any positive score.
    pub qualifying_category: String,
    pub pass_threshold: i32,
    /// Points awarded per extra matched skill beyond the first, per category.
    pub extra_skill_bonus: i32,
}

impl SkillCategory {
    fn new(name: &str, default_points: i32, skills: &[&str]) -> Self {
        SkillCategory {
            name: name.into(),
            default_points,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        SkillTaxonomy {
            categories: vec![
                SkillCategory::new(
                    "oop_language",
                    20,
                    &["python", "java", "c++", "javascript", "c#", "php"],
                ),
                SkillCategory::new("web_design", 20, &["html", "css", "bootstrap"]),
                SkillCategory::new(
                    "database",
                    20,
                    &["sql", "mysql", "postgresql", "mongodb"],
                ),
            ],
            qualifying_category: "oop_language".into(),
            pass_threshold: 60,
            extra_skill_bonus: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_categories() {
        let taxonomy = SkillTaxonomy::default();
        let names: Vec<&str> = taxonomy.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["oop_language", "web_design", "database"]);
        assert!(taxonomy
            .categories
            .iter()
            .any(|c| c.name == taxonomy.qualifying_category));
    }

    #[test]
    fn skill_tokens_are_lowercase() {
        let taxonomy = SkillTaxonomy::default();
        for category in &taxonomy.categories {
            for skill in &category.skills {
                assert_eq!(skill, &skill.to_lowercase());
            }
        }
    }
}
