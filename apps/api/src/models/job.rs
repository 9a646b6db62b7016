use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Job posting as received from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPostingInput {
    pub id: Uuid,
    pub title: String,
    #[serde(default, alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "mustHaveSkills")]
    pub must_have_skills: Vec<String>,
}

/// Validated job posting consumed by `MatchScorer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    /// Subset of `required_skills` flagged by the recruiter. Carried for
    /// display only: scoring weighs every required skill equally.
    pub must_have_skills: Vec<String>,
}

impl TryFrom<JobPostingInput> for JobPosting {
    type Error = AppError;

    fn try_from(input: JobPostingInput) -> Result<Self, Self::Error> {
        if input.title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }

        let required: HashSet<String> = input
            .required_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        let unknown: Vec<&str> = input
            .must_have_skills
            .iter()
            .filter(|s| !required.contains(&s.to_lowercase()))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::Validation(format!(
                "must_have_skills must be listed in required_skills (unknown: {})",
                unknown.join(", ")
            )));
        }

        Ok(JobPosting {
            id: input.id,
            title: input.title,
            required_skills: input.required_skills,
            location: input.location,
            must_have_skills: input.must_have_skills,
        })
    }
}
