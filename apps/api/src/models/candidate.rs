use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::availability::Availability;

/// Candidate profile as received from callers. Accepts the frontend's
/// camelCase field names as aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateProfileInput {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, alias = "yearsOfExperience")]
    pub years_of_experience: Option<i64>,
    #[serde(default, alias = "educationDetails")]
    pub education_details: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Validated candidate profile consumed by `MatchScorer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub years_of_experience: Option<u32>,
    pub education_details: Option<String>,
    pub availability: Option<Availability>,
}

impl TryFrom<CandidateProfileInput> for CandidateProfile {
    type Error = AppError;

    fn try_from(input: CandidateProfileInput) -> Result<Self, Self::Error> {
        let years_of_experience = match input.years_of_experience {
            None => None,
            Some(y) if y < 0 => {
                return Err(AppError::Validation(format!(
                    "years_of_experience cannot be negative (got {y})"
                )))
            }
            Some(y) => Some(u32::try_from(y).map_err(|_| {
                AppError::Validation(format!("years_of_experience is out of range (got {y})"))
            })?),
        };

        Ok(CandidateProfile {
            id: input.id,
            name: input.name,
            bio: input.bio,
            location: input.location,
            skills: input.skills,
            years_of_experience,
            education_details: input.education_details,
            availability: input.availability.as_deref().and_then(Availability::parse),
        })
    }
}
