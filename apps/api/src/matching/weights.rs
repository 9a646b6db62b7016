use serde::Serialize;

/// Category weights for the overall match score. Skills dominate.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.50,
    experience: 0.25,
    education: 0.15,
    location: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub location: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.location
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
