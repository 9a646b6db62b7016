use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Coarse bucket for when a candidate can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartDateBucket {
    Immediately,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    Flexible,
}

impl StartDateBucket {
    /// Unknown or missing buckets collapse to `Flexible`.
    fn from_label(label: &str) -> Self {
        match label
            .trim()
            .to_lowercase()
            .replace(['-', ' '], "_")
            .as_str()
        {
            "immediately" | "immediate" | "now" => StartDateBucket::Immediately,
            "two_weeks" | "2_weeks" => StartDateBucket::TwoWeeks,
            "one_month" | "1_month" => StartDateBucket::OneMonth,
            "three_months" | "3_months" => StartDateBucket::ThreeMonths,
            _ => StartDateBucket::Flexible,
        }
    }
}

/// Candidate availability: either the structured object written by the
/// profile form, or whatever free text the candidate typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Availability {
    Structured {
        start_date: StartDateBucket,
        /// Every boolean field of the stored object, e.g. `open_to_relocation`.
        preferences: BTreeMap<String, bool>,
    },
    FreeText {
        text: String,
    },
}

impl Availability {
    /// Parses the stored availability string. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => {
                let start_date = map
                    .get("start_date")
                    .or_else(|| map.get("startDate"))
                    .and_then(Value::as_str)
                    .map(StartDateBucket::from_label)
                    .unwrap_or(StartDateBucket::Flexible);

                let preferences = map
                    .iter()
                    .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
                    .collect();

                Some(Availability::Structured {
                    start_date,
                    preferences,
                })
            }
            _ => Some(Availability::FreeText {
                text: raw.to_string(),
            }),
        }
    }
}
