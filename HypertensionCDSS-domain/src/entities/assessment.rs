use std::fmt;

use serde::{Deserialize, Serialize};

use super::blood_pressure::BloodPressureCategory;

/// Class probabilities `[p(normotensive), p(hypertensive)]` from the classifier
pub type ClassProbabilities = [f64; 2];

/// Qualitative band for a confidence percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Below 72%
    Low,
    /// 72% to 82% inclusive
    Moderate,
    /// Above 82%
    High,
}

impl ConfidenceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::Low => "Low",
            ConfidenceBand::Moderate => "Moderate",
            ConfidenceBand::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence percentage with its band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceResult {
    /// Percentage in [60.0, 90.0], one decimal place
    pub confidence: f64,

    #[serde(rename = "confidenceBand")]
    pub band: ConfidenceBand,
}

/// Result of assessing one patient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Classifier label: 0 = normotensive, 1 = hypertensive
    pub prediction: u8,

    /// Confidence derived from the risk score
    pub confidence: ConfidenceResult,

    /// Additive clinical risk score in [0, 100]
    pub risk_score: u8,

    /// Guideline blood pressure category
    pub bp_category: BloodPressureCategory,

    /// Human-readable risk factors in evaluation order
    pub risk_factors: Vec<String>,
}
