//! Confidence estimation
//!
//! A decision tree with pure leaves yields probabilities of exactly 0 or 1,
//! which cannot express graded certainty. Confidence is instead derived from
//! how far the clinical risk score sits from the indifference point (50):
//!
//! 1. `distance = |risk_score - 50|`, in 0..=50
//! 2. `normalized = min(distance / 50, 1.0)`
//! 3. `curved = sqrt(normalized)`, so early distance counts for more
//! 4. `confidence = round(60 + curved * 30, 1)`, clamped to 60..=90
//!
//! Borderline patients land near 60% (Low), scores around 30 or 70 near 80%
//! (Moderate), and clear-cut cases near 90% (High).

use crate::entities::{ClassProbabilities, ConfidenceBand, ConfidenceResult};

/// Lowest reported confidence
pub const DISPLAY_MIN: f64 = 60.0;

/// Highest reported confidence
pub const DISPLAY_MAX: f64 = 90.0;

/// Risk score at which the assessment is least certain
pub const INDIFFERENCE_POINT: f64 = 50.0;

/// Distance from the indifference point that maps to full confidence
pub const MAX_DISTANCE: f64 = 50.0;

/// Risk score assumed when none is supplied
pub const DEFAULT_RISK_SCORE: u8 = 50;

/// Upper bound of the Low band (exclusive)
pub const LOW_BAND_LIMIT: f64 = 72.0;

/// Upper bound of the Moderate band (inclusive)
pub const MODERATE_BAND_LIMIT: f64 = 82.0;

/// Calculate confidence from the risk score.
///
/// `_probabilities` is the classifier's class probability pair. It is part of
/// the signature so callers can pass the model output straight through, but it
/// is never read. A missing `risk_score` is treated as `DEFAULT_RISK_SCORE`.
pub fn calculate_confidence(
    _probabilities: &ClassProbabilities,
    risk_score: Option<u8>,
) -> ConfidenceResult {
    let risk_score = f64::from(risk_score.unwrap_or(DEFAULT_RISK_SCORE));

    let distance = (risk_score - INDIFFERENCE_POINT).abs();
    let normalized = (distance / MAX_DISTANCE).min(1.0);
    let curved = normalized.sqrt();

    let confidence = round_to_tenth(DISPLAY_MIN + curved * (DISPLAY_MAX - DISPLAY_MIN))
        .clamp(DISPLAY_MIN, DISPLAY_MAX);

    ConfidenceResult {
        confidence,
        band: classify_confidence_band(confidence),
    }
}

/// Map a confidence percentage to its qualitative band
pub fn classify_confidence_band(confidence: f64) -> ConfidenceBand {
    if confidence < LOW_BAND_LIMIT {
        ConfidenceBand::Low
    } else if confidence <= MODERATE_BAND_LIMIT {
        ConfidenceBand::Moderate
    } else {
        ConfidenceBand::High
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
