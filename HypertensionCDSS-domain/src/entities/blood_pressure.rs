use std::fmt;

use serde::{Deserialize, Serialize};

/// Blood pressure category (AHA/ACC 2017)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BloodPressureCategory {
    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    Elevated,

    /// Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)
    #[serde(rename = "stage1")]
    Hypertension1,

    /// Stage 2 Hypertension (systolic ≥ 140 or diastolic ≥ 90)
    #[serde(rename = "stage2")]
    Hypertension2,

    /// Hypertensive crisis (systolic > 180 and/or diastolic > 120)
    #[serde(rename = "crisis")]
    HypertensiveCrisis,

    /// Fallback for readings no row of the staging table matches
    Unknown,
}

impl BloodPressureCategory {
    /// Human-readable category name
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "High BP – Stage 1",
            BloodPressureCategory::Hypertension2 => "High BP – Stage 2",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
            BloodPressureCategory::Unknown => "Unknown",
        }
    }

    /// CSS-safe stage identifier
    pub fn stage(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "normal",
            BloodPressureCategory::Elevated => "elevated",
            BloodPressureCategory::Hypertension1 => "stage1",
            BloodPressureCategory::Hypertension2 => "stage2",
            BloodPressureCategory::HypertensiveCrisis => "crisis",
            BloodPressureCategory::Unknown => "unknown",
        }
    }

    /// Semantic color hint for clients
    pub fn color(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "green",
            BloodPressureCategory::Elevated => "yellow",
            BloodPressureCategory::Hypertension1 => "orange",
            BloodPressureCategory::Hypertension2 => "red",
            BloodPressureCategory::HypertensiveCrisis => "darkred",
            BloodPressureCategory::Unknown => "gray",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_two_label_uses_en_dash() {
        assert_eq!(
            BloodPressureCategory::Hypertension2.label(),
            "High BP \u{2013} Stage 2"
        );
    }

    #[test]
    fn test_serialized_form_matches_stage() {
        for category in [
            BloodPressureCategory::Normal,
            BloodPressureCategory::Elevated,
            BloodPressureCategory::Hypertension1,
            BloodPressureCategory::Hypertension2,
            BloodPressureCategory::HypertensiveCrisis,
            BloodPressureCategory::Unknown,
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.stage());
        }
    }
}
