use crate::entities::{PatientField, PatientInput};
use crate::services::thresholds::{Ladder, Rung};

/// Risk-factor descriptions per measurement, systolic first
pub static RISK_FACTOR_LADDERS: [Ladder<&str>; 5] = [
    Ladder {
        field: PatientField::Systolic,
        rungs: &[
            Rung { at_least: 180.0, value: "Hypertensive-crisis-level systolic BP" },
            Rung { at_least: 140.0, value: "Stage 2 systolic hypertension" },
            Rung { at_least: 130.0, value: "Stage 1 systolic hypertension" },
            Rung { at_least: 120.0, value: "Elevated systolic BP" },
        ],
    },
    Ladder {
        field: PatientField::Diastolic,
        rungs: &[
            Rung { at_least: 120.0, value: "Hypertensive-crisis-level diastolic BP" },
            Rung { at_least: 90.0, value: "Stage 2 diastolic hypertension" },
            Rung { at_least: 80.0, value: "Stage 1 diastolic hypertension" },
        ],
    },
    Ladder {
        field: PatientField::Age,
        rungs: &[
            Rung { at_least: 70.0, value: "Advanced age (≥70 yrs)" },
            Rung { at_least: 60.0, value: "Senior age (≥60 yrs)" },
            Rung { at_least: 45.0, value: "Middle age (≥45 yrs)" },
        ],
    },
    Ladder {
        field: PatientField::Bmi,
        rungs: &[
            Rung { at_least: 35.0, value: "Severe obesity (BMI ≥35)" },
            Rung { at_least: 30.0, value: "Obesity (BMI ≥30)" },
            Rung { at_least: 25.0, value: "Overweight (BMI ≥25)" },
        ],
    },
    Ladder {
        field: PatientField::Cholesterol,
        rungs: &[
            Rung { at_least: 280.0, value: "Very high cholesterol (≥280 mg/dL)" },
            Rung { at_least: 240.0, value: "High cholesterol (≥240 mg/dL)" },
            Rung { at_least: 200.0, value: "Borderline-high cholesterol (≥200 mg/dL)" },
        ],
    },
];

/// Identify clinical risk factors, at most one per measurement
pub fn identify_risk_factors(input: &PatientInput) -> Vec<String> {
    RISK_FACTOR_LADDERS
        .iter()
        .filter_map(|ladder| ladder.first_match(input))
        .map(|description| description.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::thresholds::LADDER_ORDER;

    fn patient(age: u8, bmi: f64, cholesterol: u16, systolic: u16, diastolic: u16) -> PatientInput {
        PatientInput {
            age,
            bmi,
            cholesterol,
            systolic,
            diastolic,
        }
    }

    #[test]
    fn test_no_risk_factors_for_normal_values() {
        assert!(identify_risk_factors(&patient(30, 22.0, 180, 110, 70)).is_empty());
    }

    #[test]
    fn test_risk_factors_follow_evaluation_order() {
        let factors = identify_risk_factors(&patient(65, 32.0, 250, 150, 95));
        assert_eq!(
            factors,
            vec![
                "Stage 2 systolic hypertension",
                "Stage 2 diastolic hypertension",
                "Senior age (≥60 yrs)",
                "Obesity (BMI ≥30)",
                "High cholesterol (≥240 mg/dL)",
            ]
        );
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let factors = identify_risk_factors(&patient(45, 25.0, 200, 120, 80));
        assert_eq!(
            factors,
            vec![
                "Elevated systolic BP",
                "Stage 1 diastolic hypertension",
                "Middle age (≥45 yrs)",
                "Overweight (BMI ≥25)",
                "Borderline-high cholesterol (≥200 mg/dL)",
            ]
        );
    }

    #[test]
    fn test_crisis_level_factors() {
        let factors = identify_risk_factors(&patient(70, 35.0, 280, 180, 120));
        assert_eq!(factors[0], "Hypertensive-crisis-level systolic BP");
        assert_eq!(factors[1], "Hypertensive-crisis-level diastolic BP");
        assert_eq!(factors[2], "Advanced age (≥70 yrs)");
        assert_eq!(factors[3], "Severe obesity (BMI ≥35)");
        assert_eq!(factors[4], "Very high cholesterol (≥280 mg/dL)");
    }

    #[test]
    fn test_bmi_just_below_threshold() {
        let factors = identify_risk_factors(&patient(30, 24.9, 180, 110, 70));
        assert!(factors.is_empty());
    }

    #[test]
    fn test_ladder_table_shape() {
        for (ladder, field) in RISK_FACTOR_LADDERS.iter().zip(LADDER_ORDER) {
            assert_eq!(ladder.field, field);
            assert!(ladder.is_descending());
        }
    }
}
