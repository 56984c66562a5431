use crate::entities::{PatientField, PatientInput};
use crate::services::thresholds::{Ladder, Rung};

/// Upper bound of the risk score
pub const MAX_RISK_SCORE: u32 = 100;

/// Points per measurement; systolic is the strongest predictor
pub static RISK_WEIGHT_LADDERS: [Ladder<u32>; 5] = [
    Ladder {
        field: PatientField::Systolic,
        rungs: &[
            Rung { at_least: 180.0, value: 42 },
            Rung { at_least: 140.0, value: 35 },
            Rung { at_least: 130.0, value: 22 },
            Rung { at_least: 120.0, value: 9 },
        ],
    },
    Ladder {
        field: PatientField::Diastolic,
        rungs: &[
            Rung { at_least: 120.0, value: 30 },
            Rung { at_least: 90.0, value: 22 },
            Rung { at_least: 80.0, value: 12 },
        ],
    },
    Ladder {
        field: PatientField::Age,
        rungs: &[
            Rung { at_least: 70.0, value: 14 },
            Rung { at_least: 60.0, value: 10 },
            Rung { at_least: 45.0, value: 6 },
        ],
    },
    Ladder {
        field: PatientField::Bmi,
        rungs: &[
            Rung { at_least: 35.0, value: 12 },
            Rung { at_least: 30.0, value: 8 },
            Rung { at_least: 25.0, value: 4 },
        ],
    },
    Ladder {
        field: PatientField::Cholesterol,
        rungs: &[
            Rung { at_least: 280.0, value: 10 },
            Rung { at_least: 240.0, value: 7 },
            Rung { at_least: 200.0, value: 3 },
        ],
    },
];

/// Calculate the weighted clinical risk score (0-100)
pub fn calculate_risk_score(input: &PatientInput) -> u8 {
    let total: u32 = RISK_WEIGHT_LADDERS
        .iter()
        .filter_map(|ladder| ladder.first_match(input))
        .sum();

    // Weights are non-negative, so only the upper bound can be exceeded
    total.min(MAX_RISK_SCORE) as u8
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
    fn test_score_zero_for_normal_values() {
        assert_eq!(calculate_risk_score(&patient(30, 22.0, 180, 110, 70)), 0);
    }

    #[test]
    fn test_score_sums_one_weight_per_measurement() {
        // 35 + 22 + 10 + 8 + 7
        assert_eq!(calculate_risk_score(&patient(65, 32.0, 250, 150, 95)), 82);
        // 9 + 12 + 6 + 4 + 3
        assert_eq!(calculate_risk_score(&patient(45, 25.0, 200, 120, 80)), 34);
        // 22 only
        assert_eq!(calculate_risk_score(&patient(44, 24.9, 199, 139, 79)), 22);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        // 42 + 30 + 14 + 12 + 10 = 108
        assert_eq!(calculate_risk_score(&patient(90, 50.0, 400, 250, 150)), 100);
    }

    #[test]
    fn test_score_stays_in_range_across_inputs() {
        for systolic in (60..=300).step_by(10) {
            for diastolic in (30..=200).step_by(10) {
                for age in [1u8, 45, 60, 70, 120] {
                    let score = calculate_risk_score(&patient(age, 36.0, 300, systolic, diastolic));
                    assert!(score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_weight_table_shape() {
        for (ladder, field) in RISK_WEIGHT_LADDERS.iter().zip(LADDER_ORDER) {
            assert_eq!(ladder.field, field);
            assert!(ladder.is_descending());
        }
        let max: u32 = RISK_WEIGHT_LADDERS.iter().map(|l| l.rungs[0].value).sum();
        assert_eq!(max, 108);
    }
}
