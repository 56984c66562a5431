use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::entities::{FieldRange, PatientField, PatientInput, ValidatedInput};

/// Reasons a prediction payload is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(PatientField),

    /// Non-numeric, including booleans
    #[error("Invalid value for '{0}': must be a number")]
    NotANumber(PatientField),

    #[error("Invalid value for '{0}': must be a whole number")]
    NotWholeNumber(PatientField),

    #[error("Invalid value for '{}': must be {}", .0.field, .0)]
    OutOfRange(FieldRange),

    #[error("diastolic must be less than systolic")]
    DiastolicNotBelowSystolic,
}

/// Validate a raw prediction payload.
///
/// Checks run in passes (presence, type, then per-field whole-number and
/// range), each pass over the fields in `PatientField::ALL` order, and the
/// diastolic/systolic comparison last. The first failure is returned.
///
/// The submitted numbers are kept alongside the truncated patient fields.
pub fn validate_inputs(data: &Value) -> Result<ValidatedInput, ValidationError> {
    let empty = Map::new();
    let object = data.as_object().unwrap_or(&empty);

    for field in PatientField::ALL {
        if matches!(object.get(field.name()), None | Some(Value::Null)) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let mut numbers = Vec::with_capacity(PatientField::ALL.len());
    for field in PatientField::ALL {
        match object.get(field.name()) {
            Some(Value::Number(number)) => numbers.push(number),
            _ => return Err(ValidationError::NotANumber(field)),
        }
    }

    let mut submitted = [0.0; 5];
    for (field, number) in PatientField::ALL.iter().zip(&numbers) {
        submitted[field.index()] = check_field(*field, number)?;
    }
    let [age, bmi, cholesterol, systolic, diastolic] = submitted;

    if diastolic >= systolic {
        return Err(ValidationError::DiastolicNotBelowSystolic);
    }

    // Ranges are checked above, so the truncating casts cannot overflow
    let patient = PatientInput {
        age: age.trunc() as u8,
        bmi,
        cholesterol: cholesterol.trunc() as u16,
        systolic: systolic.trunc() as u16,
        diastolic: diastolic.trunc() as u16,
    };

    Ok(ValidatedInput { submitted, patient })
}

/// serde_json stores integer literals beyond the i64/u64 range as floats
fn is_whole(number: &Number) -> bool {
    const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
    const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if number.is_i64() || number.is_u64() {
        return true;
    }
    number
        .as_f64()
        .map_or(false, |value| value.fract() == 0.0 && (value < I64_MIN || value >= U64_LIMIT))
}

fn check_field(field: PatientField, number: &Number) -> Result<f64, ValidationError> {
    if field == PatientField::Age && !is_whole(number) {
        return Err(ValidationError::NotWholeNumber(field));
    }

    let range = field.range();
    match number.as_f64() {
        Some(value) if range.contains(value) => Ok(value),
        _ => Err(ValidationError::OutOfRange(*range)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "age": 45,
            "bmi": 27.5,
            "cholesterol": 210,
            "systolic": 135,
            "diastolic": 85
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = valid_payload();
        payload[field] = value;
        payload
    }

    fn message(payload: &Value) -> String {
        validate_inputs(payload).unwrap_err().to_string()
    }

    #[test]
    fn test_valid_payload() {
        let validated = validate_inputs(&valid_payload()).unwrap();
        assert_eq!(validated.submitted, [45.0, 27.5, 210.0, 135.0, 85.0]);
        let input = validated.patient;
        assert_eq!(input.age, 45);
        assert_eq!(input.bmi, 27.5);
        assert_eq!(input.cholesterol, 210);
        assert_eq!(input.systolic, 135);
        assert_eq!(input.diastolic, 85);
    }

    #[test]
    fn test_missing_field() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("cholesterol");
        assert_eq!(message(&payload), "Missing required field: cholesterol");
    }

    #[test]
    fn test_null_counts_as_missing() {
        assert_eq!(message(&with("bmi", Value::Null)), "Missing required field: bmi");
    }

    #[test]
    fn test_missing_reported_before_type_errors() {
        let mut payload = with("age", json!("old"));
        payload.as_object_mut().unwrap().remove("diastolic");
        assert_eq!(message(&payload), "Missing required field: diastolic");
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        assert_eq!(message(&json!([1, 2, 3])), "Missing required field: age");
        assert_eq!(message(&json!("hello")), "Missing required field: age");
    }

    #[test]
    fn test_string_is_not_a_number() {
        assert_eq!(
            message(&with("systolic", json!("140"))),
            "Invalid value for 'systolic': must be a number"
        );
    }

    #[test]
    fn test_boolean_is_not_a_number() {
        assert_eq!(
            message(&with("age", json!(true))),
            "Invalid value for 'age': must be a number"
        );
    }

    #[test]
    fn test_age_must_be_whole() {
        assert_eq!(
            message(&with("age", json!(30.5))),
            "Invalid value for 'age': must be a whole number"
        );
        assert_eq!(
            message(&with("age", json!(30.0))),
            "Invalid value for 'age': must be a whole number"
        );
        assert_eq!(validate_inputs(&with("age", json!(30))).unwrap().patient.age, 30);
    }

    #[test]
    fn test_oversized_integer_age_is_out_of_range() {
        let payload: Value = serde_json::from_str(
            r#"{"age": 100000000000000000000, "bmi": 27.5, "cholesterol": 210,
                "systolic": 135, "diastolic": 85}"#,
        )
        .unwrap();
        assert_eq!(
            message(&payload),
            "Invalid value for 'age': must be between 1 and 120"
        );

        let negative = with("age", serde_json::from_str("-100000000000000000000").unwrap());
        assert_eq!(
            message(&negative),
            "Invalid value for 'age': must be between 1 and 120"
        );
    }

    #[test]
    fn test_bmi_may_be_fractional() {
        assert_eq!(validate_inputs(&with("bmi", json!(31.25))).unwrap().patient.bmi, 31.25);
        assert_eq!(validate_inputs(&with("bmi", json!(31))).unwrap().patient.bmi, 31.0);
    }

    #[test]
    fn test_out_of_range_messages() {
        assert_eq!(
            message(&with("age", json!(0))),
            "Invalid value for 'age': must be between 1 and 120"
        );
        assert_eq!(
            message(&with("bmi", json!(70.1))),
            "Invalid value for 'bmi': must be between 10.0 and 70.0"
        );
        assert_eq!(
            message(&with("cholesterol", json!(601))),
            "Invalid value for 'cholesterol': must be between 50 and 600"
        );
        assert_eq!(
            message(&with("systolic", json!(-5))),
            "Invalid value for 'systolic': must be between 60 and 300"
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let payload = json!({
            "age": 120,
            "bmi": 10.0,
            "cholesterol": 50,
            "systolic": 300,
            "diastolic": 30
        });
        assert!(validate_inputs(&payload).is_ok());
    }

    #[test]
    fn test_per_field_checks_run_in_field_order() {
        // age's range failure comes before bmi's
        let mut payload = with("age", json!(200));
        payload["bmi"] = json!(5.0);
        assert_eq!(
            message(&payload),
            "Invalid value for 'age': must be between 1 and 120"
        );
    }

    #[test]
    fn test_diastolic_must_be_below_systolic() {
        let mut payload = with("systolic", json!(90));
        payload["diastolic"] = json!(90);
        assert_eq!(
            validate_inputs(&payload).unwrap_err(),
            ValidationError::DiastolicNotBelowSystolic
        );
        assert_eq!(message(&payload), "diastolic must be less than systolic");
    }

    #[test]
    fn test_cross_field_check_runs_after_range_checks() {
        let mut payload = with("systolic", json!(80));
        payload["diastolic"] = json!(250);
        assert_eq!(
            message(&payload),
            "Invalid value for 'diastolic': must be between 30 and 200"
        );
    }

    #[test]
    fn test_cross_field_check_uses_submitted_values() {
        // 90.5 > 90, so the pair is accepted before truncation
        let mut payload = with("systolic", json!(90.5));
        payload["diastolic"] = json!(90);
        let input = validate_inputs(&payload).unwrap().patient;
        assert_eq!(input.systolic, 90);
        assert_eq!(input.diastolic, 90);
    }

    #[test]
    fn test_integer_fields_are_truncated() {
        let mut payload = with("systolic", json!(141.7));
        payload["cholesterol"] = json!(199.9);
        let validated = validate_inputs(&payload).unwrap();
        assert_eq!(validated.patient.systolic, 141);
        assert_eq!(validated.patient.cholesterol, 199);
        assert_eq!(validated.submitted(PatientField::Systolic), 141.7);
        assert_eq!(validated.submitted(PatientField::Cholesterol), 199.9);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let payload = with("smoker", json!(true));
        assert!(validate_inputs(&payload).is_ok());
    }
}
