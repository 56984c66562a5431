use std::fmt;

use serde::{Deserialize, Serialize};

/// The five measurements a prediction request must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientField {
    /// Age in years
    Age,
    /// Body Mass Index in kg/m²
    Bmi,
    /// Total cholesterol in mg/dL
    Cholesterol,
    /// Systolic blood pressure in mmHg
    Systolic,
    /// Diastolic blood pressure in mmHg
    Diastolic,
}

impl PatientField {
    /// All fields, in validation order
    pub const ALL: [PatientField; 5] = [
        PatientField::Age,
        PatientField::Bmi,
        PatientField::Cholesterol,
        PatientField::Systolic,
        PatientField::Diastolic,
    ];

    /// JSON key of the field
    pub fn name(self) -> &'static str {
        match self {
            PatientField::Age => "age",
            PatientField::Bmi => "bmi",
            PatientField::Cholesterol => "cholesterol",
            PatientField::Systolic => "systolic",
            PatientField::Diastolic => "diastolic",
        }
    }

    /// Position of the field in `ALL`
    pub fn index(self) -> usize {
        match self {
            PatientField::Age => 0,
            PatientField::Bmi => 1,
            PatientField::Cholesterol => 2,
            PatientField::Systolic => 3,
            PatientField::Diastolic => 4,
        }
    }

    /// Accepted range for the field
    pub fn range(self) -> &'static FieldRange {
        &FIELD_RANGES[self.index()]
    }

    /// BMI is the only real-valued measurement
    pub fn is_real(self) -> bool {
        self == PatientField::Bmi
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive bounds for one measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: PatientField,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn format_bound(&self, bound: f64) -> String {
        if self.field.is_real() {
            format!("{:.1}", bound)
        } else {
            format!("{}", bound as i64)
        }
    }
}

/// Renders as `between MIN and MAX`
impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "between {} and {}",
            self.format_bound(self.min),
            self.format_bound(self.max)
        )
    }
}

/// Accepted ranges, in `PatientField::ALL` order
pub static FIELD_RANGES: [FieldRange; 5] = [
    FieldRange { field: PatientField::Age, min: 1.0, max: 120.0 },
    FieldRange { field: PatientField::Bmi, min: 10.0, max: 70.0 },
    FieldRange { field: PatientField::Cholesterol, min: 50.0, max: 600.0 },
    FieldRange { field: PatientField::Systolic, min: 60.0, max: 300.0 },
    FieldRange { field: PatientField::Diastolic, min: 30.0, max: 200.0 },
];

/// Validated patient measurements for a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in whole years
    pub age: u8,

    /// Body Mass Index
    pub bmi: f64,

    /// Total cholesterol (mg/dL)
    pub cholesterol: u16,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,
}

impl PatientInput {
    /// Numeric value of one measurement, for threshold comparisons
    pub fn value(&self, field: PatientField) -> f64 {
        match field {
            PatientField::Age => f64::from(self.age),
            PatientField::Bmi => self.bmi,
            PatientField::Cholesterol => f64::from(self.cholesterol),
            PatientField::Systolic => f64::from(self.systolic),
            PatientField::Diastolic => f64::from(self.diastolic),
        }
    }
}

/// Outcome of validating a payload.
///
/// The classifier consumes `submitted`, while the rule engine works on
/// `patient`, whose integer fields are truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    /// Measurements as submitted, in `PatientField::ALL` order
    pub submitted: [f64; 5],

    pub patient: PatientInput,
}

impl ValidatedInput {
    /// Submitted value of one measurement
    pub fn submitted(&self, field: PatientField) -> f64 {
        self.submitted[field.index()]
    }
}
