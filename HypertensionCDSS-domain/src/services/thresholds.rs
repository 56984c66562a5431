//! Descending threshold ladders
//!
//! Each ladder covers one measurement and is evaluated top-down: the first
//! rung whose threshold the value reaches wins, and values below the last
//! rung match nothing.

use crate::entities::{PatientField, PatientInput};

/// One step of a ladder: applies when the value is `>= at_least`
#[derive(Debug, Clone, Copy)]
pub struct Rung<T> {
    pub at_least: f64,
    pub value: T,
}

/// Ordered rungs for a single measurement, highest threshold first
#[derive(Debug)]
pub struct Ladder<T: 'static> {
    pub field: PatientField,
    pub rungs: &'static [Rung<T>],
}

impl<T> Ladder<T> {
    /// First rung the patient's value reaches, if any
    pub fn first_match(&self, input: &PatientInput) -> Option<&'static T> {
        let value = input.value(self.field);
        self.rungs
            .iter()
            .find(|rung| value >= rung.at_least)
            .map(|rung| &rung.value)
    }

    /// Rungs must be strictly descending for first-match to pick the highest
    pub fn is_descending(&self) -> bool {
        self.rungs.windows(2).all(|pair| pair[0].at_least > pair[1].at_least)
    }
}

/// Measurement order used by every ladder table
pub const LADDER_ORDER: [PatientField; 5] = [
    PatientField::Systolic,
    PatientField::Diastolic,
    PatientField::Age,
    PatientField::Bmi,
    PatientField::Cholesterol,
];
