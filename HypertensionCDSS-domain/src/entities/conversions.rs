use hypertension_cdss_data::FeatureVector;

use crate::entities::patient::{PatientField, ValidatedInput};

/// Conversion functions between domain entities and data layer types

/// Build the classifier's feature vector from the submitted measurements
pub fn convert_to_feature_vector(input: &ValidatedInput) -> FeatureVector {
    FeatureVector::new(
        input.submitted(PatientField::Age),
        input.submitted(PatientField::Bmi),
        input.submitted(PatientField::Cholesterol),
        input.submitted(PatientField::Systolic),
        input.submitted(PatientField::Diastolic),
    )
}
