use crate::entities::BloodPressureCategory;

/// A guideline row: the category applies when `matches` holds
pub struct BloodPressureRule {
    pub category: BloodPressureCategory,
    pub matches: fn(u16, u16) -> bool,
}

fn is_crisis(systolic: u16, diastolic: u16) -> bool {
    systolic > 180 || diastolic > 120
}

fn is_stage2(systolic: u16, diastolic: u16) -> bool {
    systolic >= 140 || diastolic >= 90
}

fn is_stage1(systolic: u16, diastolic: u16) -> bool {
    (130..=139).contains(&systolic) || (80..=89).contains(&diastolic)
}

fn is_elevated(systolic: u16, diastolic: u16) -> bool {
    (120..=129).contains(&systolic) && diastolic < 80
}

fn is_normal(systolic: u16, diastolic: u16) -> bool {
    systolic < 120 && diastolic < 80
}

/// AHA/ACC 2017 staging table, most severe first. First match wins.
///
/// Anything that falls through every row is reported as `Unknown` rather
/// than forced into a neighbouring category.
pub static BLOOD_PRESSURE_RULES: [BloodPressureRule; 5] = [
    BloodPressureRule { category: BloodPressureCategory::HypertensiveCrisis, matches: is_crisis },
    BloodPressureRule { category: BloodPressureCategory::Hypertension2, matches: is_stage2 },
    BloodPressureRule { category: BloodPressureCategory::Hypertension1, matches: is_stage1 },
    BloodPressureRule { category: BloodPressureCategory::Elevated, matches: is_elevated },
    BloodPressureRule { category: BloodPressureCategory::Normal, matches: is_normal },
];

/// Classify blood pressure according to AHA/ACC 2017 guidelines
pub fn classify_bp(systolic: u16, diastolic: u16) -> BloodPressureCategory {
    BLOOD_PRESSURE_RULES
        .iter()
        .find(|rule| (rule.matches)(systolic, diastolic))
        .map(|rule| rule.category)
        .unwrap_or(BloodPressureCategory::Unknown)
}
