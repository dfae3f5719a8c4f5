//! Raw form values to a sparse one-hot [`FeatureVector`].

use crate::domain::{CategoricalField, CategoryMapping, FeatureVector, NumericField, RawInput};
use crate::utils::error::ValidationError;

/// Encode a submission.
///
/// Numeric fields are copied through as `f64`; each categorical field switches on
/// exactly one `<Field>_<Value>` feature. Fails on the first rejected field, so
/// callers never see a partially encoded vector.
pub fn encode(
    input: &RawInput,
    mapping: &CategoryMapping,
) -> Result<FeatureVector, ValidationError> {
    let mut features = FeatureVector::new();

    for field in NumericField::ALL {
        let value = parse_numeric(input, field)?;
        features.set(field.name(), value);
    }

    for field in CategoricalField::ALL {
        let raw = required(input, field.name())?;
        let feature = mapping
            .feature_for(field, raw)
            .ok_or_else(|| ValidationError::invalid_category(field.name(), raw))?;
        features.set(feature, 1.0);
    }

    Ok(features)
}

fn required<'a>(input: &'a RawInput, field: &str) -> Result<&'a str, ValidationError> {
    input.get(field).ok_or_else(|| ValidationError::missing(field))
}

fn parse_numeric(input: &RawInput, field: NumericField) -> Result<f64, ValidationError> {
    let raw = required(input, field.name())?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(field.name()));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::non_numeric(field.name(), raw)),
    }
}
