use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Raw field values exactly as submitted, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: HashMap<String, String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for RawInput {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

/// Sparse feature mapping; any feature not present reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    values: BTreeMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, feature: impl Into<String>, value: f64) {
        self.values.insert(feature.into(), value);
    }

    pub fn get(&self, feature: &str) -> f64 {
        self.values.get(feature).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.values.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Yes,
    No,
}

impl Label {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// A successful prediction; probabilities are percentages with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Label,
    pub probability_yes: f64,
    pub probability_no: f64,
}

impl Prediction {
    /// Build from the classifier's class and `[p_no, p_yes]` output.
    pub fn from_model_output(class: u8, probabilities: [f64; 2]) -> Self {
        Self {
            label: Label::from_class(class),
            probability_no: to_percent(probabilities[0]),
            probability_yes: to_percent(probabilities[1]),
        }
    }
}

/// `p` in [0, 1] to a percentage rounded to two decimal places.
pub fn to_percent(p: f64) -> f64 {
    (p * 100.0 * 100.0).round() / 100.0
}

/// What the page (or a batch row) reports for one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Predicted(Prediction),
    Failed(String),
}

impl PredictionResult {
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Predicted(p) => Some(p),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Predicted(_) => None,
            Self::Failed(message) => Some(message),
        }
    }
}

/// One scored row of a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub row: usize,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub rows: Vec<ScoredRow>,
}

impl BatchResult {
    pub fn scored(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.result.prediction().is_some())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.rows.len() - self.scored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_defaults_to_zero() {
        let mut fv = FeatureVector::new();
        fv.set("BMI", 28.5);
        assert_eq!(fv.get("BMI"), 28.5);
        assert_eq!(fv.get("Smoking_Yes"), 0.0);
        assert!(!fv.contains("Smoking_Yes"));
    }

    #[test]
    fn test_probability_rounding() {
        let p = Prediction::from_model_output(1, [0.3123, 0.6877]);
        assert_eq!(p.label, Label::Yes);
        assert!((p.probability_no - 31.23).abs() < 1e-9);
        assert!((p.probability_yes - 68.77).abs() < 1e-9);
        assert!((p.probability_no + p.probability_yes - 100.0).abs() <= 0.01);
    }

    #[test]
    fn test_to_percent_two_decimals() {
        assert!((to_percent(0.123456) - 12.35).abs() < 1e-9);
        assert_eq!(to_percent(0.0), 0.0);
        assert_eq!(to_percent(1.0), 100.0);
    }

    #[test]
    fn test_batch_counts() {
        let batch = BatchResult {
            rows: vec![
                ScoredRow {
                    row: 1,
                    result: PredictionResult::Predicted(Prediction::from_model_output(
                        0,
                        [0.9, 0.1],
                    )),
                },
                ScoredRow {
                    row: 2,
                    result: PredictionResult::Failed("Missing value for BMI".to_string()),
                },
            ],
        };
        assert_eq!(batch.scored(), 1);
        assert_eq!(batch.failed(), 1);
    }
}
