//! Logistic-regression classifier loaded from a JSON export.

use crate::domain::Classifier;
use crate::utils::error::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

/// Standardisation applied to the row before the linear term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_name: String,
    pub feature_names_in: Vec<String>,
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl LogisticModel {
    /// 從 JSON 檔案載入模型並驗證
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| RiskError::model_load(&path_str, e.to_string()))?;
        let model = Self::parse(&content).map_err(|m| RiskError::model_load(&path_str, m))?;

        tracing::info!(
            "📦 Loaded model '{}' ({} features, threshold {})",
            model.model_name,
            model.feature_names_in.len(),
            model.threshold
        );
        Ok(model)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|m| RiskError::model_load("<inline>", m))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let model: Self = serde_json::from_str(content).map_err(|e| e.to_string())?;
        model.check()?;
        Ok(model)
    }

    fn check(&self) -> std::result::Result<(), String> {
        let n = self.feature_names_in.len();
        if n == 0 {
            return Err("feature_names_in is empty".to_string());
        }

        let mut seen = HashSet::new();
        for name in &self.feature_names_in {
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate feature '{}'", name));
            }
        }

        if self.coef.len() != n {
            return Err(format!(
                "coef has {} entries, expected {}",
                self.coef.len(),
                n
            ));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!("threshold {} is outside (0, 1)", self.threshold));
        }

        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err("scaler vectors do not match feature count".to_string());
            }
            if scaler.mean.iter().any(|m| !m.is_finite())
                || scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0)
            {
                return Err("scaler values must be finite and scales non-zero".to_string());
            }
        }

        Ok(())
    }

    fn decision_function(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coef.len() {
            return Err(RiskError::inference(format!(
                "row has {} columns, model expects {}",
                row.len(),
                self.coef.len()
            )));
        }

        let z = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(&self.coef)
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|((x, w), (m, s))| w * (x - m) / s)
                .sum::<f64>(),
            None => row.iter().zip(&self.coef).map(|(x, w)| w * x).sum::<f64>(),
        };

        Ok(z + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names_in
    }

    fn predict(&self, row: &[f64]) -> Result<u8> {
        let [_, p_yes] = self.predict_proba(row)?;
        Ok(u8::from(p_yes >= self.threshold))
    }

    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2]> {
        let p_yes = sigmoid(self.decision_function(row)?);
        if !p_yes.is_finite() {
            return Err(RiskError::inference("probability is not finite"));
        }
        Ok([1.0 - p_yes, p_yes])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn two_feature_model() -> LogisticModel {
        LogisticModel::from_json_str(
            r#"{
                "model_name": "tiny",
                "feature_names_in": ["BMI", "Smoking_Yes"],
                "coef": [0.1, 2.0],
                "intercept": -3.0
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_threshold_and_scaler() {
        let model = two_feature_model();
        assert_eq!(model.threshold, 0.5);
        assert!(model.scaler.is_none());
        assert_eq!(model.feature_names(), ["BMI", "Smoking_Yes"]);
    }

    #[test]
    fn test_predict_proba_sums_to_one() {
        let model = two_feature_model();
        let [p_no, p_yes] = model.predict_proba(&[30.0, 1.0]).unwrap();
        // z = 3 + 2 - 3 = 2
        assert!((p_yes - sigmoid(2.0)).abs() < 1e-12);
        assert!((p_no + p_yes - 1.0).abs() < 1e-12);
        assert_eq!(model.predict(&[30.0, 1.0]).unwrap(), 1);
        assert_eq!(model.predict(&[10.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn test_scaler_is_applied() {
        let model = LogisticModel::from_json_str(
            r#"{
                "model_name": "scaled",
                "feature_names_in": ["BMI"],
                "coef": [1.0],
                "intercept": 0.0,
                "scaler": {"mean": [25.0], "scale": [5.0]}
            }"#,
        )
        .unwrap();
        let [_, p_yes] = model.predict_proba(&[25.0]).unwrap();
        assert!((p_yes - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_row_width_is_an_inference_error() {
        let model = two_feature_model();
        let err = model.predict_proba(&[1.0]).unwrap_err();
        assert!(matches!(err, RiskError::Inference { .. }));
    }

    #[test]
    fn test_rejects_inconsistent_artifacts() {
        let mismatched = r#"{"model_name":"m","feature_names_in":["a","b"],"coef":[1.0],"intercept":0.0}"#;
        assert!(LogisticModel::from_json_str(mismatched).is_err());

        let duplicate = r#"{"model_name":"m","feature_names_in":["a","a"],"coef":[1.0,1.0],"intercept":0.0}"#;
        assert!(LogisticModel::from_json_str(duplicate).is_err());

        let bad_threshold = r#"{"model_name":"m","feature_names_in":["a"],"coef":[1.0],"intercept":0.0,"threshold":1.5}"#;
        assert!(LogisticModel::from_json_str(bad_threshold).is_err());

        let zero_scale = r#"{"model_name":"m","feature_names_in":["a"],"coef":[1.0],"intercept":0.0,"scaler":{"mean":[0.0],"scale":[0.0]}}"#;
        assert!(LogisticModel::from_json_str(zero_scale).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"model_name":"file","feature_names_in":["a"],"coef":[0.5],"intercept":0.1}"#,
        )
        .unwrap();

        let model = LogisticModel::load(file.path()).unwrap();
        assert_eq!(model.model_name, "file");
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let err = LogisticModel::load("/definitely/not/here/heart_model.json").unwrap_err();
        assert!(matches!(err, RiskError::ModelLoad { .. }));
    }
}
