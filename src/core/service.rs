use crate::core::{aligner, encoder};
use crate::domain::{CategoryMapping, Classifier, Prediction, PredictionResult, RawInput};
use crate::utils::error::{Result, RiskError};
use std::sync::Arc;

/// Encode → align → infer for one submission.
///
/// Holds only read-only handles; cloning is cheap and every request can use
/// its own clone.
pub struct PredictionService<C: Classifier + ?Sized> {
    model: Arc<C>,
    mapping: Arc<CategoryMapping>,
}

impl<C: Classifier + ?Sized> Clone for PredictionService<C> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            mapping: Arc::clone(&self.mapping),
        }
    }
}

impl<C: Classifier + ?Sized> PredictionService<C> {
    pub fn new(model: Arc<C>, mapping: Arc<CategoryMapping>) -> Self {
        let service = Self { model, mapping };
        service.warn_on_unknown_columns();
        service
    }

    pub fn mapping(&self) -> &CategoryMapping {
        &self.mapping
    }

    pub fn model(&self) -> &C {
        &self.model
    }

    pub fn predict(&self, input: &RawInput) -> Result<Prediction> {
        let features = encoder::encode(input, &self.mapping)?;

        let expected = self.model.feature_names();
        let dropped = aligner::unexpected_features(&features, expected);
        if !dropped.is_empty() {
            tracing::debug!("Dropping features unknown to the model: {:?}", dropped);
        }
        let row = aligner::align(&features, expected);

        let class = self.model.predict(&row)?;
        let probabilities = self.model.predict_proba(&row)?;
        if class > 1 {
            return Err(RiskError::inference(format!("unexpected class {}", class)));
        }

        Ok(Prediction::from_model_output(class, probabilities))
    }

    /// Like [`predict`](Self::predict) but folds failures into a displayable message.
    pub fn evaluate(&self, input: &RawInput) -> PredictionResult {
        self.report(self.predict(input))
    }

    /// Log an outcome and turn it into what the requester sees.
    ///
    /// Validation messages name the field; any other failure is logged with its
    /// details and replaced with a generic message.
    pub fn report(&self, outcome: Result<Prediction>) -> PredictionResult {
        match outcome {
            Ok(prediction) => {
                tracing::info!(
                    label = %prediction.label,
                    probability_yes = prediction.probability_yes,
                    "✅ Prediction completed"
                );
                PredictionResult::Predicted(prediction)
            }
            Err(RiskError::Validation(e)) => {
                tracing::info!(field = %e.field, kind = %e.kind, "⚠️ Rejected submission");
                PredictionResult::Failed(e.to_string())
            }
            Err(e) => {
                tracing::error!(
                    "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                PredictionResult::Failed(e.user_friendly_message())
            }
        }
    }

    /// 模型欄位若不在編碼表中，對應值永遠是 0
    fn warn_on_unknown_columns(&self) {
        let produced: Vec<&str> = crate::domain::NumericField::ALL
            .iter()
            .map(|f| f.name())
            .chain(self.mapping.all_features())
            .collect();
        let never_set: Vec<&String> = self
            .model
            .feature_names()
            .iter()
            .filter(|name| !produced.contains(&name.as_str()))
            .collect();
        if !never_set.is_empty() {
            tracing::warn!(
                "Model expects {} feature(s) the form never produces: {:?}",
                never_set.len(),
                never_set
            );
        }
    }
}
