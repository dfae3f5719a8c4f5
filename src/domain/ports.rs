use crate::domain::model::{BatchResult, RawInput};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A fitted binary classifier loaded from an external artifact.
///
/// Implementations are read-only after construction and shared across requests.
pub trait Classifier: Send + Sync {
    /// Column order the model was fit against.
    fn feature_names(&self) -> &[String];

    /// Predicted class, `0` or `1`.
    fn predict(&self, row: &[f64]) -> Result<u8>;

    /// `[p_no, p_yes]`.
    fn predict_proba(&self, row: &[f64]) -> Result<[f64; 2]>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawInput>>;
    async fn transform(&self, rows: Vec<RawInput>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
