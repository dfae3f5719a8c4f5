use crate::core::Pipeline;
use crate::utils::error::Result;

/// Outcome of a finished batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_path: String,
    pub total: usize,
    pub scored: usize,
    pub failed: usize,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch scoring...");

        // Extract
        let rows = self.pipeline.extract().await?;
        tracing::info!("📥 Read {} patient rows", rows.len());

        // Transform
        let result = self.pipeline.transform(rows).await?;
        let (total, scored, failed) = (result.rows.len(), result.scored(), result.failed());
        tracing::info!("🧮 Scored {} rows, {} rejected", scored, failed);

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("📁 Predictions saved to: {}", output_path);

        Ok(BatchSummary {
            output_path,
            total,
            scored,
            failed,
        })
    }
}
