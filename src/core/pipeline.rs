use crate::core::service::PredictionService;
use crate::domain::model::{BatchResult, ScoredRow};
use crate::domain::{Classifier, Pipeline, PredictionResult, RawInput, Storage};
use crate::utils::error::{Result, RiskError};

pub const OUTPUT_HEADER: [&str; 5] = [
    "row",
    "prediction",
    "probability_yes",
    "probability_no",
    "error",
];

/// Scores every row of a patient CSV and writes one result line per row.
pub struct CsvScoringPipeline<S: Storage, C: Classifier + ?Sized> {
    storage: S,
    service: PredictionService<C>,
    input_path: String,
    output_path: String,
}

impl<S: Storage, C: Classifier + ?Sized> CsvScoringPipeline<S, C> {
    pub fn new(
        storage: S,
        service: PredictionService<C>,
        input_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            service,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: Classifier + ?Sized> Pipeline for CsvScoringPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawInput>> {
        tracing::debug!("Reading patient rows from: {}", self.input_path);
        let data = self.storage.read_file(&self.input_path).await?;

        // 欄位不足的列交給 encoder 回報缺少欄位，不中斷整批
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(headers.iter().zip(record.iter()).collect::<RawInput>());
        }

        Ok(rows)
    }

    async fn transform(&self, rows: Vec<RawInput>) -> Result<BatchResult> {
        // 每一列獨立評分，單列失敗不中斷整批
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, input)| ScoredRow {
                row: i + 1,
                result: self.service.evaluate(input),
            })
            .collect();

        Ok(BatchResult { rows })
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(OUTPUT_HEADER)?;

        for scored in &result.rows {
            let record = match &scored.result {
                PredictionResult::Predicted(p) => [
                    scored.row.to_string(),
                    p.label.to_string(),
                    format!("{:.2}", p.probability_yes),
                    format!("{:.2}", p.probability_no),
                    String::new(),
                ],
                PredictionResult::Failed(message) => [
                    scored.row.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    message.clone(),
                ],
            };
            writer.write_record(&record)?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| RiskError::IoError(e.into_error()))?;

        tracing::debug!("Writing {} bytes to {}", data.len(), self.output_path);
        self.storage.write_file(&self.output_path, &data).await?;

        Ok(self.output_path.clone())
    }
}
