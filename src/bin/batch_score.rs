use anyhow::Context;
use clap::Parser;
use heart_risk::config::toml_config::DEFAULT_MODEL_PATH;
use heart_risk::utils::logger;
use heart_risk::{
    BatchEngine, CategoryMapping, CsvScoringPipeline, LocalStorage, LogisticModel,
    PredictionService,
};
use std::path::Path;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "batch-score")]
#[command(about = "Score a CSV file of patients with the heart disease model")]
struct Args {
    /// Model artifact (JSON)
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: String,

    /// Patient CSV with one column per form field
    #[arg(short, long)]
    input: String,

    /// Directory the predictions file is written to
    #[arg(long, default_value = "./output")]
    output_dir: String,

    /// Output file name, defaults to predictions_<timestamp>.csv
    #[arg(long)]
    output_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::info!("🚀 Starting batch scoring");

    let model = LogisticModel::load(&args.model)
        .with_context(|| format!("loading model '{}'", args.model))?;
    let service = PredictionService::new(Arc::new(model), Arc::new(CategoryMapping::standard()));

    // 輸入檔以絕對路徑讀取，輸出寫入 output_dir
    let input_path = Path::new(&args.input);
    let input = std::fs::canonicalize(input_path)
        .with_context(|| format!("input file '{}' not found", args.input))?;
    let output_name = args.output_name.clone().unwrap_or_else(|| {
        format!(
            "predictions_{}.csv",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        )
    });

    let storage = LocalStorage::new(&args.output_dir);
    let pipeline = CsvScoringPipeline::new(
        storage,
        service,
        input.display().to_string(),
        output_name,
    );

    let summary = BatchEngine::new(pipeline).run().await.map_err(|e| {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        anyhow::Error::new(e)
    })?;

    println!("✅ Scored {} of {} rows", summary.scored, summary.total);
    if summary.failed > 0 {
        println!("⚠️  {} rows rejected, see the error column", summary.failed);
    }
    println!(
        "📁 Output saved to: {}",
        Path::new(&args.output_dir).join(&summary.output_path).display()
    );

    Ok(())
}
