use clap::Parser;
use heart_risk::utils::logger;
use heart_risk::{serve, AppState, CategoryMapping, CliConfig, Classifier, LogisticModel, Settings};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 設定檔錯誤時日誌尚未初始化，直接輸出到 stderr
    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    };

    // 初始化日誌
    logger::init_logger(settings.json_logs(), settings.verbose);
    tracing::info!("Starting heart-risk server");
    tracing::debug!("Effective settings: {:?}", settings);

    // 沒有模型就不提供服務
    let model = match LogisticModel::load(&settings.model_path) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code().max(1));
        }
    };

    let model: Arc<dyn Classifier> = Arc::new(model);
    let state = Arc::new(AppState::new(model, Arc::new(CategoryMapping::standard())));

    if let Err(e) = serve(&settings.addr, state).await {
        tracing::error!("❌ Server stopped: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code().max(1));
    }
}
