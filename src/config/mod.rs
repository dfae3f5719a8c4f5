pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "heart-risk")]
#[command(about = "Heart disease risk prediction form")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address, overrides [server].addr
    #[arg(long)]
    pub addr: Option<String>,

    /// Model artifact (JSON), overrides [model].path
    #[arg(long)]
    pub model: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Effective server settings after merging the config file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub addr: String,
    pub model_path: String,
    pub log_format: String,
    pub verbose: bool,
}

impl Settings {
    pub fn from_file_config(config: &TomlConfig) -> Self {
        Self {
            addr: config.server.addr.clone(),
            model_path: config.model.path.clone(),
            log_format: config.logging.format.clone(),
            verbose: config.logging.verbose,
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut settings = Self::from_file_config(&file_config);
        if let Some(addr) = &cli.addr {
            settings.addr = addr.clone();
        }
        if let Some(model) = &cli.model {
            settings.model_path = model.clone();
        }
        if cli.json_logs {
            settings.log_format = "json".to_string();
        }
        settings.verbose |= cli.verbose;

        // 只驗證合併後的結果，命令列可以修正設定檔中的錯誤值
        settings.validate()?;
        Ok(settings)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("addr", &self.addr)?;
        validation::validate_path("model", &self.model_path)?;
        validation::validate_one_of("logging.format", &self.log_format, &toml_config::LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let settings = Settings::resolve(&CliConfig::default()).unwrap();
        assert_eq!(settings.addr, toml_config::DEFAULT_ADDR);
        assert_eq!(settings.model_path, toml_config::DEFAULT_MODEL_PATH);
        assert!(!settings.json_logs());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[server]\naddr = \"127.0.0.1:7000\"\n[model]\npath = \"from_file.json\"\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let cli = CliConfig {
            config: Some(file.path().display().to_string()),
            model: Some("from_cli.json".to_string()),
            ..CliConfig::default()
        };
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.addr, "127.0.0.1:7000");
        assert_eq!(settings.model_path, "from_cli.json");
        assert!(settings.json_logs());
    }

    #[test]
    fn test_cli_addr_rescues_bad_file_addr() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\naddr = \"${HEART_RISK_UNSET_ADDR}\"\n")
            .unwrap();

        let from_file_only = CliConfig {
            config: Some(file.path().display().to_string()),
            ..CliConfig::default()
        };
        assert!(Settings::resolve(&from_file_only).is_err());

        let cli = CliConfig {
            addr: Some("127.0.0.1:8000".to_string()),
            ..from_file_only
        };
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.addr, "127.0.0.1:8000");
    }

    #[test]
    fn test_unknown_log_format_is_rejected_after_merge() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nformat = \"xml\"\n").unwrap();

        let cli = CliConfig {
            config: Some(file.path().display().to_string()),
            ..CliConfig::default()
        };
        assert!(Settings::resolve(&cli).is_err());

        let cli = CliConfig {
            json_logs: true,
            ..cli
        };
        assert!(Settings::resolve(&cli).unwrap().json_logs());
    }

    #[test]
    fn test_default_model_path_points_at_shipped_artifact() {
        let shipped = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(toml_config::DEFAULT_MODEL_PATH);
        assert!(crate::LogisticModel::load(shipped).is_ok());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig {
            addr: Some("nowhere".to_string()),
            ..CliConfig::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = CliConfig::parse_from([
            "heart-risk",
            "--model",
            "m.json",
            "--addr",
            "0.0.0.0:5000",
            "-v",
        ]);
        assert_eq!(cli.model.as_deref(), Some("m.json"));
        assert_eq!(cli.addr.as_deref(), Some("0.0.0.0:5000"));
        assert!(cli.verbose);
    }
}
