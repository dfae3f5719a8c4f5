//! # heart-risk
//!
//! A one-page web form that scores heart disease risk with a pre-trained
//! classifier loaded from disk.
//!
//! - `domain`: field enumerations, request/response models and ports
//! - `core`: encoder, aligner, prediction service and batch scoring pipeline
//! - `adapters`: the JSON logistic-regression model and local file storage
//! - `web`: axum router, handlers and HTML rendering
//! - `config` / `utils`: configuration, logging, validation and errors

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::{LocalStorage, LogisticModel};
pub use crate::core::{batch::BatchEngine, pipeline::CsvScoringPipeline, service::PredictionService};
pub use domain::{CategoryMapping, Classifier, FeatureVector, Prediction, PredictionResult, RawInput};
pub use utils::error::{Result, RiskError, ValidationError};
pub use web::{create_router, serve, AppState};
