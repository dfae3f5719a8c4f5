pub mod aligner;
pub mod batch;
pub mod encoder;
pub mod pipeline;
pub mod service;

pub use crate::domain::model::{BatchResult, ScoredRow};
pub use crate::domain::ports::{Classifier, Pipeline, Storage};
pub use crate::utils::error::Result;
