// Domain layer: field enumerations, request/response models and ports.

pub mod category;
pub mod model;
pub mod ports;

pub use category::{CategoricalField, Category, CategoryMapping, NumericField};
pub use model::{FeatureVector, Label, Prediction, PredictionResult, RawInput};
pub use ports::{Classifier, Pipeline, Storage};
