// Adapters layer: concrete implementations of the domain ports.

pub mod model_file;
pub mod storage;

pub use model_file::LogisticModel;
pub use storage::LocalStorage;
