pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod preprocess;

pub use analysis::Pipeline;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{PipelineReport, TransactionRecord};
