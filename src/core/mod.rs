pub mod config;
pub mod error;
pub mod types;

pub use config::AssistantConfig;
pub use error::{AssistError, Result};
pub use types::{ExtractionMode, Intent};
