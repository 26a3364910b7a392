pub mod config;
pub mod llm_client;
pub mod models;
pub mod telemetry;
pub mod validation;

pub use config::GeneratorConfig;
pub use llm_client::GeminiClient;
pub use models::ValidationComment;
pub use validation::{fallback_comments, CommentSource, ValidationGenerator};
