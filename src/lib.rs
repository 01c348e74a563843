pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod knowledge;
pub mod llm;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{PipelineError, Result};
pub use generator::orchestrator::{KnowledgeRequest, Orchestrator};
pub use generator::workflow::{Request, launch};
