//! EduBot core: prompt templates, per-tool variable dispatch, student
//! personalization and the Gemini invocation adapter.

pub mod config;
pub mod dispatch;
pub mod llm;
pub mod personalization;
pub mod postprocessing;
pub mod profile;
pub mod session;
pub mod templates;
pub mod tools;

pub use config::{Config, ConfigError};
pub use dispatch::{build_variables, FormState, ToolTable};
pub use llm::{ChatMessage, GeminiClient, ModelAdapter, ModelBackend};
pub use personalization::{build_system_instruction, BaseRole};
pub use profile::{Language, StudentProfile};
pub use session::{Session, SessionError};
pub use templates::{hydrate, TemplateRegistry};
pub use tools::ToolId;
