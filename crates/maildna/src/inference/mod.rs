//! Inference Service boundary.
//!
//! The classifier stages depend only on the [`InferenceService`] trait; a
//! deterministic stub substitutes in tests. `OllamaClient` is the shipped
//! adapter for a local Ollama endpoint.

pub mod config;
pub mod ollama;
pub mod prompts;
pub mod response;
pub mod service;

pub use config::InferenceConfig;
pub use ollama::OllamaClient;
pub use response::parse_response;
pub use service::{ImagePayload, InferenceError, InferenceService};
