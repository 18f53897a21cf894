//! Marketing-email DNA analysis pipeline.
//!
//! Takes a rendered markdown document and a directory of extracted images,
//! runs them through content and vision classification against an injected
//! [`InferenceService`], and synthesizes a single "marketing DNA" report
//! that is persisted as JSON.
//!
//! Mailbox access, MIME decoding, and HTML rendering are external
//! collaborators; this crate starts at the rendered document.

pub mod classify;
pub mod error;
pub mod extract;
pub mod inference;
pub mod pipeline;
pub mod schema;
pub mod storage;
pub mod synthesis;
pub mod telemetry;

pub use classify::{ContentClassifier, VisualClassifier};
pub use error::StorageError;
pub use extract::{ExtractedFacts, FactExtractor};
pub use inference::{ImagePayload, InferenceConfig, InferenceError, InferenceService, OllamaClient};
pub use pipeline::{
    AnalysisJob, Pipeline, PipelineConfig, PipelineContext, PipelineStatus, RunResult,
};
pub use schema::{ContentAnalysis, ContentClassification, DnaReport, ImageAnalysis, VisualAnalysis};
pub use storage::ReportStore;
pub use synthesis::DnaSynthesizer;
pub use telemetry::init_tracing;
