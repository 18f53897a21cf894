use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::schema::{ContentAnalysis, DnaReport, VisualAnalysis};

/// Lifecycle of a single analysis run. Advances strictly forward; a fatal
/// error leaves the context at the last status that was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Starting,
    ContentAnalyzed,
    ImagesAnalyzed,
    Complete,
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineStatus::Starting => "starting",
            PipelineStatus::ContentAnalyzed => "content_analyzed",
            PipelineStatus::ImagesAnalyzed => "images_analyzed",
            PipelineStatus::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// One email to analyze: the rendered markdown document plus its image
/// directory (which may not exist).
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    pub document_path: PathBuf,
    pub images_dir: PathBuf,
}

pub struct PipelineContext {
    // Input
    pub job: AnalysisJob,

    pub status: PipelineStatus,

    // Step 1 result — guaranteed Some after step_analyze_content
    pub content: Option<ContentAnalysis>,

    // Step 2 result — guaranteed Some after step_analyze_images
    pub visual: Option<VisualAnalysis>,

    // Step 3 result
    pub dna: Option<DnaReport>,

    // Step 4 result — the stored report path
    pub report_path: Option<PathBuf>,
}

impl PipelineContext {
    pub fn new(job: AnalysisJob) -> Self {
        Self {
            job,
            status: PipelineStatus::Starting,
            content: None,
            visual: None,
            dna: None,
            report_path: None,
        }
    }
}
