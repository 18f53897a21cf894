use std::path::PathBuf;

use tracing::{error, info};

/// Coarse phases of a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    ContentAnalysis,
    VisualAnalysis,
    Synthesis,
    Persisting,
}

/// Events emitted by the pipeline during a run. Analysis payloads are
/// omitted from events (can be large); consumers read them off the context.
pub enum ProgressEvent {
    Phase {
        phase: AnalysisPhase,
        message: String,
    },
    Completed {
        report_path: PathBuf,
        email_type: String,
        overall_score: f64,
    },
    Failed {
        error: String,
    },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Reporter that forwards events to the tracing subscriber.
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Phase { phase, message } => {
                info!(?phase, "{}", message);
            }
            ProgressEvent::Completed {
                report_path,
                email_type,
                overall_score,
            } => {
                info!(
                    report = %report_path.display(),
                    email_type = %email_type,
                    overall_score,
                    "analysis complete"
                );
            }
            ProgressEvent::Failed { error } => {
                error!(error = %error, "analysis failed");
            }
        }
    }
}
