use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info_span, Instrument};

use crate::classify::{ContentClassifier, VisualClassifier};
use crate::inference::InferenceService;
use crate::storage::ReportStore;
use crate::synthesis::DnaSynthesizer;

use super::config::PipelineConfig;
use super::context::{PipelineContext, PipelineStatus};
use super::error::PipelineError;
use super::progress::{AnalysisPhase, ProgressEvent, ProgressReporter};

/// Outcome summary for one analysis run, suitable for job queues and logs.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub document_path: PathBuf,
    pub success: bool,
    pub status: PipelineStatus,
    pub report_path: Option<PathBuf>,
    pub email_type: Option<String>,
    pub overall_score: Option<f64>,
    pub error: Option<String>,
}

impl RunResult {
    fn success(ctx: &PipelineContext, report_path: PathBuf, email_type: String, overall_score: f64) -> Self {
        Self {
            document_path: ctx.job.document_path.clone(),
            success: true,
            status: ctx.status,
            report_path: Some(report_path),
            email_type: Some(email_type),
            overall_score: Some(overall_score),
            error: None,
        }
    }

    fn failure(ctx: &PipelineContext, error: String) -> Self {
        Self {
            document_path: ctx.job.document_path.clone(),
            success: false,
            status: ctx.status,
            report_path: None,
            email_type: None,
            overall_score: None,
            error: Some(error),
        }
    }
}

pub struct Pipeline {
    content: ContentClassifier,
    vision: VisualClassifier,
    synthesizer: DnaSynthesizer,
    store: ReportStore,
}

impl Pipeline {
    /// Production constructor — builds all stages from config around one
    /// shared inference service.
    pub fn from_config(config: Arc<PipelineConfig>, inference: Arc<dyn InferenceService>) -> Self {
        let content = ContentClassifier::new(Arc::clone(&inference));
        let vision = VisualClassifier::with_concurrency(inference, config.image_concurrency);
        let store = ReportStore::new(&config.output_directory);

        Self {
            content,
            vision,
            synthesizer: DnaSynthesizer::new(),
            store,
        }
    }

    /// Run the full analysis for a single email.
    /// Returns a (RunResult, PipelineContext) pair.
    pub async fn run(
        &self,
        mut ctx: PipelineContext,
        progress: &dyn ProgressReporter,
    ) -> (RunResult, PipelineContext) {
        let span = info_span!("analysis",
            document = %ctx.job.document_path.display(),
        );

        async {
            // Step 1: Content analysis
            progress.report(ProgressEvent::Phase {
                phase: AnalysisPhase::ContentAnalysis,
                message: "Extracting facts and classifying content...".to_string(),
            });
            if let Err(e) = self
                .step_analyze_content(&mut ctx)
                .instrument(info_span!("analyze_content"))
                .await
            {
                let err_msg = e.to_string();
                progress.report(ProgressEvent::Failed {
                    error: err_msg.clone(),
                });
                let result = RunResult::failure(&ctx, err_msg);
                return (result, ctx);
            }

            // Step 2: Visual analysis
            progress.report(ProgressEvent::Phase {
                phase: AnalysisPhase::VisualAnalysis,
                message: "Analyzing email images...".to_string(),
            });
            self.step_analyze_images(&mut ctx)
                .instrument(info_span!("analyze_images"))
                .await;

            // Step 3: Synthesize the DNA report
            progress.report(ProgressEvent::Phase {
                phase: AnalysisPhase::Synthesis,
                message: "Synthesizing email DNA...".to_string(),
            });
            {
                let _step = info_span!("synthesize").entered();
                self.step_synthesize(&mut ctx);
            }

            // Step 4: Persist
            progress.report(ProgressEvent::Phase {
                phase: AnalysisPhase::Persisting,
                message: "Writing DNA report...".to_string(),
            });
            let report_path = {
                let _step = info_span!("persist").entered();
                match self.step_persist(&mut ctx) {
                    Ok(path) => path,
                    Err(e) => {
                        let err_msg = e.to_string();
                        progress.report(ProgressEvent::Failed {
                            error: err_msg.clone(),
                        });
                        let result = RunResult::failure(&ctx, err_msg);
                        return (result, ctx);
                    }
                }
            };

            let dna = ctx.dna.as_ref().expect("step 3 completed");
            let email_type = dna.email_dna.meta_data.email_type.clone();
            let overall_score = dna.email_dna.meta_data.overall_effectiveness_score;

            progress.report(ProgressEvent::Completed {
                report_path: report_path.clone(),
                email_type: email_type.clone(),
                overall_score,
            });

            let result = RunResult::success(&ctx, report_path, email_type, overall_score);
            (result, ctx)
        }
        .instrument(span)
        .await
    }

    async fn step_analyze_content(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let document = tokio::fs::read_to_string(&ctx.job.document_path)
            .await
            .map_err(|e| PipelineError::ReadDocument {
                path: ctx.job.document_path.clone(),
                source: e,
            })?;

        ctx.content = Some(self.content.analyze(&document).await);
        ctx.status = PipelineStatus::ContentAnalyzed;
        Ok(())
    }

    async fn step_analyze_images(&self, ctx: &mut PipelineContext) {
        let visual = self.vision.analyze_directory(&ctx.job.images_dir).await;
        ctx.visual = Some(visual);
        ctx.status = PipelineStatus::ImagesAnalyzed;
    }

    fn step_synthesize(&self, ctx: &mut PipelineContext) {
        let content = ctx.content.as_ref().expect("step 1 completed");
        let visual = ctx.visual.as_ref().expect("step 2 completed");
        ctx.dna = Some(self.synthesizer.synthesize(content, visual));
        ctx.status = PipelineStatus::Complete;
    }

    fn step_persist(&self, ctx: &mut PipelineContext) -> Result<PathBuf, PipelineError> {
        let dna = ctx.dna.as_ref().expect("step 3 completed");

        let stem = ctx
            .job
            .document_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "email".to_string());
        let basename = format!("{}_dna", stem);

        let report_path = self.store.store_report(dna, &basename)?;
        ctx.report_path = Some(report_path.clone());
        Ok(report_path)
    }
}
