use std::sync::Arc;

use tracing::{debug, warn};

use crate::extract::FactExtractor;
use crate::inference::{self, prompts, InferenceService};
use crate::schema::{ContentAnalysis, ContentClassification};

/// Content analysis stage. Deterministic fact extraction always succeeds;
/// the model classification falls back to a fixed neutral record on any
/// failure, so this stage never fails the run.
pub struct ContentClassifier {
    extractor: FactExtractor,
    inference: Arc<dyn InferenceService>,
}

impl ContentClassifier {
    pub fn new(inference: Arc<dyn InferenceService>) -> Self {
        Self {
            extractor: FactExtractor::new(),
            inference,
        }
    }

    /// Analyze a markdown email document: extract raw facts, then ask the
    /// model for the six-category classification.
    pub async fn analyze(&self, document: &str) -> ContentAnalysis {
        let raw_data = self.extractor.extract(document);
        debug!(
            links = raw_data.extracted_links.len(),
            images = raw_data.image_references.len(),
            sections = raw_data.content_sections.len(),
            "extracted raw email facts"
        );

        let prompt = prompts::content_prompt(document);
        let analysis = match self.inference.classify(&prompt, None).await {
            Ok(raw) => match inference::parse_response::<ContentClassification>(&raw) {
                Ok(classification) => classification,
                Err(err) => {
                    warn!(error = %err, "content classification unparseable, using fallback");
                    ContentClassification::fallback()
                }
            },
            Err(err) => {
                warn!(error = %err, "content classification request failed, using fallback");
                ContentClassification::fallback()
            }
        };

        ContentAnalysis { raw_data, analysis }
    }
}
