use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::inference::{self, prompts, ImagePayload, InferenceService};
use crate::schema::{ImageAnalysis, OverallAssessment, VisualAnalysis, VisualSummary};

/// Extensions accepted as email images, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

const DEFAULT_CONCURRENCY: usize = 4;

/// Vision analysis stage. Each image is analyzed independently; per-image
/// failures become placeholder records so one broken file never sinks the
/// directory. The stage itself never fails the run.
pub struct VisualClassifier {
    inference: Arc<dyn InferenceService>,
    concurrency: usize,
}

impl VisualClassifier {
    pub fn new(inference: Arc<dyn InferenceService>) -> Self {
        Self::with_concurrency(inference, DEFAULT_CONCURRENCY)
    }

    pub fn with_concurrency(inference: Arc<dyn InferenceService>, concurrency: usize) -> Self {
        Self {
            inference,
            concurrency: concurrency.max(1),
        }
    }

    /// Analyze every recognized image in `images_dir`. A missing or unreadable
    /// directory yields an empty result with neutral aggregates.
    pub async fn analyze_directory(&self, images_dir: &Path) -> VisualAnalysis {
        let paths = match collect_image_paths(images_dir).await {
            Ok(paths) => paths,
            Err(err) => {
                warn!(path = %images_dir.display(), error = %err, "images directory unavailable");
                return VisualAnalysis::default();
            }
        };

        debug!(count = paths.len(), "analyzing email images");

        let analyses: Vec<ImageAnalysis> = stream::iter(paths)
            .map(|path| self.classify_image(path))
            .buffered(self.concurrency)
            .collect()
            .await;

        let summary = summarize(&analyses);
        let overall_assessment = assess(&summary);

        VisualAnalysis {
            individual_analyses: analyses,
            summary,
            overall_assessment,
        }
    }

    async fn classify_image(&self, path: PathBuf) -> ImageAnalysis {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(filename = %filename, error = %err, "failed to read image");
                return ImageAnalysis::failed(filename, err.to_string());
            }
        };

        let prompt = prompts::image_prompt(&filename);
        let payload = ImagePayload {
            filename: filename.clone(),
            bytes,
        };

        let raw = match self.inference.classify(&prompt, Some(&payload)).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(filename = %filename, error = %err, "vision request failed");
                return ImageAnalysis::failed(filename, err.to_string());
            }
        };

        match inference::parse_response::<ImageAnalysis>(&raw) {
            Ok(mut analysis) => {
                // Trust the filesystem over whatever the model echoed back.
                analysis.filename = filename;
                analysis
            }
            Err(err) => {
                warn!(filename = %filename, error = %err, "vision response unparseable");
                ImageAnalysis::failed(filename, err.to_string())
            }
        }
    }
}

async fn collect_image_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if is_image(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

fn summarize(analyses: &[ImageAnalysis]) -> VisualSummary {
    let total = analyses.len();

    // Failed placeholders carry the neutral score of 5, so they still count.
    let avg = if total == 0 {
        5.0
    } else {
        let sum: f64 = analyses.iter().map(|a| a.professionalism_score()).sum();
        round1(sum / total as f64)
    };

    let mut common_colors = Vec::new();
    let mut image_types = Vec::new();
    for analysis in analyses {
        for color in &analysis.visual_elements.dominant_colors {
            if common_colors.len() < 10 && !common_colors.contains(color) {
                common_colors.push(color.clone());
            }
        }
        let image_type = &analysis.visual_elements.image_type;
        if !image_types.contains(image_type) {
            image_types.push(image_type.clone());
        }
    }

    VisualSummary {
        total_images: total,
        image_types,
        common_colors,
        avg_professionalism_score: avg,
    }
}

fn assess(summary: &VisualSummary) -> OverallAssessment {
    let avg = summary.avg_professionalism_score;

    let visual_consistency = if avg >= 7.0 {
        "high"
    } else if avg >= 5.0 {
        "medium"
    } else {
        "low"
    };

    let brand_strength = if avg >= 8.0 {
        "strong"
    } else if avg >= 6.0 {
        "moderate"
    } else {
        "weak"
    };

    let marketing_impact = if summary.total_images > 0 && avg >= 7.0 {
        "high"
    } else {
        "medium"
    };

    OverallAssessment {
        visual_consistency: visual_consistency.to_string(),
        brand_strength: brand_strength.to_string(),
        marketing_impact: marketing_impact.to_string(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::InferenceError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Stub service keyed by filename; unknown filenames fail the request.
    struct PerImageStub {
        responses: Mutex<HashMap<String, String>>,
    }

    impl PerImageStub {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                responses: Mutex::new(
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                ),
            }
        }
    }

    #[async_trait]
    impl InferenceService for PerImageStub {
        async fn classify(
            &self,
            _prompt: &str,
            image: Option<&ImagePayload>,
        ) -> Result<String, InferenceError> {
            let filename = image.map(|p| p.filename.clone()).unwrap_or_default();
            self.responses
                .lock()
                .unwrap()
                .get(&filename)
                .cloned()
                .ok_or_else(|| InferenceError::Api("model overloaded".to_string()))
        }
    }

    fn analysis_json(filename: &str, score: f64, colors: &[&str], image_type: &str) -> String {
        format!(
            r#"{{"filename": "{filename}", "visual_elements": {{"image_type": "{image_type}", "dominant_colors": {colors}}}, "brand_dna": {{"professionalism_score": {score}}}}}"#,
            colors = serde_json::to_string(colors).unwrap(),
        )
    }

    async fn write_image(dir: &Path, name: &str) {
        tokio::fs::write(dir.join(name), b"fake image bytes")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_directory_yields_neutral_result() {
        let classifier = VisualClassifier::new(Arc::new(PerImageStub::new(&[])));
        let result = classifier
            .analyze_directory(Path::new("/nonexistent/images"))
            .await;

        assert!(result.individual_analyses.is_empty());
        assert_eq!(result.summary.total_images, 0);
        assert_eq!(result.summary.avg_professionalism_score, 5.0);
        assert_eq!(result.overall_assessment.marketing_impact, "medium");
    }

    #[tokio::test]
    async fn skips_non_image_files() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "notes.txt").await;
        write_image(dir.path(), "photo.JPG").await;

        let stub = PerImageStub::new(&[(
            "photo.JPG",
            &analysis_json("photo.JPG", 8.0, &["#FFFFFF"], "hero"),
        )]);
        let classifier = VisualClassifier::new(Arc::new(stub));
        let result = classifier.analyze_directory(dir.path()).await;

        assert_eq!(result.summary.total_images, 1);
        assert_eq!(result.individual_analyses[0].filename, "photo.JPG");
    }

    #[tokio::test]
    async fn failed_image_counts_as_neutral_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png").await;
        write_image(dir.path(), "b.png").await;
        write_image(dir.path(), "c.png").await;

        // a and b succeed with scores 8 and 6; c gets no stubbed response.
        let stub = PerImageStub::new(&[
            ("a.png", &analysis_json("a.png", 8.0, &["#FF0000"], "hero")),
            ("b.png", &analysis_json("b.png", 6.0, &["#FF0000", "#00FF00"], "product")),
        ]);
        let classifier = VisualClassifier::new(Arc::new(stub));
        let result = classifier.analyze_directory(dir.path()).await;

        assert_eq!(result.summary.total_images, 3);
        // (8 + 6 + 5) / 3 rounded to one decimal.
        assert_eq!(result.summary.avg_professionalism_score, 6.3);
        assert_eq!(result.overall_assessment.visual_consistency, "medium");
        assert_eq!(result.overall_assessment.brand_strength, "moderate");
        assert_eq!(result.overall_assessment.marketing_impact, "medium");

        let failed = result
            .individual_analyses
            .iter()
            .find(|a| a.error.is_some())
            .unwrap();
        assert_eq!(
            failed.recommendations,
            vec!["Unable to analyze - check image format and accessibility"]
        );
    }

    #[tokio::test]
    async fn aggregates_colors_and_types_first_seen() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png").await;
        write_image(dir.path(), "b.png").await;

        let stub = PerImageStub::new(&[
            ("a.png", &analysis_json("a.png", 9.0, &["#111111", "#222222"], "logo")),
            ("b.png", &analysis_json("b.png", 7.0, &["#222222", "#333333"], "logo")),
        ]);
        let classifier = VisualClassifier::new(Arc::new(stub));
        let result = classifier.analyze_directory(dir.path()).await;

        let mut colors = result.summary.common_colors.clone();
        colors.sort();
        assert_eq!(colors, vec!["#111111", "#222222", "#333333"]);
        assert_eq!(result.summary.image_types, vec!["logo"]);
        assert_eq!(result.summary.avg_professionalism_score, 8.0);
        assert_eq!(result.overall_assessment.brand_strength, "strong");
        assert_eq!(result.overall_assessment.marketing_impact, "high");
    }

    #[tokio::test]
    async fn unparseable_response_becomes_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png").await;

        let stub = PerImageStub::new(&[("a.png", "that image shows a shoe")]);
        let classifier = VisualClassifier::new(Arc::new(stub));
        let result = classifier.analyze_directory(dir.path()).await;

        let analysis = &result.individual_analyses[0];
        assert!(analysis.error.is_some());
        assert_eq!(analysis.professionalism_score(), 5.0);
    }
}
