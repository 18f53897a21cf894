use serde::{Deserialize, Serialize};

/// Output of the Visual Classifier Stage: one result per image found in the
/// image directory at the time the stage ran, plus aggregate statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualAnalysis {
    /// Per-image results in directory enumeration order. Ordered for
    /// display; aggregation treats them as unordered.
    pub individual_analyses: Vec<ImageAnalysis>,
    pub summary: VisualSummary,
    pub overall_assessment: OverallAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSummary {
    pub total_images: usize,
    pub image_types: Vec<String>,
    pub common_colors: Vec<String>,
    pub avg_professionalism_score: f64,
}

impl Default for VisualSummary {
    fn default() -> Self {
        Self {
            total_images: 0,
            image_types: vec![],
            common_colors: vec![],
            avg_professionalism_score: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallAssessment {
    pub visual_consistency: String,
    pub brand_strength: String,
    pub marketing_impact: String,
}

impl Default for OverallAssessment {
    fn default() -> Self {
        Self {
            visual_consistency: "medium".to_string(),
            brand_strength: "weak".to_string(),
            marketing_impact: "medium".to_string(),
        }
    }
}

/// The seven-category per-image record returned by the Inference Service,
/// or a failure placeholder with `error` set and every category defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAnalysis {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_visual_description: Option<RawVisualDescription>,
    pub visual_elements: VisualElements,
    pub brand_dna: BrandDna,
    pub marketing_psychology: MarketingPsychology,
    pub technical_analysis: TechnicalAnalysis,
    pub competitive_insights: ImageCompetitiveInsights,
    pub recommendations: Vec<String>,
}

impl ImageAnalysis {
    /// Placeholder substituted when a per-image classification fails. Keeps
    /// the downstream schema shape; the defaulted professionalism score of 5
    /// feeds the aggregate.
    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            error: Some(error.into()),
            recommendations: vec![
                "Unable to analyze - check image format and accessibility".to_string(),
            ],
            ..Self::default()
        }
    }

    pub fn professionalism_score(&self) -> f64 {
        self.brand_dna.professionalism_score
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVisualDescription {
    pub scene_description: String,
    pub people_details: String,
    pub objects_present: Vec<String>,
    pub text_in_image: String,
    pub colors_observed: Vec<String>,
    pub setting_context: String,
    pub mood_atmosphere: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualElements {
    pub image_type: String,
    pub dominant_colors: Vec<String>,
    pub color_psychology: Vec<String>,
    pub text_content: String,
    pub design_style: String,
    pub layout_pattern: String,
}

impl Default for VisualElements {
    fn default() -> Self {
        Self {
            image_type: "unknown".to_string(),
            dominant_colors: vec![],
            color_psychology: vec![],
            text_content: String::new(),
            design_style: "unknown".to_string(),
            layout_pattern: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandDna {
    pub professionalism_score: f64,
    pub brand_consistency: String,
    pub visual_appeal: String,
    pub target_demographic: String,
    pub brand_personality: Vec<String>,
}

impl Default for BrandDna {
    fn default() -> Self {
        Self {
            professionalism_score: 5.0,
            brand_consistency: "unknown".to_string(),
            visual_appeal: "unknown".to_string(),
            target_demographic: String::new(),
            brand_personality: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingPsychology {
    pub cta_visibility: String,
    pub emotional_impact: String,
    pub attention_grabbing: String,
    pub urgency_visual_cues: Vec<String>,
    pub trust_signals: Vec<String>,
    pub conversion_elements: Vec<String>,
}

impl Default for MarketingPsychology {
    fn default() -> Self {
        Self {
            cta_visibility: "unknown".to_string(),
            emotional_impact: "unknown".to_string(),
            attention_grabbing: "unknown".to_string(),
            urgency_visual_cues: vec![],
            trust_signals: vec![],
            conversion_elements: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalAnalysis {
    pub resolution: String,
    pub mobile_optimization: bool,
    pub composition_quality: String,
    pub color_harmony: String,
    pub text_readability: String,
}

impl Default for TechnicalAnalysis {
    fn default() -> Self {
        Self {
            resolution: "unknown".to_string(),
            mobile_optimization: false,
            composition_quality: "unknown".to_string(),
            color_harmony: "unknown".to_string(),
            text_readability: "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCompetitiveInsights {
    pub innovation_level: String,
    pub industry_trends: Vec<String>,
    pub differentiation_factors: Vec<String>,
}
