use serde::{Deserialize, Serialize};

use crate::extract::{ContentSection, ContentStats, ExtractedLink, ImageReference, OriginalEmail};

use super::content::ContentClassification;
use super::vision::VisualAnalysis;

/// The persisted report. Top-level shape is fixed by contract:
/// `{ "email_dna": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaReport {
    pub email_dna: EmailDna,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDna {
    pub meta_data: MetaData,
    pub raw_data: RawData,
    pub content_dna: ContentClassification,
    pub visual_dna: VisualAnalysis,
    pub competitive_intelligence: CompetitiveIntelligence,
    pub actionable_recommendations: Vec<String>,
    pub replication_blueprint: ReplicationBlueprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub email_type: String,
    pub overall_effectiveness_score: f64,
    pub content_score: f64,
    pub visual_score: f64,
    /// ISO-8601 timestamp generated at synthesis time.
    pub analysis_timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawData {
    pub original_email: OriginalEmail,
    pub extracted_links: Vec<ExtractedLink>,
    pub image_references: Vec<ImageReference>,
    pub content_sections: Vec<ContentSection>,
    pub content_stats: ContentStats,
    pub image_descriptions: Vec<ImageDescription>,
}

/// Read-through projection of a successful image result's raw visual
/// description; failed images have none and are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescription {
    pub filename: String,
    pub visual_description: String,
    pub people_details: String,
    pub text_in_image: String,
    pub objects_detected: Vec<String>,
    pub scene_context: String,
}

/// Each list is non-empty after synthesis: when no condition fires, a fixed
/// fallback string is substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveIntelligence {
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
    pub competitive_advantages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationBlueprint {
    pub subject_line_formula: SubjectLineFormula,
    pub content_structure: ContentStructureBlueprint,
    pub visual_formula: VisualFormula,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectLineFormula {
    pub structure: String,
    pub key_triggers: Vec<String>,
    pub optimal_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStructureBlueprint {
    pub opening_hook: String,
    pub cta_strategy: String,
    pub closing_technique: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualFormula {
    pub color_palette: Vec<String>,
    pub design_style: String,
    pub image_types: Vec<String>,
}
