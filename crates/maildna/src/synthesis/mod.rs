//! Final synthesis stage: folds the content and visual analyses into the
//! single DNA report.

use chrono::Utc;
use tracing::debug;

use crate::schema::{
    CompetitiveIntelligence, ContentAnalysis, ContentStructureBlueprint, DnaReport, EmailDna,
    ImageDescription, MetaData, RawData, ReplicationBlueprint, SubjectLineFormula, VisualAnalysis,
    VisualFormula,
};

/// Pure synthesizer over the two stage outputs. Stateless and infallible.
pub struct DnaSynthesizer;

impl DnaSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, content: &ContentAnalysis, visuals: &VisualAnalysis) -> DnaReport {
        let content_score = content_score(content);
        // Service responses may carry out-of-range professionalism scores.
        let visual_score = visuals.summary.avg_professionalism_score.clamp(0.0, 10.0);
        let overall_score = round1((content_score + visual_score) / 2.0);
        let email_type = email_type(content);

        debug!(
            email_type = %email_type,
            content_score,
            visual_score,
            overall_score,
            "synthesizing email DNA"
        );

        DnaReport {
            email_dna: EmailDna {
                meta_data: MetaData {
                    email_type,
                    overall_effectiveness_score: overall_score,
                    content_score,
                    visual_score,
                    analysis_timestamp: Utc::now().to_rfc3339(),
                },
                raw_data: RawData {
                    original_email: content.raw_data.original_email.clone(),
                    extracted_links: content.raw_data.extracted_links.clone(),
                    image_references: content.raw_data.image_references.clone(),
                    content_sections: content.raw_data.content_sections.clone(),
                    content_stats: content.raw_data.content_stats.clone(),
                    image_descriptions: image_descriptions(visuals),
                },
                content_dna: content.analysis.clone(),
                visual_dna: visuals.clone(),
                competitive_intelligence: competitive_intelligence(content, visuals),
                actionable_recommendations: recommendations(content, visuals, overall_score),
                replication_blueprint: replication_blueprint(content, visuals),
            },
        }
    }
}

impl Default for DnaSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Additive effectiveness score over the content classification, capped at 10.
fn content_score(content: &ContentAnalysis) -> f64 {
    let analysis = &content.analysis;
    let mut score = 5.0;

    match analysis.subject_line_dna.predicted_open_rate.as_str() {
        "high" => score += 1.5,
        "medium" => score += 0.5,
        _ => {}
    }

    // Urgency contributes at most 2 points.
    let urgency = analysis.psychological_triggers.urgency_score;
    score += (urgency / 10.0 * 2.0).min(2.0);

    if analysis.cta_dna.primary_cta.urgency_level == "high" {
        score += 1.0;
    }

    if analysis.offer_dna.discount_type != "none" {
        score += 0.5;
    }

    round1(score).min(10.0)
}

/// First matching rule wins: offer beats CTA intent beats product mentions.
fn email_type(content: &ContentAnalysis) -> String {
    let analysis = &content.analysis;

    if analysis.offer_dna.discount_type != "none" {
        return "promotional_sale".to_string();
    }
    if analysis.cta_dna.primary_cta.action_type == "signup" {
        return "welcome_onboarding".to_string();
    }
    if mentions_product(content) {
        return "product_launch".to_string();
    }
    "newsletter_engagement".to_string()
}

/// Case-insensitive "product" scan over the full serialized analysis, raw
/// facts included, so product mentions anywhere in the email count.
fn mentions_product(content: &ContentAnalysis) -> bool {
    serde_json::to_string(content)
        .map(|text| text.to_lowercase().contains("product"))
        .unwrap_or(false)
}

fn competitive_intelligence(
    content: &ContentAnalysis,
    visuals: &VisualAnalysis,
) -> CompetitiveIntelligence {
    let analysis = &content.analysis;
    let mut strengths = Vec::new();
    let mut opportunities = Vec::new();
    let mut advantages = Vec::new();

    if analysis.psychological_triggers.urgency_score >= 7.0 {
        strengths.push("Strong urgency creation".to_string());
    }
    if visuals.summary.avg_professionalism_score >= 8.0 {
        strengths.push("Professional visual design".to_string());
    }
    if !analysis.cta_dna.secondary_ctas.is_empty() {
        strengths.push("Multiple engagement options".to_string());
    }

    if analysis.psychological_triggers.social_proof_strength == "low" {
        opportunities.push("Add customer testimonials and reviews".to_string());
    }
    if analysis.offer_dna.guarantee_type == "none" {
        opportunities.push("Include risk-reversal guarantee".to_string());
    }

    if analysis.brand_voice_dna.emotional_temperature == "warm" {
        advantages.push("Emotionally engaging brand voice".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Professional presentation".to_string());
    }
    if opportunities.is_empty() {
        opportunities.push("Optimize conversion elements".to_string());
    }
    if advantages.is_empty() {
        advantages.push("Clear communication".to_string());
    }

    CompetitiveIntelligence {
        strengths,
        opportunities,
        competitive_advantages: advantages,
    }
}

fn recommendations(
    content: &ContentAnalysis,
    visuals: &VisualAnalysis,
    overall_score: f64,
) -> Vec<String> {
    let analysis = &content.analysis;
    let mut recommendations = Vec::new();

    if overall_score < 7.0 {
        recommendations.push("Increase urgency and scarcity elements".to_string());
    }
    if analysis.cta_dna.cta_count < 2 {
        recommendations.push("Add secondary CTA options".to_string());
    }
    if analysis.psychological_triggers.social_proof_strength != "high" {
        recommendations.push("Include customer testimonials and social proof".to_string());
    }
    if visuals.summary.avg_professionalism_score < 8.0 {
        recommendations.push("Enhance visual design quality".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Optimize for mobile viewing".to_string());
        recommendations.push("A/B test subject lines".to_string());
    }

    recommendations
}

/// Projects successful vision results into the flat description records.
/// Failure placeholders carry no raw description and are skipped.
fn image_descriptions(visuals: &VisualAnalysis) -> Vec<ImageDescription> {
    visuals
        .individual_analyses
        .iter()
        .filter_map(|analysis| {
            let raw = analysis.raw_visual_description.as_ref()?;
            Some(ImageDescription {
                filename: analysis.filename.clone(),
                visual_description: raw.scene_description.clone(),
                people_details: raw.people_details.clone(),
                text_in_image: raw.text_in_image.clone(),
                objects_detected: raw.objects_present.clone(),
                scene_context: raw.setting_context.clone(),
            })
        })
        .collect()
}

fn replication_blueprint(
    content: &ContentAnalysis,
    visuals: &VisualAnalysis,
) -> ReplicationBlueprint {
    let analysis = &content.analysis;
    ReplicationBlueprint {
        subject_line_formula: SubjectLineFormula {
            structure: analysis.subject_line_dna.text.clone(),
            key_triggers: analysis.subject_line_dna.emotional_triggers.clone(),
            optimal_length: analysis.subject_line_dna.length,
        },
        content_structure: ContentStructureBlueprint {
            opening_hook: analysis.content_structure_dna.opening_hook_type.clone(),
            cta_strategy: analysis.cta_dna.cta_strategy.clone(),
            closing_technique: analysis.content_structure_dna.closing_technique.clone(),
        },
        visual_formula: VisualFormula {
            color_palette: visuals.summary.common_colors.iter().take(3).cloned().collect(),
            design_style: "modern".to_string(),
            image_types: visuals.summary.image_types.clone(),
        },
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
