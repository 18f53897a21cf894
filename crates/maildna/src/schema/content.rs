use serde::{Deserialize, Serialize};

use crate::extract::ExtractedFacts;

/// Output of the Content Classifier Stage: syntactically-derived facts plus
/// the Inference Service's semantic judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub raw_data: ExtractedFacts,
    pub analysis: ContentClassification,
}

/// The six-category content DNA record returned by the Inference Service.
///
/// Ingest is lenient: any missing field takes its documented default, so a
/// partially valid response still produces a usable record. A completely
/// unusable response is replaced wholesale by [`ContentClassification::fallback`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentClassification {
    pub subject_line_dna: SubjectLineDna,
    pub content_structure_dna: ContentStructureDna,
    pub cta_dna: CtaDna,
    pub psychological_triggers: PsychologicalTriggers,
    pub offer_dna: OfferDna,
    pub brand_voice_dna: BrandVoiceDna,
}

impl ContentClassification {
    /// The fixed default record substituted when the Inference Service call
    /// fails or its response cannot be repaired into valid JSON. Literal
    /// values, not inferred.
    pub fn fallback() -> Self {
        Self {
            subject_line_dna: SubjectLineDna {
                text: "Welcome".to_string(),
                length: 7,
                emotional_triggers: vec!["welcome".to_string()],
                power_words: vec![],
                personalization_level: "basic".to_string(),
                urgency_indicators: vec![],
                predicted_open_rate: "medium".to_string(),
            },
            content_structure_dna: ContentStructureDna {
                word_count: 200,
                paragraph_count: 3,
                opening_hook_type: "benefit".to_string(),
                value_propositions: vec!["membership benefits".to_string()],
                social_proof_elements: vec![],
                scarcity_signals: vec![],
                closing_technique: "benefit".to_string(),
            },
            cta_dna: CtaDna {
                primary_cta: PrimaryCta {
                    text: "Get Started".to_string(),
                    action_type: "signup".to_string(),
                    urgency_level: "low".to_string(),
                    position: "bottom".to_string(),
                },
                secondary_ctas: vec![],
                cta_count: 1,
                cta_strategy: "single_focus".to_string(),
            },
            psychological_triggers: PsychologicalTriggers {
                urgency_score: 3.0,
                scarcity_indicators: vec![],
                authority_markers: vec![],
                reciprocity_elements: vec![],
                social_proof_strength: "low".to_string(),
            },
            offer_dna: OfferDna::default(),
            brand_voice_dna: BrandVoiceDna {
                tone: "friendly".to_string(),
                personality_traits: vec!["helpful".to_string()],
                emotional_temperature: "warm".to_string(),
                formality_level: "casual".to_string(),
                reading_level: "middle_school".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectLineDna {
    pub text: String,
    pub length: u32,
    pub emotional_triggers: Vec<String>,
    pub power_words: Vec<String>,
    pub personalization_level: String,
    pub urgency_indicators: Vec<String>,
    pub predicted_open_rate: String,
}

impl Default for SubjectLineDna {
    fn default() -> Self {
        Self {
            text: String::new(),
            length: 0,
            emotional_triggers: vec![],
            power_words: vec![],
            personalization_level: "none".to_string(),
            urgency_indicators: vec![],
            predicted_open_rate: "low".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentStructureDna {
    pub word_count: u32,
    pub paragraph_count: u32,
    pub opening_hook_type: String,
    pub value_propositions: Vec<String>,
    pub social_proof_elements: Vec<String>,
    pub scarcity_signals: Vec<String>,
    pub closing_technique: String,
}

impl Default for ContentStructureDna {
    fn default() -> Self {
        Self {
            word_count: 0,
            paragraph_count: 0,
            opening_hook_type: "benefit".to_string(),
            value_propositions: vec![],
            social_proof_elements: vec![],
            scarcity_signals: vec![],
            closing_technique: "benefit".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaDna {
    pub primary_cta: PrimaryCta,
    pub secondary_ctas: Vec<String>,
    pub cta_count: u32,
    pub cta_strategy: String,
}

impl Default for CtaDna {
    fn default() -> Self {
        Self {
            primary_cta: PrimaryCta::default(),
            secondary_ctas: vec![],
            cta_count: 0,
            cta_strategy: "single_focus".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryCta {
    pub text: String,
    pub action_type: String,
    pub urgency_level: String,
    pub position: String,
}

impl Default for PrimaryCta {
    fn default() -> Self {
        Self {
            text: String::new(),
            action_type: String::new(),
            urgency_level: "low".to_string(),
            position: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsychologicalTriggers {
    pub urgency_score: f64,
    pub scarcity_indicators: Vec<String>,
    pub authority_markers: Vec<String>,
    pub reciprocity_elements: Vec<String>,
    pub social_proof_strength: String,
}

impl Default for PsychologicalTriggers {
    fn default() -> Self {
        Self {
            urgency_score: 0.0,
            scarcity_indicators: vec![],
            authority_markers: vec![],
            reciprocity_elements: vec![],
            social_proof_strength: "low".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferDna {
    pub discount_type: String,
    pub discount_value: u32,
    pub offer_presentation: String,
    pub bonus_items: Vec<String>,
    pub guarantee_type: String,
}

impl Default for OfferDna {
    fn default() -> Self {
        Self {
            discount_type: "none".to_string(),
            discount_value: 0,
            offer_presentation: "none".to_string(),
            bonus_items: vec![],
            guarantee_type: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandVoiceDna {
    pub tone: String,
    pub personality_traits: Vec<String>,
    pub emotional_temperature: String,
    pub formality_level: String,
    pub reading_level: String,
}

impl Default for BrandVoiceDna {
    fn default() -> Self {
        Self {
            tone: String::new(),
            personality_traits: vec![],
            emotional_temperature: "neutral".to_string(),
            formality_level: String::new(),
            reading_level: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_record_is_fully_populated() {
        let fallback = ContentClassification::fallback();
        assert_eq!(fallback.subject_line_dna.text, "Welcome");
        assert_eq!(fallback.subject_line_dna.length, 7);
        assert_eq!(fallback.subject_line_dna.predicted_open_rate, "medium");
        assert_eq!(fallback.cta_dna.primary_cta.action_type, "signup");
        assert_eq!(fallback.cta_dna.cta_count, 1);
        assert_eq!(fallback.psychological_triggers.urgency_score, 3.0);
        assert_eq!(fallback.offer_dna.discount_type, "none");
        assert_eq!(fallback.brand_voice_dna.emotional_temperature, "warm");
    }

    #[test]
    fn partial_response_fills_missing_categories_with_defaults() {
        let json = r#"{
            "subject_line_dna": { "text": "Flash Sale", "predicted_open_rate": "high" },
            "offer_dna": { "discount_type": "percentage", "discount_value": 25 }
        }"#;
        let record: ContentClassification = serde_json::from_str(json).unwrap();
        assert_eq!(record.subject_line_dna.text, "Flash Sale");
        assert_eq!(record.subject_line_dna.predicted_open_rate, "high");
        assert_eq!(record.subject_line_dna.length, 0);
        assert_eq!(record.offer_dna.discount_type, "percentage");
        assert_eq!(record.psychological_triggers.urgency_score, 0.0);
        assert_eq!(record.cta_dna.primary_cta.urgency_level, "low");
    }

    #[test]
    fn unknown_fields_are_ignored_on_ingest() {
        let json = r#"{ "subject_line_dna": { "text": "Hi", "novel_field": true } }"#;
        let record: ContentClassification = serde_json::from_str(json).unwrap();
        assert_eq!(record.subject_line_dna.text, "Hi");
    }
}
