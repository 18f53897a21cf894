//! Prompt templates for the content and vision classifiers. The JSON shapes
//! embedded here mirror the serde records in [`crate::schema`]; keep the two
//! in sync when adding categories.

const CONTENT_TEMPLATE: &str = r#"Analyze this email content and extract COMPLETE marketing DNA. Return ONLY valid JSON:

{document}

{
    "subject_line_dna": {
        "text": "actual subject line",
        "length": 45,
        "emotional_triggers": ["urgency", "curiosity", "fear", "desire"],
        "power_words": ["exclusive", "limited", "free", "new"],
        "personalization_level": "none/basic/advanced",
        "urgency_indicators": ["today", "limited", "expires"],
        "predicted_open_rate": "high/medium/low"
    },
    "content_structure_dna": {
        "word_count": 200,
        "paragraph_count": 4,
        "opening_hook_type": "question/benefit/story/urgency",
        "value_propositions": ["specific benefits listed"],
        "social_proof_elements": ["testimonials", "customer_count", "reviews"],
        "scarcity_signals": ["limited_quantity", "time_sensitive"],
        "closing_technique": "urgency/benefit/question"
    },
    "cta_dna": {
        "primary_cta": {
            "text": "Shop Now",
            "action_type": "purchase/signup/learn_more",
            "urgency_level": "high/medium/low",
            "position": "top/middle/bottom/multiple"
        },
        "secondary_ctas": ["Learn More", "Browse Products"],
        "cta_count": 2,
        "cta_strategy": "single_focus/multiple_options"
    },
    "psychological_triggers": {
        "urgency_score": 7,
        "scarcity_indicators": ["few_left", "limited_time"],
        "authority_markers": ["expert_endorsement", "certifications"],
        "reciprocity_elements": ["free_gift", "valuable_content"],
        "social_proof_strength": "high/medium/low"
    },
    "offer_dna": {
        "discount_type": "percentage/dollar/bogo/none",
        "discount_value": 25,
        "offer_presentation": "crossed_out_price/badge/highlight",
        "bonus_items": ["free_shipping", "gift"],
        "guarantee_type": "money_back/satisfaction/warranty"
    },
    "brand_voice_dna": {
        "tone": "friendly/professional/urgent/casual",
        "personality_traits": ["helpful", "authoritative", "playful"],
        "emotional_temperature": "warm/neutral/cool",
        "formality_level": "casual/business_casual/formal",
        "reading_level": "elementary/middle_school/high_school/college"
    }
}"#;

const IMAGE_TEMPLATE: &str = r##"Analyze this email marketing image in COMPLETE detail. Describe EXACTLY what you see + marketing analysis. Return ONLY valid JSON:
{
    "filename": "{filename}",
    "raw_visual_description": {
        "scene_description": "Detailed description of what you see: people, objects, setting, actions",
        "people_details": "Age, gender, clothing, pose, expression, activity of any people",
        "objects_present": ["smartphone", "clothing", "background_elements"],
        "text_in_image": "EXACT text visible in the image",
        "colors_observed": ["specific colors you can see"],
        "setting_context": "indoor/outdoor/studio/lifestyle/product_shot",
        "mood_atmosphere": "energetic/calm/professional/casual/luxury"
    },
    "visual_elements": {
        "image_type": "logo/hero/product/banner/cta_button/icon/lifestyle",
        "dominant_colors": ["#FF6B35", "#2E86AB", "#F5F5F5"],
        "color_psychology": ["energetic", "trustworthy", "clean"],
        "text_content": "any visible text or CTA",
        "design_style": "modern/classic/minimalist/bold/elegant",
        "layout_pattern": "centered/left_aligned/grid/asymmetric"
    },
    "brand_dna": {
        "professionalism_score": 8,
        "brand_consistency": "high/medium/low",
        "visual_appeal": "excellent/good/average/poor",
        "target_demographic": "young_adults/professionals/families/luxury",
        "brand_personality": ["innovative", "trustworthy", "playful"]
    },
    "marketing_psychology": {
        "cta_visibility": "high/medium/low",
        "emotional_impact": "strong/moderate/weak",
        "attention_grabbing": "high/medium/low",
        "urgency_visual_cues": ["countdown", "red_colors", "bold_text"],
        "trust_signals": ["badges", "testimonials", "guarantees"],
        "conversion_elements": ["product_focus", "benefit_highlight", "social_proof"]
    },
    "technical_analysis": {
        "resolution": "high/medium/low",
        "mobile_optimization": true,
        "composition_quality": "excellent/good/average/poor",
        "color_harmony": "excellent/good/average/poor",
        "text_readability": "high/medium/low"
    },
    "competitive_insights": {
        "innovation_level": "cutting_edge/standard/basic",
        "industry_trends": ["minimalism", "bold_colors", "mobile_first"],
        "differentiation_factors": ["unique_layout", "color_scheme", "typography"]
    },
    "recommendations": ["specific actionable improvements"]
}"##;

/// Builds the six-category content analysis prompt around the full markdown
/// document.
pub fn content_prompt(document: &str) -> String {
    CONTENT_TEMPLATE.replace("{document}", document)
}

/// Builds the seven-category vision prompt for a single attached image.
pub fn image_prompt(filename: &str) -> String {
    IMAGE_TEMPLATE.replace("{filename}", filename)
}
