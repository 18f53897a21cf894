use serde::{Deserialize, Serialize};

/// Syntactically-derived facts pulled out of a rendered markdown email.
///
/// Everything here is computed by pure parsing; no inference calls, no
/// estimation. Extraction never fails: every lookup has a fallback value
/// or an omission rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    pub original_email: OriginalEmail,
    pub extracted_links: Vec<ExtractedLink>,
    pub image_references: Vec<ImageReference>,
    pub content_sections: Vec<ContentSection>,
    pub content_stats: ContentStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalEmail {
    pub subject_line: String,
    pub sender: String,
    pub date: String,
    /// Body text with markdown markup stripped and blank lines collapsed.
    pub full_body_text: String,
    pub raw_markdown: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// A link wrapping an embedded image reference.
    ImageLink,
    /// A link wrapping plain anchor text.
    TextLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedLink {
    pub url: String,
    pub anchor_text: String,
    pub link_type: LinkType,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReference {
    pub alt_text: String,
    pub image_path: String,
    pub image_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Benefits,
    MainMessage,
    FooterSocial,
}

/// A named section located by its fixed textual anchor. Sections whose
/// anchor is absent are simply omitted from [`ExtractedFacts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub section_type: SectionType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_platforms: Option<Vec<String>>,
}

impl ContentSection {
    pub fn new(section_type: SectionType, content: String) -> Self {
        Self {
            section_type,
            content,
            benefits_list: None,
            social_platforms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStats {
    pub total_characters: usize,
    pub total_words: usize,
    pub total_links: usize,
    pub total_images: usize,
    pub format_type: String,
}
