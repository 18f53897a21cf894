use regex::Regex;

use super::facts::{
    ContentSection, ContentStats, ExtractedFacts, ExtractedLink, ImageReference, LinkType,
    OriginalEmail, SectionType,
};

const SUBJECT_FALLBACK: &str = "No subject found";
const SENDER_FALLBACK: &str = "Unknown sender";
const DATE_FALLBACK: &str = "Unknown date";

/// Anchor phrases for the named content sections.
const BENEFITS_ANCHOR: &str = "## Your benefits...";
const MAIN_MESSAGE_ANCHOR: &str = "## Enjoy your unlocked benefits";
const MAIN_MESSAGE_END: &str = "## Your benefits";
const FOOTER_ANCHOR: &str = "**Follow us:**";

/// Pulls structured, syntactically-verifiable facts out of a rendered
/// markdown email. Pure parsing, deterministic, side-effect-free; every
/// lookup degrades to a documented fallback instead of failing.
pub struct FactExtractor {
    heading: Regex,
    from_line: Regex,
    date_line: Regex,
    image_link: Regex,
    link: Regex,
    image_ref: Regex,
    benefit_item: Regex,
    social_link: Regex,
    clean_link: Regex,
    clean_image: Regex,
    bold: Regex,
    heading_marks: Regex,
    divider: Regex,
}

impl FactExtractor {
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?m)^#\s*(.+)").expect("static pattern"),
            from_line: Regex::new(r"\*\*From:\*\*\s*(.+)").expect("static pattern"),
            date_line: Regex::new(r"\*\*Date:\*\*\s*(.+)").expect("static pattern"),
            image_link: Regex::new(r"\[!\[([^\]]+)\]\([^)]+\)\]\(([^)]+)\)")
                .expect("static pattern"),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("static pattern"),
            image_ref: Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").expect("static pattern"),
            benefit_item: Regex::new(r"\*\*\[([^\]]+)\]\([^)]+\)\*\*").expect("static pattern"),
            social_link: Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("static pattern"),
            clean_link: Regex::new(r"\[([^\]]*)\]\([^)]+\)").expect("static pattern"),
            clean_image: Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("static pattern"),
            bold: Regex::new(r"\*\*([^*]+)\*\*").expect("static pattern"),
            heading_marks: Regex::new(r"#+\s*").expect("static pattern"),
            divider: Regex::new(r"-{3,}").expect("static pattern"),
        }
    }

    pub fn extract(&self, content: &str) -> ExtractedFacts {
        let subject_line = self.first_capture(&self.heading, content, SUBJECT_FALLBACK);
        let sender = self.first_capture(&self.from_line, content, SENDER_FALLBACK);
        let date = self.first_capture(&self.date_line, content, DATE_FALLBACK);

        let extracted_links = self.extract_links(content);
        let image_references = self.extract_image_references(content);
        let content_sections = self.extract_sections(content);
        let full_body_text = self.clean_text(content);

        let content_stats = ContentStats {
            total_characters: content.chars().count(),
            total_words: full_body_text.split_whitespace().count(),
            total_links: extracted_links.len(),
            total_images: image_references.len(),
            format_type: "markdown".to_string(),
        };

        ExtractedFacts {
            original_email: OriginalEmail {
                subject_line,
                sender,
                date,
                full_body_text,
                raw_markdown: content.to_string(),
            },
            extracted_links,
            image_references,
            content_sections,
            content_stats,
        }
    }

    fn first_capture(&self, regex: &Regex, content: &str, fallback: &str) -> String {
        regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Extracts links in two categories: links wrapping an image reference
    /// (`[![text](image)](url)`) and plain text links (`[text](url)`).
    /// Links whose URL lives under the `images/` subdirectory convention are
    /// excluded from text-link extraction so image links never duplicate.
    fn extract_links(&self, content: &str) -> Vec<ExtractedLink> {
        let mut links = Vec::new();

        for caps in self.image_link.captures_iter(content) {
            links.push(ExtractedLink {
                url: caps[2].to_string(),
                anchor_text: caps[1].to_string(),
                link_type: LinkType::ImageLink,
                position: "body".to_string(),
            });
        }

        let bytes = content.as_bytes();
        for caps in self.link.captures_iter(content) {
            // `regex` has no lookbehind: skip matches preceded by `!`, those
            // are image references, not links.
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            if start > 0 && bytes[start - 1] == b'!' {
                continue;
            }
            let url = &caps[2];
            if url.starts_with("images/") {
                continue;
            }
            links.push(ExtractedLink {
                url: url.to_string(),
                anchor_text: caps[1].to_string(),
                link_type: LinkType::TextLink,
                position: "body".to_string(),
            });
        }

        links
    }

    fn extract_image_references(&self, content: &str) -> Vec<ImageReference> {
        self.image_ref
            .captures_iter(content)
            .map(|caps| ImageReference {
                alt_text: caps[1].to_string(),
                image_path: caps[2].to_string(),
                image_type: "embedded_image".to_string(),
            })
            .collect()
    }

    /// Locates named sections by their fixed anchors with a bounded
    /// look-ahead to the next heading, divider, or footer marker. Absent
    /// anchors simply omit the section.
    fn extract_sections(&self, content: &str) -> Vec<ContentSection> {
        let mut sections = Vec::new();

        if let Some(text) = section_after(content, BENEFITS_ANCHOR, &["##", "---", "\n\n©"]) {
            let benefits: Vec<String> = self
                .benefit_item
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect();
            let mut section = ContentSection::new(SectionType::Benefits, text.to_string());
            section.benefits_list = Some(benefits);
            sections.push(section);
        }

        if let Some(text) = section_between(content, MAIN_MESSAGE_ANCHOR, MAIN_MESSAGE_END) {
            sections.push(ContentSection::new(
                SectionType::MainMessage,
                text.to_string(),
            ));
        }

        if let Some(text) = section_after(content, FOOTER_ANCHOR, &["---", "\n\nYou are receiving"])
        {
            let platforms: Vec<String> = self
                .social_link
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect();
            let mut section = ContentSection::new(SectionType::FooterSocial, text.to_string());
            section.social_platforms = Some(platforms);
            sections.push(section);
        }

        sections
    }

    /// Produces a normalized body with image, link, bold, heading, and
    /// divider markup stripped and blank lines collapsed. Images are
    /// stripped before links so no image residue survives into word counts.
    fn clean_text(&self, content: &str) -> String {
        let text = self.clean_image.replace_all(content, "");
        let text = self.clean_link.replace_all(&text, "$1");
        let text = self.bold.replace_all(&text, "$1");
        let text = self.heading_marks.replace_all(&text, "");
        let text = self.divider.replace_all(&text, "");

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text after `anchor`, bounded by the earliest of `terminators` (or the end
/// of the document when none occurs).
fn section_after<'a>(content: &'a str, anchor: &str, terminators: &[&str]) -> Option<&'a str> {
    let start = content.find(anchor)? + anchor.len();
    let rest = &content[start..];
    let end = terminators
        .iter()
        .filter_map(|t| rest.find(t))
        .min()
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Text strictly between two anchors; absent either anchor, no section.
fn section_between<'a>(content: &'a str, start_anchor: &str, end_anchor: &str) -> Option<&'a str> {
    let start = content.find(start_anchor)? + start_anchor.len();
    let rest = &content[start..];
    let end = rest.find(end_anchor)?;
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# You're in! Welcome to the Community

**From:** The Team <newsfeed@on.com>
**Date:** Tue, 14 Jan 2026 09:00:00 +0000

---

## Enjoy your unlocked benefits

You now have full access to member pricing.

## Your benefits...

**[Free shipping](https://x.test/shipping)**
**[Early access](https://x.test/early)**

[![Hero banner](images/hero.png)](https://x.test/shop)

[Shop Now](https://x.test/shop)

![Logo](images/logo.png)

---

**Follow us:**
[Instagram](https://x.test/ig) [Twitter](https://x.test/tw)

---

You are receiving this email because you signed up.
";

    #[test]
    fn extracts_subject_sender_and_date() {
        let facts = FactExtractor::new().extract(SAMPLE);
        assert_eq!(
            facts.original_email.subject_line,
            "You're in! Welcome to the Community"
        );
        assert_eq!(facts.original_email.sender, "The Team <newsfeed@on.com>");
        assert_eq!(
            facts.original_email.date,
            "Tue, 14 Jan 2026 09:00:00 +0000"
        );
    }

    #[test]
    fn missing_title_falls_back() {
        let facts = FactExtractor::new().extract("Just a body with no heading.");
        assert_eq!(facts.original_email.subject_line, "No subject found");
        assert_eq!(facts.original_email.sender, "Unknown sender");
        assert_eq!(facts.original_email.date, "Unknown date");
    }

    #[test]
    fn image_links_and_text_links_are_separated() {
        let facts = FactExtractor::new().extract(SAMPLE);

        let image_links: Vec<_> = facts
            .extracted_links
            .iter()
            .filter(|l| l.link_type == LinkType::ImageLink)
            .collect();
        assert_eq!(image_links.len(), 1);
        assert_eq!(image_links[0].url, "https://x.test/shop");
        assert_eq!(image_links[0].anchor_text, "Hero banner");

        // The image-wrapping link's inner path must never duplicate into the
        // text-link list.
        assert!(facts
            .extracted_links
            .iter()
            .filter(|l| l.link_type == LinkType::TextLink)
            .all(|l| !l.url.starts_with("images/")));
    }

    #[test]
    fn text_links_keep_document_order() {
        let facts = FactExtractor::new().extract(SAMPLE);
        let text_links: Vec<_> = facts
            .extracted_links
            .iter()
            .filter(|l| l.link_type == LinkType::TextLink)
            .map(|l| l.anchor_text.as_str())
            .collect();
        assert_eq!(
            text_links,
            vec![
                "Free shipping",
                "Early access",
                "Shop Now",
                "Instagram",
                "Twitter"
            ]
        );
    }

    #[test]
    fn image_references_are_collected() {
        let facts = FactExtractor::new().extract(SAMPLE);
        let paths: Vec<_> = facts
            .image_references
            .iter()
            .map(|i| i.image_path.as_str())
            .collect();
        assert_eq!(paths, vec!["images/hero.png", "images/logo.png"]);
        assert!(facts
            .image_references
            .iter()
            .all(|i| i.image_type == "embedded_image"));
    }

    #[test]
    fn named_sections_are_located_by_anchor() {
        let facts = FactExtractor::new().extract(SAMPLE);
        let types: Vec<_> = facts
            .content_sections
            .iter()
            .map(|s| s.section_type)
            .collect();
        assert_eq!(
            types,
            vec![
                SectionType::Benefits,
                SectionType::MainMessage,
                SectionType::FooterSocial
            ]
        );

        let benefits = &facts.content_sections[0];
        assert_eq!(
            benefits.benefits_list.as_deref(),
            Some(&["Free shipping".to_string(), "Early access".to_string()][..])
        );

        let main = &facts.content_sections[1];
        assert!(main.content.contains("member pricing"));

        let footer = &facts.content_sections[2];
        assert_eq!(
            footer.social_platforms.as_deref(),
            Some(&["Instagram".to_string(), "Twitter".to_string()][..])
        );
    }

    #[test]
    fn absent_anchors_omit_sections_without_error() {
        let facts = FactExtractor::new().extract("# Subject\n\nPlain body.\n");
        assert!(facts.content_sections.is_empty());
    }

    #[test]
    fn clean_text_strips_all_markup() {
        let facts = FactExtractor::new().extract(SAMPLE);
        let body = &facts.original_email.full_body_text;
        assert!(!body.contains("**"));
        assert!(!body.contains("!["));
        assert!(!body.contains("]("));
        assert!(!body.contains('#'));
        assert!(!body.contains("---"));
        assert!(body.contains("Shop Now"));
        assert!(body.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn word_count_matches_clean_text() {
        let facts = FactExtractor::new().extract(SAMPLE);
        assert_eq!(
            facts.content_stats.total_words,
            facts
                .original_email
                .full_body_text
                .split_whitespace()
                .count()
        );
        assert_eq!(
            facts.content_stats.total_characters,
            SAMPLE.chars().count()
        );
        assert_eq!(
            facts.content_stats.total_links,
            facts.extracted_links.len()
        );
        assert_eq!(
            facts.content_stats.total_images,
            facts.image_references.len()
        );
        assert_eq!(facts.content_stats.format_type, "markdown");
    }

    #[test]
    fn extraction_is_deterministic() {
        let extractor = FactExtractor::new();
        let first = extractor.extract(SAMPLE);
        let second = extractor.extract(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn section_after_runs_to_end_when_no_terminator() {
        let content = "## Your benefits...\n\n**[Only one](https://x.test)**\n";
        let text = section_after(content, BENEFITS_ANCHOR, &["##", "---", "\n\n©"]);
        assert_eq!(text, Some("**[Only one](https://x.test)**"));
    }

    #[test]
    fn main_message_requires_both_anchors() {
        let content = "## Enjoy your unlocked benefits\n\nDangling tail without end anchor";
        assert_eq!(section_between(content, MAIN_MESSAGE_ANCHOR, MAIN_MESSAGE_END), None);
    }
}
