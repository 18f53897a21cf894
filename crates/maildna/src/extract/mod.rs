pub mod facts;
pub mod markdown;

pub use facts::{
    ContentSection, ContentStats, ExtractedFacts, ExtractedLink, ImageReference, LinkType,
    OriginalEmail, SectionType,
};
pub use markdown::FactExtractor;
