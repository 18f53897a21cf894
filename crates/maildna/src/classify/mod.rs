//! Classification stages: content analysis over the markdown document and
//! vision analysis over the attached image directory.

pub mod content;
pub mod vision;

pub use content::ContentClassifier;
pub use vision::VisualClassifier;
