//! Typed records for the fixed classification schemas and the final DNA
//! report. Every field carries a documented default so partially valid
//! Inference Service responses still ingest; the fully-populated fallback
//! records live next to the types they replace.

pub mod content;
pub mod dna;
pub mod vision;

pub use content::{
    BrandVoiceDna, ContentAnalysis, ContentClassification, ContentStructureDna, CtaDna, OfferDna,
    PrimaryCta, PsychologicalTriggers, SubjectLineDna,
};
pub use dna::{
    CompetitiveIntelligence, ContentStructureBlueprint, DnaReport, EmailDna, ImageDescription,
    MetaData, RawData, ReplicationBlueprint, SubjectLineFormula, VisualFormula,
};
pub use vision::{
    BrandDna, ImageAnalysis, ImageCompetitiveInsights, MarketingPsychology, OverallAssessment,
    RawVisualDescription, TechnicalAnalysis, VisualAnalysis, VisualElements, VisualSummary,
};
