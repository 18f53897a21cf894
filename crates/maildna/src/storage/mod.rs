//! Persistence of finished DNA reports.

pub mod report;

pub use report::ReportStore;
