use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::schema::DnaReport;

/// Writes DNA reports as pretty-printed JSON under a fixed output directory.
pub struct ReportStore {
    output_directory: PathBuf,
}

impl ReportStore {
    pub fn new<P: AsRef<Path>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Serializes the report and stores it as `<basename>.json`, numbering
    /// the filename on conflict. Returns the path actually written.
    pub fn store_report(&self, report: &DnaReport, basename: &str) -> Result<PathBuf, StorageError> {
        let content = serde_json::to_vec_pretty(report)?;
        self.ensure_directory(&self.output_directory)?;
        self.store_with_atomic_creation(basename, &content)
    }

    /// Stores content using atomic file creation to avoid clobbering a report
    /// another process is writing concurrently.
    fn store_with_atomic_creation(
        &self,
        basename: &str,
        content: &[u8],
    ) -> Result<PathBuf, StorageError> {
        use std::io::Write;

        // Try the plain name first, then numbered variants
        for counter in 1..=1000 {
            let try_filename = if counter == 1 {
                format!("{}.json", basename)
            } else {
                format!("{}_{}.json", basename, counter)
            };

            let try_path = self.output_directory.join(&try_filename);

            // OpenOptions with create_new maps to O_CREAT | O_EXCL
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&try_path)
            {
                Ok(mut file) => {
                    file.write_all(content)
                        .map_err(|e| StorageError::WriteFile {
                            path: try_path.clone(),
                            source: e,
                        })?;
                    return Ok(try_path);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    continue;
                }
                Err(e) => {
                    return Err(StorageError::WriteFile {
                        path: try_path,
                        source: e,
                    });
                }
            }
        }

        Err(StorageError::FileExists(
            self.output_directory.join(format!("{}.json", basename)),
        ))
    }

    fn ensure_directory(&self, path: &Path) -> Result<(), StorageError> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| StorageError::CreateDirectory {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FactExtractor;
    use crate::schema::{ContentAnalysis, ContentClassification, VisualAnalysis};
    use crate::synthesis::DnaSynthesizer;
    use tempfile::TempDir;

    fn sample_report() -> DnaReport {
        let raw_data = FactExtractor::new().extract("# Hello\n\nPlain body.");
        let content = ContentAnalysis {
            raw_data,
            analysis: ContentClassification::fallback(),
        };
        DnaSynthesizer::new().synthesize(&content, &VisualAnalysis::default())
    }

    #[test]
    fn stores_pretty_printed_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = ReportStore::new(temp_dir.path());

        let path = store.store_report(&sample_report(), "welcome_dna").unwrap();

        assert!(path.ends_with("welcome_dna.json"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n"));
        let round_trip: DnaReport = serde_json::from_str(&text).unwrap();
        assert_eq!(
            round_trip.email_dna.meta_data.email_type,
            "welcome_onboarding"
        );
    }

    #[test]
    fn creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("reports/2026");
        let store = ReportStore::new(&nested);

        let path = store.store_report(&sample_report(), "sale_dna").unwrap();

        assert!(nested.exists());
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn numbers_conflicting_reports() {
        let temp_dir = TempDir::new().unwrap();
        let store = ReportStore::new(temp_dir.path());

        let first = store.store_report(&sample_report(), "promo_dna").unwrap();
        let second = store.store_report(&sample_report(), "promo_dna").unwrap();
        let third = store.store_report(&sample_report(), "promo_dna").unwrap();

        assert!(first.ends_with("promo_dna.json"));
        assert!(second.ends_with("promo_dna_2.json"));
        assert!(third.ends_with("promo_dna_3.json"));
    }

    #[test]
    fn unwritable_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("blocked");
        std::fs::write(&blocked, b"a file, not a directory").unwrap();
        let store = ReportStore::new(&blocked);

        let result = store.store_report(&sample_report(), "report");
        assert!(result.is_err());
    }
}
