use std::path::PathBuf;

pub struct PipelineConfig {
    /// Directory DNA reports are written into.
    pub output_directory: PathBuf,
    /// Upper bound on concurrent vision requests per email.
    pub image_concurrency: usize,
}

impl PipelineConfig {
    pub fn new<P: Into<PathBuf>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.into(),
            image_concurrency: 4,
        }
    }
}
