use crate::error::Result;
use crate::output::{self, SAMPLE_FILE};
use crate::Acquisition;
use std::path::PathBuf;

impl Acquisition {
    /// Write the fixed five-verse sample dataset to `{data_dir}/bible_sample.json`.
    ///
    /// No network access; the output is byte-identical on every call.
    pub fn create_sample_dataset(&self) -> Result<PathBuf> {
        let verses = scripture_model::sample_verses();
        let path = output::write_json(&self.config.data_dir, SAMPLE_FILE, &verses)?;
        tracing::info!(path = %path.display(), verses = verses.len(), "Created sample dataset");
        Ok(path)
    }
}
