//! CSV results file
//!
//! The layout is a small header block followed by one block per model:
//!
//! ```text
//! Model Family,Model
//! OpenAI,
//!
//! User Message,Style/Target,Response
//! OpenAI,gpt-3.5-turbo-0125
//! "<user message>","<style/target>",<json-encoded response>,<duration ms>
//! ...
//!
//! ```
//!
//! Fields are written verbatim: prompt fields carry their own literal quotes
//! and the response is already JSON-encoded.

use crate::dataset::PromptCase;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column titles of the data rows
pub const COLUMN_HEADERS: [&str; 3] = ["User Message", "Style/Target", "Response"];

/// Append-only CSV file holding one provider's results
#[derive(Debug, Clone)]
pub struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    /// Path of the results file for a provider and run timestamp
    pub fn output_path(dir: &Path, file_tag: &str, timestamp: &str) -> PathBuf {
        dir.join(format!("output_{}_{}.csv", file_tag, timestamp))
    }

    /// Create the file (and its directory) and write the header block.
    ///
    /// `model` is filled in for single-model runs and left blank otherwise.
    pub fn create(
        dir: &Path,
        provider: &str,
        file_tag: &str,
        model: Option<&str>,
        timestamp: &str,
    ) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create results directory: {}", dir.display()))?;

        let path = Self::output_path(dir, file_tag, timestamp);
        File::create(&path)
            .with_context(|| format!("Failed to create results file: {}", path.display()))?;

        let results = Self { path };
        results
            .write_header(provider, model)
            .with_context(|| format!("Failed to write header to: {}", results.path.display()))?;

        Ok(results)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the line that opens a model block
    pub fn append_model_heading(&self, provider: &str, model: &str) -> csv::Result<()> {
        self.append_record([provider, model])
    }

    /// Append one result row
    pub fn append_row(
        &self,
        case: &PromptCase,
        encoded_response: &str,
        duration_ms: u64,
    ) -> csv::Result<()> {
        self.append_record([
            format!("\"{}\"", case.user_message),
            format!("\"{}\"", case.style_target),
            encoded_response.to_string(),
            duration_ms.to_string(),
        ])
    }

    /// Append the blank line that closes a model block
    pub fn append_separator(&self) -> std::io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(b"\n")
    }

    fn write_header(&self, provider: &str, model: Option<&str>) -> csv::Result<()> {
        self.append_record(["Model Family", "Model"])?;
        self.append_record([provider, model.unwrap_or("")])?;
        self.append_separator()?;
        self.append_record(COLUMN_HEADERS)
    }

    fn append_record<I, T>(&self, record: I) -> csv::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .from_writer(file);
        wtr.write_record(record)?;
        wtr.flush()?;
        Ok(())
    }
}
