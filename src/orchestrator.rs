use crate::ai::gemini::GeminiClient;
use crate::ai::prompt::build_recap_prompt;
use crate::ai::Recap;
use crate::config::Config;
use crate::docs::{Document, DocumentSet};
use crate::error::{PerfRecapError, Result};
use crate::linear::client::LinearClient;
use crate::linear::{DateRange, Issue};
use std::path::PathBuf;

/// Coordinates the fetch / collect / generate workflow.
///
/// Owns the two API clients and the session state: the current issue
/// list and the document set. The issue list is fully replaced by each
/// successful fetch and left untouched by a failed one; documents are
/// appended and removed in place. Operations are awaited one at a time,
/// so there is never more than one request in flight.
pub struct Orchestrator {
    config: Config,
    linear: LinearClient,
    gemini: GeminiClient,
    issues: Vec<Issue>,
    docs: DocumentSet,
}

impl Orchestrator {
    /// Create a new orchestrator from resolved configuration
    pub fn new(config: Config) -> Result<Self> {
        let linear = LinearClient::new(config.linear_api_key()?)?;
        let gemini =
            GeminiClient::new(config.gemini_api_key()?)?.with_model(config.gemini_model.clone());

        Ok(Self {
            config,
            linear,
            gemini,
            issues: Vec::new(),
            docs: DocumentSet::new(),
        })
    }

    /// Fetch completed issues for the range, replacing the held list.
    ///
    /// On failure the previously held list is left unchanged and the
    /// error is returned for display.
    pub async fn fetch_issues(&mut self, range: &DateRange) -> Result<usize> {
        let issues = self.linear.fetch_completed_issues(range).await?;
        let count = issues.len();
        self.issues = issues;
        Ok(count)
    }

    /// Add performance documents from a batch of paths
    pub fn add_documents(&mut self, paths: &[PathBuf]) -> Result<usize> {
        self.docs.add_paths(paths)
    }

    /// Remove the document at a zero-based index
    pub fn remove_document(&mut self, index: usize) -> Option<Document> {
        self.docs.remove(index)
    }

    /// Generate a recap from the held issues and documents.
    ///
    /// Blocked before any request is made when both sources are empty.
    pub async fn generate_recap(&self) -> Result<Recap> {
        if self.issues.is_empty() && self.docs.is_empty() {
            return Err(PerfRecapError::NothingToSummarize);
        }

        let prompt = build_recap_prompt(&self.issues, &self.docs);
        let text = self.gemini.generate(prompt).await?;

        Ok(Recap::new(text))
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.docs
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }
}
