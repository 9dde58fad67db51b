pub mod gemini;
pub mod prompt;

use chrono::{DateTime, Utc};

/// A generated performance-review recap.
///
/// Holds the model's raw markdown; each generation fully replaces any
/// prior result and nothing is persisted between runs.
#[derive(Debug, Clone)]
pub struct Recap {
    /// Model output, markdown as returned
    pub markdown: String,
    /// When this recap was generated
    pub generated_at: DateTime<Utc>,
}

impl Recap {
    pub fn new(markdown: String) -> Self {
        Self {
            markdown,
            generated_at: Utc::now(),
        }
    }
}
