pub mod client;

use crate::error::{PerfRecapError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A completed Linear issue as returned by the GraphQL API
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Internal Linear id
    pub id: String,
    /// Human-readable identifier, e.g. "ENG-123"
    pub identifier: String,
    /// Issue title
    pub title: String,
    /// Issue description (markdown, optional)
    pub description: Option<String>,
    /// When the issue was completed
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    /// URL to the issue in the Linear app
    pub url: String,
    /// Workflow state, e.g. "Done"
    pub state: Option<WorkflowState>,
    /// Project the issue belongs to
    pub project: Option<ProjectRef>,
    /// Team the issue belongs to
    pub team: Option<TeamRef>,
    /// Attached labels
    #[serde(default)]
    pub labels: LabelConnection,
}

impl Issue {
    /// Project name, if the issue is assigned to a project
    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.name.as_str())
    }

    /// Label names in API order
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.nodes.iter().map(|l| l.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowState {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    pub key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelConnection {
    #[serde(default)]
    pub nodes: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Inclusive calendar-date range for filtering completed issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive)
    pub start: NaiveDate,
    /// End date (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range from two calendar dates
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(PerfRecapError::InvalidDateRange(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two YYYY-MM-DD strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").map_err(|e| {
            PerfRecapError::InvalidDateRange(format!("bad start date {:?}: {}", start, e))
        })?;
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").map_err(|e| {
            PerfRecapError::InvalidDateRange(format!("bad end date {:?}: {}", end, e))
        })?;
        Self::new(start, end)
    }

    /// Create a range covering the last `days` days, ending today
    pub fn days_back(days: u32) -> Self {
        let end = Utc::now().date_naive();
        let start = end - chrono::Duration::days(days as i64);
        Self { start, end }
    }

    /// Lower query bound: start of the start day, UTC
    pub fn completed_after(&self) -> String {
        format!("{}T00:00:00Z", self.start.format("%Y-%m-%d"))
    }

    /// Upper query bound: end of the end day, UTC
    pub fn completed_before(&self) -> String {
        format!("{}T23:59:59Z", self.end.format("%Y-%m-%d"))
    }
}
