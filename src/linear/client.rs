use crate::error::{PerfRecapError, Result};
use crate::linear::{DateRange, Issue};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Linear GraphQL API client
pub struct LinearClient {
    api_key: String,
    client: Client,
    endpoint: String,
}

impl LinearClient {
    /// Create a new Linear API client
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            api_key,
            client,
            endpoint: LINEAR_API_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Fetch the viewer's assigned issues completed within the given range.
    ///
    /// Returns the nodes in the order the API reports them. Any failure
    /// (transport, HTTP status, or an `errors` array in the body) is an
    /// error; the caller decides what to do with its held list.
    pub async fn fetch_completed_issues(&self, range: &DateRange) -> Result<Vec<Issue>> {
        let body = Self::request_body(range);

        tracing::debug!(
            after = %range.completed_after(),
            before = %range.completed_before(),
            "fetching completed Linear issues"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PerfRecapError::linear_api(format!(
                "request failed with status {}: {}",
                status, error_text
            )));
        }

        let gql: GqlResponse = response.json().await?;

        // Linear reports application-level errors in a 200 body
        if let Some(errors) = gql.errors {
            if let Some(first) = errors.first() {
                return Err(PerfRecapError::linear_api(first.message.clone()));
            }
        }

        let data = gql
            .data
            .ok_or_else(|| PerfRecapError::linear_api("no data in response"))?;

        Ok(data.viewer.assigned_issues.nodes)
    }

    /// GraphQL request body for a completed-issues query over `range`
    fn request_body(range: &DateRange) -> serde_json::Value {
        let query = format!(
            r#"query {{
  viewer {{
    assignedIssues(
      filter: {{
        completedAt: {{
          gte: "{after}",
          lte: "{before}"
        }}
      }}
    ) {{
      nodes {{
        id
        identifier
        title
        description
        completedAt
        url
        state {{ name }}
        project {{ name }}
        team {{ key }}
        labels {{ nodes {{ name }} }}
      }}
    }}
  }}
}}"#,
            after = range.completed_after(),
            before = range.completed_before(),
        );

        serde_json::json!({ "query": query })
    }
}

#[derive(Debug, Deserialize)]
struct GqlResponse {
    data: Option<GqlData>,
    errors: Option<Vec<GqlError>>,
}

#[derive(Debug, Deserialize)]
struct GqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GqlData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    #[serde(rename = "assignedIssues")]
    assigned_issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
struct IssueConnection {
    nodes: Vec<Issue>,
}
