use crate::model::{Result, ScanError};
use serde_json::Value;

/// One completed pull request from a pull-request listing page. Creator and
/// reviewers are keyed by account unique-name, not email.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PullRequest {
    pub created_by: String,
    pub reviewers: Vec<String>,
}

// Parser
impl PullRequest {
    pub fn parse_page(body: &Value) -> Result<Vec<Self>> {
        let Some(items) = body["value"].as_array() else {
            return Err(ScanError::Shape("pull request listing without 'value'"));
        };
        let mut result = Vec::new();
        for item in items {
            let Some(created_by) = item["createdBy"]["uniqueName"].as_str() else {
                return Err(ScanError::Shape("pull request item without creator"));
            };
            let Some(reviewer_items) = item["reviewers"].as_array() else {
                return Err(ScanError::Shape("pull request item without reviewers"));
            };
            let mut reviewers = Vec::new();
            for reviewer in reviewer_items {
                let Some(unique_name) = reviewer["uniqueName"].as_str() else {
                    return Err(ScanError::Shape("reviewer entry without unique name"));
                };
                reviewers.push(unique_name.to_string());
            }
            result.push(Self {
                created_by: created_by.to_string(),
                reviewers,
            });
        }
        Ok(result)
    }
}
