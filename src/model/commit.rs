use crate::model::{Result, ScanError};
use serde_json::Value;

/// One commit from a commit listing page. Commit authorship is keyed by
/// email address, unlike pull-request authorship (account unique-name).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    pub author_email: String,
}

// Parser
impl Commit {
    pub fn parse_page(body: &Value) -> Result<Vec<Self>> {
        let Some(items) = body["value"].as_array() else {
            return Err(ScanError::Shape("commit listing without 'value'"));
        };
        let mut result = Vec::new();
        for item in items {
            let Some(email) = item["author"]["email"].as_str() else {
                return Err(ScanError::Shape("commit item without author email"));
            };
            result.push(Self {
                author_email: email.to_string(),
            });
        }
        Ok(result)
    }
}
