use crate::model::{Result, ScanError};
use serde_json::Value;

/// One repository from the project repository listing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub is_disabled: bool,
}

// New
impl Repository {
    fn new(id: impl ToString, name: impl ToString, is_disabled: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_disabled,
        }
    }
}

// Parser
impl Repository {
    /// Parses the repository listing body. A response without a `value`
    /// array is an empty project.
    pub fn parse_list(body: &Value) -> Result<Vec<Self>> {
        let Some(items) = body["value"].as_array() else {
            return Ok(Vec::new());
        };
        let mut result = Vec::new();
        for item in items {
            let Some(id) = item["id"].as_str() else {
                return Err(ScanError::Shape("repository item without 'id'"));
            };
            // `isDisabled` is omitted for active repositories.
            let is_disabled = item["isDisabled"].as_bool().unwrap_or(false);
            let name = item["name"].as_str().unwrap_or(id);
            result.push(Self::new(id, name, is_disabled));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_listing_with_disabled_flag() {
        let body = json!({
            "count": 2,
            "value": [
                { "id": "r1", "name": "payroll-api", "isDisabled": false },
                { "id": "r2", "name": "payroll-legacy", "isDisabled": true },
            ]
        });
        let repos = Repository::parse_list(&body).unwrap();
        assert_eq!(
            repos,
            vec![
                Repository::new("r1", "payroll-api", false),
                Repository::new("r2", "payroll-legacy", true),
            ]
        );
    }

    #[test]
    fn missing_disabled_flag_means_active() {
        let body = json!({ "value": [{ "id": "r1", "name": "payroll-api" }] });
        let repos = Repository::parse_list(&body).unwrap();
        assert!(!repos[0].is_disabled);
    }

    #[test]
    fn missing_value_array_is_an_empty_project() {
        let repos = Repository::parse_list(&json!({})).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn item_without_id_is_a_shape_error() {
        let body = json!({ "value": [{ "name": "payroll-api" }] });
        let err = Repository::parse_list(&body).unwrap_err();
        assert!(matches!(err, ScanError::Shape(_)));
    }
}
