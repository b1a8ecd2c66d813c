use crate::model::{Result, ScanError};
use chrono::NaiveDate;

/// Immutable inputs for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub organization: String,
    pub project: String,
    pub access_token: String,
    pub from_date: NaiveDate,
}

impl ScanConfig {
    /// Rejects empty inputs before any request goes out.
    pub fn new(
        organization: impl ToString,
        project: impl ToString,
        access_token: impl ToString,
        from_date: NaiveDate,
    ) -> Result<Self> {
        let config = Self {
            organization: organization.to_string(),
            project: project.to_string(),
            access_token: access_token.to_string(),
            from_date,
        };
        required("organization", &config.organization)?;
        required("project", &config.project)?;
        required("access token", &config.access_token)?;
        Ok(config)
    }

    /// Inclusive lower bound on item timestamps, in the form the API expects.
    pub fn date_floor(&self) -> String {
        self.from_date.format("%Y-%m-%d").to_string()
    }
}

fn required(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScanError::Validation(name));
    }
    Ok(())
}
