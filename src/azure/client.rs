use crate::azure::PAGE_SIZE;
use crate::model::{Commit, PullRequest, Repository, Result, ScanConfig};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

const API_VERSION: &str = "api-version=7.1";

/// Read-only view of a project's repositories and their activity, one page
/// at a time. Implemented against the hosted service here and against a
/// scripted source in tests.
pub trait ProjectSource {
    async fn repositories(&self) -> Result<Vec<Repository>>;
    async fn commit_page(&self, repo: &Repository, page: u32) -> Result<Vec<Commit>>;
    async fn pull_request_page(&self, repo: &Repository, page: u32) -> Result<Vec<PullRequest>>;
}

/// Client for the Azure DevOps Git REST endpoints of one project.
pub struct AzureClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    date_floor: String,
}

impl AzureClient {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: format!(
                "https://dev.azure.com/{}/{}/_apis/git",
                config.organization, config.project
            ),
            access_token: config.access_token.clone(),
            date_floor: config.date_floor(),
        })
    }

    /// Issues an authenticated GET and parses the JSON body. The personal
    /// access token goes out as `Basic base64(":" + token)` on every request.
    async fn fetch(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .basic_auth("", Some(&self.access_token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn skip(page: u32) -> usize {
        (page as usize - 1) * PAGE_SIZE
    }
}

impl ProjectSource for AzureClient {
    async fn repositories(&self) -> Result<Vec<Repository>> {
        let url = format!("{}/repositories?{API_VERSION}", self.base_url);
        let body = self.fetch(&url).await?;
        Repository::parse_list(&body)
    }

    async fn commit_page(&self, repo: &Repository, page: u32) -> Result<Vec<Commit>> {
        let url = format!(
            "{}/repositories/{}/commits?searchCriteria.fromDate={}&$top={}&$skip={}&{API_VERSION}",
            self.base_url,
            repo.id,
            self.date_floor,
            PAGE_SIZE,
            Self::skip(page),
        );
        let body = self.fetch(&url).await?;
        Commit::parse_page(&body)
    }

    async fn pull_request_page(&self, repo: &Repository, page: u32) -> Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repositories/{}/pullrequests?searchCriteria.status=completed&searchCriteria.minTime={}&$top={}&$skip={}&{API_VERSION}",
            self.base_url,
            repo.id,
            self.date_floor,
            PAGE_SIZE,
            Self::skip(page),
        );
        let body = self.fetch(&url).await?;
        PullRequest::parse_page(&body)
    }
}
