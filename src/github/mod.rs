pub mod contents;
pub mod error;
pub mod spec;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use crate::{
    config::Config,
    http::{
        downloader::download_bytes,
        error::HttpError,
        fetch::{get_json, FetchOptions},
    },
    prelude::Result,
    reporter::Reporter,
};

use self::{
    contents::{ContentFile, ContentsResponse},
    error::GithubError,
    spec::FileSpec,
};

pub const ACCEPT: &str = "application/vnd.github+json";
pub const API_VERSION: &str = "2022-11-28";

/// Anything that can hand out repository file metadata and raw bodies.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the contents entry of a single file.
    async fn get_contents(&self, spec: &FileSpec) -> Result<ContentFile>;

    /// Fetches the raw body behind a `download_url`.
    async fn get_raw<R: Reporter>(&self, url: &str, reporter: &Option<R>) -> Result<Vec<u8>>;
}

/// Contents API client configured from [`Config`].
#[derive(Debug, Clone)]
pub struct GithubClient {
    config: Config,
}

impl GithubClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn options(&self) -> FetchOptions {
        FetchOptions::default()
            .header("User-Agent", self.config.user_agent.as_str())
            .timeout(Duration::from_secs(self.config.timeout_secs))
    }
}

#[async_trait]
impl ContentSource for GithubClient {
    async fn get_contents(&self, spec: &FileSpec) -> Result<ContentFile> {
        let url = spec.contents_url(&self.config.api_base_url)?;
        let mut options = self
            .options()
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(reference) = &spec.reference {
            options = options.query("ref", reference.as_str());
        }

        let response = match get_json::<ContentsResponse>(url.as_str(), &options).await {
            Ok(response) => response,
            Err(HttpError::Status(StatusCode::NOT_FOUND, _)) => {
                return Err(GithubError::NotFound(spec.to_string()).into())
            }
            Err(err) => return Err(err.into()),
        };

        match response {
            ContentsResponse::File(file) => {
                debug!("{} is {} bytes ({})", spec, file.size, file.sha);
                Ok(file)
            }
            ContentsResponse::Listing(_) => Err(GithubError::NotAFile(spec.to_string()).into()),
        }
    }

    async fn get_raw<R: Reporter>(&self, url: &str, reporter: &Option<R>) -> Result<Vec<u8>> {
        Ok(download_bytes(url, &self.options(), reporter).await?)
    }
}
