use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Shared network client.
///
/// Uses `CARGO_PKG_NAME/CARGO_PKG_VERSION` as user agent unless a request
/// overrides it.
pub(crate) static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .unwrap_or_default()
});

/// Optional request parameters.
#[derive(Default, Debug, Clone)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Sends a GET request and fails on any non-success status.
///
/// # Errors
///
/// - Network errors when sending the request.
/// - Non-success HTTP status codes, reported as [`HttpError::Status`].
pub async fn get(url: &str, options: &FetchOptions) -> Result<Response, HttpError> {
    debug!("GET {url}");

    let mut request_builder = CLIENT.get(url);

    for (key, value) in &options.headers {
        request_builder = request_builder.header(key, value);
    }

    for (key, value) in &options.query_params {
        request_builder = request_builder.query(&[(key, value)]);
    }

    if let Some(timeout) = options.timeout {
        request_builder = request_builder.timeout(timeout);
    }

    let response = request_builder.send().await?;
    if !response.status().is_success() {
        return Err(HttpError::Status(response.status(), url.to_string()));
    }

    Ok(response)
}

/// Sends a GET request and deserializes the JSON body into `T`.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    options: &FetchOptions,
) -> Result<T, HttpError> {
    Ok(get(url, options).await?.json::<T>().await?)
}
