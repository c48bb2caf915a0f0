use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    IO(#[from] tokio::io::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request to {1} failed with status code: {0}")]
    Status(StatusCode, String),
}
