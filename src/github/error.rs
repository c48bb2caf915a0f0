use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Invalid file spec '{0}': {1}")]
    InvalidSpec(String, &'static str),
    #[error("Invalid API base url '{0}'")]
    InvalidBaseUrl(String),
    #[error("{0} Not Found")]
    NotFound(String),
    #[error("{0} is not a file")]
    NotAFile(String),
    #[error("Unsupported content encoding '{1}' for {0}")]
    UnsupportedEncoding(String, String),
    #[error("{0} is too large to be returned inline ({1} bytes)")]
    ContentTooLarge(String, u64),
    #[error("Content of {path} does not match its sha: expected {expected}, got {actual}")]
    ShaMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}
