use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    IO(#[from] tokio::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
