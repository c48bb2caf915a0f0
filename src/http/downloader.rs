//! Raw downloads and atomic file writes.

use std::{
    io,
    path::{Path, PathBuf},
};

use futures_util::StreamExt;
use log::debug;
use tokio::{fs, io::AsyncWriteExt};

use crate::reporter::{Progress, Reporter};

use super::{
    error::HttpError,
    fetch::{get, FetchOptions},
};

/// Upper bound for buffer pre-allocation; larger bodies grow as chunks arrive.
const MAX_PREALLOCATION: u64 = 8 * 1024 * 1024;

/// Downloads the body of `url` into memory, streaming it chunk by chunk.
///
/// Progress is reported in bytes through `reporter`; the maximum is the
/// `Content-Length` of the response, or 0 when the server does not send one.
///
/// # Errors
///
/// - Network errors when making the HTTP request or reading the body.
/// - Non-success HTTP status codes.
pub async fn download_bytes<R: Reporter>(
    url: &str,
    options: &FetchOptions,
    reporter: &Option<R>,
) -> Result<Vec<u8>, HttpError> {
    let response = get(url, options).await?;

    let total_size = response.content_length().unwrap_or(0);
    reporter.set_max_progress(total_size as f64);

    let mut content = Vec::with_capacity(total_size.min(MAX_PREALLOCATION) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        content.extend_from_slice(&chunk);
        reporter.set_progress(content.len() as f64);
    }

    debug!("Downloaded {} bytes", content.len());
    Ok(content)
}

/// Writes `content` to `path` through a temporary sibling file, so the
/// destination is either left untouched or holds the complete content.
///
/// Parent directories are created when missing. Returns the number of bytes
/// written.
pub async fn write_file(path: impl AsRef<Path>, content: &[u8]) -> Result<u64, HttpError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let temp_path = temp_path(path);

    if let Err(err) = persist(&temp_path, path, content).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(err.into());
    }

    Ok(content.len() as u64)
}

/// `<path>.tmp`, built on the raw OS string so non UTF-8 names survive.
fn temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.as_os_str().to_os_string();
    temp_path.push(".tmp");
    PathBuf::from(temp_path)
}

async fn persist(temp_path: &Path, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(temp_path)
        .await?;

    temp_file.write_all(content).await?;
    temp_file.flush().await?;
    drop(temp_file);

    fs::rename(temp_path, path).await
}
