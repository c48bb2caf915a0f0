//! Downloads a single repository file to disk.
//!
//! The contents endpoint returns the file inline as line-wrapped base64. Files
//! the API refuses to inline are fetched from their `download_url` instead.
//! Decoded bytes are checked against the blob sha before anything is written.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{
    config::Config,
    error::Error,
    github::{
        contents::ContentFile, error::GithubError, spec::FileSpec, ContentSource, GithubClient,
    },
    http::downloader::write_file,
    prelude::Result,
    reporter::{Progress, Reporter},
    util::hash::git_blob_sha1,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub size: u64,
    pub sha: String,
}

/// Fetches, decodes and verifies the content of `spec`.
///
/// # Errors
///
/// - [`GithubError::NotFound`] and [`GithubError::NotAFile`] from the API.
/// - A decode error when the inline content is not valid base64.
/// - [`GithubError::ShaMismatch`] when `verify_sha` is set and the bytes do
///   not hash to the reported sha.
pub async fn fetch_file_content<S: ContentSource, R: Reporter>(
    source: &S,
    spec: &FileSpec,
    verify_sha: bool,
    reporter: &Option<R>,
) -> Result<(ContentFile, Vec<u8>)> {
    reporter.set_message(format!("Fetching {spec}"));
    let file = source.get_contents(spec).await?;

    let content = match file.decode() {
        Ok(content) => content,
        Err(Error::Github(GithubError::ContentTooLarge(path, size))) => {
            let Some(url) = file.download_url.as_deref() else {
                return Err(GithubError::ContentTooLarge(path, size).into());
            };
            warn!("{path} is not inlined ({size} bytes), downloading from {url}");
            source.get_raw(url, reporter).await?
        }
        Err(err) => return Err(err),
    };

    if verify_sha {
        let actual = git_blob_sha1(&content);
        if !actual.eq_ignore_ascii_case(&file.sha) {
            return Err(GithubError::ShaMismatch {
                path: file.path.clone(),
                expected: file.sha.clone(),
                actual,
            }
            .into());
        }
    }

    Ok((file, content))
}

/// Downloads `spec` and writes its exact bytes to `destination`.
///
/// Nothing is written unless the content was fetched, decoded and verified.
pub async fn download_file<S: ContentSource, R: Reporter>(
    source: &S,
    spec: &FileSpec,
    destination: impl AsRef<Path>,
    verify_sha: bool,
    reporter: &Option<R>,
) -> Result<DownloadedFile> {
    let destination = destination.as_ref();
    let (file, content) = fetch_file_content(source, spec, verify_sha, reporter).await?;

    reporter.set_message(format!("Writing {}", destination.display()));
    let size = write_file(destination, &content).await?;
    info!("Wrote {spec} to {} ({size} bytes)", destination.display());

    Ok(DownloadedFile {
        path: destination.to_path_buf(),
        size,
        sha: file.sha,
    })
}

/// Downloads `spec` from the API described by `config`.
pub async fn download<R: Reporter>(
    config: &Config,
    spec: &FileSpec,
    destination: impl AsRef<Path>,
    reporter: &Option<R>,
) -> Result<DownloadedFile> {
    let client = GithubClient::new(config.clone());
    download_file(&client, spec, destination, config.verify_sha, reporter).await
}
