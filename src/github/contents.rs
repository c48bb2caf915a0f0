use serde::{Deserialize, Serialize};

use crate::util::base64::decode_file_content;

use super::error::GithubError;

/// A single entry returned by the contents endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentFile {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub encoding: Option<String>,
    pub size: u64,
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// The endpoint answers with an object for files and an array for directories.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ContentsResponse {
    File(ContentFile),
    Listing(Vec<serde_json::Value>),
}

impl ContentFile {
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }

    /// Decodes the inline content into raw bytes.
    ///
    /// # Errors
    ///
    /// - [`GithubError::NotAFile`] for symlinks, submodules and directories.
    /// - [`GithubError::ContentTooLarge`] when the API left the content out
    ///   (encoding `none`, or empty content for a non-empty file).
    /// - [`GithubError::UnsupportedEncoding`] for any encoding other than base64.
    /// - A decode error when the content is not valid base64.
    pub fn decode(&self) -> crate::Result<Vec<u8>> {
        if !self.is_file() {
            return Err(GithubError::NotAFile(self.path.clone()).into());
        }

        let content = self.content.as_deref().unwrap_or_default();
        match self.encoding.as_deref() {
            Some("base64") if content.trim().is_empty() && self.size > 0 => {
                Err(GithubError::ContentTooLarge(self.path.clone(), self.size).into())
            }
            Some("base64") => Ok(decode_file_content(content)?),
            Some("none") | None => {
                Err(GithubError::ContentTooLarge(self.path.clone(), self.size).into())
            }
            Some(other) => {
                Err(GithubError::UnsupportedEncoding(self.path.clone(), other.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, util::error::UtilError};

    fn file(encoding: Option<&str>, content: Option<&str>, size: u64) -> ContentFile {
        ContentFile {
            kind: "file".to_string(),
            encoding: encoding.map(str::to_string),
            size,
            name: "README.md".to_string(),
            path: "docs/README.md".to_string(),
            sha: "3b18e512dba79e4c8300dd08aeb37f8e728b8dad".to_string(),
            content: content.map(str::to_string),
            download_url: None,
        }
    }

    #[test]
    fn deserializes_api_response() {
        let json = r#"{
            "type": "file",
            "encoding": "base64",
            "size": 12,
            "name": "README.md",
            "path": "docs/README.md",
            "content": "aGVsbG8g\nd29ybGQK\n",
            "sha": "3b18e512dba79e4c8300dd08aeb37f8e728b8dad",
            "url": "https://api.github.com/repos/octo/tools/contents/docs/README.md",
            "download_url": "https://raw.githubusercontent.com/octo/tools/main/docs/README.md"
        }"#;
        let response: ContentsResponse = serde_json::from_str(json).unwrap();
        let ContentsResponse::File(file) = response else {
            panic!("expected a file");
        };
        assert_eq!(file.decode().unwrap(), b"hello world\n");
        assert!(file.download_url.is_some());
    }

    #[test]
    fn directory_listing_is_not_a_file() {
        let response: ContentsResponse =
            serde_json::from_str(r#"[{"type": "file", "name": "a"}]"#).unwrap();
        assert!(matches!(response, ContentsResponse::Listing(entries) if entries.len() == 1));
    }

    #[test]
    fn symlink_is_not_a_file() {
        let mut entry = file(Some("base64"), Some(""), 0);
        entry.kind = "symlink".to_string();
        assert!(matches!(
            entry.decode(),
            Err(Error::Github(GithubError::NotAFile(_)))
        ));
    }

    #[test]
    fn empty_file_decodes_to_nothing() {
        assert!(file(Some("base64"), Some(""), 0).decode().unwrap().is_empty());
    }

    #[test]
    fn missing_content_is_too_large() {
        assert!(matches!(
            file(Some("none"), Some(""), 2_000_000).decode(),
            Err(Error::Github(GithubError::ContentTooLarge(_, 2_000_000)))
        ));
        assert!(matches!(
            file(Some("base64"), Some(""), 10).decode(),
            Err(Error::Github(GithubError::ContentTooLarge(..)))
        ));
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        assert!(matches!(
            file(Some("utf-8"), Some("hi"), 2).decode(),
            Err(Error::Github(GithubError::UnsupportedEncoding(_, enc))) if enc == "utf-8"
        ));
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        assert!(matches!(
            file(Some("base64"), Some("!!!not-valid-base64!!!"), 20).decode(),
            Err(Error::Util(UtilError::Decode(_)))
        ));
    }
}
