use std::{fmt, str::FromStr};

use reqwest::Url;

use super::error::GithubError;

/// Reference to a single file in a repository, written as
/// `owner/repo/path/to/file[@ref]`.
///
/// The ref is everything after the last `@`, so a file whose name contains
/// `@` can only be addressed with an explicit ref: `o/r/a@b.md` is path `a`
/// at ref `b.md`, while `o/r/a@b.md@main` is path `a@b.md` at `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub reference: Option<String>,
}

impl FileSpec {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        reference: Option<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
            reference,
        }
    }

    /// Contents endpoint for this file, relative to `api_base_url`.
    ///
    /// Every segment is percent-encoded. The reference is not part of the URL;
    /// it is sent as the `ref` query parameter.
    pub fn contents_url(&self, api_base_url: &str) -> Result<Url, GithubError> {
        let invalid = || GithubError::InvalidBaseUrl(api_base_url.to_string());
        let mut url = Url::parse(api_base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str(), "contents"])
            .extend(self.path.split('/'));
        Ok(url)
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl FromStr for FileSpec {
    type Err = GithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = |reason| GithubError::InvalidSpec(s.to_string(), reason);

        let (location, reference) = match trimmed.rsplit_once('@') {
            Some((_, "")) => return Err(invalid("empty ref after '@'")),
            Some((location, reference)) => (location, Some(reference.to_string())),
            None => (trimmed, None),
        };

        let segments: Vec<&str> = location.split('/').collect();
        if segments.len() < 3 {
            return Err(invalid("expected owner/repo/path"));
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid("empty path segment"));
        }

        Ok(FileSpec::new(
            segments[0],
            segments[1],
            segments[2..].join("/"),
            reference,
        ))
    }
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.owner, self.repo, self.path)?;
        if let Some(reference) = &self.reference {
            write!(f, "@{reference}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spec_with_ref() {
        let spec: FileSpec = "octo/tools/.github/workflows/ci.md@v1.2".parse().unwrap();
        assert_eq!(spec.owner, "octo");
        assert_eq!(spec.repo, "tools");
        assert_eq!(spec.path, ".github/workflows/ci.md");
        assert_eq!(spec.reference.as_deref(), Some("v1.2"));
        assert_eq!(spec.file_name(), "ci.md");
        assert_eq!(spec.to_string(), "octo/tools/.github/workflows/ci.md@v1.2");
    }

    #[test]
    fn parses_spec_without_ref() {
        let spec: FileSpec = "  octo/tools/README.md\n".parse().unwrap();
        assert_eq!(spec, FileSpec::new("octo", "tools", "README.md", None));
        assert_eq!(
            spec.contents_url("https://api.github.com/").unwrap().as_str(),
            "https://api.github.com/repos/octo/tools/contents/README.md"
        );
        assert_eq!(
            spec.contents_url("https://ghe.example.com/api/v3").unwrap().as_str(),
            "https://ghe.example.com/api/v3/repos/octo/tools/contents/README.md"
        );
    }

    #[test]
    fn contents_url_encodes_path_segments() {
        for (file, encoded) in [
            ("a#b.md", "a%23b.md"),
            ("a?b.md", "a%3Fb.md"),
            ("a b.md", "a%20b.md"),
            ("100%.md", "100%25.md"),
        ] {
            let spec: FileSpec = format!("octo/tools/docs/{file}@main").parse().unwrap();
            let url = spec.contents_url("https://api.github.com").unwrap();
            assert_eq!(url.path(), format!("/repos/octo/tools/contents/docs/{encoded}"));
            assert_eq!(url.query(), None, "{file}");
            assert_eq!(url.fragment(), None, "{file}");
        }
    }

    #[test]
    fn contents_url_rejects_bad_base() {
        let spec = FileSpec::new("octo", "tools", "README.md", None);
        for base in ["not a url", "mailto:octo@example.com"] {
            assert!(matches!(
                spec.contents_url(base),
                Err(GithubError::InvalidBaseUrl(_))
            ));
        }
    }

    #[test]
    fn ref_is_split_at_last_at_sign() {
        let spec: FileSpec = "o/r/dir/a@b.md".parse().unwrap();
        assert_eq!(spec.path, "dir/a");
        assert_eq!(spec.reference.as_deref(), Some("b.md"));

        let spec: FileSpec = "o/r/dir/a@b.md@main".parse().unwrap();
        assert_eq!(spec.path, "dir/a@b.md");
        assert_eq!(spec.reference.as_deref(), Some("main"));
    }

    #[test]
    fn rejects_malformed_specs() {
        for input in ["octo/tools", "octo//README.md", "octo/tools/dir/", "octo/tools/a.md@", ""] {
            let err = input.parse::<FileSpec>().unwrap_err();
            assert!(matches!(err, GithubError::InvalidSpec(..)), "{input}");
        }
    }
}
