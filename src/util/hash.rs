use sha1::Digest;
use sha1::Sha1;

/// Computes the git blob object id of the given content.
///
/// Contents APIs report this value as `sha`, so it can be used to check
/// that decoded bytes are exactly what the repository holds.
pub fn git_blob_sha1(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0", content.len()).as_bytes());
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
