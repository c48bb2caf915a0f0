//! Fetches single files from a repository contents API and writes their
//! exact bytes to disk.
//!
//! The API returns file content as base64 wrapped every 60 characters;
//! [`util::base64::decode_file_content`] turns that payload back into bytes.

pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod prelude;
pub mod reporter;
pub mod util;
pub mod workflow;

pub use crate::util::base64::decode_file_content;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
