pub mod base64;
pub mod error;
pub mod hash;
pub mod json;
