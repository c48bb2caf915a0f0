use thiserror::Error;

use crate::{github::error::GithubError, http::error::HttpError, util::error::UtilError};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Util(#[from] UtilError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Github(#[from] GithubError),
}

