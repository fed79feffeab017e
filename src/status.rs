use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Status {
    Fetch(String),
    Storage(String),
    Render(String),
    InvalidArgument(String),
}

impl Status {
    pub fn fetch(msg: impl Into<String>) -> Self {
        Status::Fetch(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Status::Storage(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Status::Render(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status::InvalidArgument(msg.into())
    }

    /// Returns true for errors raised while talking to a remote host.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Status::Fetch(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Status::Storage(_))
    }
}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: '{err}'"))
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Self::fetch(format!("malformed payload: '{err}'"))
    }
}

impl From<reqwest::Error> for Status {
    fn from(err: reqwest::Error) -> Self {
        Self::fetch(format!("reqwest error: '{err}'"))
    }
}

impl From<csv::Error> for Status {
    fn from(err: csv::Error) -> Self {
        Self::storage(format!("csv error: '{err}'"))
    }
}

impl From<image::ImageError> for Status {
    fn from(err: image::ImageError) -> Self {
        Self::render(format!("image error: '{err}'"))
    }
}

impl Error for Status {}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Fetch(msg) => write!(f, "Fetch error: {msg}"),
            Status::Storage(msg) => write!(f, "Storage error: {msg}"),
            Status::Render(msg) => write!(f, "Render error: {msg}"),
            Status::InvalidArgument(msg) => write!(f, "Invalid argument error: {msg}"),
        }
    }
}
