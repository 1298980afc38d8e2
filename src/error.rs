// SPDX-License-Identifier: MPL-2.0
//! Errors for the ambient layers around the carousel core.
//!
//! The paging and zoom logic itself never fails: boundaries and degenerate
//! geometry degrade to no-ops. Only configuration I/O, image header probing
//! and argument parsing produce an [`Error`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Image Error: {0}")]
    Image(String),

    #[error("Argument Error: {0}")]
    Args(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Args(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
