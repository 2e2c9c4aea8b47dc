#[macro_use]
extern crate tracing;

use snafu::prelude::*;

pub mod catalog_models;
pub mod client;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("{message}"))]
    Transport { message: String },
    #[snafu(display("Unable to read response: {message}"))]
    DeserializeJSON { message: String },
    #[snafu(display("Data was not retrieved from request"))]
    DataUnavailable,
    #[snafu(display("Invalid url: {message}"))]
    InvalidUrl { message: String },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Transport {
            message: error.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::InvalidUrl {
            message: error.to_string(),
        }
    }
}
