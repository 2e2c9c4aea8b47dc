use crate::notification::Notification;
use snafu::prelude::*;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("{source}"))]
    Client {
        #[snafu(source)]
        source: tunelyrics_client::Error,
    },
    #[snafu(display("The selected track is missing its artist or track name"))]
    MissingMetadata,
    #[snafu(display("No track is selected"))]
    NoSelection,
    #[snafu(display("The selection belongs to an earlier search"))]
    StaleSelection,
    #[snafu(display("Unable to broadcast notification"))]
    Notification,
}

impl From<tunelyrics_client::Error> for Error {
    fn from(value: tunelyrics_client::Error) -> Self {
        Error::Client { source: value }
    }
}

impl From<tokio::sync::broadcast::error::SendError<Notification>> for Error {
    fn from(_value: tokio::sync::broadcast::error::SendError<Notification>) -> Self {
        Self::Notification
    }
}
