use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Invalid mailbox '{address}': {source} {location}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
        location: ErrorLocation,
    },

    #[error("Failed to build message: {source} {location}")]
    Message {
        source: lettre::error::Error,
        location: ErrorLocation,
    },

    #[error("SMTP delivery failed: {source} {location}")]
    Transport {
        source: lettre::transport::smtp::Error,
        location: ErrorLocation,
    },

    #[error("Delivery task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl NotificationError {
    #[track_caller]
    pub fn address<S: Into<String>>(address: S, source: lettre::address::AddressError) -> Self {
        Self::Address {
            address: address.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::error::Error> for NotificationError {
    #[track_caller]
    fn from(source: lettre::error::Error) -> Self {
        Self::Message {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::transport::smtp::Error> for NotificationError {
    #[track_caller]
    fn from(source: lettre::transport::smtp::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for NotificationError {
    #[track_caller]
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotificationError>;
