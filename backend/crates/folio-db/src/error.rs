use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("MongoDB error: {source} {location}")]
    Mongo {
        source: mongodb::error::Error,
        location: ErrorLocation,
    },

    #[error("BSON serialization error: {source} {location}")]
    Encode {
        source: bson::ser::Error,
        location: ErrorLocation,
    },

    #[error("BSON deserialization error: {source} {location}")]
    Decode {
        source: bson::de::Error,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<mongodb::error::Error> for DbError {
    #[track_caller]
    fn from(source: mongodb::error::Error) -> Self {
        Self::Mongo {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<bson::ser::Error> for DbError {
    #[track_caller]
    fn from(source: bson::ser::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<bson::de::Error> for DbError {
    #[track_caller]
    fn from(source: bson::de::Error) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
