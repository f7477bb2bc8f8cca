use core::fmt::{self, Display};

/// Terminal classification for every request outcome. Callers distinguish
/// these by [`code`](Error::code), never by matching on message text.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The request required a body, but none was supplied.
    EmptyPayload,
    /// A body was supplied, but a required field is absent, mistyped, or
    /// holds a rejected value.
    InvalidPayload,
    /// The referenced entity does not exist.
    NotFound,
    /// The search produced zero results.
    NoMatches,
    /// Unrecoverable error on our end.
    Fatal,
}

impl Error {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPayload => "empty_payload",
            Self::InvalidPayload => "invalid_payload",
            Self::NotFound => "not_found",
            Self::NoMatches => "no_matches",
            Self::Fatal => "fatal",
        }
    }
}

impl From<db::error::Error> for Error {
    fn from(err: db::error::Error) -> Self {
        match err {
            db::error::Error::BadInput => Self::InvalidPayload,
            db::error::Error::NotFound => Self::NotFound,
            db::error::Error::Fatal => Self::Fatal,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyPayload => "The request body is missing.",
            Self::InvalidPayload => "The request body is missing a required field or holds an invalid value.",
            Self::NotFound => "The requested resource does not exist.",
            Self::NoMatches => "No questions matched the search term.",
            Self::Fatal => "Oops! We have encountered an unrecoverable error on our end.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
