use core::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A submitted value was rejected by one of the table constraints.
    BadInput,
    /// The referenced row does not exist.
    NotFound,
    /// Unrecoverable error.
    Fatal,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BadInput => "The submitted values were rejected by the catalog.",
            Self::NotFound => "The requested record does not exist.",
            Self::Fatal => "Unrecoverable database error.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
