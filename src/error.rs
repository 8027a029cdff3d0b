/// Error raised when an encoded stream does not follow the wire format.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The byte stream is known to be out of spec.
    OutOfSpec(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::OutOfSpec(message) => {
                write!(fmt, "{}", message)
            }
        }
    }
}

/// A specialized `Result` for wire-format errors.
pub type Result<T> = std::result::Result<T, Error>;
