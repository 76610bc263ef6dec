use crate::Base58Error;
use core::fmt;

/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `uid11` can produce.
///
/// Encoding and generation are infallible. Errors only come from decoding
/// strings and from the checked xid constructors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A string could not be decoded as a Base58 payload.
    Base58Error(Base58Error),

    /// A Unix millisecond timestamp falls outside the range an xid can
    /// represent: before the xid epoch, or past the 44-bit rollover.
    TimestampOutOfRange {
        /// The rejected timestamp, in milliseconds since 1970-01-01 UTC.
        unix_ms: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base58Error(err) => write!(f, "base58: {err}"),
            Self::TimestampOutOfRange { unix_ms } => {
                write!(f, "timestamp out of xid range: {unix_ms} ms")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Base58Error(err) => Some(err),
            Self::TimestampOutOfRange { .. } => None,
        }
    }
}

impl From<Base58Error> for Error {
    fn from(err: Base58Error) -> Self {
        Self::Base58Error(err)
    }
}
