use core::fmt;

/// Reasons a string is not a valid Base58 payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Base58Error {
    /// The input has the wrong length: not exactly 11 bytes for a full
    /// decode, or more than 11 bytes for a partial decode.
    DecodeInvalidLen {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contains a byte outside the Base58 alphabet.
    DecodeInvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },
    /// The input is well-formed but its value does not fit in 64 bits.
    DecodeOverflow,
}

impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeInvalidLen { len } => write!(f, "invalid length: {len}"),
            Self::DecodeInvalidAscii { byte, index } => {
                write!(f, "invalid ascii byte {byte:#04x} at index {index}")
            }
            Self::DecodeOverflow => f.write_str("decoded value overflows u64"),
        }
    }
}

impl core::error::Error for Base58Error {}
