use super::{ENCODED_LEN, encode_base58};
use core::fmt;

/// An owned, stack-allocated Base58 encoding of a `u64`.
///
/// Returned by [`encode`](super::encode). It is a zero-allocation view that
/// implements [`Display`](fmt::Display) and [`AsRef<str>`], and compares
/// directly against string slices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base58Formatter {
    buf: [u8; ENCODED_LEN],
}

impl Base58Formatter {
    /// Encodes `payload` into a new formatter.
    #[must_use]
    pub fn new(payload: u64) -> Self {
        let mut buf = [0_u8; ENCODED_LEN];
        encode_base58(payload, &mut buf);
        Self { buf }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only Base58 alphabet symbols, all ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns an allocated `String` of the encoding.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    #[allow(clippy::inherent_to_string_shadow_display)]
    #[must_use]
    pub fn to_string(&self) -> alloc::string::String {
        alloc::string::String::from(self.as_str())
    }

    /// Consumes the formatter and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LEN] {
        self.buf
    }
}

impl fmt::Display for Base58Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Base58Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Base58Formatter").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Base58Formatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Base58Formatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Base58Formatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Base58Formatter> for &str {
    fn eq(&self, other: &Base58Formatter) -> bool {
        *self == other.as_str()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl PartialEq<alloc::string::String> for Base58Formatter {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl From<Base58Formatter> for alloc::string::String {
    fn from(val: Base58Formatter) -> Self {
        val.to_string()
    }
}
