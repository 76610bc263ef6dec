//! Time-plus-random identifiers over raw `u64` payloads.
//!
//! These free functions are the untyped face of [`Xid`]: the high 44 bits of
//! a payload hold the milliseconds elapsed since [`EPOCH_MS`], the low 20 bits
//! hold randomness.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use uid11::xid;
//!
//! let start_of_day = xid::pack(1_700_006_400_000, 0);
//! assert_eq!(xid::extract_timestamp(start_of_day), "2023-11-15T00:00:00.000Z");
//! # }
//! ```

use crate::Xid;

/// Xid epoch, 2011-11-11T11:11:11.111Z, in milliseconds since 1970-01-01 UTC.
pub const EPOCH_MS: i64 = Xid::EPOCH_MS;

/// Width of the elapsed-milliseconds field.
pub const TIME_BITS: u32 = Xid::TIMESTAMP_BITS as u32;

/// Width of the random field.
pub const RANDOM_BITS: u32 = Xid::RANDOM_BITS as u32;

/// Generates a fresh xid from the wall clock and the thread-local CSPRNG.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn generate() -> u64 {
    Xid::now().to_raw()
}

/// Generates a fresh xid and returns its 11 character Base58 encoding.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn generate_string() -> alloc::string::String {
    Xid::now().encode().to_string()
}

/// Returns the UTC instant embedded in `payload`, at millisecond precision.
///
/// The low 20 bits are ignored, so any `u64` yields a well-defined instant
/// between the epoch and the 44-bit rollover in 2569.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn extract_timepoint(payload: u64) -> jiff::Timestamp {
    Xid::from_raw(payload).timepoint()
}

/// Formats the instant embedded in `payload` as ISO 8601 with exactly three
/// fractional digits and a `Z` suffix, e.g. `2011-11-11T11:11:11.111Z`.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn extract_timestamp(payload: u64) -> alloc::string::String {
    alloc::format!("{:.3}", extract_timepoint(payload))
}

/// Composes a payload from an absolute Unix millisecond timestamp and a
/// random value, exactly as [`generate`] would at that instant.
///
/// Useful for range boundaries: `pack(t, 0)` is the smallest payload minted
/// at `t`. Pre-epoch times wrap; see [`Xid::pack`].
#[must_use]
pub const fn pack(unix_ms: i64, rnd: u64) -> u64 {
    Xid::pack(unix_ms, rnd).to_raw()
}
