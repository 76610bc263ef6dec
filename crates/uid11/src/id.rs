use crate::{Base58Error, Base58Formatter, Error, RandSource, Result, XID_EPOCH, base58};
use core::fmt;

/// A 64-bit time-plus-random identifier.
///
/// - 44 bits timestamp: milliseconds elapsed since [`XID_EPOCH`]
///   (2011-11-11T11:11:11.111Z), rolling over in May 2569
/// - 20 bits random
///
/// ```text
///  Bit Index:  63             20 19           0
///              +----------------+-------------+
///  Field:      | timestamp (44) | random (20) |
///              +----------------+-------------+
///              |<-- MSB -- 64 bits --- LSB -->|
/// ```
///
/// Because the timestamp occupies the high bits, an xid minted at least one
/// millisecond after another compares greater, both numerically and through
/// its Base58 encoding. Within one millisecond the order is random.
///
/// Every `u64` is a structurally valid `Xid`; there are no reserved bits.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Xid {
    id: u64,
}

const _: () = {
    // Compile-time check: the fields must exactly fill the backing type.
    assert!(
        Xid::TIMESTAMP_BITS + Xid::RANDOM_BITS == u64::BITS as u64,
        "Layout must match underlying type width"
    );
};

impl Xid {
    pub const TIMESTAMP_BITS: u64 = 44;
    pub const RANDOM_BITS: u64 = 20;

    pub const RANDOM_SHIFT: u64 = 0;
    pub const TIMESTAMP_SHIFT: u64 = Self::RANDOM_SHIFT + Self::RANDOM_BITS;

    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const RANDOM_MASK: u64 = (1 << Self::RANDOM_BITS) - 1;

    /// [`XID_EPOCH`] in milliseconds since 1970-01-01 UTC.
    pub const EPOCH_MS: i64 = XID_EPOCH.as_millis() as i64;

    /// Constructs an xid from elapsed milliseconds since the xid epoch and a
    /// random value. Both are masked to their field widths.
    #[must_use]
    pub const fn from_components(timestamp: u64, random: u64) -> Self {
        let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let r = (random & Self::RANDOM_MASK) << Self::RANDOM_SHIFT;
        Self { id: t | r }
    }

    /// Packs an absolute Unix millisecond timestamp and a random value.
    ///
    /// Only the low 20 bits of `random` are kept. Times outside the
    /// representable window wrap: the elapsed milliseconds are taken in two's
    /// complement and truncated to 44 bits, so a time just before the epoch
    /// lands at the very top of the range. Use [`Self::try_from_unix_millis`]
    /// to reject such times instead.
    ///
    /// ```
    /// use uid11::Xid;
    ///
    /// let id = Xid::pack(Xid::EPOCH_MS + 1, 0xABCDE);
    /// assert_eq!(id.timestamp(), 1);
    /// assert_eq!(id.random(), 0xABCDE);
    /// ```
    #[must_use]
    pub const fn pack(unix_ms: i64, random: u64) -> Self {
        let elapsed = unix_ms.wrapping_sub(Self::EPOCH_MS) as u64;
        Self::from_components(elapsed, random)
    }

    /// Checked variant of [`Self::pack`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `unix_ms` is before the xid
    /// epoch or past the last representable millisecond.
    pub fn try_from_unix_millis(unix_ms: i64, random: u64) -> Result<Self> {
        let elapsed = unix_ms
            .checked_sub(Self::EPOCH_MS)
            .and_then(|elapsed| u64::try_from(elapsed).ok())
            .filter(|&elapsed| elapsed <= Self::TIMESTAMP_MASK)
            .ok_or(Error::TimestampOutOfRange { unix_ms })?;
        Ok(Self::from_components(elapsed, random))
    }

    /// Packs `unix_ms` with a random value drawn from `rng`.
    #[must_use]
    pub fn from_unix_millis_and_rand<R>(unix_ms: i64, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        Self::pack(unix_ms, rng.rand())
    }

    /// Generates an xid from the system clock and the built-in
    /// [`ThreadRandom`] generator.
    ///
    /// [`ThreadRandom`]: crate::ThreadRandom
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        crate::XidGenerator::new(crate::SystemClock, crate::ThreadRandom).next_id()
    }

    /// Extracts the milliseconds elapsed since the xid epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the random field.
    #[must_use]
    pub const fn random(&self) -> u64 {
        (self.id >> Self::RANDOM_SHIFT) & Self::RANDOM_MASK
    }

    /// Returns the embedded time as milliseconds since 1970-01-01 UTC.
    #[must_use]
    pub const fn unix_millis(&self) -> i64 {
        // The timestamp field is at most 44 bits, so this cannot overflow.
        Self::EPOCH_MS + self.timestamp() as i64
    }

    /// Returns the embedded time as a UTC [`jiff::Timestamp`] with
    /// millisecond precision.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn timepoint(&self) -> jiff::Timestamp {
        jiff::Timestamp::from_millisecond(self.unix_millis())
            .expect("44-bit xid timestamps are within jiff's supported range")
    }

    /// Returns the maximum representable timestamp field.
    #[must_use]
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    /// Returns the maximum representable random field.
    #[must_use]
    pub const fn max_random() -> u64 {
        Self::RANDOM_MASK
    }

    /// Converts this type into its raw type representation
    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Converts a raw type into this type
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns the 11 character Base58 encoding of this xid.
    #[must_use]
    pub fn encode(&self) -> Base58Formatter {
        base58::encode(self.id)
    }

    /// Decodes an 11 character Base58 string into an xid.
    ///
    /// # Errors
    ///
    /// See [`base58::decode`].
    pub fn decode(s: impl AsRef<str>) -> Result<Self, Base58Error> {
        base58::decode(s).map(Self::from_raw)
    }
}

impl From<u64> for Xid {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Xid> for u64 {
    fn from(id: Xid) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode().fmt(f)
    }
}

impl fmt::Debug for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Xid");
        dbg.field("id", &format_args!("{} ({})", self.id, self.encode()));
        dbg.field("timestamp", &format_args!("{} (0x{:x})", self.timestamp(), self.timestamp()));
        dbg.field("random", &format_args!("{} (0x{:x})", self.random(), self.random()));
        dbg.finish()
    }
}

impl PartialEq<str> for Xid {
    fn eq(&self, other: &str) -> bool {
        self.encode() == *other
    }
}

impl PartialEq<&str> for Xid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl core::convert::TryFrom<&str> for Xid {
    type Error = Base58Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::decode(s)
    }
}

impl core::str::FromStr for Xid {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
