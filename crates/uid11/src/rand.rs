/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// Only the low bits an ID layout needs are kept, so implementations should
/// return uniformly distributed values across the whole type. Production
/// sources must be cryptographically strong to keep IDs unguessable within a
/// millisecond.
///
/// # Example
/// ```
/// use uid11::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

/// Returns 64 cryptographically strong random bits.
///
/// This is a plain random identifier with no time component; it does not
/// sort by creation time.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn random() -> u64 {
    crate::ThreadRandom.rand()
}

/// Returns the Base58 encoding of [`random`].
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[must_use]
pub fn random_string() -> alloc::string::String {
    crate::base58::encode(random()).to_string()
}
