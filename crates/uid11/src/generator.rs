#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Base58Formatter, RandSource, SystemClock, ThreadRandom, TimeSource, Xid};

/// A stateless xid generator suitable for multi-threaded environments.
///
/// Each call reads the time source once and draws one random value; nothing
/// is remembered between calls, so the generator can be shared freely.
///
/// ## Features
/// - ✅ Thread-safe (when the sources are)
/// - ✅ Probabilistically unique (20 random bits per millisecond)
/// - ✅ Time-ordered across milliseconds, random order within one
///
/// The sources are generic so tests can pin the clock and the entropy. The
/// [`Default`] generator uses [`SystemClock`] and [`ThreadRandom`].
///
/// # Example
/// ```
/// use uid11::{TimeSource, RandSource, Xid, XidGenerator};
///
/// struct FixedTime;
/// impl TimeSource<i64> for FixedTime {
///     fn current_millis(&self) -> i64 {
///         Xid::EPOCH_MS + 5
///     }
/// }
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         7
///     }
/// }
///
/// let generator = XidGenerator::new(FixedTime, FixedRand);
/// assert_eq!(generator.next_id(), Xid::from_components(5, 7));
/// ```
#[derive(Clone, Debug)]
pub struct XidGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource<i64>,
    R: RandSource<u64>,
{
    time: T,
    rng: R,
}

impl<T, R> XidGenerator<T, R>
where
    T: TimeSource<i64>,
    R: RandSource<u64>,
{
    /// Creates a new [`XidGenerator`] with the provided time source and RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] returning Unix milliseconds
    /// - `rng`: A [`RandSource`] used to generate random bits
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new xid.
    ///
    /// The clock is not required to be monotonic: an earlier reading simply
    /// produces a smaller id.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> Xid {
        Xid::pack(self.time.current_millis(), self.rng.rand())
    }

    /// Generates a new xid and returns its raw `u64`.
    pub fn next_raw(&self) -> u64 {
        self.next_id().to_raw()
    }

    /// Generates a new xid and returns its Base58 encoding.
    pub fn next_string(&self) -> Base58Formatter {
        self.next_id().encode()
    }
}

impl Default for XidGenerator<SystemClock, ThreadRandom> {
    fn default() -> Self {
        Self::new(SystemClock, ThreadRandom)
    }
}
