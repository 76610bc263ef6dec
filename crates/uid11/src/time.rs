use core::time::Duration;

/// Xid epoch: Friday, November 11, 2011 11:11:11.111 UTC
pub const XID_EPOCH: Duration = Duration::from_millis(1_321_009_871_111);

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// The timestamp type `T` is generic (the xid generator uses `i64`), and the
/// unit is **milliseconds since 1970-01-01 UTC**. Sources may return values
/// before the xid epoch; the generator wraps those rather than failing.
///
/// # Example
///
/// ```
/// use uid11::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<i64> for FixedTime {
///     fn current_millis(&self) -> i64 {
///         1_700_000_000_000
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1_700_000_000_000);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}

/// The system wall clock, read through [`jiff::Timestamp::now`].
///
/// This is a zero-sized handle, so it is `Send + Sync` and may be shared or
/// copied freely across threads.
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource<i64> for SystemClock {
    fn current_millis(&self) -> i64 {
        jiff::Timestamp::now().as_millisecond()
    }
}
