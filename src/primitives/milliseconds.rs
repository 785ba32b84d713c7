use std::time::Duration;

/// A duration measured in milliseconds, e.g. a connection idle timeout.
///
/// On the wire this is a plain `uint`; the application-facing type wraps a
/// [`Duration`] so callers never deal in raw milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Milliseconds(Duration);

impl Milliseconds {
    /// Creates a new [`Milliseconds`] from a millisecond count
    pub fn from_millis(millis: u32) -> Self {
        Self(Duration::from_millis(millis as u64))
    }

    /// Get the duration as whole milliseconds, truncating any sub-millisecond
    /// part
    pub fn as_millis(&self) -> u32 {
        self.0.as_millis() as u32
    }

    /// Get the inner [`Duration`]
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for Milliseconds {
    fn from(val: Duration) -> Self {
        Self(val)
    }
}

impl From<Milliseconds> for Duration {
    fn from(val: Milliseconds) -> Self {
        val.0
    }
}
