/// An absolute point in time
///
/// encoding name = "ms64", code = 0x83,
/// category = fixed, width = 8
/// label = "64-bit two's-complement integer representing milliseconds since the unix epoch"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a new [`Timestamp`] from milliseconds
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    /// Get the timestamp value as milliseconds
    pub fn milliseconds(&self) -> i64 {
        self.0
    }

    /// Consume the wrapper into the inner i64
    pub fn into_inner(self) -> i64 {
        self.0
    }

    /// Split into whole seconds since the epoch and the sub-second
    /// nanosecond remainder, normalized so the remainder is non-negative
    /// for timestamps before the epoch too.
    pub fn to_parts(&self) -> (i64, u32) {
        let seconds = self.0.div_euclid(1000);
        let nanos = self.0.rem_euclid(1000) as u32 * 1_000_000;
        (seconds, nanos)
    }
}

impl From<i64> for Timestamp {
    fn from(val: i64) -> Self {
        Self(val)
    }
}
