//! Value type for dynamically decoded AMQP data

use bytes::Bytes;

use crate::primitives::Timestamp;

/// A value decoded without knowing its concrete type up front, e.g. a map
/// entry in application properties.
///
/// Dynamic decode widens each integer family to its 64-bit member and folds
/// symbols into strings, so the variants here are the result types of
/// [`read_any`](crate::decode::read_any) rather than one variant per wire
/// code. The type is hashable so it can key a map whose key type is not
/// known at the call site. Floats, decimals, char, UUID, and nested
/// compounds are not decoded dynamically and have no variants.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// Indicates an empty value
    ///
    /// encoding code = 0x40
    Null,

    /// Represents a true or false value
    ///
    /// encoding code = 0x56, 0x41 ("true"), or 0x42 ("false")
    Bool(bool),

    /// Any member of the unsigned integer family, widened
    ///
    /// encoding codes = 0x50, 0x60, 0x70, 0x52, 0x43, 0x80, 0x53, 0x44
    Ulong(u64),

    /// Any member of the signed integer family, widened
    ///
    /// encoding codes = 0x51, 0x61, 0x71, 0x54, 0x81, 0x55
    Long(i64),

    /// Variable-length binary data
    ///
    /// encoding code = 0xa0 or 0xb0
    Binary(Bytes),

    /// A UTF-8 string or an ASCII symbol
    ///
    /// encoding codes = 0xa1, 0xb1, 0xa3, 0xb3
    String(String),

    /// An absolute point in time
    ///
    /// encoding code = 0x83
    Timestamp(Timestamp),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Bool(val)
    }
}

impl From<u64> for Value {
    fn from(val: u64) -> Self {
        Self::Ulong(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Self::Long(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Self::String(val.into())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Self::String(val)
    }
}

impl From<Timestamp> for Value {
    fn from(val: Timestamp) -> Self {
        Self::Timestamp(val)
    }
}

impl From<Bytes> for Value {
    fn from(val: Bytes) -> Self {
        Self::Binary(val)
    }
}
