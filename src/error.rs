//! Custom error

use crate::descriptor::DescriptorCode;

/// Encoding/decoding errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Custom error with message
    #[error("Message {0}")]
    Message(String),

    /// IO error
    #[error("IO {0}")]
    Io(std::io::Error),

    /// Invalid format code
    #[error("Invalid format code")]
    InvalidFormatCode,

    /// Invalid value
    #[error("Invalid value")]
    InvalidValue,

    /// Length is invalid
    #[error("Invalid length")]
    InvalidLength,

    /// A bounded reader was asked to go past its declared byte count
    #[error("Limit reached")]
    LimitReached,

    /// Value too large for the widest size variant
    #[error("Too long")]
    TooLong,

    /// Found invalid UTF-8 encoding
    #[error("Invalid UTF-8 encoding")]
    InvalidUtf8Encoding,

    /// Symbols are restricted to ASCII
    #[error("Symbol is not ASCII")]
    NonAsciiSymbol,

    /// The byte opening a described type was neither `0x00` nor `Null`
    #[error("Invalid composite header {0:#04x}")]
    InvalidCompositeHeader(u8),

    /// The descriptor does not name the expected composite
    #[error("Invalid descriptor {found:#04x} for {expected}")]
    InvalidDescriptor {
        /// The descriptor the schema expects
        expected: DescriptorCode,
        /// The descriptor found on the wire
        found: u64,
    },

    /// The peer sent more fields than the schema knows
    #[error("Invalid field count {count} for {descriptor}")]
    InvalidFieldCount {
        /// Field count declared in the list body
        count: usize,
        /// The composite being decoded
        descriptor: DescriptorCode,
    },

    /// A composite field failed to decode
    #[error("Unmarshaling field {index}: {source}")]
    Field {
        /// Position of the field in the list body
        index: usize,
        /// The underlying failure
        source: Box<Error>,
    },

    /// A mandatory field was null or absent
    #[error("{0} is required")]
    Required(&'static str),

    /// No encode/decode path exists for the requested type
    #[error("Not implemented")]
    NotImplemented,

    /// Internal marker raised when a reader meets the `Null` format code.
    ///
    /// [`decode`](crate::decode::decode) converts it into a boolean `null`
    /// return and the composite layer converts it into null-handler calls;
    /// it is never returned to user code.
    #[error("Null")]
    Null,
}

impl Error {
    pub(crate) fn unexpected_eof() -> Self {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "unexpected end of bytes");
        Self::Io(io_err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Error::InvalidUtf8Encoding
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(_: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8Encoding
    }
}
