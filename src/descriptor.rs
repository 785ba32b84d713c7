//! Descriptor codes of described composite types

use std::convert::TryFrom;
use std::fmt::Display;

use crate::error::Error;

/// Numeric descriptor of a described composite type.
///
/// A descriptor appears only after the `0x00` prefix of a described type, so
/// these values share numeric space with [`EncodingCodes`] without ambiguity.
///
/// [`EncodingCodes`]: crate::format_code::EncodingCodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum DescriptorCode {
    // Protocol control
    Open = 0x10,
    Begin = 0x11,
    Attach = 0x12,
    Flow = 0x13,
    Transfer = 0x14,
    Disposition = 0x15,
    Detach = 0x16,
    End = 0x17,
    Close = 0x18,

    // Link endpoints and errors
    Error = 0x1d,
    Source = 0x28,
    Target = 0x29,

    // Delivery states
    Received = 0x23,
    Accepted = 0x24,
    Rejected = 0x25,
    Released = 0x26,
    Modified = 0x27,

    // Message sections
    Header = 0x70,
    DeliveryAnnotations = 0x71,
    MessageAnnotations = 0x72,
    Properties = 0x73,
    ApplicationProperties = 0x74,
    Data = 0x75,
    AmqpSequence = 0x76,
    AmqpValue = 0x77,
    Footer = 0x78,

    // SASL
    SaslMechanisms = 0x40,
    SaslInit = 0x41,
    SaslChallenge = 0x42,
    SaslResponse = 0x43,
    SaslOutcome = 0x44,
}

impl Display for DescriptorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}:0x{:x}", self, *self as u8)
    }
}

impl TryFrom<u64> for DescriptorCode {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Error> {
        let code = match value {
            0x10 => DescriptorCode::Open,
            0x11 => DescriptorCode::Begin,
            0x12 => DescriptorCode::Attach,
            0x13 => DescriptorCode::Flow,
            0x14 => DescriptorCode::Transfer,
            0x15 => DescriptorCode::Disposition,
            0x16 => DescriptorCode::Detach,
            0x17 => DescriptorCode::End,
            0x18 => DescriptorCode::Close,

            0x1d => DescriptorCode::Error,
            0x28 => DescriptorCode::Source,
            0x29 => DescriptorCode::Target,

            0x23 => DescriptorCode::Received,
            0x24 => DescriptorCode::Accepted,
            0x25 => DescriptorCode::Rejected,
            0x26 => DescriptorCode::Released,
            0x27 => DescriptorCode::Modified,

            0x70 => DescriptorCode::Header,
            0x71 => DescriptorCode::DeliveryAnnotations,
            0x72 => DescriptorCode::MessageAnnotations,
            0x73 => DescriptorCode::Properties,
            0x74 => DescriptorCode::ApplicationProperties,
            0x75 => DescriptorCode::Data,
            0x76 => DescriptorCode::AmqpSequence,
            0x77 => DescriptorCode::AmqpValue,
            0x78 => DescriptorCode::Footer,

            0x40 => DescriptorCode::SaslMechanisms,
            0x41 => DescriptorCode::SaslInit,
            0x42 => DescriptorCode::SaslChallenge,
            0x43 => DescriptorCode::SaslResponse,
            0x44 => DescriptorCode::SaslOutcome,

            _ => return Err(Error::Message(format!("unknown descriptor {:#04x}", value))),
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::DescriptorCode;

    #[test]
    fn try_from_round_trips_every_code() {
        for value in 0x00u64..=0xff {
            if let Ok(code) = DescriptorCode::try_from(value) {
                assert_eq!(code as u64, value);
            }
        }
    }

    #[test]
    fn unknown_descriptor_is_rejected() {
        assert!(DescriptorCode::try_from(0x19).is_err());
        assert!(DescriptorCode::try_from(0x100).is_err());
    }
}
