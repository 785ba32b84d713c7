//! Types defined in AMQP 1.0 specification Part 2.8: Definitions

use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::{read_bool, read_uint, Decode};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error;
use crate::primitives::{Binary, OrderedMap, Symbol};
use crate::read::Read;
use crate::value::Value;
use crate::write::Write;

/// 2.8.4 Handle
pub type Handle = u32;

/// 2.8.5 Seconds
pub type Seconds = u32;

/// 2.8.7 Delivery Tag
/// A delivery-tag can be up to 32 octets of binary data
pub type DeliveryTag = Binary;

/// 2.8.8 Delivery Number
pub type DeliveryNumber = SequenceNo;

/// 2.8.9 Transfer Number
pub type TransferNumber = SequenceNo;

/// 2.8.10 Sequence No
pub type SequenceNo = u32;

/// 2.8.11 Message Format
pub type MessageFormat = u32;

/// 2.8.12 IETF Language Tag
pub type IetfLanguageTag = Symbol;

/// 2.8.13 Fields
pub type Fields = OrderedMap<Symbol, Value>;

/// 2.8.1 Role
///
/// On the wire a role is a boolean: `false` for the sender, `true` for the
/// receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    /// The endpoint produces deliveries
    #[default]
    Sender,
    /// The endpoint consumes deliveries
    Receiver,
}

impl Encode for Role {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), error::Error> {
        matches!(self, Role::Receiver).encode(writer)
    }
}

impl Decode for Role {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), error::Error> {
        *self = match read_bool(reader)? {
            false => Role::Sender,
            true => Role::Receiver,
        };
        Ok(())
    }
}

/// 2.8.2 Sender Settle Mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SenderSettleMode {
    /// The sender will send all deliveries initially unsettled
    Unsettled = 0,
    /// The sender will send all deliveries settled to the receiver
    Settled = 1,
    /// The sender may send a mixture
    #[default]
    Mixed = 2,
}

impl Encode for SenderSettleMode {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), error::Error> {
        (*self as u8).encode(writer)
    }
}

impl Decode for SenderSettleMode {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), error::Error> {
        *self = match read_uint(reader)? {
            0 => SenderSettleMode::Unsettled,
            1 => SenderSettleMode::Settled,
            2 => SenderSettleMode::Mixed,
            _ => return Err(error::Error::InvalidValue),
        };
        Ok(())
    }
}

/// 2.8.3 Receiver Settle Mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ReceiverSettleMode {
    /// The receiver settles first
    #[default]
    First = 0,
    /// The receiver settles after the sender settles
    Second = 1,
}

impl Encode for ReceiverSettleMode {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), error::Error> {
        (*self as u8).encode(writer)
    }
}

impl Decode for ReceiverSettleMode {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), error::Error> {
        *self = match read_uint(reader)? {
            0 => ReceiverSettleMode::First,
            1 => ReceiverSettleMode::Second,
            _ => return Err(error::Error::InvalidValue),
        };
        Ok(())
    }
}

/// 2.8.14 Error
///
/// <type name="error" class="composite" source="list">
///     <descriptor name="amqp:error:list" code="0x00000000:0x0000001d"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Error {
    /// <field name="condition" type="symbol" requires="error-condition" mandatory="true"/>
    pub condition: Symbol,

    /// <field name="description" type="string"/>
    pub description: Option<String>,

    /// <field name="info" type="fields"/>
    pub info: Option<Fields>,
}

impl Error {
    /// Creates a new [`Error`]
    pub fn new(
        condition: impl Into<Symbol>,
        description: Option<String>,
        info: Option<Fields>,
    ) -> Self {
        Self {
            condition: condition.into(),
            description,
            info,
        }
    }
}

impl Encode for Error {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), error::Error> {
        encode_composite(
            writer,
            DescriptorCode::Error,
            &[
                EncodeField::value(&self.condition),
                EncodeField::option(&self.description),
                EncodeField::option(&self.info),
            ],
        )
    }
}

impl Decode for Error {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), error::Error> {
        decode_composite(
            reader,
            DescriptorCode::Error,
            &mut [
                DecodeField::required(&mut self.condition, "condition"),
                DecodeField::value(&mut self.description),
                DecodeField::value(&mut self.info),
            ],
        )
    }
}

/// 2.8.15 Constant definitions
pub mod constant {
    /// Major protocol version
    pub const MAJOR: u8 = 1;
    /// Minor protocol version
    pub const MINOR: u8 = 0;
    /// Protocol revision
    pub const REVISION: u8 = 0;
    /// The IANA assigned port number for AMQP
    pub const PORT: u16 = 5672;
    /// The IANA assigned port number for secure AMQP (amqps)
    pub const SECURE_PORT: u16 = 5671;
    /// The smallest max-frame-size a peer is allowed to demand
    pub const MIN_MAX_FRAME_SIZE: u32 = 512;
}

#[cfg(test)]
mod tests {
    use crate::decode::from_slice;
    use crate::encode::to_vec;

    use super::{Error, Role};

    #[test]
    fn role_encodes_as_a_boolean() {
        assert_eq!(to_vec(&Role::Sender).unwrap(), vec![0x42]);
        assert_eq!(to_vec(&Role::Receiver).unwrap(), vec![0x41]);
    }

    #[test]
    fn error_round_trips() {
        let expected = Error::new(
            "amqp:decode-error",
            Some("failed to parse the attach frame".into()),
            None,
        );
        let buf = to_vec(&expected).unwrap();
        let decoded: Error = from_slice(&buf).unwrap().unwrap();
        assert_eq!(decoded, expected);
    }
}
