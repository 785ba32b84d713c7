use crate::composite::{
    decode_composite, encode_composite, peek_descriptor_code, DecodeField, EncodeField,
};
use crate::decode::Decode;
use crate::definitions::{self, Fields};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::read::Read;
use crate::write::Write;

/// 3.4.1 Received
///
/// <type name="received" class="composite" source="list" provides="delivery-state">
///     <descriptor name="amqp:received:list" code="0x00000000:0x00000023"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Received {
    /// <field name="section-number" type="uint" mandatory="true"/>
    pub section_number: u32,

    /// <field name="section-offset" type="ulong" mandatory="true"/>
    pub section_offset: u64,
}

impl Encode for Received {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Received,
            &[
                EncodeField::value(&self.section_number),
                EncodeField::value(&self.section_offset),
            ],
        )
    }
}

impl Decode for Received {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Received,
            &mut [
                DecodeField::required(&mut self.section_number, "section-number"),
                DecodeField::required(&mut self.section_offset, "section-offset"),
            ],
        )
    }
}

/// 3.4.2 Accepted
///
/// <type name="accepted" class="composite" source="list" provides="delivery-state, outcome">
///     <descriptor name="amqp:accepted:list" code="0x00000000:0x00000024"/>
/// </type>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accepted {}

impl Encode for Accepted {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(writer, DescriptorCode::Accepted, &[])
    }
}

impl Decode for Accepted {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(reader, DescriptorCode::Accepted, &mut [])
    }
}

/// 3.4.3 Rejected
///
/// <type name="rejected" class="composite" source="list" provides="delivery-state, outcome">
///     <descriptor name="amqp:rejected:list" code="0x00000000:0x00000025"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rejected {
    /// <field name="error" type="error"/>
    pub error: Option<definitions::Error>,
}

impl Encode for Rejected {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Rejected,
            &[EncodeField::option(&self.error)],
        )
    }
}

impl Decode for Rejected {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Rejected,
            &mut [DecodeField::value(&mut self.error)],
        )
    }
}

/// 3.4.4 Released
///
/// <type name="released" class="composite" source="list" provides="delivery-state, outcome">
///     <descriptor name="amqp:released:list" code="0x00000000:0x00000026"/>
/// </type>
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Released {}

impl Encode for Released {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(writer, DescriptorCode::Released, &[])
    }
}

impl Decode for Released {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(reader, DescriptorCode::Released, &mut [])
    }
}

/// 3.4.5 Modified
///
/// <type name="modified" class="composite" source="list" provides="delivery-state, outcome">
///     <descriptor name="amqp:modified:list" code="0x00000000:0x00000027"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modified {
    /// <field name="delivery-failed" type="boolean"/>
    pub delivery_failed: Option<bool>,

    /// <field name="undeliverable-here" type="boolean"/>
    pub undeliverable_here: Option<bool>,

    /// <field name="message-annotations" type="fields"/>
    pub message_annotations: Option<Fields>,
}

impl Encode for Modified {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Modified,
            &[
                EncodeField::option(&self.delivery_failed),
                EncodeField::option(&self.undeliverable_here),
                EncodeField::option(&self.message_annotations),
            ],
        )
    }
}

impl Decode for Modified {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Modified,
            &mut [
                DecodeField::value(&mut self.delivery_failed),
                DecodeField::value(&mut self.undeliverable_here),
                DecodeField::value(&mut self.message_annotations),
            ],
        )
    }
}

/// The state of a delivery at one of the link endpoints.
///
/// Which schema applies is only known once the descriptor has been seen, so
/// decoding peeks the descriptor before committing to a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryState {
    /// 3.4.1 Received
    Received(Received),
    /// 3.4.2 Accepted
    Accepted(Accepted),
    /// 3.4.3 Rejected
    Rejected(Rejected),
    /// 3.4.4 Released
    Released(Released),
    /// 3.4.5 Modified
    Modified(Modified),
}

impl Default for DeliveryState {
    fn default() -> Self {
        Self::Accepted(Accepted {})
    }
}

impl Encode for DeliveryState {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        match self {
            DeliveryState::Received(state) => state.encode(writer),
            DeliveryState::Accepted(state) => state.encode(writer),
            DeliveryState::Rejected(state) => state.encode(writer),
            DeliveryState::Released(state) => state.encode(writer),
            DeliveryState::Modified(state) => state.encode(writer),
        }
    }
}

impl Decode for DeliveryState {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let code = peek_descriptor_code(reader)?;
        *self = match DescriptorCode::try_from(code)? {
            DescriptorCode::Received => {
                let mut state = Received::default();
                state.decode(reader)?;
                DeliveryState::Received(state)
            }
            DescriptorCode::Accepted => {
                let mut state = Accepted::default();
                state.decode(reader)?;
                DeliveryState::Accepted(state)
            }
            DescriptorCode::Rejected => {
                let mut state = Rejected::default();
                state.decode(reader)?;
                DeliveryState::Rejected(state)
            }
            DescriptorCode::Released => {
                let mut state = Released::default();
                state.decode(reader)?;
                DeliveryState::Released(state)
            }
            DescriptorCode::Modified => {
                let mut state = Modified::default();
                state.decode(reader)?;
                DeliveryState::Modified(state)
            }
            other => {
                return Err(Error::Message(format!(
                    "{} does not provide a delivery state",
                    other
                )))
            }
        };
        Ok(())
    }
}

/// The subset of delivery states that terminate a delivery, usable as a
/// source's default outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 3.4.2 Accepted
    Accepted(Accepted),
    /// 3.4.3 Rejected
    Rejected(Rejected),
    /// 3.4.4 Released
    Released(Released),
    /// 3.4.5 Modified
    Modified(Modified),
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Accepted(Accepted {})
    }
}

impl Encode for Outcome {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        match self {
            Outcome::Accepted(outcome) => outcome.encode(writer),
            Outcome::Rejected(outcome) => outcome.encode(writer),
            Outcome::Released(outcome) => outcome.encode(writer),
            Outcome::Modified(outcome) => outcome.encode(writer),
        }
    }
}

impl Decode for Outcome {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let code = peek_descriptor_code(reader)?;
        *self = match DescriptorCode::try_from(code)? {
            DescriptorCode::Accepted => {
                let mut outcome = Accepted::default();
                outcome.decode(reader)?;
                Outcome::Accepted(outcome)
            }
            DescriptorCode::Rejected => {
                let mut outcome = Rejected::default();
                outcome.decode(reader)?;
                Outcome::Rejected(outcome)
            }
            DescriptorCode::Released => {
                let mut outcome = Released::default();
                outcome.decode(reader)?;
                Outcome::Released(outcome)
            }
            DescriptorCode::Modified => {
                let mut outcome = Modified::default();
                outcome.decode(reader)?;
                Outcome::Modified(outcome)
            }
            other => {
                return Err(Error::Message(format!(
                    "{} does not provide an outcome",
                    other
                )))
            }
        };
        Ok(())
    }
}
