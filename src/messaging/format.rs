use crate::composite::{
    decode_composite, decode_described, encode_composite, encode_described, DecodeField,
    EncodeField,
};
use crate::decode::Decode;
use crate::definitions::SequenceNo;
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::primitives::{Binary, Milliseconds, OrderedMap, Symbol, Timestamp};
use crate::read::Read;
use crate::value::Value;
use crate::write::Write;

use super::{Address, Annotations};

/// 3.2.1 Header
///
/// Transport headers for a message.
/// <type name="header" class="composite" source="list" provides="section">
///     <descriptor name="amqp:header:list" code="0x00000000:0x00000070"/>
/// </type>
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// <field name="durable" type="boolean" default="false"/>
    pub durable: bool,

    /// <field name="priority" type="ubyte" default="4"/>
    pub priority: u8,

    /// <field name="ttl" type="milliseconds"/>
    pub ttl: Option<Milliseconds>,

    /// <field name="first-acquirer" type="boolean" default="false"/>
    pub first_acquirer: bool,

    /// <field name="delivery-count" type="uint" default="0"/>
    pub delivery_count: u32,
}

/// Default priority of a message
pub const DEFAULT_PRIORITY: u8 = 4;

impl Default for Header {
    fn default() -> Self {
        Self {
            durable: false,
            priority: DEFAULT_PRIORITY,
            ttl: None,
            first_acquirer: false,
            delivery_count: 0,
        }
    }
}

impl Encode for Header {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Header,
            &[
                EncodeField::omit_if(&self.durable, !self.durable),
                EncodeField::omit_if(&self.priority, self.priority == DEFAULT_PRIORITY),
                EncodeField::option(&self.ttl),
                EncodeField::omit_if(&self.first_acquirer, !self.first_acquirer),
                EncodeField::omit_if(&self.delivery_count, self.delivery_count == 0),
            ],
        )
    }
}

impl Decode for Header {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Header,
            &mut [
                DecodeField::value(&mut self.durable),
                DecodeField::default_ubyte(&mut self.priority, DEFAULT_PRIORITY),
                DecodeField::value(&mut self.ttl),
                DecodeField::value(&mut self.first_acquirer),
                DecodeField::default_uint(&mut self.delivery_count, 0),
            ],
        )
    }
}

/// 3.2.2 Delivery Annotations
///
/// <type name="delivery-annotations" class="restricted" source="annotations" provides="section">
///     <descriptor name="amqp:delivery-annotations:map" code="0x00000000:0x00000071"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryAnnotations(pub Annotations);

impl Encode for DeliveryAnnotations {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::DeliveryAnnotations, &self.0)
    }
}

impl Decode for DeliveryAnnotations {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::DeliveryAnnotations, &mut self.0)
    }
}

/// 3.2.3 Message Annotations
///
/// <type name="message-annotations" class="restricted" source="annotations" provides="section">
///     <descriptor name="amqp:message-annotations:map" code="0x00000000:0x00000072"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageAnnotations(pub Annotations);

impl Encode for MessageAnnotations {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::MessageAnnotations, &self.0)
    }
}

impl Decode for MessageAnnotations {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::MessageAnnotations, &mut self.0)
    }
}

/// 3.2.4 Properties
///
/// Immutable properties of the message.
/// <type name="properties" class="composite" source="list" provides="section">
///     <descriptor name="amqp:properties:list" code="0x00000000:0x00000073"/>
/// </type>
///
/// The message-id and correlation-id fields admit several wire types, so
/// they decode dynamically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    /// <field name="message-id" type="*" requires="message-id"/>
    pub message_id: Option<Value>,

    /// <field name="user-id" type="binary"/>
    pub user_id: Option<Binary>,

    /// <field name="to" type="*" requires="address"/>
    pub to: Option<Address>,

    /// <field name="subject" type="string"/>
    pub subject: Option<String>,

    /// <field name="reply-to" type="*" requires="address"/>
    pub reply_to: Option<Address>,

    /// <field name="correlation-id" type="*" requires="message-id"/>
    pub correlation_id: Option<Value>,

    /// <field name="content-type" type="symbol"/>
    pub content_type: Option<Symbol>,

    /// <field name="content-encoding" type="symbol"/>
    pub content_encoding: Option<Symbol>,

    /// <field name="absolute-expiry-time" type="timestamp"/>
    pub absolute_expiry_time: Option<Timestamp>,

    /// <field name="creation-time" type="timestamp"/>
    pub creation_time: Option<Timestamp>,

    /// <field name="group-id" type="string"/>
    pub group_id: Option<String>,

    /// <field name="group-sequence" type="sequence-no"/>
    pub group_sequence: Option<SequenceNo>,

    /// <field name="reply-to-group-id" type="string"/>
    pub reply_to_group_id: Option<String>,
}

impl Encode for Properties {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Properties,
            &[
                EncodeField::option(&self.message_id),
                EncodeField::option(&self.user_id),
                EncodeField::option(&self.to),
                EncodeField::option(&self.subject),
                EncodeField::option(&self.reply_to),
                EncodeField::option(&self.correlation_id),
                EncodeField::option(&self.content_type),
                EncodeField::option(&self.content_encoding),
                EncodeField::option(&self.absolute_expiry_time),
                EncodeField::option(&self.creation_time),
                EncodeField::option(&self.group_id),
                EncodeField::option(&self.group_sequence),
                EncodeField::option(&self.reply_to_group_id),
            ],
        )
    }
}

impl Decode for Properties {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Properties,
            &mut [
                DecodeField::value(&mut self.message_id),
                DecodeField::value(&mut self.user_id),
                DecodeField::value(&mut self.to),
                DecodeField::value(&mut self.subject),
                DecodeField::value(&mut self.reply_to),
                DecodeField::value(&mut self.correlation_id),
                DecodeField::value(&mut self.content_type),
                DecodeField::value(&mut self.content_encoding),
                DecodeField::value(&mut self.absolute_expiry_time),
                DecodeField::value(&mut self.creation_time),
                DecodeField::value(&mut self.group_id),
                DecodeField::value(&mut self.group_sequence),
                DecodeField::value(&mut self.reply_to_group_id),
            ],
        )
    }
}

/// 3.2.5 Application Properties
///
/// <type name="application-properties" class="restricted" source="map" provides="section">
///     <descriptor name="amqp:application-properties:map" code="0x00000000:0x00000074"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationProperties(pub OrderedMap<String, Value>);

impl Encode for ApplicationProperties {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::ApplicationProperties, &self.0)
    }
}

impl Decode for ApplicationProperties {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::ApplicationProperties, &mut self.0)
    }
}

/// 3.2.6 Data
///
/// <type name="data" class="restricted" source="binary" provides="section">
///     <descriptor name="amqp:data:binary" code="0x00000000:0x00000075"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(pub Binary);

impl Encode for Data {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::Data, &self.0)
    }
}

impl Decode for Data {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::Data, &mut self.0)
    }
}

/// 3.2.7 AMQP Sequence
///
/// <type name="amqp-sequence" class="restricted" source="list" provides="section">
///     <descriptor name="amqp:amqp-sequence:list" code="0x00000000:0x00000076"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmqpSequence(pub Vec<Value>);

impl Encode for AmqpSequence {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::AmqpSequence, &self.0)
    }
}

impl Decode for AmqpSequence {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::AmqpSequence, &mut self.0)
    }
}

/// 3.2.8 AMQP Value
///
/// <type name="amqp-value" class="restricted" source="*" provides="section">
///     <descriptor name="amqp:amqp-value:*" code="0x00000000:0x00000077"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmqpValue(pub Value);

impl Encode for AmqpValue {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::AmqpValue, &self.0)
    }
}

impl Decode for AmqpValue {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::AmqpValue, &mut self.0)
    }
}

/// 3.2.9 Footer
///
/// <type name="footer" class="restricted" source="annotations" provides="section">
///     <descriptor name="amqp:footer:map" code="0x00000000:0x00000078"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer(pub Annotations);

impl Encode for Footer {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_described(writer, DescriptorCode::Footer, &self.0)
    }
}

impl Decode for Footer {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_described(reader, DescriptorCode::Footer, &mut self.0)
    }
}
