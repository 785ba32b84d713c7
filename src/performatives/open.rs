use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::Fields;
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::primitives::{Milliseconds, Symbol};
use crate::read::Read;
use crate::write::Write;

/// 2.7.1 Open
///
/// Negotiate connection parameters.
/// <type name="open" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:open:list" code="0x00000000:0x00000010"/>
/// </type>
#[derive(Debug, Clone, PartialEq)]
pub struct Open {
    /// <field name="container-id" type="string" mandatory="true"/>
    pub container_id: String,

    /// <field name="hostname" type="string"/>
    pub hostname: Option<String>,

    /// <field name="max-frame-size" type="uint" default="4294967295"/>
    pub max_frame_size: u32,

    /// <field name="channel-max" type="ushort" default="65535"/>
    pub channel_max: u16,

    /// <field name="idle-time-out" type="milliseconds"/>
    pub idle_time_out: Option<Milliseconds>,

    /// <field name="outgoing-locales" type="ietf-language-tag" multiple="true"/>
    pub outgoing_locales: Option<Vec<Symbol>>,

    /// <field name="incoming-locales" type="ietf-language-tag" multiple="true"/>
    pub incoming_locales: Option<Vec<Symbol>>,

    /// <field name="offered-capabilities" type="symbol" multiple="true"/>
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// <field name="desired-capabilities" type="symbol" multiple="true"/>
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// <field name="properties" type="fields"/>
    pub properties: Option<Fields>,
}

impl Default for Open {
    fn default() -> Self {
        Self {
            container_id: String::new(),
            hostname: None,
            max_frame_size: u32::MAX,
            channel_max: u16::MAX,
            idle_time_out: None,
            outgoing_locales: None,
            incoming_locales: None,
            offered_capabilities: None,
            desired_capabilities: None,
            properties: None,
        }
    }
}

impl Encode for Open {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Open,
            &[
                EncodeField::value(&self.container_id),
                EncodeField::option(&self.hostname),
                EncodeField::omit_if(&self.max_frame_size, self.max_frame_size == u32::MAX),
                EncodeField::omit_if(&self.channel_max, self.channel_max == u16::MAX),
                EncodeField::option(&self.idle_time_out),
                EncodeField::option(&self.outgoing_locales),
                EncodeField::option(&self.incoming_locales),
                EncodeField::option(&self.offered_capabilities),
                EncodeField::option(&self.desired_capabilities),
                EncodeField::option(&self.properties),
            ],
        )
    }
}

impl Decode for Open {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Open,
            &mut [
                DecodeField::required(&mut self.container_id, "container-id"),
                DecodeField::value(&mut self.hostname),
                DecodeField::default_uint(&mut self.max_frame_size, u32::MAX),
                DecodeField::default_ushort(&mut self.channel_max, u16::MAX),
                DecodeField::value(&mut self.idle_time_out),
                DecodeField::value(&mut self.outgoing_locales),
                DecodeField::value(&mut self.incoming_locales),
                DecodeField::value(&mut self.offered_capabilities),
                DecodeField::value(&mut self.desired_capabilities),
                DecodeField::value(&mut self.properties),
            ],
        )
    }
}
