use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{Fields, Handle, TransferNumber};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::primitives::Symbol;
use crate::read::Read;
use crate::write::Write;

/// 2.7.2 Begin
///
/// Begin a session on a channel.
/// <type name="begin" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:begin:list" code="0x00000000:0x00000011"/>
/// </type>
#[derive(Debug, Clone, PartialEq)]
pub struct Begin {
    /// <field name="remote-channel" type="ushort"/>
    pub remote_channel: Option<u16>,

    /// <field name="next-outgoing-id" type="transfer-number" mandatory="true"/>
    pub next_outgoing_id: TransferNumber,

    /// <field name="incoming-window" type="uint" mandatory="true"/>
    pub incoming_window: u32,

    /// <field name="outgoing-window" type="uint" mandatory="true"/>
    pub outgoing_window: u32,

    /// <field name="handle-max" type="handle" default="4294967295"/>
    pub handle_max: Handle,

    /// <field name="offered-capabilities" type="symbol" multiple="true"/>
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// <field name="desired-capabilities" type="symbol" multiple="true"/>
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// <field name="properties" type="fields"/>
    pub properties: Option<Fields>,
}

impl Default for Begin {
    fn default() -> Self {
        Self {
            remote_channel: None,
            next_outgoing_id: 0,
            incoming_window: 0,
            outgoing_window: 0,
            handle_max: u32::MAX,
            offered_capabilities: None,
            desired_capabilities: None,
            properties: None,
        }
    }
}

impl Encode for Begin {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Begin,
            &[
                EncodeField::option(&self.remote_channel),
                EncodeField::value(&self.next_outgoing_id),
                EncodeField::value(&self.incoming_window),
                EncodeField::value(&self.outgoing_window),
                EncodeField::omit_if(&self.handle_max, self.handle_max == u32::MAX),
                EncodeField::option(&self.offered_capabilities),
                EncodeField::option(&self.desired_capabilities),
                EncodeField::option(&self.properties),
            ],
        )
    }
}

impl Decode for Begin {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Begin,
            &mut [
                DecodeField::value(&mut self.remote_channel),
                DecodeField::required(&mut self.next_outgoing_id, "next-outgoing-id"),
                DecodeField::required(&mut self.incoming_window, "incoming-window"),
                DecodeField::required(&mut self.outgoing_window, "outgoing-window"),
                DecodeField::default_uint(&mut self.handle_max, u32::MAX),
                DecodeField::value(&mut self.offered_capabilities),
                DecodeField::value(&mut self.desired_capabilities),
                DecodeField::value(&mut self.properties),
            ],
        )
    }
}
