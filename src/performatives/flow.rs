use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{Fields, Handle, SequenceNo, TransferNumber};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::read::Read;
use crate::write::Write;

/// 2.7.4 Flow
///
/// Update link state.
/// <type name="flow" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:flow:list" code="0x00000000:0x00000013"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flow {
    /// <field name="next-incoming-id" type="transfer-number"/>
    pub next_incoming_id: Option<TransferNumber>,

    /// <field name="incoming-window" type="uint" mandatory="true"/>
    pub incoming_window: u32,

    /// <field name="next-outgoing-id" type="transfer-number" mandatory="true"/>
    pub next_outgoing_id: TransferNumber,

    /// <field name="outgoing-window" type="uint" mandatory="true"/>
    pub outgoing_window: u32,

    /// <field name="handle" type="handle"/>
    pub handle: Option<Handle>,

    /// <field name="delivery-count" type="sequence-no"/>
    pub delivery_count: Option<SequenceNo>,

    /// <field name="link-credit" type="uint"/>
    pub link_credit: Option<u32>,

    /// <field name="available" type="uint"/>
    pub available: Option<u32>,

    /// <field name="drain" type="boolean" default="false"/>
    pub drain: bool,

    /// <field name="echo" type="boolean" default="false"/>
    pub echo: bool,

    /// <field name="properties" type="fields"/>
    pub properties: Option<Fields>,
}

impl Encode for Flow {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Flow,
            &[
                EncodeField::option(&self.next_incoming_id),
                EncodeField::value(&self.incoming_window),
                EncodeField::value(&self.next_outgoing_id),
                EncodeField::value(&self.outgoing_window),
                EncodeField::option(&self.handle),
                EncodeField::option(&self.delivery_count),
                EncodeField::option(&self.link_credit),
                EncodeField::option(&self.available),
                EncodeField::omit_if(&self.drain, !self.drain),
                EncodeField::omit_if(&self.echo, !self.echo),
                EncodeField::option(&self.properties),
            ],
        )
    }
}

impl Decode for Flow {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Flow,
            &mut [
                DecodeField::value(&mut self.next_incoming_id),
                DecodeField::required(&mut self.incoming_window, "incoming-window"),
                DecodeField::required(&mut self.next_outgoing_id, "next-outgoing-id"),
                DecodeField::required(&mut self.outgoing_window, "outgoing-window"),
                DecodeField::value(&mut self.handle),
                DecodeField::value(&mut self.delivery_count),
                DecodeField::value(&mut self.link_credit),
                DecodeField::value(&mut self.available),
                DecodeField::value(&mut self.drain),
                DecodeField::value(&mut self.echo),
                DecodeField::value(&mut self.properties),
            ],
        )
    }
}
