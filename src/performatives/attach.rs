use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{
    Fields, Handle, ReceiverSettleMode, Role, SenderSettleMode, SequenceNo,
};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::messaging::{DeliveryState, Source, Target};
use crate::primitives::{OrderedMap, Symbol};
use crate::read::Read;
use crate::value::Value;
use crate::write::Write;

/// 2.7.3 Attach
///
/// Attach a link to a session.
/// <type name="attach" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:attach:list" code="0x00000000:0x00000012"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attach {
    /// <field name="name" type="string" mandatory="true"/>
    pub name: String,

    /// <field name="handle" type="handle" mandatory="true"/>
    pub handle: Handle,

    /// <field name="role" type="role" mandatory="true"/>
    pub role: Role,

    /// <field name="snd-settle-mode" type="sender-settle-mode" default="mixed"/>
    pub snd_settle_mode: SenderSettleMode,

    /// <field name="rcv-settle-mode" type="receiver-settle-mode" default="first"/>
    pub rcv_settle_mode: ReceiverSettleMode,

    /// <field name="source" type="*" requires="source"/>
    pub source: Option<Source>,

    /// <field name="target" type="*" requires="target"/>
    pub target: Option<Target>,

    /// <field name="unsettled" type="map"/>
    ///
    /// Keyed by delivery tag; absent when the link has no unsettled
    /// deliveries.
    pub unsettled: Option<OrderedMap<Value, DeliveryState>>,

    /// <field name="incomplete-unsettled" type="boolean" default="false"/>
    pub incomplete_unsettled: bool,

    /// <field name="initial-delivery-count" type="sequence-no"/>
    ///
    /// This MUST NOT be null if role is sender, and it is ignored if the
    /// role is receiver.
    pub initial_delivery_count: Option<SequenceNo>,

    /// <field name="max-message-size" type="ulong"/>
    pub max_message_size: Option<u64>,

    /// <field name="offered-capabilities" type="symbol" multiple="true"/>
    pub offered_capabilities: Option<Vec<Symbol>>,

    /// <field name="desired-capabilities" type="symbol" multiple="true"/>
    pub desired_capabilities: Option<Vec<Symbol>>,

    /// <field name="properties" type="fields"/>
    pub properties: Option<Fields>,
}

impl Encode for Attach {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Attach,
            &[
                EncodeField::value(&self.name),
                EncodeField::value(&self.handle),
                EncodeField::value(&self.role),
                EncodeField::omit_if(
                    &self.snd_settle_mode,
                    self.snd_settle_mode == SenderSettleMode::Mixed,
                ),
                EncodeField::omit_if(
                    &self.rcv_settle_mode,
                    self.rcv_settle_mode == ReceiverSettleMode::First,
                ),
                EncodeField::option(&self.source),
                EncodeField::option(&self.target),
                EncodeField::option(&self.unsettled),
                EncodeField::omit_if(&self.incomplete_unsettled, !self.incomplete_unsettled),
                EncodeField::option(&self.initial_delivery_count),
                EncodeField::option(&self.max_message_size),
                EncodeField::option(&self.offered_capabilities),
                EncodeField::option(&self.desired_capabilities),
                EncodeField::option(&self.properties),
            ],
        )
    }
}

impl Decode for Attach {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Attach,
            &mut [
                DecodeField::required(&mut self.name, "name"),
                DecodeField::required(&mut self.handle, "handle"),
                DecodeField::required(&mut self.role, "role"),
                DecodeField::value(&mut self.snd_settle_mode),
                DecodeField::value(&mut self.rcv_settle_mode),
                DecodeField::value(&mut self.source),
                DecodeField::value(&mut self.target),
                DecodeField::value(&mut self.unsettled),
                DecodeField::value(&mut self.incomplete_unsettled),
                DecodeField::value(&mut self.initial_delivery_count),
                DecodeField::value(&mut self.max_message_size),
                DecodeField::value(&mut self.offered_capabilities),
                DecodeField::value(&mut self.desired_capabilities),
                DecodeField::value(&mut self.properties),
            ],
        )
    }
}
