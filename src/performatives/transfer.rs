use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{
    DeliveryNumber, DeliveryTag, Handle, MessageFormat, ReceiverSettleMode,
};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::messaging::DeliveryState;
use crate::read::Read;
use crate::write::Write;

/// 2.7.5 Transfer
///
/// Transfer a message.
/// <type name="transfer" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:transfer:list" code="0x00000000:0x00000014"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transfer {
    /// <field name="handle" type="handle" mandatory="true"/>
    pub handle: Handle,

    /// <field name="delivery-id" type="delivery-number"/>
    pub delivery_id: Option<DeliveryNumber>,

    /// <field name="delivery-tag" type="delivery-tag"/>
    pub delivery_tag: Option<DeliveryTag>,

    /// <field name="message-format" type="message-format"/>
    pub message_format: Option<MessageFormat>,

    /// <field name="settled" type="boolean"/>
    pub settled: Option<bool>,

    /// <field name="more" type="boolean" default="false"/>
    pub more: bool,

    /// <field name="rcv-settle-mode" type="receiver-settle-mode"/>
    pub rcv_settle_mode: Option<ReceiverSettleMode>,

    /// <field name="state" type="*" requires="delivery-state"/>
    pub state: Option<DeliveryState>,

    /// <field name="resume" type="boolean" default="false"/>
    pub resume: bool,

    /// <field name="aborted" type="boolean" default="false"/>
    pub aborted: bool,

    /// <field name="batchable" type="boolean" default="false"/>
    pub batchable: bool,
}

impl Encode for Transfer {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Transfer,
            &[
                EncodeField::value(&self.handle),
                EncodeField::option(&self.delivery_id),
                EncodeField::option(&self.delivery_tag),
                EncodeField::option(&self.message_format),
                EncodeField::option(&self.settled),
                EncodeField::omit_if(&self.more, !self.more),
                EncodeField::option(&self.rcv_settle_mode),
                EncodeField::option(&self.state),
                EncodeField::omit_if(&self.resume, !self.resume),
                EncodeField::omit_if(&self.aborted, !self.aborted),
                EncodeField::omit_if(&self.batchable, !self.batchable),
            ],
        )
    }
}

impl Decode for Transfer {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Transfer,
            &mut [
                DecodeField::required(&mut self.handle, "handle"),
                DecodeField::value(&mut self.delivery_id),
                DecodeField::value(&mut self.delivery_tag),
                DecodeField::value(&mut self.message_format),
                DecodeField::value(&mut self.settled),
                DecodeField::value(&mut self.more),
                DecodeField::value(&mut self.rcv_settle_mode),
                DecodeField::value(&mut self.state),
                DecodeField::value(&mut self.resume),
                DecodeField::value(&mut self.aborted),
                DecodeField::value(&mut self.batchable),
            ],
        )
    }
}
