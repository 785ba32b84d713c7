use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{DeliveryNumber, Role};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::messaging::DeliveryState;
use crate::read::Read;
use crate::write::Write;

/// 2.7.6 Disposition
///
/// Inform remote peer of delivery state changes.
/// <type name="disposition" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:disposition:list" code="0x00000000:0x00000015"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Disposition {
    /// <field name="role" type="role" mandatory="true"/>
    pub role: Role,

    /// <field name="first" type="delivery-number" mandatory="true"/>
    pub first: DeliveryNumber,

    /// <field name="last" type="delivery-number"/>
    pub last: Option<DeliveryNumber>,

    /// <field name="settled" type="boolean" default="false"/>
    pub settled: bool,

    /// <field name="state" type="*" requires="delivery-state"/>
    pub state: Option<DeliveryState>,

    /// <field name="batchable" type="boolean" default="false"/>
    pub batchable: bool,
}

impl Encode for Disposition {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Disposition,
            &[
                EncodeField::value(&self.role),
                EncodeField::value(&self.first),
                EncodeField::option(&self.last),
                EncodeField::omit_if(&self.settled, !self.settled),
                EncodeField::option(&self.state),
                EncodeField::omit_if(&self.batchable, !self.batchable),
            ],
        )
    }
}

impl Decode for Disposition {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Disposition,
            &mut [
                DecodeField::required(&mut self.role, "role"),
                DecodeField::required(&mut self.first, "first"),
                DecodeField::value(&mut self.last),
                DecodeField::value(&mut self.settled),
                DecodeField::value(&mut self.state),
                DecodeField::value(&mut self.batchable),
            ],
        )
    }
}
