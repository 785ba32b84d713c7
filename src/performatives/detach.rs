use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions::{self, Handle};
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::read::Read;
use crate::write::Write;

/// 2.7.7 Detach
///
/// Detach the link endpoint from the session.
/// <type name="detach" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:detach:list" code="0x00000000:0x00000016"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detach {
    /// <field name="handle" type="handle" mandatory="true"/>
    pub handle: Handle,

    /// <field name="closed" type="boolean" default="false"/>
    pub closed: bool,

    /// <field name="error" type="error"/>
    pub error: Option<definitions::Error>,
}

impl Encode for Detach {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Detach,
            &[
                EncodeField::value(&self.handle),
                EncodeField::omit_if(&self.closed, !self.closed),
                EncodeField::option(&self.error),
            ],
        )
    }
}

impl Decode for Detach {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Detach,
            &mut [
                DecodeField::required(&mut self.handle, "handle"),
                DecodeField::value(&mut self.closed),
                DecodeField::value(&mut self.error),
            ],
        )
    }
}
