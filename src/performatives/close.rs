use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions;
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::read::Read;
use crate::write::Write;

/// 2.7.9 Close
///
/// Signal a connection close.
/// <type name="close" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:close:list" code="0x00000000:0x00000018"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Close {
    /// <field name="error" type="error"/>
    pub error: Option<definitions::Error>,
}

impl Encode for Close {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::Close,
            &[EncodeField::option(&self.error)],
        )
    }
}

impl Decode for Close {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::Close,
            &mut [DecodeField::value(&mut self.error)],
        )
    }
}
