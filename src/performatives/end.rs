use crate::composite::{decode_composite, encode_composite, DecodeField, EncodeField};
use crate::decode::Decode;
use crate::definitions;
use crate::descriptor::DescriptorCode;
use crate::encode::Encode;
use crate::error::Error;
use crate::read::Read;
use crate::write::Write;

/// 2.7.8 End
///
/// End the session.
/// <type name="end" class="composite" source="list" provides="frame">
///     <descriptor name="amqp:end:list" code="0x00000000:0x00000017"/>
/// </type>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct End {
    /// <field name="error" type="error"/>
    pub error: Option<definitions::Error>,
}

impl Encode for End {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        encode_composite(
            writer,
            DescriptorCode::End,
            &[EncodeField::option(&self.error)],
        )
    }
}

impl Decode for End {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        decode_composite(
            reader,
            DescriptorCode::End,
            &mut [DecodeField::value(&mut self.error)],
        )
    }
}
