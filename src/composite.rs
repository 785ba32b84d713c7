//! Described composite types
//!
//! A composite is the literal byte `0x00`, a small-ulong descriptor naming
//! the type, and a list body whose positional fields map onto a schema.
//! Every protocol frame is built this way.

use crate::decode::{read_header_slice, read_uint, Decode};
use crate::descriptor::DescriptorCode;
use crate::encode::{write_list, Encode};
use crate::error::Error;
use crate::format_code::EncodingCodes;
use crate::primitives::Symbol;
use crate::read::Read;
use crate::util;
use crate::write::Write;

/// One field of a composite being encoded.
///
/// Omitted fields become a single `Null` byte when an assigned field follows
/// them, and disappear from the wire entirely when they trail.
pub struct EncodeField<'a> {
    value: &'a dyn Encode,
    omit: bool,
}

impl<'a> EncodeField<'a> {
    /// A field that is always encoded
    pub fn value(value: &'a dyn Encode) -> Self {
        Self { value, omit: false }
    }

    /// A field that is omitted when the option is `None`
    pub fn option<T: Encode>(value: &'a Option<T>) -> Self {
        Self {
            omit: value.is_none(),
            value,
        }
    }

    /// A field that is omitted when `omit` holds, e.g. when the value equals
    /// its declared default
    pub fn omit_if(value: &'a dyn Encode, omit: bool) -> Self {
        Self { value, omit }
    }
}

/// One field of a composite being decoded, together with its null policy.
///
/// The policy vocabulary follows the AMQP field tables: a field is plain, is
/// mandatory, or carries a declared default that applies when the peer sends
/// null or omits the field altogether. Each variant holds the single mutable
/// borrow of its sink, so a policy can write the default into the same slot
/// it decodes into.
pub enum DecodeField<'a> {
    /// Decode into the sink; null and absence leave it untouched
    Value(&'a mut dyn Decode),
    /// Null or absence is an error naming the field
    Required(&'a mut dyn Decode, &'static str),
    /// Null or absence writes the default `u8`
    DefaultUbyte(&'a mut u8, u8),
    /// Null or absence writes the default `u16`
    DefaultUshort(&'a mut u16, u16),
    /// Null or absence writes the default `u32`
    DefaultUint(&'a mut u32, u32),
    /// Null or absence writes the default symbol
    DefaultSymbol(&'a mut Symbol, &'static str),
}

impl<'a> DecodeField<'a> {
    /// A field without a null policy
    pub fn value(sink: &'a mut dyn Decode) -> Self {
        Self::Value(sink)
    }

    /// A mandatory field; decoding fails with `"<name> is required"`
    pub fn required(sink: &'a mut dyn Decode, name: &'static str) -> Self {
        Self::Required(sink, name)
    }

    /// A `ubyte` field with a declared default
    pub fn default_ubyte(sink: &'a mut u8, default: u8) -> Self {
        Self::DefaultUbyte(sink, default)
    }

    /// A `ushort` field with a declared default
    pub fn default_ushort(sink: &'a mut u16, default: u16) -> Self {
        Self::DefaultUshort(sink, default)
    }

    /// A `uint` field with a declared default
    pub fn default_uint(sink: &'a mut u32, default: u32) -> Self {
        Self::DefaultUint(sink, default)
    }

    /// A symbol field with a declared default
    pub fn default_symbol(sink: &'a mut Symbol, default: &'static str) -> Self {
        Self::DefaultSymbol(sink, default)
    }

    fn decode_value(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        match self {
            DecodeField::Value(sink) | DecodeField::Required(sink, _) => sink.decode(reader),
            DecodeField::DefaultUbyte(sink, _) => sink.decode(reader),
            DecodeField::DefaultUshort(sink, _) => sink.decode(reader),
            DecodeField::DefaultUint(sink, _) => sink.decode(reader),
            DecodeField::DefaultSymbol(sink, _) => sink.decode(reader),
        }
    }

    fn apply_null(&mut self) -> Result<(), Error> {
        match self {
            DecodeField::Value(_) => Ok(()),
            DecodeField::Required(_, name) => Err(Error::Required(*name)),
            DecodeField::DefaultUbyte(sink, default) => {
                **sink = *default;
                Ok(())
            }
            DecodeField::DefaultUshort(sink, default) => {
                **sink = *default;
                Ok(())
            }
            DecodeField::DefaultUint(sink, default) => {
                **sink = *default;
                Ok(())
            }
            DecodeField::DefaultSymbol(sink, default) => {
                **sink = Symbol::from(*default);
                Ok(())
            }
        }
    }
}

/// Encode a composite: `0x00`, the descriptor as a small-ulong, then the
/// trimmed list body.
///
/// Each non-omitted field is marshaled into a scratch buffer first. The body
/// keeps `last set index + 1` elements: omitted fields before the last
/// assigned one become `Null`, trailing omitted fields are dropped, so a
/// receiver applying defaults sees the same composite the sender meant.
pub fn encode_composite(
    writer: &mut dyn Write,
    code: DescriptorCode,
    fields: &[EncodeField<'_>],
) -> Result<(), Error> {
    let mut raw_fields: Vec<Option<Vec<u8>>> = Vec::new();
    raw_fields.resize_with(fields.len(), || None);

    let mut last_set_idx = None;
    {
        let mut buf = util::acquire();
        for (i, field) in fields.iter().enumerate() {
            if field.omit {
                continue;
            }
            buf.clear();
            field.value.encode(&mut *buf)?;
            raw_fields[i] = Some(buf[..].to_vec());
            last_set_idx = Some(i);
        }
    }

    let count = last_set_idx.map_or(0, |i| i + 1);
    let null = [EncodingCodes::Null as u8];
    let body: Vec<&[u8]> = raw_fields[..count]
        .iter()
        .map(|field| field.as_deref().unwrap_or(&null))
        .collect();

    writer.write(&[
        EncodingCodes::DescribedType as u8,
        EncodingCodes::SmallUlong as u8,
        code as u8,
    ])?;
    write_list(writer, &body)
}

/// Decode a composite against its schema.
///
/// The descriptor must match `code`, and the peer may not send more fields
/// than the schema declares. Fields present on the wire decode positionally;
/// a null field triggers its policy. Policies of the remaining absent fields
/// run afterwards, which is how defaults apply to trailing fields the sender
/// trimmed.
pub fn decode_composite(
    reader: &mut dyn Read,
    code: DescriptorCode,
    fields: &mut [DecodeField<'_>],
) -> Result<(), Error> {
    let (found, field_count) = read_composite_header(reader)?;

    if found != code as u64 {
        return Err(Error::InvalidDescriptor {
            expected: code,
            found,
        });
    }

    if field_count > fields.len() {
        return Err(Error::InvalidFieldCount {
            count: field_count,
            descriptor: code,
        });
    }

    for (i, field) in fields.iter_mut().take(field_count).enumerate() {
        let null = match field.decode_value(reader) {
            Ok(()) => false,
            Err(Error::Null) => true,
            Err(source) => {
                return Err(Error::Field {
                    index: i,
                    source: Box::new(source),
                })
            }
        };

        if null {
            field.apply_null()?;
        }
    }

    for field in fields.iter_mut().skip(field_count) {
        field.apply_null()?;
    }

    Ok(())
}

/// Read the `0x00` prefix and the descriptor that follows it.
///
/// A wire null raises the sentinel so the enclosing schema can apply its own
/// null handler.
pub fn read_descriptor(reader: &mut dyn Read) -> Result<u64, Error> {
    let byte = reader.next()?;

    if byte == EncodingCodes::Null as u8 {
        return Err(Error::Null);
    }

    if byte != EncodingCodes::DescribedType as u8 {
        return Err(Error::InvalidCompositeHeader(byte));
    }

    read_uint(reader)
}

/// Read a full composite header: descriptor plus the field count of the list
/// body
pub fn read_composite_header(reader: &mut dyn Read) -> Result<(u64, usize), Error> {
    let code = read_descriptor(reader)?;
    let (fields, _) = read_header_slice(reader)?;
    Ok((code, fields))
}

/// Encode a described value whose body is not a field list, e.g. the
/// map-bodied annotation sections or the binary-bodied data section
pub fn encode_described(
    writer: &mut dyn Write,
    code: DescriptorCode,
    value: &dyn Encode,
) -> Result<(), Error> {
    writer.write(&[
        EncodingCodes::DescribedType as u8,
        EncodingCodes::SmallUlong as u8,
        code as u8,
    ])?;
    value.encode(writer)
}

/// Decode a described value whose body is not a field list
pub fn decode_described(
    reader: &mut dyn Read,
    code: DescriptorCode,
    sink: &mut dyn Decode,
) -> Result<(), Error> {
    let found = read_descriptor(reader)?;
    if found != code as u64 {
        return Err(Error::InvalidDescriptor {
            expected: code,
            found,
        });
    }
    sink.decode(reader)
}

/// Peek the descriptor of the composite at the cursor without consuming it.
///
/// Used by sinks that choose a schema from the descriptor, e.g. delivery
/// states. A wire null is consumed and raises the sentinel.
pub(crate) fn peek_descriptor_code(reader: &mut dyn Read) -> Result<u64, Error> {
    if reader.peek()? == EncodingCodes::Null as u8 {
        reader.next()?;
        return Err(Error::Null);
    }

    let prefix = reader.peek_bytes(2)?;
    if prefix[0] != EncodingCodes::DescribedType as u8 {
        return Err(Error::InvalidCompositeHeader(prefix[0]));
    }

    match EncodingCodes::try_from(prefix[1])? {
        EncodingCodes::SmallUlong | EncodingCodes::SmallUint | EncodingCodes::UByte => {
            Ok(reader.peek_bytes(3)?[2] as u64)
        }
        EncodingCodes::Ulong0 | EncodingCodes::Uint0 => Ok(0),
        EncodingCodes::UInt => {
            let bytes = reader.peek_bytes(6)?;
            let mut value = [0u8; 4];
            value.copy_from_slice(&bytes[2..6]);
            Ok(u32::from_be_bytes(value) as u64)
        }
        EncodingCodes::ULong => {
            let bytes = reader.peek_bytes(10)?;
            let mut value = [0u8; 8];
            value.copy_from_slice(&bytes[2..10]);
            Ok(u64::from_be_bytes(value))
        }
        _ => Err(Error::InvalidFormatCode),
    }
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::descriptor::DescriptorCode;
    use crate::error::Error;
    use crate::read::SliceReader;

    use super::{
        decode_composite, encode_composite, read_composite_header, DecodeField, EncodeField,
    };

    #[test]
    fn trailing_omitted_fields_are_trimmed() {
        // fields 0 and 2 set, 1, 3, 4 omitted: the body keeps 3 elements
        // with a null placeholder at index 1
        let mut buf = Vec::new();
        encode_composite(
            &mut buf,
            DescriptorCode::Open,
            &[
                EncodeField::value(&1u8),
                EncodeField::omit_if(&0u8, true),
                EncodeField::value(&2u8),
                EncodeField::omit_if(&0u8, true),
                EncodeField::omit_if(&0u8, true),
            ],
        )
        .unwrap();

        assert_eq!(
            buf,
            vec![0x00, 0x53, 0x10, 0xc0, 0x06, 0x03, 0x50, 0x01, 0x40, 0x50, 0x02]
        );
    }

    #[test]
    fn all_fields_omitted_encodes_an_empty_list() {
        let mut buf = Vec::new();
        encode_composite(
            &mut buf,
            DescriptorCode::End,
            &[EncodeField::omit_if(&0u8, true)],
        )
        .unwrap();
        assert_eq!(buf, vec![0x00, 0x53, 0x17, 0x45]);
    }

    #[test]
    fn composite_header_reports_descriptor_and_field_count() {
        let bytes = [0x00, 0x53, 0x10, 0xc0, 0x03, 0x02, 0x40, 0x40];
        let mut reader = SliceReader::new(&bytes);
        let (code, fields) = read_composite_header(&mut reader).unwrap();
        assert_eq!(code, DescriptorCode::Open as u64);
        assert_eq!(fields, 2);
    }

    #[test]
    fn composite_header_signals_null() {
        let mut reader = SliceReader::new(&[0x40]);
        assert!(matches!(
            read_composite_header(&mut reader),
            Err(Error::Null)
        ));
    }

    #[test]
    fn null_field_with_default_policy_applies_the_default() {
        // one explicit null field
        let bytes = [0x00, 0x53, 0x10, 0xc0, 0x02, 0x01, 0x40];
        let mut reader = SliceReader::new(&bytes);
        let mut sink = 0u32;
        decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [DecodeField::default_uint(&mut sink, 7)],
        )
        .unwrap();
        assert_eq!(sink, 7);
    }

    #[test]
    fn absent_trailing_field_applies_the_default() {
        // empty body, two schema fields with defaults
        let bytes = [0x00, 0x53, 0x10, 0x45];
        let mut reader = SliceReader::new(&bytes);
        let mut first = 0u16;
        let mut second = 0u8;
        decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [
                DecodeField::default_ushort(&mut first, 65535),
                DecodeField::default_ubyte(&mut second, 4),
            ],
        )
        .unwrap();
        assert_eq!(first, 65535);
        assert_eq!(second, 4);
    }

    #[test]
    fn required_field_rejects_explicit_null() {
        let bytes = [0x00, 0x53, 0x10, 0xc0, 0x02, 0x01, 0x40];
        let mut reader = SliceReader::new(&bytes);
        let mut sink = 0u32;
        let err = decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [DecodeField::required(&mut sink, "channel-max")],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "channel-max is required");
    }

    #[test]
    fn required_field_rejects_absence() {
        let bytes = [0x00, 0x53, 0x10, 0x45];
        let mut reader = SliceReader::new(&bytes);
        let mut sink = 0u32;
        let err = decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [DecodeField::required(&mut sink, "handle")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Required("handle")));
    }

    #[test]
    fn descriptor_mismatch_is_rejected() {
        let bytes = [0x00, 0x53, 0x11, 0x45];
        let mut reader = SliceReader::new(&bytes);
        let err = decode_composite(&mut reader, DescriptorCode::Open, &mut [])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDescriptor { .. }));
    }

    #[test]
    fn extra_fields_from_the_peer_are_rejected() {
        let bytes = [0x00, 0x53, 0x10, 0xc0, 0x03, 0x02, 0x40, 0x40];
        let mut reader = SliceReader::new(&bytes);
        let mut sink = 0u32;
        let err = decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [DecodeField::value(&mut sink)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidFieldCount { count: 2, .. }));
    }

    #[test]
    fn field_errors_carry_the_field_index() {
        // field 0 ok, field 1 has a bogus format code
        let bytes = [0x00, 0x53, 0x10, 0xc0, 0x04, 0x02, 0x41, 0x01, 0x00];
        let mut reader = SliceReader::new(&bytes);
        let mut flag = false;
        let mut num = 0u32;
        let err = decode_composite(
            &mut reader,
            DescriptorCode::Open,
            &mut [
                DecodeField::value(&mut flag),
                DecodeField::value(&mut num),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, Error::Field { index: 1, .. }));
    }

    #[test]
    fn null_composite_surfaces_as_a_null_return_from_decode() {
        struct Empty;
        impl crate::decode::Decode for Empty {
            fn decode(&mut self, reader: &mut dyn crate::read::Read) -> Result<(), Error> {
                decode_composite(reader, DescriptorCode::Open, &mut [])
            }
        }

        let mut reader = SliceReader::new(&[0x40]);
        let mut sink = Empty;
        assert!(decode(&mut reader, &mut sink).unwrap());
    }
}
