//! Encoding of AMQP 1.0 wire data

use crate::error::Error;
use crate::format_code::EncodingCodes;
use crate::primitives::{Milliseconds, OrderedMap, Symbol, Timestamp};
use crate::util;
use crate::value::Value;
use crate::write::Write;

/// A type that knows its own AMQP wire encoding.
///
/// This is the marshal side of the dispatch layer: every supported sink
/// shape gets an impl, and composite schemas opt in by implementing the
/// trait themselves and delegating to
/// [`encode_composite`](crate::composite::encode_composite).
pub trait Encode {
    /// Write the encoded value, type code first
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error>;
}

/// Encode a value into a fresh buffer
pub fn to_vec(value: &dyn Encode) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    value.encode(&mut buf)?;
    Ok(buf)
}

impl Encode for bool {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        match self {
            true => writer.write_byte(EncodingCodes::BooleanTrue as u8),
            false => writer.write_byte(EncodingCodes::BooleanFalse as u8),
        }
    }
}

impl Encode for u8 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write(&[EncodingCodes::UByte as u8, *self])
    }
}

impl Encode for u16 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_byte(EncodingCodes::UShort as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

// Zero encodes as the zero-width code; nonzero values keep their full
// width rather than packing into SmallUint/SmallUlong.
impl Encode for u32 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        if *self == 0 {
            return writer.write_byte(EncodingCodes::Uint0 as u8);
        }
        writer.write_byte(EncodingCodes::UInt as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

impl Encode for u64 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        if *self == 0 {
            return writer.write_byte(EncodingCodes::Ulong0 as u8);
        }
        writer.write_byte(EncodingCodes::ULong as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

impl Encode for i8 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write(&[EncodingCodes::Byte as u8, *self as u8])
    }
}

impl Encode for i16 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_byte(EncodingCodes::Short as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

impl Encode for i32 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_byte(EncodingCodes::Int as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

impl Encode for i64 {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_byte(EncodingCodes::Long as u8)?;
        writer.write(&self.to_be_bytes())
    }
}

/// `None` encodes as the `Null` code; `Some` encodes the inner value.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        match self {
            Some(value) => value.encode(writer),
            None => writer.write_byte(EncodingCodes::Null as u8),
        }
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        write_string(writer, self)
    }
}

impl Encode for Symbol {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        if !self.as_str().is_ascii() {
            return Err(Error::NonAsciiSymbol);
        }

        let len = self.as_str().len();
        if len < 256 {
            writer.write(&[EncodingCodes::Sym8 as u8, len as u8])?;
        } else if (len as u64) <= u32::MAX as u64 {
            writer.write_byte(EncodingCodes::Sym32 as u8)?;
            writer.write(&(len as u32).to_be_bytes())?;
        } else {
            return Err(Error::TooLong);
        }
        writer.write(self.as_str().as_bytes())
    }
}

impl Encode for bytes::Bytes {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        write_binary(writer, self)
    }
}

impl Encode for Timestamp {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        writer.write_byte(EncodingCodes::Timestamp as u8)?;
        writer.write(&self.milliseconds().to_be_bytes())
    }
}

impl Encode for Milliseconds {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        self.as_millis().encode(writer)
    }
}

impl Encode for Vec<Symbol> {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        write_symbol_array(writer, self)
    }
}

impl Encode for Vec<Value> {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        let mut buf = util::acquire();
        let mut fields = Vec::with_capacity(self.len());
        for value in self {
            buf.clear();
            value.encode(&mut *buf)?;
            fields.push(buf[..].to_vec());
        }
        let fields: Vec<&[u8]> = fields.iter().map(|field| field.as_slice()).collect();
        write_list(writer, &fields)
    }
}

impl Encode for Value {
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        match self {
            Value::Null => writer.write_byte(EncodingCodes::Null as u8),
            Value::Bool(value) => value.encode(writer),
            Value::Ulong(value) => value.encode(writer),
            Value::Long(value) => value.encode(writer),
            Value::Binary(value) => value.encode(writer),
            Value::String(value) => value.encode(writer),
            Value::Timestamp(value) => value.encode(writer),
        }
    }
}

impl<K, V> Encode for OrderedMap<K, V>
where
    K: Encode,
    V: Encode,
{
    fn encode(&self, writer: &mut dyn Write) -> Result<(), Error> {
        // element count is entries * 2: each pair contributes two encoded
        // values to the body
        let elements = self.len() * 2;
        let mut buf = util::acquire();
        for (key, value) in self.iter() {
            key.encode(&mut *buf)?;
            value.encode(&mut *buf)?;
        }
        write_map_body(writer, elements, &buf[..])
    }
}

/// Encode a UTF-8 string, choosing `Str8` below 256 bytes
pub fn write_string(writer: &mut dyn Write, value: &str) -> Result<(), Error> {
    let len = value.len();
    if len < 256 {
        writer.write(&[EncodingCodes::Str8 as u8, len as u8])?;
    } else if (len as u64) <= u32::MAX as u64 {
        writer.write_byte(EncodingCodes::Str32 as u8)?;
        writer.write(&(len as u32).to_be_bytes())?;
    } else {
        return Err(Error::TooLong);
    }
    writer.write(value.as_bytes())
}

/// Encode binary data, choosing `VBin8` below 256 bytes
pub fn write_binary(writer: &mut dyn Write, value: &[u8]) -> Result<(), Error> {
    let len = value.len();
    if len < 256 {
        writer.write(&[EncodingCodes::VBin8 as u8, len as u8])?;
    } else if (len as u64) <= u32::MAX as u64 {
        writer.write_byte(EncodingCodes::VBin32 as u8)?;
        writer.write(&(len as u32).to_be_bytes())?;
    } else {
        return Err(Error::TooLong);
    }
    writer.write(value)
}

/// Encode a homogeneous symbol array.
///
/// The element code is hoisted into the array header; it is `Sym8` unless
/// any symbol is longer than 255 bytes, which promotes the whole array to
/// `Sym32`.
pub fn write_symbol_array(writer: &mut dyn Write, symbols: &[Symbol]) -> Result<(), Error> {
    let mut of = EncodingCodes::Sym8;
    for symbol in symbols {
        if symbol.as_str().len() > u8::MAX as usize {
            of = EncodingCodes::Sym32;
            break;
        }
    }

    let mut buf = util::acquire();
    let mut elements = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        buf.clear();
        write_symbol_body(&mut *buf, symbol, of)?;
        elements.push(buf[..].to_vec());
    }

    let elements: Vec<&[u8]> = elements.iter().map(|elem| elem.as_slice()).collect();
    write_array(writer, of, &elements)
}

/// Encode one array element: size and payload only, the element code lives
/// in the array header
fn write_symbol_body(
    writer: &mut dyn Write,
    symbol: &Symbol,
    of: EncodingCodes,
) -> Result<(), Error> {
    if !symbol.as_str().is_ascii() {
        return Err(Error::NonAsciiSymbol);
    }

    let len = symbol.as_str().len();
    match of {
        EncodingCodes::Sym8 => writer.write_byte(len as u8)?,
        EncodingCodes::Sym32 => writer.write(&(len as u32).to_be_bytes())?,
        _ => return Err(Error::InvalidFormatCode),
    }
    writer.write(symbol.as_str().as_bytes())
}

/// Encode a list from already-encoded fields
pub fn write_list(writer: &mut dyn Write, fields: &[&[u8]]) -> Result<(), Error> {
    write_slice(writer, None, fields)
}

/// Encode an array of `of`-typed elements from already-encoded element
/// bodies
pub fn write_array(
    writer: &mut dyn Write,
    of: EncodingCodes,
    elements: &[&[u8]],
) -> Result<(), Error> {
    write_slice(writer, Some(of), elements)
}

fn write_slice(
    writer: &mut dyn Write,
    of: Option<EncodingCodes>,
    fields: &[&[u8]],
) -> Result<(), Error> {
    let size: usize = fields.iter().map(|field| field.len()).sum();

    let (code8, code32) = match of {
        Some(_) => (EncodingCodes::Array8, EncodingCodes::Array32),
        None => (EncodingCodes::List8, EncodingCodes::List32),
    };

    match fields.len() {
        0 => {
            if of.is_some() {
                return Err(Error::Message("invalid array length 0".into()));
            }
            return writer.write_byte(EncodingCodes::List0 as u8);
        }
        // the declared size covers the count byte plus the payload, and the
        // whole sum has to fit in the size byte
        count if count < 256 && size + 1 < 256 => {
            writer.write(&[code8 as u8, (size + 1) as u8, count as u8])?;
        }
        count if (count as u64) <= u32::MAX as u64 && (size as u64) + 4 <= u32::MAX as u64 => {
            writer.write_byte(code32 as u8)?;
            writer.write(&((size + 4) as u32).to_be_bytes())?;
            writer.write(&(count as u32).to_be_bytes())?;
        }
        _ => return Err(Error::TooLong),
    }

    if let Some(of) = of {
        writer.write_byte(of as u8)?;
    }

    for field in fields {
        writer.write(field)?;
    }
    Ok(())
}

/// Encode a map from its already-encoded body.
///
/// `Map8` requires both the element count and the declared size
/// (`payload + 1`) to fit in a byte; everything else takes `Map32`.
pub fn write_map_body(writer: &mut dyn Write, elements: usize, payload: &[u8]) -> Result<(), Error> {
    if elements < u8::MAX as usize && payload.len() + 1 < 256 {
        writer.write(&[
            EncodingCodes::Map8 as u8,
            (payload.len() + 1) as u8,
            elements as u8,
        ])?;
    } else if (elements as u64) <= u32::MAX as u64 && (payload.len() as u64 + 4) <= u32::MAX as u64 {
        writer.write_byte(EncodingCodes::Map32 as u8)?;
        writer.write(&((payload.len() + 4) as u32).to_be_bytes())?;
        writer.write(&(elements as u32).to_be_bytes())?;
    } else {
        return Err(Error::TooLong);
    }
    writer.write(payload)
}

#[cfg(test)]
mod tests {
    use crate::format_code::EncodingCodes;
    use crate::primitives::Symbol;
    use crate::value::Value;

    use super::{to_vec, write_list, write_string};

    #[test]
    fn zero_unsigned_values_use_zero_width_codes() {
        assert_eq!(to_vec(&0u32).unwrap(), vec![0x43]);
        assert_eq!(to_vec(&0u64).unwrap(), vec![0x44]);
    }

    #[test]
    fn nonzero_unsigned_values_keep_full_width() {
        assert_eq!(to_vec(&42u32).unwrap(), vec![0x70, 0x00, 0x00, 0x00, 0x2a]);
        assert_eq!(
            to_vec(&1u64).unwrap(),
            vec![0x80, 0, 0, 0, 0, 0, 0, 0, 0x01]
        );
        assert_eq!(to_vec(&7u8).unwrap(), vec![0x50, 0x07]);
        assert_eq!(to_vec(&258u16).unwrap(), vec![0x60, 0x01, 0x02]);
    }

    #[test]
    fn bools_use_single_octet_codes() {
        assert_eq!(to_vec(&true).unwrap(), vec![0x41]);
        assert_eq!(to_vec(&false).unwrap(), vec![0x42]);
    }

    #[test]
    fn none_encodes_as_null() {
        let value: Option<u32> = None;
        assert_eq!(to_vec(&value).unwrap(), vec![0x40]);
    }

    #[test]
    fn str8_to_str32_threshold() {
        let mut buf = Vec::new();
        write_string(&mut buf, &"a".repeat(255)).unwrap();
        assert_eq!(buf[0], EncodingCodes::Str8 as u8);
        assert_eq!(buf[1], 255);

        let mut buf = Vec::new();
        write_string(&mut buf, &"a".repeat(256)).unwrap();
        assert_eq!(buf[0], EncodingCodes::Str32 as u8);
        assert_eq!(&buf[1..5], &[0, 0, 1, 0]);
    }

    #[test]
    fn empty_list_is_a_single_byte() {
        let mut buf = Vec::new();
        write_list(&mut buf, &[]).unwrap();
        assert_eq!(buf, vec![0x45]);
    }

    #[test]
    fn list8_to_list32_threshold() {
        // 254 one-byte fields: declared size 255 still fits the size byte
        let field: &[u8] = &[0x40];
        let fields = vec![field; 254];
        let mut buf = Vec::new();
        write_list(&mut buf, &fields).unwrap();
        assert_eq!(buf[0], EncodingCodes::List8 as u8);
        assert_eq!(buf[1], 255);
        assert_eq!(buf[2], 254);

        // one more byte of payload promotes to List32
        let fields = vec![field; 255];
        let mut buf = Vec::new();
        write_list(&mut buf, &fields).unwrap();
        assert_eq!(buf[0], EncodingCodes::List32 as u8);
        assert_eq!(&buf[1..5], &(255u32 + 4).to_be_bytes());
        assert_eq!(&buf[5..9], &255u32.to_be_bytes());
    }

    #[test]
    fn symbol_array_promotes_to_sym32() {
        let symbols = vec![Symbol::from("a"), Symbol::from("b".repeat(256).as_str())];
        let buf = to_vec(&symbols).unwrap();
        // Array32 header: code + size(4) + count(4), then the element code
        assert_eq!(buf[0], EncodingCodes::Array32 as u8);
        assert_eq!(buf[9], EncodingCodes::Sym32 as u8);

        let symbols = vec![Symbol::from("a"), Symbol::from("b")];
        let buf = to_vec(&symbols).unwrap();
        assert_eq!(buf[0], EncodingCodes::Array8 as u8);
        assert_eq!(buf[3], EncodingCodes::Sym8 as u8);
    }

    #[test]
    fn non_ascii_symbol_is_rejected() {
        let symbol = Symbol::from("héllo");
        assert!(to_vec(&symbol).is_err());
    }

    #[test]
    fn mixed_list_encodes_each_element_with_its_own_code() {
        let list = vec![Value::Bool(true), Value::Ulong(0), Value::from("x")];
        let buf = to_vec(&list).unwrap();
        // List8, size, count, then: true, ulong0, str8 "x"
        assert_eq!(buf, vec![0xc0, 0x06, 0x03, 0x41, 0x44, 0xa1, 0x01, 0x78]);
    }
}
