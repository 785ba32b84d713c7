//! Decoding of AMQP 1.0 wire data

use std::convert::TryFrom;
use std::hash::Hash;

use bytes::Bytes;
use indexmap::IndexMap;

use crate::error::Error;
use crate::format_code::EncodingCodes;
use crate::primitives::{Milliseconds, OrderedMap, Symbol, Timestamp};
use crate::read::{read_const_bytes, BoundReader, Read};
use crate::value::Value;

/// A sink that can be filled from AMQP wire data.
///
/// This is the unmarshal side of the dispatch layer. An implementation
/// either reads a primitive through one of the `read_*` functions or, for a
/// composite schema, delegates to
/// [`decode_composite`](crate::composite::decode_composite).
///
/// On the `Null` format code most implementations leave `self` untouched and
/// return the internal null sentinel; use the top-level [`decode`] or
/// [`from_slice`] entry points, which intercept it.
pub trait Decode {
    /// Read one encoded value into `self`
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error>;
}

/// Decode one value from `reader` into `sink`.
///
/// Returns `Ok(true)` and leaves the sink untouched when the value was an
/// explicit wire null. This is the only place (besides the composite layer
/// and the map reader) that looks at the null sentinel, and it never lets it
/// escape.
pub fn decode(reader: &mut dyn Read, sink: &mut dyn Decode) -> Result<bool, Error> {
    match sink.decode(reader) {
        Ok(()) => Ok(false),
        Err(Error::Null) => Ok(true),
        Err(err) => Err(err),
    }
}

/// Decode a value of type `T` from a byte slice.
///
/// Returns `Ok(None)` when the slice holds an explicit wire null.
pub fn from_slice<T>(slice: &[u8]) -> Result<Option<T>, Error>
where
    T: Decode + Default,
{
    let mut reader = crate::read::SliceReader::new(slice);
    let mut value = T::default();
    match decode(&mut reader, &mut value)? {
        true => Ok(None),
        false => Ok(Some(value)),
    }
}

/// Read any member of the unsigned integer family, widened to 64 bits.
///
/// Accepts `Null` and signals it through the sentinel.
pub fn read_uint(reader: &mut dyn Read) -> Result<u64, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    match code {
        EncodingCodes::Null => Err(Error::Null),
        EncodingCodes::Uint0 | EncodingCodes::Ulong0 => Ok(0),
        EncodingCodes::UByte | EncodingCodes::SmallUint | EncodingCodes::SmallUlong => {
            Ok(reader.next()? as u64)
        }
        EncodingCodes::UShort => Ok(u16::from_be_bytes(read_const_bytes(reader)?) as u64),
        EncodingCodes::UInt => Ok(u32::from_be_bytes(read_const_bytes(reader)?) as u64),
        EncodingCodes::ULong => Ok(u64::from_be_bytes(read_const_bytes(reader)?)),
        _ => Err(Error::InvalidFormatCode),
    }
}

/// Read any member of the integer family, signed or unsigned, widened to a
/// signed 64-bit value
pub fn read_int(reader: &mut dyn Read) -> Result<i64, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    match code {
        // Unsigned
        EncodingCodes::Uint0 | EncodingCodes::Ulong0 => Ok(0),
        EncodingCodes::UByte | EncodingCodes::SmallUint | EncodingCodes::SmallUlong => {
            Ok(reader.next()? as i64)
        }
        EncodingCodes::UShort => Ok(u16::from_be_bytes(read_const_bytes(reader)?) as i64),
        EncodingCodes::UInt => Ok(u32::from_be_bytes(read_const_bytes(reader)?) as i64),
        EncodingCodes::ULong => Ok(u64::from_be_bytes(read_const_bytes(reader)?) as i64),

        // Signed
        EncodingCodes::Byte | EncodingCodes::SmallInt | EncodingCodes::SmallLong => {
            Ok(reader.next()? as i8 as i64)
        }
        EncodingCodes::Short => Ok(i16::from_be_bytes(read_const_bytes(reader)?) as i64),
        EncodingCodes::Int => Ok(i32::from_be_bytes(read_const_bytes(reader)?) as i64),
        EncodingCodes::Long => Ok(i64::from_be_bytes(read_const_bytes(reader)?)),
        _ => Err(Error::InvalidFormatCode),
    }
}

/// Read a boolean in any of its three encodings
pub fn read_bool(reader: &mut dyn Read) -> Result<bool, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    match code {
        EncodingCodes::Null => Err(Error::Null),
        EncodingCodes::Boolean => Ok(reader.next()? != 0),
        EncodingCodes::BooleanTrue => Ok(true),
        EncodingCodes::BooleanFalse => Ok(false),
        _ => Err(Error::InvalidFormatCode),
    }
}

/// Read a timestamp as a signed millisecond count since the unix epoch
pub fn read_timestamp(reader: &mut dyn Read) -> Result<Timestamp, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    match code {
        EncodingCodes::Null => Err(Error::Null),
        EncodingCodes::Timestamp => {
            let millis = i64::from_be_bytes(read_const_bytes(reader)?);
            Ok(Timestamp::from_milliseconds(millis))
        }
        _ => Err(Error::InvalidFormatCode),
    }
}

/// Read the payload of a variable-width value whose code has already been
/// consumed.
///
/// `Null` yields an empty buffer. The declared length is checked against the
/// remaining bytes before anything is allocated.
pub fn read_variable(reader: &mut dyn Read, of: EncodingCodes) -> Result<Vec<u8>, Error> {
    let len = match of {
        EncodingCodes::Null => return Ok(Vec::new()),
        EncodingCodes::VBin8 | EncodingCodes::Str8 | EncodingCodes::Sym8 => {
            reader.next()? as usize
        }
        EncodingCodes::VBin32 | EncodingCodes::Str32 | EncodingCodes::Sym32 => {
            u32::from_be_bytes(read_const_bytes(reader)?) as usize
        }
        _ => return Err(Error::InvalidFormatCode),
    };

    if len > reader.remaining() {
        return Err(Error::InvalidLength);
    }
    reader.read_bytes(len)
}

/// Read a string or symbol; `Null` yields an empty string
pub fn read_string(reader: &mut dyn Read) -> Result<String, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    let payload = read_variable(reader, code)?;
    Ok(String::from_utf8(payload)?)
}

/// Read binary data; `Null` yields an empty buffer
pub fn read_binary(reader: &mut dyn Read) -> Result<Vec<u8>, Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    read_variable(reader, code)
}

/// Read a list or array header.
///
/// Returns `(element count, declared byte size)`. `Null` signals through the
/// sentinel; `List0` is `(0, 0)`.
pub fn read_header_slice(reader: &mut dyn Read) -> Result<(usize, usize), Error> {
    let code = EncodingCodes::try_from(reader.next()?)?;
    let (elements, size) = match code {
        EncodingCodes::Null => return Err(Error::Null),
        EncodingCodes::List0 => (0, 0),
        EncodingCodes::List8 | EncodingCodes::Array8 => {
            let size = reader.next()? as usize;
            let elements = reader.next()? as usize;
            (elements, size)
        }
        EncodingCodes::List32 | EncodingCodes::Array32 => {
            let size = u32::from_be_bytes(read_const_bytes(reader)?) as usize;
            let elements = u32::from_be_bytes(read_const_bytes(reader)?) as usize;
            (elements, size)
        }
        _ => return Err(Error::InvalidFormatCode),
    };

    if elements > reader.remaining() {
        return Err(Error::InvalidLength);
    }
    Ok((elements, size))
}

/// Read a homogeneous array of symbols.
///
/// The element code appears once after the header; each element carries only
/// its size and payload.
pub fn read_symbol_array(reader: &mut dyn Read) -> Result<Vec<Symbol>, Error> {
    let (elements, _) = read_header_slice(reader)?;
    if elements == 0 {
        return Ok(Vec::new());
    }

    let of = EncodingCodes::try_from(reader.next()?)?;
    let mut symbols = Vec::with_capacity(elements);
    for _ in 0..elements {
        let payload = read_variable(reader, of)?;
        symbols.push(Symbol::new(String::from_utf8(payload)?));
    }
    Ok(symbols)
}

/// Read a homogeneous array of strings or symbols as plain strings
pub fn read_string_array(reader: &mut dyn Read) -> Result<Vec<String>, Error> {
    let (elements, _) = read_header_slice(reader)?;
    if elements == 0 {
        return Ok(Vec::new());
    }

    let of = EncodingCodes::try_from(reader.next()?)?;
    let mut strings = Vec::with_capacity(elements);
    for _ in 0..elements {
        let payload = read_variable(reader, of)?;
        strings.push(String::from_utf8(payload)?);
    }
    Ok(strings)
}

/// Decode a value whose concrete type is not known at the call site.
///
/// Peeks the format code and dispatches to the matching reader. An explicit
/// null is consumed and becomes [`Value::Null`] rather than the sentinel.
/// Float, decimal, char, UUID, described, and compound codes are recognized
/// but unsupported.
pub fn read_any(reader: &mut dyn Read) -> Result<Value, Error> {
    let code = EncodingCodes::try_from(reader.peek()?)?;
    match code {
        EncodingCodes::Null => {
            reader.next()?;
            Ok(Value::Null)
        }
        EncodingCodes::Boolean | EncodingCodes::BooleanTrue | EncodingCodes::BooleanFalse => {
            Ok(Value::Bool(read_bool(reader)?))
        }
        EncodingCodes::UByte
        | EncodingCodes::UShort
        | EncodingCodes::UInt
        | EncodingCodes::SmallUint
        | EncodingCodes::Uint0
        | EncodingCodes::ULong
        | EncodingCodes::SmallUlong
        | EncodingCodes::Ulong0 => Ok(Value::Ulong(read_uint(reader)?)),
        EncodingCodes::Byte
        | EncodingCodes::Short
        | EncodingCodes::Int
        | EncodingCodes::SmallInt
        | EncodingCodes::Long
        | EncodingCodes::SmallLong => Ok(Value::Long(read_int(reader)?)),
        EncodingCodes::VBin8 | EncodingCodes::VBin32 => {
            Ok(Value::Binary(Bytes::from(read_binary(reader)?)))
        }
        EncodingCodes::Str8 | EncodingCodes::Str32 | EncodingCodes::Sym8 | EncodingCodes::Sym32 => {
            Ok(Value::String(read_string(reader)?))
        }
        EncodingCodes::Timestamp => Ok(Value::Timestamp(read_timestamp(reader)?)),
        EncodingCodes::Float
        | EncodingCodes::Double
        | EncodingCodes::Decimal32
        | EncodingCodes::Decimal64
        | EncodingCodes::Decimal128
        | EncodingCodes::Char
        | EncodingCodes::Uuid
        | EncodingCodes::DescribedType
        | EncodingCodes::List0
        | EncodingCodes::List8
        | EncodingCodes::List32
        | EncodingCodes::Map8
        | EncodingCodes::Map32
        | EncodingCodes::Array8
        | EncodingCodes::Array32 => Err(Error::NotImplemented),
    }
}

/// Iterator-style access to the entries of an encoded map.
///
/// The body is read through a [`BoundReader`] capped at the declared byte
/// size, so a malformed map cannot consume bytes belonging to the enclosing
/// frame.
pub struct MapReader<'r> {
    reader: BoundReader<'r>,
    count: usize,
    read: usize,
}

impl<'r> MapReader<'r> {
    /// Read the map header and fence the body.
    ///
    /// A wire null raises the sentinel so an enclosing composite can apply
    /// its own null handler.
    pub fn new(reader: &'r mut dyn Read) -> Result<Self, Error> {
        let code = EncodingCodes::try_from(reader.next()?)?;
        let (limit, count) = match code {
            EncodingCodes::Null => return Err(Error::Null),
            EncodingCodes::Map8 => {
                let size = reader.next()? as usize;
                if size < 1 || size > reader.remaining() {
                    return Err(Error::InvalidLength);
                }
                let count = reader.next()? as usize;
                (size - 1, count)
            }
            EncodingCodes::Map32 => {
                let size = u32::from_be_bytes(read_const_bytes(reader)?) as usize;
                if size < 4 || size > reader.remaining() {
                    return Err(Error::InvalidLength);
                }
                let count = u32::from_be_bytes(read_const_bytes(reader)?) as usize;
                (size - 4, count)
            }
            _ => return Err(Error::InvalidFormatCode),
        };

        Ok(Self {
            reader: BoundReader::new(reader, limit),
            count,
            read: 0,
        })
    }

    /// Number of key-value pairs the header declared
    pub fn pairs(&self) -> usize {
        self.count / 2
    }

    /// Whether more pairs remain
    pub fn more(&self) -> bool {
        self.read < self.count
    }

    /// Decode the next pair into the supplied sinks.
    ///
    /// A null key or value leaves its sink untouched.
    pub fn next(&mut self, key: &mut dyn Decode, value: &mut dyn Decode) -> Result<(), Error> {
        decode(&mut self.reader, key)?;
        self.read += 1;
        decode(&mut self.reader, value)?;
        self.read += 1;
        Ok(())
    }
}

impl Decode for u8 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_uint(reader)? as u8;
        Ok(())
    }
}

impl Decode for u16 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_uint(reader)? as u16;
        Ok(())
    }
}

impl Decode for u32 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_uint(reader)? as u32;
        Ok(())
    }
}

impl Decode for u64 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_uint(reader)?;
        Ok(())
    }
}

impl Decode for i8 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_int(reader)? as i8;
        Ok(())
    }
}

impl Decode for i16 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_int(reader)? as i16;
        Ok(())
    }
}

impl Decode for i32 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_int(reader)? as i32;
        Ok(())
    }
}

impl Decode for i64 {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_int(reader)?;
        Ok(())
    }
}

impl Decode for bool {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_bool(reader)?;
        Ok(())
    }
}

impl Decode for String {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_string(reader)?;
        Ok(())
    }
}

/// A symbol decodes through the string reader and is retagged
impl Decode for Symbol {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = Symbol::from(read_string(reader)?);
        Ok(())
    }
}

impl Decode for Bytes {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = Bytes::from(read_binary(reader)?);
        Ok(())
    }
}

impl Decode for Timestamp {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_timestamp(reader)?;
        Ok(())
    }
}

impl Decode for Milliseconds {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = Milliseconds::from_millis(read_uint(reader)? as u32);
        Ok(())
    }
}

impl Decode for Vec<Symbol> {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_symbol_array(reader)?;
        Ok(())
    }
}

impl Decode for Vec<String> {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_string_array(reader)?;
        Ok(())
    }
}

impl Decode for Value {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        *self = read_any(reader)?;
        Ok(())
    }
}

impl Decode for Vec<Value> {
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let (elements, _) = read_header_slice(reader)?;
        let mut list = Vec::with_capacity(elements);
        for _ in 0..elements {
            list.push(read_any(reader)?);
        }
        *self = list;
        Ok(())
    }
}

/// The `Option` sink replaces pointer-to-pointer auto-allocation: a missing
/// inner value is default-constructed before recursing, and an explicit wire
/// null restores `None` (and still signals the sentinel so a composite can
/// run its null handler).
impl<T> Decode for Option<T>
where
    T: Decode + Default,
{
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        if reader.peek()? == EncodingCodes::Null as u8 {
            reader.next()?;
            *self = None;
            return Err(Error::Null);
        }

        let mut value = self.take().unwrap_or_default();
        value.decode(reader)?;
        *self = Some(value);
        Ok(())
    }
}

impl<K, V> Decode for OrderedMap<K, V>
where
    K: Decode + Default + Hash + Eq,
    V: Decode + Default,
{
    fn decode(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut map_reader = MapReader::new(reader)?;
        let mut map = IndexMap::with_capacity(map_reader.pairs());
        while map_reader.more() {
            let mut key = K::default();
            let mut value = V::default();
            map_reader.next(&mut key, &mut value)?;
            map.insert(key, value);
        }
        *self = Self::from(map);
        Ok(())
    }
}
