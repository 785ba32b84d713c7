//! Round-trip coverage for the primitive and collection encodings

use bytes::Bytes;

use amqp_codec::primitives::{Milliseconds, OrderedMap, Symbol, Timestamp};
use amqp_codec::value::Value;
use amqp_codec::{from_slice, to_vec};

fn round_trip<T>(value: T)
where
    T: amqp_codec::Encode + amqp_codec::Decode + Default + PartialEq + std::fmt::Debug,
{
    let buf = to_vec(&value).unwrap();
    let decoded: T = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn booleans() {
    round_trip(true);
    round_trip(false);
}

#[test]
fn unsigned_widths() {
    round_trip(0u8);
    round_trip(255u8);
    round_trip(0u16);
    round_trip(65_535u16);
    round_trip(0u32);
    round_trip(42u32);
    round_trip(u32::MAX);
    round_trip(0u64);
    round_trip(u64::MAX);
}

#[test]
fn signed_widths() {
    round_trip(i8::MIN);
    round_trip(0i8);
    round_trip(i8::MAX);
    round_trip(i16::MIN);
    round_trip(i16::MAX);
    round_trip(i32::MIN);
    round_trip(0i32);
    round_trip(i32::MAX);
    round_trip(i64::MIN);
    round_trip(0i64);
    round_trip(i64::MAX);
}

#[test]
fn timestamps() {
    round_trip(Timestamp::from_milliseconds(0));
    round_trip(Timestamp::from_milliseconds(1_571_667_475_547));
    round_trip(Timestamp::from_milliseconds(-1_500));
}

#[test]
fn milliseconds() {
    round_trip(Milliseconds::from_millis(0));
    round_trip(Milliseconds::from_millis(30_000));
}

#[test]
fn strings_across_size_variants() {
    for len in [0usize, 1, 255, 256, 65_535] {
        round_trip("s".repeat(len));
    }
}

#[test]
fn binary_across_size_variants() {
    for len in [0usize, 1, 255, 256, 65_535] {
        round_trip(Bytes::from(vec![0xabu8; len]));
    }
}

#[test]
fn symbols_across_size_variants() {
    for len in [1usize, 255, 256, 65_535] {
        round_trip(Symbol::from("y".repeat(len).as_str()));
    }
}

#[test]
fn symbol_arrays() {
    round_trip(vec![Symbol::from("amqp:link:detach-forced")]);
    round_trip(vec![
        Symbol::from("en-US"),
        Symbol::from("de-DE"),
        Symbol::from("fr-FR"),
    ]);

    // one long symbol forces the whole array into the Sym32 element code
    round_trip(vec![
        Symbol::from("short"),
        Symbol::from("l".repeat(256).as_str()),
    ]);
}

#[test]
fn mixed_lists() {
    round_trip(vec![
        Value::Bool(false),
        Value::Ulong(12),
        Value::Long(-3),
        Value::from("text"),
        Value::Null,
        Value::Timestamp(Timestamp::from_milliseconds(1_000)),
        Value::Binary(Bytes::from_static(b"\x00\x01")),
    ]);
}

#[test]
fn maps_with_string_keys() {
    let mut map: OrderedMap<String, Value> = OrderedMap::new();
    map.insert("pi".into(), Value::Ulong(3));
    map.insert("negative".into(), Value::Long(-1));
    map.insert("flag".into(), Value::Bool(true));
    round_trip(map);
}

#[test]
fn maps_with_symbol_keys() {
    let mut map: OrderedMap<Symbol, Value> = OrderedMap::new();
    map.insert(Symbol::from("x-opt-partition"), Value::from("0"));
    map.insert(Symbol::from("x-opt-sequence"), Value::Ulong(77));
    round_trip(map);
}

#[test]
fn maps_with_dynamic_keys() {
    let mut map: OrderedMap<Value, Value> = OrderedMap::new();
    map.insert(Value::Ulong(1), Value::from("one"));
    map.insert(Value::from("two"), Value::Ulong(2));
    map.insert(Value::Binary(Bytes::from_static(b"tag")), Value::Null);
    round_trip(map);
}

#[test]
fn large_maps_take_the_map32_variant() {
    let mut map: OrderedMap<String, u64> = OrderedMap::new();
    for i in 0..200u64 {
        map.insert(format!("key-{i:04}"), i);
    }
    let buf = to_vec(&map).unwrap();
    assert_eq!(buf[0], 0xd1);
    let decoded: OrderedMap<String, u64> = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded, map);
}

#[test]
fn map8_wire_layout() {
    let mut map: OrderedMap<String, bool> = OrderedMap::new();
    map.insert("a".into(), true);
    map.insert("b".into(), false);
    let buf = to_vec(&map).unwrap();
    // declared size 0x09: the count byte plus the 8-byte body
    assert_eq!(
        buf,
        vec![0xc1, 0x09, 0x04, 0xa1, 0x01, 0x61, 0x41, 0xa1, 0x01, 0x62, 0x42]
    );
}
