//! Wire vectors and round trips for the protocol-control composites

use amqp_codec::definitions::{self, Fields, ReceiverSettleMode, Role, SenderSettleMode};
use amqp_codec::error::Error;
use amqp_codec::messaging::{Accepted, DeliveryState, Received, Source, Target};
use amqp_codec::performatives::{
    Attach, Begin, Close, Detach, Disposition, End, Flow, Open, Transfer,
};
use amqp_codec::primitives::{Milliseconds, OrderedMap, Symbol};
use amqp_codec::value::Value;
use amqp_codec::{decode, from_slice, to_vec, SliceReader};

fn round_trip<T>(value: T)
where
    T: amqp_codec::Encode + amqp_codec::Decode + Default + PartialEq + std::fmt::Debug,
{
    let buf = to_vec(&value).unwrap();
    let decoded: T = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn open_with_one_field_matches_the_wire_vector() {
    let open = Open {
        container_id: "container-1".into(),
        ..Default::default()
    };
    let buf = to_vec(&open).unwrap();

    let mut expected = vec![0x00, 0x53, 0x10, 0xc0, 0x0e, 0x01, 0xa1, 0x0b];
    expected.extend_from_slice(b"container-1");
    assert_eq!(buf, expected);

    let decoded: Open = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded, open);
}

#[test]
fn open_round_trips_fully_populated() {
    let mut properties = Fields::new();
    properties.insert(Symbol::from("product"), Value::from("amqp-codec"));

    round_trip(Open {
        container_id: "client-42".into(),
        hostname: Some("broker.example.com".into()),
        max_frame_size: 65_536,
        channel_max: 255,
        idle_time_out: Some(Milliseconds::from_millis(30_000)),
        outgoing_locales: Some(vec![Symbol::from("en-US")]),
        incoming_locales: Some(vec![Symbol::from("en-US"), Symbol::from("de-DE")]),
        offered_capabilities: Some(vec![Symbol::from("ANONYMOUS-RELAY")]),
        desired_capabilities: None,
        properties: Some(properties),
    });
}

#[test]
fn open_decode_applies_declared_defaults() {
    // only container-id and hostname on the wire
    let open = Open {
        container_id: "c".into(),
        hostname: Some("h".into()),
        ..Default::default()
    };
    let buf = to_vec(&open).unwrap();

    // a dirty sink shows that the defaults come from the null handlers, not
    // from the sink's starting state
    let mut sink = Open {
        max_frame_size: 0,
        channel_max: 0,
        ..Default::default()
    };
    let mut reader = SliceReader::new(&buf);
    let null = decode(&mut reader, &mut sink).unwrap();
    assert!(!null);
    assert_eq!(sink.max_frame_size, u32::MAX);
    assert_eq!(sink.channel_max, u16::MAX);
    assert_eq!(sink.container_id, "c");
    assert_eq!(sink.hostname.as_deref(), Some("h"));
}

#[test]
fn open_without_container_id_is_rejected() {
    let buf = [0x00, 0x53, 0x10, 0x45];
    let err = from_slice::<Open>(&buf).unwrap_err();
    assert_eq!(err.to_string(), "container-id is required");
}

#[test]
fn begin_round_trips() {
    round_trip(Begin {
        remote_channel: Some(5),
        next_outgoing_id: 1,
        incoming_window: 2_048,
        outgoing_window: 2_048,
        handle_max: 31,
        ..Default::default()
    });
}

#[test]
fn begin_requires_its_windows() {
    let buf = [0x00, 0x53, 0x11, 0x45];
    let err = from_slice::<Begin>(&buf).unwrap_err();
    assert!(matches!(err, Error::Required("next-outgoing-id")));

    // explicit nulls trip the same policy
    let buf = [0x00, 0x53, 0x11, 0xc0, 0x03, 0x02, 0x40, 0x40];
    let err = from_slice::<Begin>(&buf).unwrap_err();
    assert!(matches!(err, Error::Required("next-outgoing-id")));
}

#[test]
fn attach_round_trips_with_terminus_and_unsettled() {
    let mut unsettled: OrderedMap<Value, DeliveryState> = OrderedMap::new();
    unsettled.insert(
        Value::Binary(bytes::Bytes::from_static(b"\x00\x00\x00\x01")),
        DeliveryState::Received(Received {
            section_number: 1,
            section_offset: 128,
        }),
    );

    round_trip(Attach {
        name: "sender-link-1".into(),
        handle: 0,
        role: Role::Sender,
        snd_settle_mode: SenderSettleMode::Settled,
        rcv_settle_mode: ReceiverSettleMode::First,
        source: Some(Source {
            address: Some("queue-a".into()),
            ..Default::default()
        }),
        target: Some(Target {
            address: Some("queue-b".into()),
            durable: 1,
            ..Default::default()
        }),
        unsettled: Some(unsettled),
        incomplete_unsettled: false,
        initial_delivery_count: Some(0),
        max_message_size: Some(1_048_576),
        ..Default::default()
    });
}

#[test]
fn flow_round_trips() {
    round_trip(Flow {
        next_incoming_id: Some(10),
        incoming_window: 100,
        next_outgoing_id: 11,
        outgoing_window: 100,
        handle: Some(0),
        delivery_count: Some(3),
        link_credit: Some(50),
        available: None,
        drain: true,
        echo: false,
        properties: None,
    });
}

#[test]
fn transfer_round_trips_with_a_delivery_state() {
    round_trip(Transfer {
        handle: 2,
        delivery_id: Some(41),
        delivery_tag: Some(bytes::Bytes::from_static(b"\x01\x02\x03\x04")),
        message_format: Some(0),
        settled: Some(false),
        more: true,
        rcv_settle_mode: Some(ReceiverSettleMode::Second),
        state: Some(DeliveryState::Accepted(Accepted {})),
        ..Default::default()
    });
}

#[test]
fn disposition_round_trips() {
    round_trip(Disposition {
        role: Role::Receiver,
        first: 41,
        last: Some(45),
        settled: true,
        state: Some(DeliveryState::Accepted(Accepted {})),
        batchable: false,
    });
}

#[test]
fn detach_round_trips_with_an_error() {
    round_trip(Detach {
        handle: 2,
        closed: true,
        error: Some(definitions::Error::new(
            "amqp:link:detach-forced",
            Some("the broker is shutting down".into()),
            None,
        )),
    });
}

#[test]
fn empty_end_matches_the_wire_vector() {
    let buf = to_vec(&End::default()).unwrap();
    assert_eq!(buf, vec![0x00, 0x53, 0x17, 0x45]);

    let decoded: End = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded, End::default());
}

#[test]
fn close_round_trips() {
    round_trip(Close { error: None });
    round_trip(Close {
        error: Some(definitions::Error::new(
            "amqp:connection:forced",
            None,
            None,
        )),
    });
}

#[test]
fn decoding_the_wrong_performative_is_rejected() {
    let buf = to_vec(&End::default()).unwrap();
    let err = from_slice::<Close>(&buf).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidDescriptor {
            found: 0x17,
            ..
        }
    ));
}

#[test]
fn null_performative_decodes_as_none() {
    let open: Option<Open> = from_slice(&[0x40]).unwrap();
    assert_eq!(open, None);
}
