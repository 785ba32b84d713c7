//! Round trips for message sections and delivery states

use bytes::Bytes;

use amqp_codec::definitions;
use amqp_codec::messaging::{
    Accepted, AmqpSequence, AmqpValue, Annotations, ApplicationProperties, Data,
    DeliveryAnnotations, DeliveryState, Footer, Header, MessageAnnotations, Modified, Outcome,
    Properties, Received, Rejected, Released, Source, Target,
};
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

fn annotations() -> Annotations {
    let mut map = Annotations::new();
    map.insert(Symbol::from("x-opt-via"), Value::from("intermediary-2"));
    map.insert(Symbol::from("x-opt-hops"), Value::Ulong(2));
    map
}

#[test]
fn header_round_trips() {
    round_trip(Header::default());
    round_trip(Header {
        durable: true,
        priority: 9,
        ttl: Some(Milliseconds::from_millis(60_000)),
        first_acquirer: false,
        delivery_count: 3,
    });
}

#[test]
fn header_defaults_survive_trimming() {
    // all fields at their declared defaults: nothing goes on the wire
    let buf = to_vec(&Header::default()).unwrap();
    assert_eq!(buf, vec![0x00, 0x53, 0x70, 0x45]);

    let decoded: Header = from_slice(&buf).unwrap().unwrap();
    assert_eq!(decoded.priority, 4);
}

#[test]
fn annotation_sections_round_trip() {
    round_trip(DeliveryAnnotations(annotations()));
    round_trip(MessageAnnotations(annotations()));
    round_trip(Footer(annotations()));
}

#[test]
fn annotation_sections_are_described_maps() {
    let buf = to_vec(&MessageAnnotations(annotations())).unwrap();
    assert_eq!(&buf[..3], &[0x00, 0x53, 0x72]);
    assert_eq!(buf[3], 0xc1);
}

#[test]
fn properties_round_trip() {
    round_trip(Properties {
        message_id: Some(Value::Ulong(99)),
        user_id: Some(Bytes::from_static(b"user")),
        to: Some("queue-a".into()),
        subject: Some("status".into()),
        reply_to: Some("replies".into()),
        correlation_id: Some(Value::from("request-7")),
        content_type: Some(Symbol::from("application/json")),
        content_encoding: None,
        absolute_expiry_time: Some(Timestamp::from_milliseconds(1_600_000_000_000)),
        creation_time: Some(Timestamp::from_milliseconds(1_599_999_999_000)),
        group_id: None,
        group_sequence: Some(12),
        reply_to_group_id: None,
    });
}

#[test]
fn application_properties_round_trip() {
    let mut map: OrderedMap<String, Value> = OrderedMap::new();
    map.insert("retries".into(), Value::Ulong(3));
    map.insert("fatal".into(), Value::Bool(false));
    round_trip(ApplicationProperties(map));
}

#[test]
fn data_section_round_trips() {
    round_trip(Data(Bytes::from_static(b"opaque payload")));
}

#[test]
fn amqp_sequence_round_trips() {
    round_trip(AmqpSequence(vec![
        Value::Ulong(1),
        Value::from("two"),
        Value::Bool(true),
    ]));
}

#[test]
fn amqp_value_round_trips() {
    round_trip(AmqpValue(Value::from("hello")));
    round_trip(AmqpValue(Value::Null));
}

#[test]
fn source_and_target_round_trip() {
    round_trip(Source::default());
    round_trip(Source {
        address: Some("topic-1".into()),
        durable: 2,
        expiry_policy: Symbol::from("never"),
        timeout: 30,
        dynamic: false,
        distribution_mode: Some(Symbol::from("copy")),
        default_outcome: Some(Outcome::Released(Released {})),
        outcomes: Some(vec![
            Symbol::from("amqp:accepted:list"),
            Symbol::from("amqp:released:list"),
        ]),
        ..Default::default()
    });

    round_trip(Target::default());
    round_trip(Target {
        address: Some("queue-1".into()),
        dynamic: true,
        ..Default::default()
    });
}

#[test]
fn every_delivery_state_round_trips() {
    round_trip(DeliveryState::Received(Received {
        section_number: 0,
        section_offset: 512,
    }));
    round_trip(DeliveryState::Accepted(Accepted {}));
    round_trip(DeliveryState::Rejected(Rejected {
        error: Some(definitions::Error::new("amqp:decode-error", None, None)),
    }));
    round_trip(DeliveryState::Released(Released {}));
    round_trip(DeliveryState::Modified(Modified {
        delivery_failed: Some(true),
        undeliverable_here: Some(false),
        message_annotations: None,
    }));
}

#[test]
fn empty_outcomes_have_empty_list_bodies() {
    assert_eq!(
        to_vec(&Accepted {}).unwrap(),
        vec![0x00, 0x53, 0x24, 0x45]
    );
    assert_eq!(
        to_vec(&Released {}).unwrap(),
        vec![0x00, 0x53, 0x26, 0x45]
    );
}

#[test]
fn delivery_state_rejects_a_foreign_descriptor() {
    // an Open frame is not a delivery state
    let buf = [0x00, 0x53, 0x10, 0x45];
    assert!(from_slice::<DeliveryState>(&buf).is_err());
}
