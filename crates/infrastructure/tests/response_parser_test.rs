use ecskit_domain::DomainError;
use ecskit_infrastructure::dns::forwarding::{MessageBuilder, ResponseParser};
use hickory_proto::op::ResponseCode;
use std::net::{IpAddr, Ipv4Addr};

mod helpers;
use helpers::MessageFixture;

fn to_wire(fixture: MessageFixture) -> Vec<u8> {
    MessageBuilder::serialize_message(&fixture.build()).unwrap()
}

#[test]
fn test_parse_response_with_a_records_and_subnet() {
    let bytes = to_wire(
        MessageFixture::response()
            .cname("www.example.com.", "example.com.")
            .a("example.com.", [192, 0, 2, 10])
            .a("example.com.", [192, 0, 2, 11])
            .edns_subnet("198.51.100.0", 24),
    );

    let response = ResponseParser::parse(&bytes).unwrap();

    assert_eq!(response.rcode, ResponseCode::NoError);
    assert!(!response.truncated);
    assert_eq!(
        response.addresses,
        vec![Ipv4Addr::new(192, 0, 2, 10), Ipv4Addr::new(192, 0, 2, 11)]
    );
    assert_eq!(response.min_ttl, Some(300));

    let subnet = response.client_subnet.unwrap();
    assert_eq!(subnet.address(), IpAddr::V4(Ipv4Addr::new(198, 51, 100, 0)));
    assert_eq!(subnet.source_netmask(), 24);
    assert_eq!(response.raw_bytes.as_ref(), bytes.as_slice());
}

#[test]
fn test_parse_response_without_edns() {
    let bytes = to_wire(MessageFixture::response().a("example.com.", [10, 0, 0, 1]));

    let response = ResponseParser::parse(&bytes).unwrap();

    assert!(response.client_subnet.is_none());
    assert_eq!(response.addresses.len(), 1);
    assert!(!response.is_nodata());
}

#[test]
fn test_parse_empty_answer_is_nodata() {
    let bytes = to_wire(MessageFixture::response());

    let response = ResponseParser::parse(&bytes).unwrap();

    assert!(response.is_nodata());
    assert_eq!(response.min_ttl, None);
}

#[test]
fn test_parse_truncated_bytes_fails() {
    let bytes = to_wire(MessageFixture::response().a("example.com.", [10, 0, 0, 1]));

    let result = ResponseParser::parse(&bytes[..bytes.len() - 3]);
    assert!(matches!(result, Err(DomainError::InvalidDnsMessage(_))));
}

#[test]
fn test_query_is_never_nodata() {
    let bytes = to_wire(MessageFixture::query().edns_subnet("192.0.2.0", 24));

    let response = ResponseParser::parse(&bytes).unwrap();

    assert!(response.message.answers().is_empty());
    assert!(!response.is_nodata());
    assert_eq!(response.client_subnet.unwrap().to_string(), "192.0.2.0/24");
}
