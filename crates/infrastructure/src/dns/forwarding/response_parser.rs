use crate::dns::ecs::{extract_a_addresses, find_subnet};
use bytes::Bytes;
use ecskit_domain::{ClientSubnet, DomainError};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use std::net::Ipv4Addr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    /// A record addresses in answer order.
    pub addresses: Vec<Ipv4Addr>,

    pub min_ttl: Option<u32>,

    /// ECS option echoed back by the server, if any.
    pub client_subnet: Option<ClientSubnet>,

    pub message: Message,

    /// Raw wire bytes of the DNS response.
    pub raw_bytes: Bytes,
}

impl DnsResponse {
    /// A successful response with an empty answer section. Queries never
    /// count as NODATA.
    pub fn is_nodata(&self) -> bool {
        self.message.message_type() == MessageType::Response
            && self.rcode == ResponseCode::NoError
            && self.message.answers().is_empty()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses DNS response from owned bytes (zero-copy for raw_bytes).
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let min_ttl = message.answers().iter().map(|record| record.ttl()).min();
        let addresses = extract_a_addresses(Some(&message));
        let client_subnet = find_subnet(Some(&message));

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            ecs = ?client_subnet.map(|s| s.to_string()),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            addresses,
            min_ttl,
            client_subnet,
            message,
            raw_bytes: response_bytes,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_invalid_message() {
        let result = ResponseParser::parse(&[0x12, 0x34, 0x81]);
        assert!(matches!(result, Err(DomainError::InvalidDnsMessage(_))));
    }

    #[test]
    fn test_rcode_status_names() {
        assert_eq!(ResponseParser::rcode_to_status(ResponseCode::NoError), "NOERROR");
        assert_eq!(ResponseParser::rcode_to_status(ResponseCode::NXDomain), "NXDOMAIN");
        assert_eq!(ResponseParser::rcode_to_status(ResponseCode::BADCOOKIE), "UNKNOWN");
    }
}
