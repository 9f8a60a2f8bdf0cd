//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`,
//! optionally carrying an EDNS Client Subnet option.

use super::record_type_map::RecordTypeMapper;
use crate::dns::ecs::apply_subnet;
use ecskit_domain::{ClientSubnet, DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use tracing::debug;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        let message = Self::build_message(fastrand::u16(..), domain, record_type, None)?;
        Self::serialize_message(&message)
    }

    /// Build a query carrying an ECS option when `subnet` is given
    ///
    /// Returns the message ID together with the wire bytes.
    pub fn build_query_with_subnet(
        domain: &str,
        record_type: &RecordType,
        subnet: Option<&ClientSubnet>,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let message = Self::build_message(id, domain, record_type, subnet)?;

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Build the query as a `Message`, before serialization
    pub fn build_message(
        id: u16,
        domain: &str,
        record_type: &RecordType,
        subnet: Option<&ClientSubnet>,
    ) -> Result<Message, DomainError> {
        let name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        if let Some(subnet) = subnet {
            apply_subnet(&mut message, subnet);
        }

        debug!(
            id = id,
            domain = domain,
            record_type = %record_type,
            ecs = subnet.is_some(),
            "DNS query built"
        );

        Ok(message)
    }

    /// Serialize a Message to wire format bytes
    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
