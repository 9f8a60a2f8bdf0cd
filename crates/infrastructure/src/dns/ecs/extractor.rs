use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use std::net::Ipv4Addr;

/// Returns the A records of the answer section, in message order.
///
/// Records of any other type are skipped. A missing message yields an empty
/// list rather than an error.
pub fn extract_a(message: Option<&Message>) -> Vec<&Record> {
    let Some(message) = message else {
        return Vec::new();
    };

    message
        .answers()
        .iter()
        .filter(|record| matches!(record.data(), RData::A(_)))
        .collect()
}

/// Addresses of the records returned by [`extract_a`], same order.
pub fn extract_a_addresses(message: Option<&Message>) -> Vec<Ipv4Addr> {
    extract_a(message)
        .into_iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(a.0),
            _ => None,
        })
        .collect()
}
