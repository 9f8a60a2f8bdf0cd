use ecskit_domain::ClientSubnet;
use hickory_proto::op::{Edns, Message};
use hickory_proto::rr::rdata::opt::{
    ClientSubnet as EdnsClientSubnet, EdnsCode, EdnsOption, OPT,
};
use hickory_proto::rr::RData;
use tracing::debug;

/// EDNS UDP payload size advertised when a message gets its first OPT record.
pub const DEFAULT_EDNS_PAYLOAD: u16 = 4096;

/// Formats the first ECS option of the message as `address/source_prefix`.
///
/// Returns an empty string when there is no message, no OPT record or no
/// ECS option. Formatting uses the option exactly as carried, without
/// validating the prefix against the address width.
pub fn format_subnet(message: Option<&Message>) -> String {
    message
        .and_then(first_subnet_option)
        .map(|ecs| format!("{}/{}", ecs.addr(), ecs.source_prefix()))
        .unwrap_or_default()
}

/// Returns the first ECS option of the message as a validated descriptor.
///
/// An option whose prefix exceeds its address width is reported as absent.
pub fn find_subnet(message: Option<&Message>) -> Option<ClientSubnet> {
    let ecs = message.and_then(first_subnet_option)?;
    from_edns_option(ecs)
}

pub fn from_edns_option(ecs: &EdnsClientSubnet) -> Option<ClientSubnet> {
    match ClientSubnet::new(ecs.addr(), ecs.source_prefix()) {
        Ok(subnet) => Some(subnet),
        Err(e) => {
            debug!(error = %e, "Ignoring malformed client subnet option");
            None
        }
    }
}

/// Builds the EDNS option for a subnet; the scope prefix is always 0 in
/// queries (RFC 7871 section 6).
pub fn to_edns_option(subnet: &ClientSubnet) -> EdnsOption {
    EdnsOption::Subnet(EdnsClientSubnet::new(
        subnet.address(),
        subnet.source_netmask(),
        0,
    ))
}

/// Puts the subnet into the message's EDNS options, replacing any ECS
/// option already present. EDNS is created when the message has none.
pub fn apply_subnet(message: &mut Message, subnet: &ClientSubnet) {
    let option = to_edns_option(subnet);

    match message.extensions_mut() {
        Some(edns) => {
            let options = edns.options_mut();
            options.remove(EdnsCode::Subnet);
            options.insert(option);
        }
        None => {
            let mut edns = Edns::new();
            edns.set_max_payload(DEFAULT_EDNS_PAYLOAD);
            edns.set_version(0);
            edns.options_mut().insert(option);
            message.set_edns(edns);
        }
    }

    debug!(subnet = %subnet, "Client subnet attached to message");
}

/// Walks the additional section in order: the decoded EDNS record first,
/// then any raw OPT records still sitting among the additionals.
fn first_subnet_option(message: &Message) -> Option<&EdnsClientSubnet> {
    let decoded = message.extensions().iter().map(Edns::options);
    let raw = message.additionals().iter().filter_map(|record| match record.data() {
        RData::OPT(opt) => Some(opt),
        _ => None,
    });

    decoded.chain(raw).find_map(subnet_in)
}

fn subnet_in(opt: &OPT) -> Option<&EdnsClientSubnet> {
    match opt.get(EdnsCode::Subnet) {
        Some(EdnsOption::Subnet(ecs)) => Some(ecs),
        _ => None,
    }
}
