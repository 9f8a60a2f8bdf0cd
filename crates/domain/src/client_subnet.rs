use crate::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use tracing::debug;

/// Address family numbers carried in the ECS option (IANA registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AddressFamily {
    Ipv4 = 1,
    Ipv6 = 2,
}

impl AddressFamily {
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Address width in bits, which is also the longest valid prefix.
    pub fn max_prefix(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// EDNS Client Subnet descriptor (RFC 7871).
///
/// The family always matches the address variant and the netmask never
/// exceeds the address width; both are enforced by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientSubnet {
    address: IpAddr,
    source_netmask: u8,
    family: AddressFamily,
}

impl ClientSubnet {
    pub fn new(address: IpAddr, source_netmask: u8) -> Result<Self, DomainError> {
        let family = AddressFamily::of(&address);
        if source_netmask > family.max_prefix() {
            return Err(DomainError::InvalidCidr(format!(
                "{}/{}",
                address, source_netmask
            )));
        }

        Ok(Self {
            address,
            source_netmask,
            family,
        })
    }

    /// Descriptor covering exactly one host (/32 or /128).
    pub fn host(address: IpAddr) -> Self {
        let family = AddressFamily::of(&address);
        Self {
            address,
            source_netmask: family.max_prefix(),
            family,
        }
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn source_netmask(&self) -> u8 {
        self.source_netmask
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// First address of the network, with host bits cleared.
    pub fn network_address(&self) -> IpAddr {
        match IpNetwork::new(self.address, self.source_netmask) {
            Ok(network) => network.network(),
            Err(_) => self.address,
        }
    }

}

impl fmt::Display for ClientSubnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.source_netmask)
    }
}

impl FromStr for ClientSubnet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_subnet(s)?.ok_or_else(|| DomainError::InvalidAddress(s.to_string()))
    }
}

/// Parses an IP address or CIDR string into a client subnet.
///
/// An empty string means "no subnet configured" and yields `Ok(None)`.
/// Input containing `/` is parsed as CIDR and keeps the address exactly as
/// written (host bits are not cleared); anything else must be a bare IPv4 or
/// IPv6 address and gets a full-length netmask.
pub fn parse_subnet(s: &str) -> Result<Option<ClientSubnet>, DomainError> {
    if s.is_empty() {
        return Ok(None);
    }

    let subnet = if s.contains('/') {
        parse_cidr(s)?
    } else {
        parse_bare_address(s)?
    };

    debug!(
        input = s,
        address = %subnet.address,
        netmask = subnet.source_netmask,
        family = subnet.family.as_u16(),
        "Client subnet parsed"
    );

    Ok(Some(subnet))
}

fn parse_cidr(s: &str) -> Result<ClientSubnet, DomainError> {
    let invalid = || DomainError::InvalidCidr(s.to_string());

    let (addr_part, prefix_part) = s.split_once('/').ok_or_else(invalid)?;

    // ipnetwork accepts abbreviated IPv4 ("10/8") and signed prefixes
    if addr_part.parse::<IpAddr>().is_err()
        || prefix_part.is_empty()
        || !prefix_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let network: IpNetwork = s.parse().map_err(|_| invalid())?;

    // A mapped address is carried as IPv4, so its declared prefix must fit 32 bits
    let address = match network.ip() {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(IpAddr::V6(v6), IpAddr::V4),
        v4 => v4,
    };

    ClientSubnet::new(address, network.prefix()).map_err(|_| invalid())
}

fn parse_bare_address(s: &str) -> Result<ClientSubnet, DomainError> {
    let address: IpAddr = s
        .parse()
        .map_err(|_| DomainError::InvalidAddress(s.to_string()))?;

    let address = match address {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(address, IpAddr::V4),
        v4 => v4,
    };

    Ok(ClientSubnet::host(address))
}
