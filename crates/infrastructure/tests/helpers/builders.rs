#![allow(dead_code)]
use hickory_proto::op::{Edns, Message, MessageType, OpCode};
use hickory_proto::rr::rdata::opt::{ClientSubnet as EdnsClientSubnet, EdnsOption, OPT};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

/// Builder for in-memory DNS messages used across the codec tests
pub struct MessageFixture {
    message: Message,
}

impl MessageFixture {
    pub fn response() -> Self {
        Self {
            message: Message::new(0x1234, MessageType::Response, OpCode::Query),
        }
    }

    pub fn query() -> Self {
        Self {
            message: Message::new(0x4321, MessageType::Query, OpCode::Query),
        }
    }

    pub fn a(mut self, owner: &str, ip: [u8; 4]) -> Self {
        self.message.add_answer(a_record(owner, Ipv4Addr::from(ip)));
        self
    }

    pub fn aaaa(mut self, owner: &str, ip: &str) -> Self {
        let ip: Ipv6Addr = ip.parse().unwrap();
        self.message
            .add_answer(Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip))));
        self
    }

    pub fn cname(mut self, owner: &str, target: &str) -> Self {
        self.message.add_answer(Record::from_rdata(
            name(owner),
            300,
            RData::CNAME(CNAME(name(target))),
        ));
        self
    }

    pub fn txt(mut self, owner: &str, text: &str) -> Self {
        self.message.add_answer(Record::from_rdata(
            name(owner),
            300,
            RData::TXT(TXT::new(vec![text.to_string()])),
        ));
        self
    }

    /// Decoded-style EDNS carrying a client subnet option
    pub fn edns_subnet(mut self, addr: &str, prefix: u8) -> Self {
        let mut edns = Edns::new();
        edns.set_max_payload(1232);
        edns.options_mut().insert(subnet_option(addr, prefix));
        self.message.set_edns(edns);
        self
    }

    /// Decoded-style EDNS without any option
    pub fn edns_empty(mut self) -> Self {
        self.message.set_edns(Edns::new());
        self
    }

    /// Raw OPT record placed among the additionals
    pub fn raw_opt(mut self, options: Vec<EdnsOption>) -> Self {
        let mut opt = OPT::default();
        for option in options {
            opt.insert(option);
        }
        self.message
            .add_additional(Record::from_rdata(Name::root(), 0, RData::OPT(opt)));
        self
    }

    pub fn additional_a(mut self, owner: &str, ip: [u8; 4]) -> Self {
        self.message
            .add_additional(a_record(owner, Ipv4Addr::from(ip)));
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn subnet_option(addr: &str, prefix: u8) -> EdnsOption {
    let addr: IpAddr = addr.parse().unwrap();
    EdnsOption::Subnet(EdnsClientSubnet::new(addr, prefix, 0))
}
