//! Answer-record extraction and EDNS Client Subnet handling on top of
//! `hickory-proto` messages.

pub mod extractor;
pub mod subnet_codec;

pub use extractor::{extract_a, extract_a_addresses};
pub use subnet_codec::{
    apply_subnet, find_subnet, format_subnet, from_edns_option, to_edns_option,
    DEFAULT_EDNS_PAYLOAD,
};
