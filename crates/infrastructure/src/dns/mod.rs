pub mod ecs;
pub mod forwarding;

pub use ecs::{apply_subnet, extract_a, find_subnet, format_subnet};
pub use forwarding::{DnsResponse, MessageBuilder, ResponseParser};
