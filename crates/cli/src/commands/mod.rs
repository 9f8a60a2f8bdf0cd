pub mod build_query;
pub mod inspect;
pub mod parse_subnet;

pub use build_query::build_query;
pub use inspect::inspect;
pub use parse_subnet::parse_subnet;
