pub mod http;
pub mod observability;
