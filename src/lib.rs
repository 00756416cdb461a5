pub mod api;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

pub use config::*;
pub use domain::*;
pub use models::*;
pub use services::*;
