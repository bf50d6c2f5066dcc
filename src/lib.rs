pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ads_udp::AdsRouteRegistrar;
pub use config::CliConfig;
pub use crate::core::registration::RegistrationJob;
pub use utils::error::{Result, RouteError};
