pub mod registration;

pub use crate::domain::model::RouteRequest;
pub use crate::domain::ports::{ConfigProvider, RouteRegistrar};
pub use crate::utils::error::Result;
