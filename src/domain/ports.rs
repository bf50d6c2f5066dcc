use crate::domain::model::RouteRequest;
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn route_name(&self) -> &str;
    fn sender_ams(&self) -> &str;
    fn route_dest(&self) -> &str;
    fn plc_username(&self) -> &str;
    fn plc_password(&self) -> &str;
    fn plc_ip(&self) -> &str;
}

pub trait RouteRegistrar: Send + Sync {
    fn register(&self, request: &RouteRequest) -> Result<()>;
}
