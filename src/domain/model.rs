use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;
use ads::AmsNetId;
use std::fmt;

#[derive(Clone, PartialEq)]
pub struct RouteRequest {
    pub route_name: String,
    pub sender_net_id: AmsNetId,
    pub destination_host: String,
    pub target_ip: String,
    pub username: String,
    pub password: String,
}

impl RouteRequest {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let sender_net_id = validation::parse_net_id("sender_ams", config.sender_ams())?;

        Ok(Self {
            route_name: config.route_name().to_string(),
            sender_net_id,
            destination_host: config.route_dest().to_string(),
            target_ip: config.plc_ip().to_string(),
            username: config.plc_username().to_string(),
            password: config.plc_password().to_string(),
        })
    }
}

// 密碼不進日誌
impl fmt::Debug for RouteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRequest")
            .field("route_name", &self.route_name)
            .field("sender_net_id", &self.sender_net_id)
            .field("destination_host", &self.destination_host)
            .field("target_ip", &self.target_ip)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
