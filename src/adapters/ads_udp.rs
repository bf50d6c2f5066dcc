use crate::domain::model::RouteRequest;
use crate::domain::ports::RouteRegistrar;
use crate::utils::error::Result;

/// 透過 ADS UDP 服務在遠端 TwinCAT 系統上登錄路由
pub struct AdsRouteRegistrar {
    udp_port: u16,
}

impl AdsRouteRegistrar {
    pub fn new() -> Self {
        Self {
            udp_port: ads::UDP_PORT,
        }
    }
}

impl Default for AdsRouteRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRegistrar for AdsRouteRegistrar {
    fn register(&self, request: &RouteRequest) -> Result<()> {
        tracing::debug!(
            "Sending AddRoute request to {}:{}",
            request.target_ip,
            self.udp_port
        );

        ads::udp::add_route(
            (request.target_ip.as_str(), self.udp_port),
            request.sender_net_id,
            &request.destination_host,
            Some(request.route_name.as_str()),
            Some(request.username.as_str()),
            Some(request.password.as_str()),
            false, // permanent route
        )?;

        Ok(())
    }
}
