use crate::core::{ConfigProvider, RouteRegistrar, RouteRequest};
use crate::utils::error::Result;

pub struct RegistrationJob<R: RouteRegistrar, C: ConfigProvider> {
    registrar: R,
    config: C,
}

impl<R: RouteRegistrar, C: ConfigProvider> RegistrationJob<R, C> {
    pub fn new(registrar: R, config: C) -> Self {
        Self { registrar, config }
    }

    pub fn run(&self) -> Result<()> {
        // 從配置組裝路由請求
        let request = RouteRequest::from_config(&self.config)?;
        tracing::debug!("Route request: {:?}", request);

        tracing::debug!(
            "Registering route '{}' for sender {} on PLC {}",
            request.route_name,
            request.sender_net_id,
            request.target_ip
        );

        self.registrar.register(&request)?;

        tracing::debug!("Route '{}' registered", request.route_name);
        Ok(())
    }
}
