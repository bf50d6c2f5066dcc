use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "plc-route")]
#[command(about = "Add an ADS route to a remote TwinCAT PLC")]
pub struct CliConfig {
    /// Name of the new route on the remote TwinCAT system
    #[arg(long = "route_name")]
    pub route_name: String,

    /// AmsNetId the added route will accept connections from
    #[arg(long = "sender_ams")]
    pub sender_ams: String,

    /// Hostname or IP address registered as the route destination
    #[arg(long = "route_dest")]
    pub route_dest: String,

    /// User on the remote TwinCAT system
    #[arg(long = "plc_username")]
    pub plc_username: String,

    /// Password for the user on the remote TwinCAT system
    #[arg(long = "plc_password")]
    pub plc_password: String,

    /// IP address of the PLC receiving the route
    #[arg(long = "plc_ip")]
    pub plc_ip: String,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn route_name(&self) -> &str {
        &self.route_name
    }

    fn sender_ams(&self) -> &str {
        &self.sender_ams
    }

    fn route_dest(&self) -> &str {
        &self.route_dest
    }

    fn plc_username(&self) -> &str {
        &self.plc_username
    }

    fn plc_password(&self) -> &str {
        &self.plc_password
    }

    fn plc_ip(&self) -> &str {
        &self.plc_ip
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("route_name", &self.route_name)?;
        validation::validate_non_empty_string("plc_username", &self.plc_username)?;
        validation::validate_non_empty_string("plc_password", &self.plc_password)?;
        validation::validate_host("route_dest", &self.route_dest)?;
        validation::validate_host("plc_ip", &self.plc_ip)?;
        validation::parse_net_id("sender_ams", &self.sender_ams)?;

        Ok(())
    }
}

// 密碼不進日誌
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("route_name", &self.route_name)
            .field("sender_ams", &self.sender_ams)
            .field("route_dest", &self.route_dest)
            .field("plc_username", &self.plc_username)
            .field("plc_password", &"***")
            .field("plc_ip", &self.plc_ip)
            .field("verbose", &self.verbose)
            .finish()
    }
}
