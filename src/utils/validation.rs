use crate::utils::error::{Result, RouteError};
use ads::AmsNetId;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_net_id(field_name: &str, value: &str) -> Result<AmsNetId> {
    value
        .parse::<AmsNetId>()
        .map_err(|_| RouteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "expected six dot-separated octets, e.g. 192.168.0.1.1.1".to_string(),
        })
}

pub fn validate_host(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('\0') {
        return Err(RouteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Host contains null bytes".to_string(),
        });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(RouteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Host cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RouteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
