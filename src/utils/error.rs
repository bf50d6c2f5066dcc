use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("ADS route exchange failed: {0}")]
    AdsError(#[from] ads::Error),

    #[error("Route registration failed: {message}")]
    RegistrationError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RouteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RouteError::AdsError(_) | RouteError::RegistrationError { .. } => {
                ErrorCategory::Network
            }
            RouteError::InvalidConfigValueError { .. } | RouteError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RouteError::AdsError(_) | RouteError::RegistrationError { .. } => ErrorSeverity::High,
            RouteError::InvalidConfigValueError { .. } | RouteError::MissingConfigError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RouteError::AdsError(e) => {
                format!("The PLC rejected or never answered the route request: {}", e)
            }
            RouteError::RegistrationError { message } => {
                format!("Route registration failed: {}", message)
            }
            RouteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option --{} is not usable: {}", field, reason)
            }
            RouteError::MissingConfigError { field } => {
                format!("Option --{} is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RouteError::AdsError(_) | RouteError::RegistrationError { .. } => {
                "Check that the PLC is reachable, UDP port 48899 is not filtered and the credentials are valid"
                    .to_string()
            }
            RouteError::InvalidConfigValueError { .. } | RouteError::MissingConfigError { .. } => {
                "Run with --help to review the expected option formats".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
