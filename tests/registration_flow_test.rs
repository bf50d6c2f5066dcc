use ads::AmsNetId;
use plc_route::core::{RouteRegistrar, RouteRequest};
use plc_route::utils::error::ErrorSeverity;
use plc_route::utils::validation::Validate;
use plc_route::{CliConfig, RegistrationJob, Result, RouteError};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct RecordingRegistrar {
    calls: Arc<Mutex<Vec<RouteRequest>>>,
}

impl RecordingRegistrar {
    fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<RouteRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl RouteRegistrar for RecordingRegistrar {
    fn register(&self, request: &RouteRequest) -> Result<()> {
        self.calls.lock().unwrap().push(request.clone());
        Ok(())
    }
}

struct UnreachableRegistrar;

impl RouteRegistrar for UnreachableRegistrar {
    fn register(&self, _request: &RouteRequest) -> Result<()> {
        Err(RouteError::RegistrationError {
            message: "no reply from 10.0.0.5:48899".to_string(),
        })
    }
}

fn example_config() -> CliConfig {
    CliConfig {
        route_name: "R1".to_string(),
        sender_ams: "5.1.2.3.1.1".to_string(),
        route_dest: "HOST1".to_string(),
        plc_username: "Administrator".to_string(),
        plc_password: "pw".to_string(),
        plc_ip: "10.0.0.5".to_string(),
        verbose: false,
    }
}

#[test]
fn test_end_to_end_registration_with_cli_config() {
    let config = example_config();
    config.validate().unwrap();

    let registrar = RecordingRegistrar::new();
    let job = RegistrationJob::new(registrar.clone(), config);

    job.run().unwrap();

    // 外部呼叫必須剛好發生一次,六個值原樣對應
    let calls = registrar.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].route_name, "R1");
    assert_eq!(calls[0].sender_net_id, AmsNetId::new(5, 1, 2, 3, 1, 1));
    assert_eq!(calls[0].destination_host, "HOST1");
    assert_eq!(calls[0].target_ip, "10.0.0.5");
    assert_eq!(calls[0].username, "Administrator");
    assert_eq!(calls[0].password, "pw");
}

#[test]
fn test_validation_rejects_malformed_sender_ams() {
    let mut config = example_config();
    config.sender_ams = "10.0.0.5".to_string(); // IP 位址不是 AmsNetId

    let result = config.validate();

    assert!(matches!(
        result,
        Err(RouteError::InvalidConfigValueError { .. })
    ));
}

#[test]
fn test_validation_rejects_empty_values() {
    let mut config = example_config();
    config.plc_password = "".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_registrar_failure_propagates() {
    let job = RegistrationJob::new(UnreachableRegistrar, example_config());

    let err = job.run().unwrap_err();

    assert_eq!(err.severity(), ErrorSeverity::High);
    assert!(err.to_string().contains("no reply"));
}
