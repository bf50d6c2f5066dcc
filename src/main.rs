use clap::Parser;
use plc_route::utils::{logger, validation::Validate};
use plc_route::{AdsRouteRegistrar, CliConfig, RegistrationJob};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting plc-route");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立登錄器並執行單次呼叫
    let registrar = AdsRouteRegistrar::new();
    let job = RegistrationJob::new(registrar, config);

    if let Err(e) = job.run() {
        tracing::error!(
            "❌ Route registration failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            plc_route::utils::error::ErrorSeverity::Low => 0,
            plc_route::utils::error::ErrorSeverity::Medium => 2,
            plc_route::utils::error::ErrorSeverity::High => 1,
            plc_route::utils::error::ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
