use anyhow::Context;
use carrier_payload::config::toml_config::TomlConfig;
use carrier_payload::utils::error::{ComplianceError, ErrorCategory};
use carrier_payload::utils::{logger, validation::Validate};
use carrier_payload::{validate_shipment, CliConfig, PayloadCompiler, ShipmentOrder};
use clap::Parser;

fn exit_code(error: &ComplianceError) -> i32 {
    match error.category() {
        ErrorCategory::Compliance => 2,
        ErrorCategory::Configuration => 3,
        ErrorCategory::Input => 1,
    }
}

fn report(error: &ComplianceError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", error, error.category());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(error));
}

fn load_order(config: &CliConfig) -> Result<ShipmentOrder, ComplianceError> {
    let content = std::fs::read_to_string(&config.order)?;
    Ok(serde_json::from_str(&content)?)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(c) => Some(c),
            Err(e) => report(&e),
        },
        None => None,
    };

    let verbose = config.verbose || file_config.as_ref().is_some_and(TomlConfig::verbose);
    if file_config.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting carrier-payload CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report(&e);
    }

    let order = load_order(&config).unwrap_or_else(|e| report(&e));

    if config.validate_only {
        let messages = validate_shipment(&order);
        if messages.is_empty() {
            println!("✅ Shipment is compliant");
            return Ok(());
        }
        report(&ComplianceError::validation(messages));
    }

    let accounts = config
        .resolve_accounts(file_config.as_ref())
        .unwrap_or_else(|e| report(&e));

    let payload = PayloadCompiler::new(accounts)
        .build(&order)
        .unwrap_or_else(|e| report(&e));

    let json = if config.pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    }
    .context("failed to serialize carrier payload")?;

    println!("{}", json);
    Ok(())
}
