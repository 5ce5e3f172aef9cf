pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, AccountConfig};
pub use crate::core::compiler::PayloadCompiler;
pub use domain::model::ShipmentOrder;
pub use domain::payload::CarrierPayload;
pub use utils::error::{ComplianceError, Result};

/// Compliance check only. An empty list means the shipment can be booked.
pub fn validate_shipment(order: &ShipmentOrder) -> Vec<String> {
    crate::core::validator::validate(order)
}

/// Validates and compiles the carrier booking payload, numbering the
/// invoice from the current timestamp.
pub fn build_carrier_payload(
    order: &ShipmentOrder,
    account_config: &AccountConfig,
) -> Result<CarrierPayload> {
    PayloadCompiler::new(account_config).build(order)
}
