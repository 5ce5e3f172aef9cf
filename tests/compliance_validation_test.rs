mod common;

use anyhow::Result;
use carrier_payload::{build_carrier_payload, validate_shipment, ComplianceError};

#[test]
fn test_compliant_order_passes() {
    assert!(validate_shipment(&common::order()).is_empty());
}

#[test]
fn test_missing_hs_code_is_reported_and_blocks_build() {
    let mut order = common::order();
    order.items[0].hs_code = None;

    let messages = validate_shipment(&order);
    assert!(messages.iter().any(|m| m.contains("HS Code is required")));

    let result = build_carrier_payload(&order, &common::account_config());
    assert!(matches!(result, Err(ComplianceError::Validation { .. })));
}

#[test]
fn test_missing_sender_phone_is_reported() {
    let mut order = common::order();
    order.sender.phone = None;

    let messages = validate_shipment(&order);
    assert!(messages.iter().any(|m| m.contains("Shipper: Phone is required")));
}

#[test]
fn test_receiver_requirements_mirror_sender() {
    let mut order = common::order();
    order.receiver.contact_person = None;
    order.receiver.phone = Some(String::new());
    order.receiver.street_lines.clear();
    order.receiver.city = None;
    order.receiver.country_code = None;

    assert_eq!(
        validate_shipment(&order),
        vec![
            "Receiver: Contact person is required",
            "Receiver: Phone is required",
            "Receiver: Street address is required",
            "Receiver: City is required",
            "Receiver: Country is required",
        ]
    );
}

#[test]
fn test_build_error_carries_every_message() -> Result<()> {
    let mut order = common::order();
    order.sender.phone = None;
    order.items.push(carrier_payload::domain::model::Item {
        hs_code: None,
        ..common::item()
    });
    order.packages.clear();

    let error = match build_carrier_payload(&order, &common::account_config()) {
        Ok(_) => anyhow::bail!("expected the build to be rejected"),
        Err(e) => e,
    };

    assert_eq!(
        error.messages(),
        vec![
            "Shipper: Phone is required".to_string(),
            "At least one package is required".to_string(),
            "Item 2: HS Code is required".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_missing_hs_code_is_never_defaulted() {
    let mut order = common::order();
    order.items[0].hs_code = Some(" - ".to_string());

    assert!(build_carrier_payload(&order, &common::account_config()).is_err());
}

#[test]
fn test_validation_is_repeatable() {
    let mut order = common::order();
    order.currency = None;
    order.dangerous_goods.contains = true;

    let first = validate_shipment(&order);
    let second = validate_shipment(&order);
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec!["Currency is required", "Dangerous Goods: UN code is required"]
    );
}
