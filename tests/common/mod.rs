#![allow(dead_code)]

use carrier_payload::domain::model::{
    DangerousGoodsDeclaration, Dimensions, Item, Package, Party, ShipmentOrder, Weight,
};
use carrier_payload::AccountConfig;

pub const ACCOUNT_NUMBER: &str = "960000001";

pub fn account_config() -> AccountConfig {
    AccountConfig::new(ACCOUNT_NUMBER)
}

pub fn sender() -> Party {
    Party {
        company_name: Some("Nordlicht Textil GmbH".to_string()),
        contact_person: Some("Anna Schmidt".to_string()),
        phone: Some("+49 30 1234567".to_string()),
        email: Some("shipping@nordlicht.example".to_string()),
        street_lines: vec!["Hauptstraße 12".to_string()],
        city: Some("Berlin".to_string()),
        country_code: Some("DE".to_string()),
        postal_code: Some("10115".to_string()),
        vat_number: Some("DE123456789".to_string()),
        ..Default::default()
    }
}

pub fn receiver() -> Party {
    Party {
        company_name: Some("Harbour Supplies Ltd".to_string()),
        contact_person: Some("Oliver Brown".to_string()),
        phone: Some("+44 20 7946 0000".to_string()),
        street_lines: vec!["22 Dock Road".to_string(), "Unit 4".to_string()],
        city: Some("London".to_string()),
        country_code: Some("GB".to_string()),
        postal_code: Some("E16 1AA".to_string()),
        ..Default::default()
    }
}

pub fn package() -> Package {
    Package {
        weight: Weight {
            value: 2.4,
            ..Default::default()
        },
        dimensions: Dimensions {
            length: 30.0,
            width: 20.0,
            height: 10.0,
            ..Default::default()
        },
        description: Some("Carton".to_string()),
    }
}

pub fn item() -> Item {
    Item {
        description: "Cotton T-shirt".to_string(),
        hs_code: Some("6109.10.00".to_string()),
        country_of_origin: Some("PT".to_string()),
        quantity: 10,
        unit_value: 8.5,
        net_weight: 2.0,
    }
}

pub fn order() -> ShipmentOrder {
    ShipmentOrder {
        sender: sender(),
        receiver: receiver(),
        packages: vec![package()],
        items: vec![item()],
        service_code: Some("P".to_string()),
        currency: Some("EUR".to_string()),
        export_reason: Some("SALE".to_string()),
        ..Default::default()
    }
}

pub fn dangerous_order(
    code: &str,
    service_code: &str,
    content_id: &str,
    dry_ice_weight: Option<f64>,
) -> ShipmentOrder {
    ShipmentOrder {
        dangerous_goods: DangerousGoodsDeclaration {
            contains: true,
            code: Some(code.to_string()),
            service_code: Some(service_code.to_string()),
            content_id: Some(content_id.to_string()),
            dry_ice_weight,
            ..Default::default()
        },
        ..order()
    }
}
