use crate::core::dangerous_goods::{classify, is_dry_ice, un_code};
use crate::core::normalizer::{normalize_dg_code, normalize_hs_code};
use crate::domain::model::{DangerousGoodsDeclaration, Item, Party, ShipmentOrder};
use crate::utils::validation::{is_blank, require_present};

pub const MAX_ITEM_DESCRIPTION_CHARS: usize = 70;

/// 檢查出貨單是否符合承運商規範。不會中途返回：一次收集所有缺漏，
/// 空清單代表可以送出。
pub fn validate(order: &ShipmentOrder) -> Vec<String> {
    let mut messages = Vec::new();

    validate_party(&mut messages, "Shipper", &order.sender);
    validate_party(&mut messages, "Receiver", &order.receiver);
    validate_packages(&mut messages, order);
    validate_items(&mut messages, &order.items);

    if !order.items.is_empty() && is_blank(order.currency.as_deref()) {
        messages.push("Currency is required".to_string());
    }

    if let Some(declaration) = order.dangerous_goods.active() {
        validate_dangerous_goods(&mut messages, declaration);
    }

    messages
}

fn validate_party(messages: &mut Vec<String>, role: &str, party: &Party) {
    require_present(messages, role, "Contact person", party.contact_person.as_deref());
    require_present(messages, role, "Phone", party.phone.as_deref());

    if party.street_lines.iter().all(|line| line.trim().is_empty()) {
        messages.push(format!("{}: Street address is required", role));
    }

    require_present(messages, role, "City", party.city.as_deref());
    require_present(messages, role, "Country", party.country_code.as_deref());
}

fn validate_packages(messages: &mut Vec<String>, order: &ShipmentOrder) {
    if order.packages.is_empty() {
        messages.push("At least one package is required".to_string());
        return;
    }

    for (index, package) in order.packages.iter().enumerate() {
        if package.weight.value <= 0.0 {
            messages.push(format!(
                "Package {}: Weight must be greater than zero",
                index + 1
            ));
        }
    }
}

fn validate_items(messages: &mut Vec<String>, items: &[Item]) {
    if items.is_empty() {
        messages.push("At least one item is required".to_string());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let prefix = format!("Item {}", index + 1);

        let has_hs_code = item
            .hs_code
            .as_deref()
            .map(|code| !normalize_hs_code(code).is_empty())
            .unwrap_or(false);
        if !has_hs_code {
            messages.push(format!("{}: HS Code is required", prefix));
        }

        let description = item.description.trim();
        if description.is_empty() {
            messages.push(format!("{}: Description is required", prefix));
        } else if description.chars().count() > MAX_ITEM_DESCRIPTION_CHARS {
            messages.push(format!(
                "{}: Description must not exceed {} characters",
                prefix, MAX_ITEM_DESCRIPTION_CHARS
            ));
        }

        if item.quantity == 0 {
            messages.push(format!("{}: Quantity must be greater than zero", prefix));
        }

        require_present(
            messages,
            &prefix,
            "Country of origin",
            item.country_of_origin.as_deref(),
        );
    }
}

fn validate_dangerous_goods(messages: &mut Vec<String>, declaration: &DangerousGoodsDeclaration) {
    let code = declaration
        .code
        .as_deref()
        .map(normalize_dg_code)
        .unwrap_or_default();
    if code.is_empty() {
        messages.push("Dangerous Goods: UN code is required".to_string());
        return;
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        messages.push(format!(
            "Dangerous Goods: UN code must be numeric, got '{}'",
            declaration.code.as_deref().unwrap_or_default().trim()
        ));
        return;
    }

    let code = code.as_str();
    let un = un_code(code);

    if classify(code).is_none() {
        if is_blank(declaration.service_code.as_deref()) {
            messages.push(format!("Dangerous Goods: Service code is required for {}", un));
        }
        if is_blank(declaration.content_id.as_deref()) {
            messages.push(format!("Dangerous Goods: Content ID is required for {}", un));
        }
    }

    if is_dry_ice(code) && !declaration.dry_ice_weight.is_some_and(|w| w > 0.0) {
        messages.push(format!("Dangerous Goods: Dry ice weight is required for {}", un));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Package, Weight};

    fn party() -> Party {
        Party {
            contact_person: Some("Anna Schmidt".to_string()),
            phone: Some("+49 30 1234567".to_string()),
            street_lines: vec!["Hauptstr. 1".to_string()],
            city: Some("Berlin".to_string()),
            country_code: Some("DE".to_string()),
            ..Default::default()
        }
    }

    fn order() -> ShipmentOrder {
        ShipmentOrder {
            sender: party(),
            receiver: party(),
            packages: vec![Package {
                weight: Weight {
                    value: 1.0,
                    ..Default::default()
                },
                ..Default::default()
            }],
            items: vec![Item {
                description: "Cotton shirt".to_string(),
                hs_code: Some("6109.10.00".to_string()),
                country_of_origin: Some("PT".to_string()),
                quantity: 1,
                unit_value: 10.0,
                net_weight: 0.2,
            }],
            currency: Some("EUR".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_order_has_no_messages() {
        assert!(validate(&order()).is_empty());
    }

    #[test]
    fn test_missing_sender_phone() {
        let mut order = order();
        order.sender.phone = None;
        assert_eq!(validate(&order), vec!["Shipper: Phone is required".to_string()]);
    }

    #[test]
    fn test_hs_code_without_digits_counts_as_missing() {
        let mut order = order();
        order.items[0].hs_code = Some("..".to_string());
        assert_eq!(validate(&order), vec!["Item 1: HS Code is required".to_string()]);
    }

    #[test]
    fn test_all_deficiencies_are_collected_in_order() {
        let mut order = order();
        order.sender.phone = None;
        order.receiver.city = Some(" ".to_string());
        order.items[0].hs_code = None;
        order.items[0].quantity = 0;

        assert_eq!(
            validate(&order),
            vec![
                "Shipper: Phone is required".to_string(),
                "Receiver: City is required".to_string(),
                "Item 1: HS Code is required".to_string(),
                "Item 1: Quantity must be greater than zero".to_string(),
            ]
        );
    }

    #[test]
    fn test_description_length_limit() {
        let mut order = order();
        order.items[0].description = "x".repeat(71);
        assert_eq!(
            validate(&order),
            vec!["Item 1: Description must not exceed 70 characters".to_string()]
        );
    }

    #[test]
    fn test_dry_ice_requires_weight() {
        let mut order = order();
        order.dangerous_goods = DangerousGoodsDeclaration {
            contains: true,
            code: Some("1845".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate(&order),
            vec!["Dangerous Goods: Dry ice weight is required for UN1845".to_string()]
        );
    }

    #[test]
    fn test_unknown_dangerous_goods_code_requires_carrier_codes() {
        let mut order = order();
        order.dangerous_goods = DangerousGoodsDeclaration {
            contains: true,
            code: Some("2910".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate(&order),
            vec![
                "Dangerous Goods: Service code is required for UN2910".to_string(),
                "Dangerous Goods: Content ID is required for UN2910".to_string(),
            ]
        );
    }

    #[test]
    fn test_prefixed_dangerous_goods_code_is_accepted() {
        let mut order = order();
        order.dangerous_goods = DangerousGoodsDeclaration {
            contains: true,
            code: Some("UN1845".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate(&order),
            vec!["Dangerous Goods: Dry ice weight is required for UN1845".to_string()]
        );

        order.dangerous_goods.dry_ice_weight = Some(2.5);
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn test_non_numeric_dangerous_goods_code_is_rejected() {
        let mut order = order();
        order.dangerous_goods = DangerousGoodsDeclaration {
            contains: true,
            code: Some("LITHIUM".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate(&order),
            vec!["Dangerous Goods: UN code must be numeric, got 'LITHIUM'".to_string()]
        );

        order.dangerous_goods.code = Some("UN".to_string());
        assert_eq!(
            validate(&order),
            vec!["Dangerous Goods: UN code is required".to_string()]
        );
    }

    #[test]
    fn test_inactive_dangerous_goods_are_not_checked() {
        let mut order = order();
        order.dangerous_goods.code = Some("1845".to_string());
        assert!(validate(&order).is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut order = order();
        order.sender.contact_person = None;
        order.packages.clear();
        assert_eq!(validate(&order), validate(&order));
    }
}
