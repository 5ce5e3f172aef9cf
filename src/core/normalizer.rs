use crate::domain::model::{
    DimensionUnit, Dimensions, Party, ShipmentOrder, TraderType, Weight, WeightUnit,
};

const KG_PER_LB: f64 = 0.453_592_37;
const CM_PER_INCH: f64 = 2.54;

/// `6109.10.00` → `61091000`
pub fn normalize_hs_code(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn normalize_country_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

pub fn normalize_trader_type(raw: Option<&str>) -> TraderType {
    let Some(raw) = raw else {
        return TraderType::Business;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "private" | "individual" | "person" | "b2c" => TraderType::Private,
        "business" | "company" | "b2b" | "" => TraderType::Business,
        other => {
            tracing::debug!("Unknown trader type '{}', treating as business", other);
            TraderType::Business
        }
    }
}

/// VAT / EORI / tax id：去除空白並轉大寫，空字串視為未提供
pub fn normalize_registration_number(raw: Option<&str>) -> Option<String> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    (!cleaned.is_empty()).then_some(cleaned)
}

/// `"UN 3481"` → `"3481"`, `"id8000"` → `"8000"`。前綴由分類器重新決定。
pub fn normalize_dg_code(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    compact
        .strip_prefix("UN")
        .or_else(|| compact.strip_prefix("ID"))
        .unwrap_or(compact.as_str())
        .to_string()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn weight_in_kg(weight: &Weight) -> f64 {
    let kg = match weight.unit {
        WeightUnit::Kg => weight.value,
        WeightUnit::Lb => weight.value * KG_PER_LB,
    };
    round_to(kg, 3)
}

pub fn dimensions_in_cm(dimensions: &Dimensions) -> (f64, f64, f64) {
    let factor = match dimensions.unit {
        DimensionUnit::Cm => 1.0,
        DimensionUnit::In => CM_PER_INCH,
    };
    (
        round_to(dimensions.length * factor, 2),
        round_to(dimensions.width * factor, 2),
        round_to(dimensions.height * factor, 2),
    )
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn normalize_party(party: &Party) -> Party {
    Party {
        company_name: trimmed(&party.company_name),
        contact_person: trimmed(&party.contact_person),
        phone: trimmed(&party.phone),
        email: trimmed(&party.email),
        street_lines: party
            .street_lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        city: trimmed(&party.city),
        country_code: party.country_code.as_deref().map(normalize_country_code),
        postal_code: trimmed(&party.postal_code),
        vat_number: normalize_registration_number(party.vat_number.as_deref()),
        eori_number: normalize_registration_number(party.eori_number.as_deref()),
        tax_id: normalize_registration_number(party.tax_id.as_deref()),
        trader_type: Some(
            normalize_trader_type(party.trader_type.as_deref())
                .as_str()
                .to_string(),
        ),
        reference: trimmed(&party.reference),
    }
}

/// 回傳正規化後的副本，原訂單不變
pub fn normalize_order(order: &ShipmentOrder) -> ShipmentOrder {
    let mut normalized = order.clone();

    normalized.sender = normalize_party(&order.sender);
    normalized.receiver = normalize_party(&order.receiver);

    for item in &mut normalized.items {
        item.hs_code = item.hs_code.as_deref().map(normalize_hs_code);
        item.country_of_origin = item.country_of_origin.as_deref().map(normalize_country_code);
        item.description = item.description.trim().to_string();
    }

    normalized.currency = order.currency.as_deref().map(|c| c.trim().to_ascii_uppercase());
    normalized.package_marks = trimmed(&order.package_marks);
    normalized.receiver_reference = trimmed(&order.receiver_reference);
    normalized.shipper_account = trimmed(&order.shipper_account);
    normalized.dangerous_goods.code = order
        .dangerous_goods
        .code
        .as_deref()
        .map(normalize_dg_code)
        .filter(|code| !code.is_empty());

    normalized
}
