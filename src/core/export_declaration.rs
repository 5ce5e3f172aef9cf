use crate::core::dangerous_goods::ResolvedDangerousGoods;
use crate::domain::model::{Item, ShipmentOrder};
use crate::domain::payload::{
    CommodityCode, ExportDeclaration, Invoice, LineItem, LineItemWeight, Quantity, Reference,
    Remark,
};

pub const CUSTOMER_REFERENCE_TYPE: &str = "CU";
pub const HS_COMMODITY_TYPE: &str = "HS";
pub const PIECES_UNIT: &str = "PCS";

/// 組出報關發票。`order` 必須已經過 normalizer（HS code 只剩數字）。
pub fn build_export_declaration(
    order: &ShipmentOrder,
    invoice_number: String,
    dangerous_goods: Option<&ResolvedDangerousGoods>,
) -> ExportDeclaration {
    let customer_references = order
        .receiver_reference
        .as_ref()
        .or(order.receiver.reference.as_ref())
        .map(|value| {
            vec![Reference {
                type_code: CUSTOMER_REFERENCE_TYPE.to_string(),
                value: value.clone(),
            }]
        })
        .unwrap_or_default();

    let line_items = order
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| build_line_item(index as u32 + 1, item, dangerous_goods))
        .collect();

    let mut remarks: Vec<Remark> = order
        .invoice_remarks
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| Remark {
            value: r.to_string(),
        })
        .collect();
    if let Some(remark) = dangerous_goods.and_then(hazard_remark) {
        remarks.push(remark);
    }
    if let Some(payer) = order.payer_of_vat {
        remarks.push(Remark {
            value: format!("VAT payer: {}", payer.as_str()),
        });
    }

    ExportDeclaration {
        invoice: Invoice {
            number: invoice_number,
            customer_references,
        },
        line_items,
        export_reason: order.export_reason.clone(),
        remarks,
    }
}

fn build_line_item(
    number: u32,
    item: &Item,
    dangerous_goods: Option<&ResolvedDangerousGoods>,
) -> LineItem {
    LineItem {
        number,
        description: line_item_description(&item.description, dangerous_goods),
        price: item.unit_value,
        quantity: Quantity {
            value: item.quantity,
            unit_of_measure: PIECES_UNIT.to_string(),
        },
        commodity_codes: item
            .hs_code
            .iter()
            .map(|code| CommodityCode {
                type_code: HS_COMMODITY_TYPE.to_string(),
                value: code.clone(),
            })
            .collect(),
        manufacturer_country: item.country_of_origin.clone(),
        weight: LineItemWeight {
            net_value: item.net_weight,
            gross_value: item.net_weight,
        },
    }
}

/// 危險品需在品名中標出運輸名稱與 UN/ID 編號，讓海關能對照 VAS 申報。
/// 申報有 `customDescription` 時取代原品名。
pub fn line_item_description(
    description: &str,
    dangerous_goods: Option<&ResolvedDangerousGoods>,
) -> String {
    let Some(dg) = dangerous_goods else {
        return description.to_string();
    };
    let base = dg.custom_description.as_deref().unwrap_or(description);

    if dg.is_dry_ice() {
        return match dg.dry_ice_weight {
            Some(weight) => format!("{} Dry Ice {} {:.1}kg", base, dg.un_code, weight),
            None => format!("{} Dry Ice {}", base, dg.un_code),
        };
    }

    match dg.proper_shipping_name.as_deref() {
        Some(name) => format!("{} {} {}", base, name, dg.un_code),
        None => format!("{} {}", base, dg.un_code),
    }
}

/// `Dangerous goods UN3481: class 9, packing group II`
fn hazard_remark(dg: &ResolvedDangerousGoods) -> Option<Remark> {
    let details: Vec<String> = [
        dg.hazard_class.as_deref().map(|c| format!("class {}", c)),
        dg.packing_group.as_deref().map(|g| format!("packing group {}", g)),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!details.is_empty()).then(|| Remark {
        value: format!("Dangerous goods {}: {}", dg.un_code, details.join(", ")),
    })
}
