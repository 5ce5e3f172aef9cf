use crate::core::assembler::{
    assemble_accounts, assemble_content_description, assemble_party, build_package,
};
use crate::core::dangerous_goods::{resolve, ResolvedDangerousGoods};
use crate::core::export_declaration::{build_export_declaration, CUSTOMER_REFERENCE_TYPE};
use crate::core::invoice::TimestampInvoiceNumbers;
use crate::core::normalizer::normalize_order;
use crate::core::validator::validate;
use crate::core::{ConfigProvider, InvoiceNumberSource};
use crate::domain::model::ShipmentOrder;
use crate::domain::payload::{
    CarrierPayload, Content, CustomerDetails, DangerousGoodsEntry, Reference, ValueAddedService,
};
use crate::utils::error::{ComplianceError, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

const METRIC: &str = "metric";

pub struct PayloadCompiler<C: ConfigProvider, N: InvoiceNumberSource = TimestampInvoiceNumbers> {
    config: C,
    invoice_numbers: N,
}

impl<C: ConfigProvider> PayloadCompiler<C> {
    pub fn new(config: C) -> Self {
        Self::with_invoice_numbers(config, TimestampInvoiceNumbers)
    }
}

impl<C: ConfigProvider, N: InvoiceNumberSource> PayloadCompiler<C, N> {
    pub fn with_invoice_numbers(config: C, invoice_numbers: N) -> Self {
        Self {
            config,
            invoice_numbers,
        }
    }

    /// 驗證 → 正規化 → 危險品分類 → 組裝。驗證不通過時不產生任何 payload。
    pub fn build(&self, order: &ShipmentOrder) -> Result<CarrierPayload> {
        tracing::debug!("Validating shipment order");
        let messages = validate(order);
        if !messages.is_empty() {
            tracing::warn!(
                "❌ Shipment rejected with {} compliance issue(s)",
                messages.len()
            );
            for message in &messages {
                tracing::debug!("  - {}", message);
            }
            return Err(ComplianceError::validation(messages));
        }

        let order = normalize_order(order);
        tracing::debug!(
            "Normalized order with {} item(s) and {} package(s)",
            order.items.len(),
            order.packages.len()
        );

        let dangerous_goods = resolve(&order.dangerous_goods);
        if let Some(dg) = &dangerous_goods {
            tracing::debug!(
                "☢️ Dangerous goods {} declared under service {}",
                dg.un_code,
                dg.service_code
            );
        }

        let invoice_number = self.invoice_numbers.next_invoice_number();
        let export_declaration =
            build_export_declaration(&order, invoice_number, dangerous_goods.as_ref());

        let accounts = assemble_accounts(
            order.incoterm,
            order.shipper_account.as_deref(),
            self.config.account_number(),
            self.config.duties_account_number(),
        );

        let packages = order
            .packages
            .iter()
            .map(|package| build_package(package, order.package_marks.as_deref()))
            .collect();

        let payload = CarrierPayload {
            product_code: order.service_code.clone(),
            accounts,
            customer_references: order
                .sender
                .reference
                .iter()
                .map(|value| Reference {
                    type_code: CUSTOMER_REFERENCE_TYPE.to_string(),
                    value: value.clone(),
                })
                .collect(),
            customer_details: CustomerDetails {
                shipper_details: assemble_party(&order.sender),
                receiver_details: assemble_party(&order.receiver),
            },
            content: Content {
                is_customs_declarable: order.sender.country_code != order.receiver.country_code,
                description: assemble_content_description(&order),
                packages,
                declared_value: declared_value(&order),
                declared_value_currency: order.currency.clone(),
                incoterm: order.incoterm.as_str().to_string(),
                unit_of_measurement: METRIC.to_string(),
                export_declaration,
            },
            value_added_services: dangerous_goods
                .as_ref()
                .map(|dg| vec![value_added_service(dg)]),
        };

        tracing::info!(
            "✅ Compiled carrier payload (invoice {}, {} account(s))",
            payload.content.export_declaration.invoice.number,
            payload.accounts.len()
        );
        Ok(payload)
    }
}

/// 金額以 Decimal 累加，四捨五入到分後才轉回 JSON 數值
fn declared_value(order: &ShipmentOrder) -> f64 {
    let total: Decimal = order
        .items
        .iter()
        .map(|item| {
            Decimal::from_f64(item.unit_value).unwrap_or(Decimal::ZERO)
                * Decimal::from(item.quantity)
        })
        .sum();

    total
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// 危險品資料只會出現在這裡，不會掛在 package 上
fn value_added_service(dg: &ResolvedDangerousGoods) -> ValueAddedService {
    ValueAddedService {
        service_code: dg.service_code.clone(),
        value: if dg.weight_bearing {
            dg.dry_ice_weight
        } else {
            None
        },
        dangerous_goods: vec![DangerousGoodsEntry {
            content_id: dg.content_id.clone(),
            un_code: dg.un_code.clone(),
            dry_ice_weight: dg.dry_ice_weight,
        }],
    }
}
