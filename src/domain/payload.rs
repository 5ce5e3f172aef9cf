//! Wire format of the carrier booking request.
//!
//! Field names are part of the carrier's API contract and serialize in
//! camelCase exactly as the carrier expects. Optional blocks are omitted
//! from the JSON entirely instead of being sent as `null`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    pub accounts: Vec<Account>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_references: Vec<Reference>,
    pub customer_details: CustomerDetails,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_added_services: Option<Vec<ValueAddedService>>,
}

impl CarrierPayload {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub number: String,
    pub type_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub type_code: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub shipper_details: PartyDetails,
    pub receiver_details: PartyDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    pub postal_address: PostalAddress,
    pub contact_information: ContactInformation,
    pub type_code: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registration_numbers: Vec<RegistrationNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub city_name: String,
    pub country_code: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    pub company_name: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationNumber {
    pub type_code: String,
    pub number: String,
    pub issuer_country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub is_customs_declarable: bool,
    pub description: String,
    pub packages: Vec<PackagePayload>,
    pub declared_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value_currency: Option<String>,
    pub incoterm: String,
    pub unit_of_measurement: String,
    pub export_declaration: ExportDeclaration,
}

/// Physical piece as sent to the carrier.
///
/// Has no dangerous-goods fields: DG data lives only in
/// [`ValueAddedService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// kg
    pub weight: f64,
    pub dimensions: PackageDimensions,
}

/// cm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDeclaration {
    pub invoice: Invoice,
    pub line_items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<Remark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub number: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_references: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub number: u32,
    pub description: String,
    pub price: f64,
    pub quantity: Quantity,
    pub commodity_codes: Vec<CommodityCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_country: Option<String>,
    pub weight: LineItemWeight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub value: u32,
    pub unit_of_measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityCode {
    pub type_code: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemWeight {
    pub net_value: f64,
    pub gross_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAddedService {
    pub service_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub dangerous_goods: Vec<DangerousGoodsEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerousGoodsEntry {
    pub content_id: String,
    pub un_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_ice_weight: Option<f64>,
}
