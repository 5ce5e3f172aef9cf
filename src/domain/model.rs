use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street_lines: Vec<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
    pub vat_number: Option<String>,
    pub eori_number: Option<String>,
    pub tax_id: Option<String>,
    /// 原始輸入值，由 normalizer 轉成 `business` / `private`
    pub trader_type: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraderType {
    #[default]
    Business,
    Private,
}

impl TraderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraderType::Business => "business",
            TraderType::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    #[default]
    Cm,
    In,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    pub weight: Weight,
    pub dimensions: Dimensions,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub description: String,
    pub hs_code: Option<String>,
    pub country_of_origin: Option<String>,
    pub quantity: u32,
    pub unit_value: f64,
    /// kg
    pub net_weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DangerousGoodsDeclaration {
    pub contains: bool,
    pub code: Option<String>,
    pub service_code: Option<String>,
    pub content_id: Option<String>,
    pub proper_shipping_name: Option<String>,
    pub packing_group: Option<String>,
    pub hazard_class: Option<String>,
    pub custom_description: Option<String>,
    pub dry_ice_weight: Option<f64>,
}

impl DangerousGoodsDeclaration {
    /// `contains == false` 時其餘欄位一律忽略
    pub fn active(&self) -> Option<&Self> {
        self.contains.then_some(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Incoterm {
    #[default]
    #[serde(rename = "DAP")]
    Dap,
    #[serde(rename = "DDP")]
    Ddp,
    #[serde(rename = "EXW")]
    Exw,
}

impl Incoterm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Incoterm::Dap => "DAP",
            Incoterm::Ddp => "DDP",
            Incoterm::Exw => "EXW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayerOfVat {
    Shipper,
    Receiver,
}

impl PayerOfVat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayerOfVat::Shipper => "shipper",
            PayerOfVat::Receiver => "receiver",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentOrder {
    pub sender: Party,
    pub receiver: Party,
    pub packages: Vec<Package>,
    pub items: Vec<Item>,
    pub dangerous_goods: DangerousGoodsDeclaration,
    pub service_code: Option<String>,
    pub currency: Option<String>,
    pub incoterm: Incoterm,
    pub export_reason: Option<String>,
    pub invoice_remarks: Option<String>,
    pub pallet_count: Option<u32>,
    pub package_marks: Option<String>,
    pub payer_of_vat: Option<PayerOfVat>,
    pub receiver_reference: Option<String>,
    pub shipper_account: Option<String>,
    pub description: Option<String>,
}
