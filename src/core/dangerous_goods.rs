use crate::core::normalizer::normalize_dg_code;
use crate::domain::model::DangerousGoodsDeclaration;

pub const DRY_ICE_CODE: &str = "1845";
pub const CONSUMER_COMMODITY_CODE: &str = "8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnPrefix {
    Un,
    Id,
}

impl UnPrefix {
    pub fn for_code(code: &str) -> Self {
        if code == CONSUMER_COMMODITY_CODE {
            UnPrefix::Id
        } else {
            UnPrefix::Un
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnPrefix::Un => "UN",
            UnPrefix::Id => "ID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerousGoodsClass {
    pub code: &'static str,
    pub prefix: UnPrefix,
    pub service_code: &'static str,
    pub content_id: &'static str,
    pub proper_shipping_name: &'static str,
    /// VAS 需帶 `value`（目前只有乾冰）
    pub weight_bearing: bool,
}

static DANGEROUS_GOODS_TABLE: &[DangerousGoodsClass] = &[
    DangerousGoodsClass {
        code: "1266",
        prefix: UnPrefix::Un,
        service_code: "HE",
        content_id: "910",
        proper_shipping_name: "Perfumery products",
        weight_bearing: false,
    },
    DangerousGoodsClass {
        code: "3481",
        prefix: UnPrefix::Un,
        service_code: "HV",
        content_id: "967",
        proper_shipping_name: "Lithium ion batteries contained in equipment",
        weight_bearing: false,
    },
    DangerousGoodsClass {
        code: "3480",
        prefix: UnPrefix::Un,
        service_code: "HB",
        content_id: "966",
        proper_shipping_name: "Lithium ion batteries packed with equipment",
        weight_bearing: false,
    },
    DangerousGoodsClass {
        code: "3091",
        prefix: UnPrefix::Un,
        service_code: "HM",
        content_id: "970",
        proper_shipping_name: "Lithium metal batteries contained in equipment",
        weight_bearing: false,
    },
    DangerousGoodsClass {
        code: CONSUMER_COMMODITY_CODE,
        prefix: UnPrefix::Id,
        service_code: "HK",
        content_id: "700",
        proper_shipping_name: "Consumer commodity",
        weight_bearing: false,
    },
    DangerousGoodsClass {
        code: DRY_ICE_CODE,
        prefix: UnPrefix::Un,
        service_code: "HC",
        content_id: "901",
        proper_shipping_name: "Dry ice",
        weight_bearing: true,
    },
];

pub fn classify(code: &str) -> Option<&'static DangerousGoodsClass> {
    let code = normalize_dg_code(code);
    DANGEROUS_GOODS_TABLE.iter().find(|class| class.code == code)
}

/// `1266` → `UN1266`, `8000` → `ID8000`, `UN3481` → `UN3481`
pub fn un_code(code: &str) -> String {
    let code = normalize_dg_code(code);
    format!("{}{}", UnPrefix::for_code(&code).as_str(), code)
}

pub fn is_dry_ice(code: &str) -> bool {
    normalize_dg_code(code) == DRY_ICE_CODE
}

/// Effective classification of an active declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDangerousGoods {
    pub code: String,
    pub un_code: String,
    pub service_code: String,
    pub content_id: String,
    pub proper_shipping_name: Option<String>,
    /// 取代報關品項的原始品名
    pub custom_description: Option<String>,
    pub hazard_class: Option<String>,
    pub packing_group: Option<String>,
    pub dry_ice_weight: Option<f64>,
    pub weight_bearing: bool,
}

impl ResolvedDangerousGoods {
    pub fn is_dry_ice(&self) -> bool {
        is_dry_ice(&self.code)
    }
}

fn explicit(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Declaration values win over the table; unknown codes rely on the
/// declaration alone. Returns `None` when the gate is off or a required
/// value cannot be resolved (the validator reports those cases).
pub fn resolve(declaration: &DangerousGoodsDeclaration) -> Option<ResolvedDangerousGoods> {
    let declaration = declaration.active()?;
    let code = declaration
        .code
        .as_deref()
        .map(normalize_dg_code)
        .filter(|code| !code.is_empty())?;
    let class = classify(&code);

    let service_code = explicit(&declaration.service_code)
        .or_else(|| class.map(|c| c.service_code.to_string()))?;
    let content_id = explicit(&declaration.content_id)
        .or_else(|| class.map(|c| c.content_id.to_string()))?;
    let proper_shipping_name = explicit(&declaration.proper_shipping_name)
        .or_else(|| class.map(|c| c.proper_shipping_name.to_string()));

    let weight_bearing = class.map(|c| c.weight_bearing).unwrap_or(false);
    let dry_ice_weight = if is_dry_ice(&code) {
        declaration.dry_ice_weight
    } else {
        None
    };

    Some(ResolvedDangerousGoods {
        un_code: un_code(&code),
        code,
        service_code,
        content_id,
        proper_shipping_name,
        custom_description: explicit(&declaration.custom_description),
        hazard_class: explicit(&declaration.hazard_class),
        packing_group: explicit(&declaration.packing_group),
        dry_ice_weight,
        weight_bearing,
    })
}
