use crate::utils::error::{ComplianceError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ComplianceError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ComplianceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_account_number(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(ComplianceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Carrier account numbers contain digits only".to_string(),
        });
    }
    Ok(())
}

/// 出貨單欄位是否有實際內容（None 或僅空白都視為缺漏）
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

/// 累積式檢查：缺漏時附加訊息而不是立即返回
pub fn require_present(
    messages: &mut Vec<String>,
    prefix: &str,
    label: &str,
    value: Option<&str>,
) {
    if is_blank(value) {
        messages.push(format!("{}: {} is required", prefix, label));
    }
}
