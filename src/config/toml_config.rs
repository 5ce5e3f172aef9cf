use crate::config::AccountConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{ComplianceError, Result};
use crate::utils::validation::{validate_account_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub accounts: AccountsConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    pub account_number: String,
    pub duties_account_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ComplianceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ComplianceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CARRIER_ACCOUNT_NUMBER})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ComplianceError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_account_number("accounts.account_number", &self.accounts.account_number)?;

        if let Some(duties) = &self.accounts.duties_account_number {
            validate_account_number("accounts.duties_account_number", duties)?;
        }

        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn account_config(&self) -> AccountConfig {
        AccountConfig {
            account_number: self.accounts.account_number.trim().to_string(),
            duties_account_number: self
                .accounts
                .duties_account_number
                .as_deref()
                .map(|n| n.trim().to_string()),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn account_number(&self) -> &str {
        self.accounts.account_number.trim()
    }

    fn duties_account_number(&self) -> Option<&str> {
        self.accounts.duties_account_number.as_deref().map(str::trim)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[accounts]
account_number = "960000001"
duties_account_number = "970000003"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.account_number(), "960000001");
        assert_eq!(config.duties_account_number(), Some("970000003"));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CARRIER_PAYLOAD_TEST_ACCOUNT", "951234567");

        let toml_content = r#"
[accounts]
account_number = "${CARRIER_PAYLOAD_TEST_ACCOUNT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.accounts.account_number, "951234567");

        std::env::remove_var("CARRIER_PAYLOAD_TEST_ACCOUNT");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[accounts]
account_number = "${CARRIER_PAYLOAD_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ComplianceError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_empty_account_number_is_rejected() {
        let config = TomlConfig::from_toml_str("[accounts]\naccount_number = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_accounts_table_is_a_parse_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[logging]\nverbose = false\n"),
            Err(ComplianceError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[accounts]\naccount_number = \"960000001\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.account_config(),
            AccountConfig::new("960000001")
        );
    }
}
