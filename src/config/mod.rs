#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

/// 帳務設定：預設 shipper 帳號，以及可選的 DDP 稅費帳號
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub account_number: String,
    #[serde(default)]
    pub duties_account_number: Option<String>,
}

impl AccountConfig {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            duties_account_number: None,
        }
    }

    pub fn with_duties_account(mut self, duties_account_number: impl Into<String>) -> Self {
        self.duties_account_number = Some(duties_account_number.into());
        self
    }
}

impl ConfigProvider for AccountConfig {
    fn account_number(&self) -> &str {
        &self.account_number
    }

    fn duties_account_number(&self) -> Option<&str> {
        self.duties_account_number.as_deref()
    }
}

impl<T: ConfigProvider> ConfigProvider for &T {
    fn account_number(&self) -> &str {
        (**self).account_number()
    }

    fn duties_account_number(&self) -> Option<&str> {
        (**self).duties_account_number()
    }
}
