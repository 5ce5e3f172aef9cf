use crate::config::toml_config::TomlConfig;
use crate::config::AccountConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_account_number, validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "carrier-payload")]
#[command(about = "Validate a shipment order and compile the carrier booking payload")]
pub struct CliConfig {
    #[arg(long, help = "Shipment order JSON file")]
    pub order: PathBuf,

    #[arg(long, help = "TOML file with carrier account settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Default shipper account number")]
    pub account_number: Option<String>,

    #[arg(long, help = "Account billed for duties and taxes on DDP shipments")]
    pub duties_account_number: Option<String>,

    #[arg(long, help = "Only report compliance issues, do not build the payload")]
    pub validate_only: bool,

    #[arg(long, help = "Pretty-print the payload JSON")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn resolve_accounts(&self, file: Option<&TomlConfig>) -> Result<AccountConfig> {
        let from_file = file.map(TomlConfig::account_config);

        let account_number = trimmed(&self.account_number)
            .or_else(|| from_file.as_ref().map(|c| c.account_number.clone()));
        let account_number = validate_required_field("account_number", &account_number)?.clone();

        let duties_account_number = trimmed(&self.duties_account_number)
            .or_else(|| from_file.and_then(|c| c.duties_account_number));

        Ok(AccountConfig {
            account_number,
            duties_account_number,
        })
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(number) = &self.account_number {
            validate_account_number("--account-number", number)?;
        }
        if let Some(number) = &self.duties_account_number {
            validate_account_number("--duties-account-number", number)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ComplianceError;

    #[test]
    fn test_cli_account_overrides_file() {
        let cli = CliConfig::parse_from([
            "carrier-payload",
            "--order",
            "order.json",
            "--account-number",
            "950000002",
        ]);
        let file = TomlConfig::from_toml_str(
            "[accounts]\naccount_number = \"960000001\"\nduties_account_number = \"970000003\"\n",
        )
        .unwrap();

        let accounts = cli.resolve_accounts(Some(&file)).unwrap();
        assert_eq!(accounts.account_number, "950000002");
        assert_eq!(accounts.duties_account_number.as_deref(), Some("970000003"));
    }

    #[test]
    fn test_cli_account_numbers_are_trimmed() {
        let cli = CliConfig::parse_from([
            "carrier-payload",
            "--order",
            "order.json",
            "--account-number",
            " 950000002 ",
            "--duties-account-number",
            "970000003\n",
        ]);
        assert!(cli.validate().is_ok());

        let accounts = cli.resolve_accounts(None).unwrap();
        assert_eq!(accounts.account_number, "950000002");
        assert_eq!(accounts.duties_account_number.as_deref(), Some("970000003"));
    }

    #[test]
    fn test_blank_cli_account_falls_back_to_file() {
        let cli = CliConfig::parse_from([
            "carrier-payload",
            "--order",
            "order.json",
            "--account-number",
            "  ",
        ]);
        let file =
            TomlConfig::from_toml_str("[accounts]\naccount_number = \" 960000001 \"\n").unwrap();

        let accounts = cli.resolve_accounts(Some(&file)).unwrap();
        assert_eq!(accounts.account_number, "960000001");
    }

    #[test]
    fn test_missing_account_is_reported() {
        let cli = CliConfig {
            order: PathBuf::from("order.json"),
            config: None,
            account_number: None,
            duties_account_number: None,
            validate_only: false,
            pretty: false,
            verbose: false,
        };
        assert!(matches!(
            cli.resolve_accounts(None),
            Err(ComplianceError::MissingConfigError { .. })
        ));
    }
}
