use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Shipment failed compliance validation:\n{}", .messages.join("\n"))]
    Validation { messages: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 出貨資料不符合承運商規範，修正後可重新送出
    Compliance,
    Configuration,
    Input,
}

impl ComplianceError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Compliance,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Input,
        }
    }

    /// 驗證失敗時的完整訊息清單；其他錯誤回傳單一訊息
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation { .. } => {
                "Correct the listed shipment fields and resubmit the booking"
            }
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file for typos and invalid values"
            }
            Self::MissingConfigError { .. } => {
                "Provide the missing setting in the config file or on the command line"
            }
            Self::IoError(_) => "Check that the input file exists and is readable",
            Self::SerializationError(_) => "Check that the shipment order is valid JSON",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { messages } => format!(
                "Shipment is not ready for booking ({} issue{}):\n{}",
                messages.len(),
                if messages.len() == 1 { "" } else { "s" },
                messages
                    .iter()
                    .map(|m| format!("  - {}", m))
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
