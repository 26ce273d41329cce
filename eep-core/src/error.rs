use thiserror::Error;

/// Main error type for EEP decoding
#[derive(Error, Debug)]
pub enum EepError {
    #[error("Invalid profile identifier: {0}")]
    InvalidProfile(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unsupported RORG: 0x{0:02X}")]
    UnsupportedRorg(u8),

    #[error("Unsupported FUNC: 0x{0:02X}")]
    UnsupportedFunc(u8),

    #[error("Unsupported TYPE 0x{type_code:02X} for FUNC 0x{func:02X}")]
    UnsupportedType { func: u8, type_code: u8 },

    #[error("Payload too short: need {needed} bytes, have {actual}")]
    TooShort { needed: usize, actual: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for EEP operations
pub type EepResult<T> = Result<T, EepError>;
