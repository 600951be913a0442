use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("License plate {plate} already exists.")]
    DuplicatePlate { plate: String },

    #[error("Car {plate} not found.")]
    NotFound { plate: String },

    #[error("Car {plate} is already rented.")]
    AlreadyRented { plate: String },

    #[error("Car {plate} is not currently rented.")]
    NotRented { plate: String },

    #[error("{path} not found.")]
    FileMissing { path: String },

    #[error("Row {row}: {field} must be an integer, got '{value}'")]
    ParseError {
        row: usize,
        field: String,
        value: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },
}

impl FleetError {
    /// 預期中的業務錯誤 (不影響 session 繼續執行)
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            FleetError::DuplicatePlate { .. }
                | FleetError::NotFound { .. }
                | FleetError::AlreadyRented { .. }
                | FleetError::NotRented { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::FileMissing { path } => {
                format!("Database file '{}' does not exist yet", path)
            }
            FleetError::ParseError { row, field, value } => {
                format!(
                    "Database file is corrupt: row {} has a bad {} ('{}')",
                    row, field, value
                )
            }
            FleetError::CsvError(e) => format!("Database file is not valid CSV: {}", e),
            FleetError::IoError(e) => format!("File access failed: {}", e),
            FleetError::ConfigError { .. } | FleetError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    /// 業務錯誤與輸入錯誤不附建議，訊息本身已足夠
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            FleetError::FileMissing { .. } => Some("Run `save` to create the database file"),
            FleetError::ParseError { .. } | FleetError::CsvError(_) => {
                Some("Fix the offending row or restore the file from a backup")
            }
            FleetError::IoError(_) => Some("Check the path and file permissions"),
            FleetError::ConfigError { .. } | FleetError::InvalidConfigValueError { .. } => {
                Some("Check the configuration file and command line flags")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
