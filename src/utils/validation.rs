use crate::utils::error::{FleetError, Result};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
    if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", valid_levels.join(", ")),
        });
    }
    Ok(())
}

/// Parses user input for an integer field such as "Year".
///
/// Surrounding whitespace is ignored. The error message names the field the
/// way the shell reports it to the user.
pub fn parse_integer<T: FromStr>(field_name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| FleetError::ValidationError {
            message: format!("{} must be an integer.", field_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("database.path", "inventory.csv").is_ok());
        assert!(validate_path("database.path", "").is_err());
        assert!(validate_path("database.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "info").is_ok());
        assert!(validate_log_level("logging.level", "WARN").is_ok());
        assert!(validate_log_level("logging.level", "chatty").is_err());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<i32>("Year", "2020").unwrap(), 2020);
        assert_eq!(parse_integer::<i64>("Mileage", " 15000 ").unwrap(), 15000);

        let err = parse_integer::<i32>("Year", "twenty").unwrap_err();
        assert_eq!(err.to_string(), "Year must be an integer.");

        let err = parse_integer::<i64>("Mileage", "1.5").unwrap_err();
        assert_eq!(err.to_string(), "Mileage must be an integer.");
    }
}
