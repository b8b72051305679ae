use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.escape_default().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "products.json").is_ok());
        assert!(validate_path("input", "./data/products.json").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("output", "out\0.json").is_err());
    }

    #[test]
    fn test_validate_path_error_names_field() {
        let err = validate_path("output", "").unwrap_err();
        assert!(err.to_string().contains("output"));
        assert!(err.to_string().contains("Path cannot be empty"));
    }
}
