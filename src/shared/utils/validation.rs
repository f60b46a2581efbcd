use crate::shared::errors::AppError;

pub const MAX_PER_PAGE: u32 = 200;

pub struct Validator;

impl Validator {
    pub fn validate_page(page: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::InvalidInput(
                "Page must be 1 or greater".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_per_page(per_page: u32) -> Result<(), AppError> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(AppError::InvalidInput(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        Ok(())
    }

    /// Returns the trimmed value, or an error naming the missing parameter
    pub fn require_param(value: Option<&str>, name: &str) -> Result<String, AppError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(AppError::InvalidInput(format!("No {} provided", name))),
        }
    }
}
