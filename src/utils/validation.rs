// file: src/utils/validation.rs
// description: input validation for configuration and export targets
// reference: input validation patterns

use crate::error::{ClientError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }

        let host = url
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        if host.trim_matches('/').is_empty() {
            return Err(ClientError::Validation(format!("URL has no host: {}", url)));
        }

        Ok(())
    }

    pub fn validate_timeout(secs: u64) -> Result<()> {
        if secs == 0 {
            return Err(ClientError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if secs > 600 {
            return Err(ClientError::Validation(
                "Timeout too large (max 600 seconds)".to_string(),
            ));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ClientError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(ClientError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
