use crate::catalog::PER_PAGE_OPTIONS;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalogue page size is one of the enumerated options
/// - Debounce window is non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if !PER_PAGE_OPTIONS.contains(&config.catalogue.default_per_page) {
        return Err(ConfigError::ValidationError(format!(
            "catalogue.default_per_page must be one of {:?}",
            PER_PAGE_OPTIONS
        )));
    }

    if config.catalogue.debounce_ms == 0 {
        return Err(ConfigError::ValidationError(
            "catalogue.debounce_ms cannot be 0".to_string(),
        ));
    }

    Ok(())
}
