//! Full configuration validation.
//!
//! Validates all numeric ranges. Each domain has its own submodule; this
//! orchestrator calls them all and collects errors into a single
//! `ConfigError`.

mod batch;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::QuadbatchConfig;
use quadbatch_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuadbatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    batch::validate_batch(&mut errors, config);
    misc::validate_matrix(&mut errors, config);
    misc::validate_stereo(&mut errors, config);
    misc::validate_framebuffer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
