//! Batch sizing validation.

use crate::schema::QuadbatchConfig;

use super::helpers::{validate_range, validate_range_f32};

/// Validate all batch-related constraints.
pub(crate) fn validate_batch(errors: &mut Vec<String>, config: &QuadbatchConfig) {
    let batch = &config.batch;
    validate_range(
        errors,
        "batch.buffer_elements",
        batch.buffer_elements,
        1,
        1_048_576,
    );
    validate_range(errors, "batch.buffer_count", batch.buffer_count, 1, 8);
    validate_range(errors, "batch.draw_calls", batch.draw_calls, 1, 4096);
    validate_range(
        errors,
        "batch.max_texture_units",
        batch.max_texture_units,
        0,
        8,
    );
    validate_range_f32(errors, "batch.depth_step", batch.depth_step, 0.0, 1.0);
    if !batch.depth_baseline.is_finite() {
        errors.push(format!(
            "batch.depth_baseline = {} must be finite",
            batch.depth_baseline
        ));
    }
}
