//! Validation for the smaller config sections: matrix, stereo and
//! framebuffer.

use crate::schema::QuadbatchConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_matrix(errors: &mut Vec<String>, config: &QuadbatchConfig) {
    validate_range(errors, "matrix.stack_size", config.matrix.stack_size, 1, 256);
}

pub(crate) fn validate_stereo(errors: &mut Vec<String>, config: &QuadbatchConfig) {
    validate_range_f32(
        errors,
        "stereo.eye_separation",
        config.stereo.eye_separation,
        0.0,
        1.0,
    );
}

pub(crate) fn validate_framebuffer(errors: &mut Vec<String>, config: &QuadbatchConfig) {
    validate_range(errors, "framebuffer.width", config.framebuffer.width, 1, 16384);
    validate_range(errors, "framebuffer.height", config.framebuffer.height, 1, 16384);
}
