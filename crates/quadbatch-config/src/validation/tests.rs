//! Tests for the full validation pipeline.

use super::*;
use crate::schema::QuadbatchConfig;

#[test]
fn default_config_validates() {
    let config = QuadbatchConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_buffer_elements() {
    let mut config = QuadbatchConfig::default();
    config.batch.buffer_elements = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.buffer_elements"));
}

#[test]
fn catches_too_many_buffers() {
    let mut config = QuadbatchConfig::default();
    config.batch.buffer_count = 9;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.buffer_count"));
}

#[test]
fn catches_zero_draw_calls() {
    let mut config = QuadbatchConfig::default();
    config.batch.draw_calls = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.draw_calls"));
}

#[test]
fn catches_negative_depth_step() {
    let mut config = QuadbatchConfig::default();
    config.batch.depth_step = -0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.depth_step"));
}

#[test]
fn catches_nan_depth_step() {
    let mut config = QuadbatchConfig::default();
    config.batch.depth_step = f32::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.depth_step"));
}

#[test]
fn catches_infinite_depth_baseline() {
    let mut config = QuadbatchConfig::default();
    config.batch.depth_baseline = f32::INFINITY;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("batch.depth_baseline"));
}

#[test]
fn catches_stack_size_out_of_range() {
    let mut config = QuadbatchConfig::default();
    config.matrix.stack_size = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("matrix.stack_size"));
}

#[test]
fn catches_eye_separation_out_of_range() {
    let mut config = QuadbatchConfig::default();
    config.stereo.eye_separation = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("stereo.eye_separation"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = QuadbatchConfig::default();
    config.framebuffer.width = 0;
    config.framebuffer.height = 20000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("framebuffer.width"));
    assert!(err.contains("framebuffer.height"));
    assert!(err.contains("; "));
}
