//! 4×4 matrix math for the transform stack.
//!
//! Column-major layout matching WGSL `mat4x4<f32>` and GL uniform uploads.
//! `mul(a, b)` is the standard product, so `b` applies to a point first.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection matrix.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let top = near * (fov_y * 0.5).tan();
    let right = top * aspect;
    frustum(-right, right, -top, top, near, far)
}

/// Orthographic projection matrix.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let fln = far - near;

    [
        2.0 / rl,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / tb,
        0.0,
        0.0,
        0.0,
        0.0,
        -2.0 / fln,
        0.0,
        -(left + right) / rl,
        -(top + bottom) / tb,
        -(far + near) / fln,
        1.0,
    ]
}

/// Perspective frustum matrix.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rl = right - left;
    let tb = top - bottom;
    let fln = far - near;

    [
        2.0 * near / rl,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 * near / tb,
        0.0,
        0.0,
        (right + left) / rl,
        (top + bottom) / tb,
        -(far + near) / fln,
        -1.0,
        0.0,
        0.0,
        -(2.0 * far * near) / fln,
        0.0,
    ]
}

/// Rotation of `angle` radians around `axis`.
///
/// The axis is normalized first; a zero-length axis yields the identity.
pub fn rotate(axis: [f32; 3], angle: f32) -> Mat4 {
    let [mut x, mut y, mut z] = axis;
    let len = (x * x + y * y + z * z).sqrt();
    if len == 0.0 {
        return IDENTITY;
    }
    if len != 1.0 {
        x /= len;
        y /= len;
        z /= len;
    }

    let s = angle.sin();
    let c = angle.cos();
    let t = 1.0 - c;

    [
        x * x * t + c,
        y * x * t + z * s,
        z * x * t - y * s,
        0.0,
        x * y * t - z * s,
        y * y * t + c,
        z * y * t + x * s,
        0.0,
        x * z * t + y * s,
        y * z * t - x * s,
        z * z * t + c,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Per-axis scale matrix.
pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    [
        x, 0.0, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 0.0, z, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1) without perspective divide.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    let [x, y, z] = p;
    [
        m[0] * x + m[4] * y + m[8] * z + m[12],
        m[1] * x + m[5] * y + m[9] * z + m[13],
        m[2] * x + m[6] * y + m[10] * z + m[14],
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    fn approx_point(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_then_identity() {
        let t = translate(1.0, 2.0, 3.0);
        let result = mul(&t, &IDENTITY);
        assert!(approx_eq(&result, &t, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let t = translate(1.0, 2.0, 3.0);
        assert!(approx_point(transform_point(&t, [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]));
    }

    #[test]
    fn scale_per_axis() {
        let s = scale(2.0, 3.0, 4.0);
        assert!(approx_point(transform_point(&s, [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]));
    }

    #[test]
    fn mul_applies_right_operand_first() {
        // Scale then translate: (1,0,0) -> (2,0,0) -> (12,0,0)
        let m = mul(&translate(10.0, 0.0, 0.0), &scale(2.0, 2.0, 2.0));
        assert!(approx_point(transform_point(&m, [1.0, 0.0, 0.0]), [12.0, 0.0, 0.0]));
    }

    #[test]
    fn rotate_z_90_degrees() {
        let r = rotate([0.0, 0.0, 1.0], std::f32::consts::FRAC_PI_2);
        assert!(approx_point(transform_point(&r, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn rotate_normalizes_axis() {
        let a = rotate([0.0, 0.0, 5.0], 0.7);
        let b = rotate([0.0, 0.0, 1.0], 0.7);
        assert!(approx_eq(&a, &b, 1e-6));
    }

    #[test]
    fn rotate_zero_axis_is_identity() {
        assert_eq!(rotate([0.0, 0.0, 0.0], 1.0), IDENTITY);
    }

    #[test]
    fn ortho_maps_corners_to_ndc() {
        let o = ortho(0.0, 800.0, 450.0, 0.0, 0.0, 1.0);
        assert!(approx_point(transform_point(&o, [0.0, 0.0, 0.0]), [-1.0, 1.0, -1.0]));
        assert!(approx_point(
            transform_point(&o, [800.0, 450.0, 0.0]),
            [1.0, -1.0, -1.0]
        ));
    }

    #[test]
    fn frustum_has_perspective_divide_term() {
        let f = frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);
        assert!((f[0] - 1.0).abs() < 1e-6);
        assert!((f[5] - 1.0).abs() < 1e-6);
        assert!((f[11] - (-1.0)).abs() < 1e-6);
        assert_eq!(f[15], 0.0);
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-4);
        assert!((p[5] - f).abs() < 1e-4);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }
}
