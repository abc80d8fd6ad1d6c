/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that every channel of two RGB colors is within `tolerance` on the 0
/// to 255 scale. Used for round trips through an inverse matrix.
#[macro_export]
macro_rules! assert_rgb_near {
    ($actual:expr,$expected:expr,$tolerance:expr) => {{
        let actual: $crate::models::Rgb = $actual;
        let expected: $crate::models::Rgb = $expected;
        for (a, e) in [
            (actual.red, expected.red),
            (actual.green, expected.green),
            (actual.blue, expected.blue),
        ] {
            approx::assert_abs_diff_eq!(a, e, epsilon = $tolerance);
        }
    }};
}
