//! Easing curves for time-based animations
//!
//! Curves map a normalized time `t` to a progress multiplier. Input is clamped
//! to `[0, 1]` first, so a finished animation always lands exactly on `1.0`.

/// Cubic ease-in-out (slow start, fast middle, slow finish)
///
/// ```text
/// t <= 0.5: 4t³
/// t >  0.5: 4(t - 1)³ + 1
/// ```
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t > 0.5 {
        4.0 * (t - 1.0).powi(3) + 1.0
    } else {
        4.0 * t.powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_monotonic_on_unit_interval() {
        let mut previous = ease_in_out_cubic(0.0);
        for step in 1..=1000 {
            let value = ease_in_out_cubic(step as f32 / 1000.0);
            assert!(
                value >= previous,
                "ease must not decrease (step {}: {} < {})",
                step,
                value,
                previous
            );
            previous = value;
        }
    }

    #[test]
    fn test_s_curve_shape() {
        // Slow start and slow finish relative to linear time
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        // Unclamped, 4(1.5 - 1)³ + 1 would overshoot to 1.5
        assert_eq!(ease_in_out_cubic(1.5), 1.0);
        assert_eq!(ease_in_out_cubic(42.0), 1.0);
        assert_eq!(ease_in_out_cubic(-0.2), 0.0);
    }
}
