//! Value bounds and pointer-to-value mathematics.
//!
//! Everything here is pure arithmetic so it can be tested without a DOM.

use crate::error::{Result, SliderError};

/// Horizontal extent of the slider track in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    /// Create a track rectangle from its left edge and width.
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Check if pointer positions can be mapped onto this track.
    pub fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Validated value range and snapping step.
///
/// Constructed only through [`Bounds::new`], so `min < max` and
/// `increment > 0` always hold and the percent math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
    increment: f64,
}

impl Bounds {
    /// Validate and create bounds.
    pub fn new(min: f64, max: f64, increment: f64) -> Result<Self> {
        for (field, value) in [("min", min), ("max", max), ("increment", increment)] {
            if !value.is_finite() {
                return Err(SliderError::NonFinite { field, value });
            }
        }
        if min >= max {
            return Err(SliderError::InvalidBounds { min, max });
        }
        if increment <= 0.0 {
            return Err(SliderError::InvalidIncrement(increment));
        }

        let bounds = Self {
            min,
            max,
            increment,
        };

        // Truncation moves positive values down and negative values up, so only
        // these two bounds can be crossed by snapping.
        if min > 0.0 && !bounds.is_aligned(min) {
            return Err(SliderError::MisalignedBound {
                field: "min",
                value: min,
                increment,
            });
        }
        if max < 0.0 && !bounds.is_aligned(max) {
            return Err(SliderError::MisalignedBound {
                field: "max",
                value: max,
                increment,
            });
        }

        Ok(bounds)
    }

    /// Check if a value is a whole multiple of the increment.
    ///
    /// Decimal steps like 0.1 are not exact in binary, so the check allows a
    /// few ulps of error relative to the value.
    pub fn is_aligned(&self, value: f64) -> bool {
        let steps = (value / self.increment).round();
        (value - steps * self.increment).abs() <= f64::EPSILON * value.abs().max(1.0) * 4.0
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Width of the value range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of a value along the track as a percentage (0 at `min`, 100 at `max`).
    pub fn value_to_percent(&self, value: f64) -> f64 {
        (value - self.min) / self.span() * 100.0
    }

    /// Snap a value to a multiple of the increment.
    ///
    /// This truncates toward zero (`value - value % increment`), not to the
    /// nearest multiple: 47 snaps to 40 and -47 snaps to -40 with an increment
    /// of 10.
    pub fn snap(&self, value: f64) -> f64 {
        // Adding 0.0 turns a -0.0 result into 0.0
        value - value % self.increment + 0.0
    }

    /// Convert a pointer x coordinate into a snapped slider value.
    ///
    /// The pointer fraction along the track is scaled to the range and rounded
    /// to a whole number before clamping and snapping, so fractional values are
    /// only reachable through a fractional `min`.
    ///
    /// The snapped value is clamped once more: truncating an aligned bound with
    /// a decimal increment can land an ulp outside the range (`1.0` snaps to
    /// `0.9000000000000001` with an increment of 0.1).
    ///
    /// Returns `None` when the track has no usable width.
    pub fn pointer_to_value(&self, pointer_x: f64, track: TrackRect) -> Option<f64> {
        if !track.is_usable() || !pointer_x.is_finite() {
            return None;
        }

        let fraction = (pointer_x - track.left) / track.width;
        let raw = self.min + round_half_up(fraction * self.span());

        Some(self.clamp(self.snap(self.clamp(raw))))
    }
}

/// Round to the nearest integer with halves going toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f64, max: f64, increment: f64) -> Bounds {
        Bounds::new(min, max, increment).unwrap()
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(matches!(
            Bounds::new(10.0, 10.0, 1.0),
            Err(SliderError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Bounds::new(10.0, 0.0, 1.0),
            Err(SliderError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_increment() {
        assert!(matches!(
            Bounds::new(0.0, 10.0, 0.0),
            Err(SliderError::InvalidIncrement(_))
        ));
        assert!(matches!(
            Bounds::new(0.0, 10.0, -1.0),
            Err(SliderError::InvalidIncrement(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Bounds::new(f64::NAN, 10.0, 1.0),
            Err(SliderError::NonFinite { field: "min", .. })
        ));
        assert!(matches!(
            Bounds::new(0.0, f64::INFINITY, 1.0),
            Err(SliderError::NonFinite { field: "max", .. })
        ));
    }

    #[test]
    fn test_rejects_bounds_that_snapping_would_cross() {
        assert!(matches!(
            Bounds::new(3.0, 50.0, 10.0),
            Err(SliderError::MisalignedBound { field: "min", .. })
        ));
        assert!(matches!(
            Bounds::new(-50.0, -3.0, 10.0),
            Err(SliderError::MisalignedBound { field: "max", .. })
        ));
        // Snapping can't leave the range from these
        assert!(Bounds::new(-3.0, 50.0, 10.0).is_ok());
        assert!(Bounds::new(0.0, 95.0, 10.0).is_ok());
    }

    #[test]
    fn test_accepts_decimal_increments_on_grid() {
        for (min, max, inc) in [(0.3, 1.0, 0.1), (1.0, 5.0, 0.1), (0.6, 2.0, 0.2), (10.0, 20.0, 0.1)] {
            assert!(Bounds::new(min, max, inc).is_ok(), "{min}..{max} step {inc}");
        }
        assert!(Bounds::new(-1.0, -0.3, 0.1).is_ok());
        assert!(matches!(
            Bounds::new(0.35, 1.0, 0.1),
            Err(SliderError::MisalignedBound { field: "min", .. })
        ));
    }

    #[test]
    fn test_decimal_increment_stays_in_bounds() {
        let b = bounds(1.0, 5.0, 0.1);
        let track = TrackRect::new(0.0, 100.0);
        assert_eq!(b.pointer_to_value(0.0, track), Some(1.0));
        assert_eq!(b.pointer_to_value(-50.0, track), Some(1.0));
        let right = b.pointer_to_value(100.0, track).unwrap();
        assert!(b.contains(right));
    }

    #[test]
    fn test_percent_endpoints() {
        let b = bounds(-20.0, 80.0, 1.0);
        assert_eq!(b.value_to_percent(-20.0), 0.0);
        assert_eq!(b.value_to_percent(80.0), 100.0);
        assert_eq!(b.value_to_percent(30.0), 50.0);
    }

    #[test]
    fn test_snap_truncates_toward_zero() {
        let b = bounds(-100.0, 100.0, 10.0);
        assert_eq!(b.snap(47.0), 40.0);
        assert_eq!(b.snap(49.9), 40.0);
        assert_eq!(b.snap(40.0), 40.0);
        // Negative values truncate upward, toward zero
        assert_eq!(b.snap(-47.0), -40.0);
        assert_eq!(b.snap(-3.0), 0.0);
        assert!(b.snap(-3.0).is_sign_positive());
    }

    #[test]
    fn test_pointer_to_value_truncates() {
        let b = bounds(0.0, 100.0, 10.0);
        let track = TrackRect::new(0.0, 100.0);
        assert_eq!(b.pointer_to_value(47.0, track), Some(40.0));
        assert_eq!(b.pointer_to_value(99.0, track), Some(90.0));
        assert_eq!(b.pointer_to_value(100.0, track), Some(100.0));
    }

    #[test]
    fn test_pointer_to_value_uses_track_offset_and_width() {
        let b = bounds(0.0, 10.0, 1.0);
        let track = TrackRect::new(200.0, 400.0);
        assert_eq!(b.pointer_to_value(200.0, track), Some(0.0));
        assert_eq!(b.pointer_to_value(400.0, track), Some(5.0));
        assert_eq!(b.pointer_to_value(600.0, track), Some(10.0));
    }

    #[test]
    fn test_pointer_outside_track_clamps() {
        let b = bounds(0.0, 10.0, 1.0);
        let track = TrackRect::new(0.0, 100.0);
        assert_eq!(b.pointer_to_value(-500.0, track), Some(0.0));
        assert_eq!(b.pointer_to_value(10_000.0, track), Some(10.0));
    }

    #[test]
    fn test_rounding_halves_go_up() {
        let b = bounds(0.0, 10.0, 1.0);
        let track = TrackRect::new(0.0, 100.0);
        // 0.25 * 10 = 2.5 -> 3
        assert_eq!(b.pointer_to_value(25.0, track), Some(3.0));
        // 0.24 * 10 = 2.4 -> 2
        assert_eq!(b.pointer_to_value(24.0, track), Some(2.0));
    }

    #[test]
    fn test_fractional_increment_only_sees_whole_steps() {
        // The fraction is rounded to a whole unit before snapping
        let b = bounds(0.0, 2.0, 0.5);
        let track = TrackRect::new(0.0, 100.0);
        assert_eq!(b.pointer_to_value(30.0, track), Some(1.0));
        assert_eq!(b.pointer_to_value(80.0, track), Some(2.0));
    }

    #[test]
    fn test_unusable_track_yields_nothing() {
        let b = bounds(0.0, 10.0, 1.0);
        assert_eq!(b.pointer_to_value(5.0, TrackRect::new(0.0, 0.0)), None);
        assert_eq!(b.pointer_to_value(5.0, TrackRect::new(0.0, -20.0)), None);
        assert_eq!(b.pointer_to_value(f64::NAN, TrackRect::new(0.0, 100.0)), None);
    }
}
