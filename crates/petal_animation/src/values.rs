//! Interpolation helpers
//!
//! Piecewise-linear range mapping (`Interpolation`) used to derive visual
//! properties from a progress value, e.g. mapping progress 0..1 onto scale
//! 0.8..1.0. Inputs outside the range clamp to the end outputs.

use smallvec::SmallVec;

/// Piecewise-linear mapping from an input range to an output range
///
/// ```rust
/// use petal_animation::Interpolation;
///
/// let scale = Interpolation::new(&[0.0, 1.0], &[0.8, 1.0]);
/// assert!((scale.map(0.5) - 0.9).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    /// `(input, output)` stops, inputs ascending
    stops: SmallVec<[(f32, f32); 4]>,
}

impl Interpolation {
    /// Create a mapping; `input` must be ascending and match `output` in length
    ///
    /// Extra entries of the longer range are ignored. An empty mapping
    /// passes values through unchanged.
    pub fn new(input: &[f32], output: &[f32]) -> Self {
        debug_assert!(
            !input.is_empty() && input.len() == output.len(),
            "interpolation ranges must be non-empty and of equal length"
        );
        Self {
            stops: input.iter().copied().zip(output.iter().copied()).collect(),
        }
    }

    /// Map a value through the ranges
    pub fn map(&self, value: f32) -> f32 {
        let (Some(&(first_in, first_out)), Some(&(last_in, last_out))) =
            (self.stops.first(), self.stops.last())
        else {
            return value;
        };
        if value <= first_in {
            return first_out;
        }
        if value >= last_in {
            return last_out;
        }

        let Some(segment) = self.stops.windows(2).find(|pair| value < pair[1].0) else {
            return last_out;
        };
        let ((in_lo, out_lo), (in_hi, out_hi)) = (segment[0], segment[1]);

        let span = in_hi - in_lo;
        if span.abs() < f32::EPSILON {
            return out_lo;
        }
        out_lo + (out_hi - out_lo) * ((value - in_lo) / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_mapping() {
        let map = Interpolation::new(&[0.0, 1.0], &[24.0, -8.0]);
        assert_eq!(map.map(0.0), 24.0);
        assert_eq!(map.map(1.0), -8.0);
        assert!((map.map(0.5) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_multi_segment() {
        let map = Interpolation::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 1.0]);
        assert!((map.map(0.25) - 0.5).abs() < 1e-6);
        assert_eq!(map.map(0.5), 1.0);
        assert_eq!(map.map(0.75), 1.0);
    }

    #[test]
    fn test_clamps_outside_range() {
        let map = Interpolation::new(&[0.0, 1.0], &[0.8, 1.0]);
        assert_eq!(map.map(-1.0), 0.8);
        assert_eq!(map.map(2.0), 1.0);
    }

    #[test]
    fn test_single_stop_is_constant() {
        let map = Interpolation::new(&[0.5], &[3.0]);
        assert_eq!(map.map(0.0), 3.0);
        assert_eq!(map.map(1.0), 3.0);
    }
}
