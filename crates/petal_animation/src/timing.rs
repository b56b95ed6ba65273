//! Timed drives
//!
//! A drive moves a single value from wherever it currently is to a target
//! value over a duration, optionally after a start delay.

use crate::easing::Easing;

/// Configuration of one timed drive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    /// Value the drive settles at
    pub to_value: f32,
    /// Duration in milliseconds (after the delay)
    pub duration_ms: f32,
    /// Delay before the drive starts moving, in milliseconds
    pub delay_ms: f32,
    /// Easing curve applied to progress
    pub easing: Easing,
}

impl TimingConfig {
    /// Drive toward `to_value` with no duration, no delay and the default easing
    pub fn to(to_value: f32) -> Self {
        Self {
            to_value,
            duration_ms: 0.0,
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn delay_ms(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Multiply duration and delay by an animation speed factor
    ///
    /// Non-finite or negative factors are treated as zero (instant).
    pub fn scaled(mut self, factor: f32) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        self.duration_ms *= factor;
        self.delay_ms *= factor;
        self
    }

    /// Whether the drive completes the moment it starts
    pub fn is_instant(&self) -> bool {
        self.duration_ms <= 0.0 && self.delay_ms <= 0.0
    }
}

/// Result of advancing a drive by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingStep {
    /// New value to write, `None` while still waiting out the delay
    pub value: Option<f32>,
    /// Whether the drive reached its target this frame
    pub finished: bool,
}

/// Runtime state of one timed drive
#[derive(Clone, Copy, Debug)]
pub struct TimingAnimation {
    config: TimingConfig,
    /// Captured when the delay elapses
    from: Option<f32>,
    elapsed_ms: f32,
}

impl TimingAnimation {
    pub fn new(config: TimingConfig) -> Self {
        Self {
            config,
            from: None,
            elapsed_ms: 0.0,
        }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Whether the drive is still inside its start delay
    pub fn is_waiting(&self) -> bool {
        self.from.is_none()
    }

    /// Progress through the moving part of the drive (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let local = self.elapsed_ms - self.config.delay_ms;
        if local < 0.0 {
            return 0.0;
        }
        if self.config.duration_ms <= 0.0 {
            return 1.0;
        }
        (local / self.config.duration_ms).clamp(0.0, 1.0)
    }

    /// Advance by `dt_ms`; `current` is the value's present state
    pub fn step(&mut self, dt_ms: f32, current: f32) -> TimingStep {
        self.elapsed_ms += dt_ms.max(0.0);

        if self.elapsed_ms < self.config.delay_ms {
            return TimingStep {
                value: None,
                finished: false,
            };
        }

        let from = *self.from.get_or_insert(current);
        let progress = self.progress();
        if progress >= 1.0 {
            return TimingStep {
                value: Some(self.config.to_value),
                finished: true,
            };
        }

        let eased = self.config.easing.apply(progress);
        TimingStep {
            value: Some(from + (self.config.to_value - from) * eased),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_drive() {
        let config = TimingConfig::to(10.0)
            .duration_ms(100.0)
            .easing(Easing::Linear);
        let mut drive = TimingAnimation::new(config);

        let step = drive.step(50.0, 0.0);
        assert!(!step.finished);
        assert!((step.value.unwrap() - 5.0).abs() < 1e-4);

        let step = drive.step(50.0, 5.0);
        assert!(step.finished);
        assert_eq!(step.value, Some(10.0));
    }

    #[test]
    fn test_delay_captures_start_value_late() {
        let config = TimingConfig::to(1.0)
            .duration_ms(100.0)
            .delay_ms(40.0)
            .easing(Easing::Linear);
        let mut drive = TimingAnimation::new(config);

        let step = drive.step(20.0, 0.0);
        assert_eq!(step.value, None);
        assert!(drive.is_waiting());

        // Value moved elsewhere while we were waiting
        let step = drive.step(20.0, 0.5);
        assert_eq!(step.value, Some(0.5));
        assert!(!drive.is_waiting());

        let step = drive.step(50.0, 0.5);
        assert!((step.value.unwrap() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_scaled() {
        let config = TimingConfig::to(1.0)
            .duration_ms(250.0)
            .delay_ms(100.0)
            .scaled(2.0);
        assert_eq!(config.duration_ms, 500.0);
        assert_eq!(config.delay_ms, 200.0);

        let instant = config.scaled(0.0);
        assert!(instant.is_instant());

        let nan = TimingConfig::to(1.0).duration_ms(100.0).scaled(f32::NAN);
        assert!(nan.is_instant());
    }

    #[test]
    fn test_zero_duration_finishes_after_delay() {
        let config = TimingConfig::to(3.0).delay_ms(10.0);
        let mut drive = TimingAnimation::new(config);

        assert!(!drive.step(5.0, 0.0).finished);
        let step = drive.step(5.0, 0.0);
        assert!(step.finished);
        assert_eq!(step.value, Some(3.0));
    }
}
