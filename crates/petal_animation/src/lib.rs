//! Petal Animation System
//!
//! Timed value drives and their composition, ticked by a frame scheduler.
//!
//! # Features
//!
//! - **Easing**: linear, ease, standard and custom cubic-bezier curves
//! - **Timing Drives**: move one value to a target over a duration, after a delay
//! - **Composition**: run drives together (`parallel`) or offset by a fixed
//!   interval (`stagger`)
//! - **Explicit Supersession**: re-driving a value cancels the older drive
//!   group and reports it as interrupted before the new drive begins
//! - **Owned Values**: `AnimatedValue` removes itself from the scheduler on
//!   drop; the rest of its drive group keeps running
//!
//! # Example
//!
//! ```rust
//! use petal_animation::{AnimatedValue, AnimationScheduler, Composite, Easing, TimingConfig};
//!
//! let scheduler = AnimationScheduler::new();
//! let opacity = AnimatedValue::new(scheduler.handle(), 0.0);
//!
//! let fade_in = opacity.timing(
//!     TimingConfig::to(1.0).duration_ms(200.0).easing(Easing::Linear),
//! );
//! scheduler.handle().start(Composite::parallel([fade_in]), None);
//!
//! scheduler.tick_by(100.0);
//! assert!((opacity.get() - 0.5).abs() < 1e-4);
//! ```

pub mod composite;
pub mod easing;
pub mod scheduler;
pub mod timing;
pub mod values;

pub use composite::{Composite, ScheduledDrive};
pub use easing::Easing;
pub use scheduler::{
    AnimatedValue, AnimationScheduler, CompletionCallback, DriveOutcome, GroupId,
    SchedulerHandle, ValueId,
};
pub use timing::{TimingAnimation, TimingConfig, TimingStep};
pub use values::Interpolation;
