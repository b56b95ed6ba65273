//! Per-action progress arena
//!
//! One animated progress value per action, addressed by index. Resizing
//! keeps the values that survive, drops the tail, and appends new cells at
//! a caller-given value, so actions that stay on screen never flicker back
//! to zero when the list length changes.

use petal_animation::{AnimatedValue, SchedulerHandle, ValueId};

/// Resizable array of animated progress values
pub struct ProgressArena {
    handle: SchedulerHandle,
    cells: Vec<AnimatedValue>,
}

impl ProgressArena {
    pub fn new(handle: SchedulerHandle, len: usize, initial: f32) -> Self {
        let cells = (0..len)
            .map(|_| AnimatedValue::new(handle.clone(), initial))
            .collect();
        Self { handle, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Grow or shrink to `len`, filling new cells with `fill`
    ///
    /// Dropped cells stop their own drives; drives of the surviving cells
    /// carry on, even when they were started in the same group.
    pub fn resize(&mut self, len: usize, fill: f32) {
        let previous = self.cells.len();
        if len == previous {
            return;
        }
        if len < previous {
            self.cells.truncate(len);
        } else {
            let handle = &self.handle;
            self.cells
                .extend((previous..len).map(|_| AnimatedValue::new(handle.clone(), fill)));
        }
        tracing::debug!(from = previous, to = len, fill, "progress arena resized");
    }

    /// Current progress at `index`
    pub fn get(&self, index: usize) -> Option<f32> {
        self.cells.get(index).map(AnimatedValue::get)
    }

    /// Scheduler id of the value at `index`
    pub fn value_id(&self, index: usize) -> Option<ValueId> {
        self.cells.get(index).and_then(AnimatedValue::id)
    }

    /// Snapshot of every value
    pub fn values(&self) -> Vec<f32> {
        self.cells.iter().map(AnimatedValue::get).collect()
    }

    pub fn is_animating(&self) -> bool {
        self.cells.iter().any(AnimatedValue::is_animating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_animation::{AnimationScheduler, Composite, TimingConfig};

    #[test]
    fn test_resize_preserves_existing() {
        let scheduler = AnimationScheduler::new();
        let mut arena = ProgressArena::new(scheduler.handle(), 2, 1.0);
        assert_eq!(arena.values(), vec![1.0, 1.0]);

        arena.resize(3, 0.0);
        assert_eq!(arena.values(), vec![1.0, 1.0, 0.0]);

        arena.resize(1, 0.0);
        assert_eq!(arena.values(), vec![1.0]);
        assert_eq!(scheduler.value_count(), 1);

        arena.resize(1, 0.0);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_resize_keeps_values_in_flight() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let mut arena = ProgressArena::new(handle.clone(), 2, 0.0);

        let first = arena.value_id(0).unwrap();
        handle.start(
            Composite::timing(first, TimingConfig::to(1.0).duration_ms(100.0)),
            None,
        );
        scheduler.tick_by(50.0);
        let midway = arena.get(0).unwrap();

        arena.resize(4, 0.0);
        assert_eq!(arena.value_id(0), Some(first));
        assert_eq!(arena.get(0), Some(midway));
        assert!(arena.is_animating());

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(arena.values(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_truncate_keeps_surviving_drives() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let mut arena = ProgressArena::new(handle.clone(), 2, 0.0);

        let (first, last) = (arena.value_id(0).unwrap(), arena.value_id(1).unwrap());
        let config = TimingConfig::to(1.0).duration_ms(100.0);
        handle.start(
            Composite::parallel([Composite::timing(first, config), Composite::timing(last, config)]),
            None,
        );
        scheduler.tick_by(20.0);

        arena.resize(1, 0.0);
        assert_eq!(scheduler.drive_count(), 1);
        assert!(arena.get(1).is_none());
        assert!(arena.is_animating());

        scheduler.run_until_idle(16.0, 100);
        assert_eq!(arena.values(), vec![1.0]);
    }
}
