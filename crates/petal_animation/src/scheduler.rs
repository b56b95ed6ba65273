//! Animation scheduler
//!
//! Owns every animated value and every drive in flight, and advances them
//! each frame. Values are registered implicitly by `AnimatedValue`, which
//! removes its slot again when dropped.
//!
//! # Drive groups
//!
//! `SchedulerHandle::start` flattens a `Composite` into leaf drives that
//! share one group and one completion callback. A group completes when its
//! last drive reaches its target (`DriveOutcome::Finished`).
//!
//! Starting a drive on a value that is already being driven supersedes the
//! older drive: its whole group stops where it is and its callback runs
//! right away with `DriveOutcome::Interrupted`, before the new drive starts.
//! A superseded group never reports `Finished` afterwards.
//!
//! Setting a value directly, or dropping its `AnimatedValue`, detaches only
//! that value's drive; the rest of its group keeps running and completes as
//! usual. A group left with nothing to drive ends there: `Interrupted` after
//! a direct set, and silently (callback discarded) after a drop.

use crate::composite::Composite;
use crate::timing::{TimingAnimation, TimingConfig};
use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered animated value
    pub struct ValueId;
    /// Handle to a drive in flight
    struct DriveId;
    /// Handle to a group of drives started together
    pub struct GroupId;
}

/// How a drive group ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriveOutcome {
    /// Every drive in the group reached its target
    Finished,
    /// The group was stopped or superseded before finishing
    Interrupted,
}

impl DriveOutcome {
    pub fn finished(self) -> bool {
        matches!(self, DriveOutcome::Finished)
    }
}

/// Called once when a drive group ends
pub type CompletionCallback = Box<dyn FnOnce(DriveOutcome) + Send>;

struct ValueSlot {
    value: f32,
    drive: Option<DriveId>,
}

struct ActiveDrive {
    value: ValueId,
    group: GroupId,
    timing: TimingAnimation,
}

struct DriveGroup {
    remaining: usize,
    on_complete: Option<CompletionCallback>,
}

/// Callbacks collected under the lock and run after it is released
type Pending = SmallVec<[(CompletionCallback, DriveOutcome); 4]>;

/// Internal state of the animation scheduler
struct SchedulerInner {
    values: SlotMap<ValueId, ValueSlot>,
    drives: SlotMap<DriveId, ActiveDrive>,
    groups: SlotMap<GroupId, DriveGroup>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn new() -> Self {
        Self {
            values: SlotMap::with_key(),
            drives: SlotMap::with_key(),
            groups: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Stop every drive of a group and hand back its callback
    fn cancel_group(&mut self, group: GroupId) -> Option<CompletionCallback> {
        let entry = self.groups.remove(group)?;

        let stale: SmallVec<[DriveId; 8]> = self
            .drives
            .iter()
            .filter(|(_, drive)| drive.group == group)
            .map(|(id, _)| id)
            .collect();

        for id in stale {
            if let Some(drive) = self.drives.remove(id) {
                if let Some(slot) = self.values.get_mut(drive.value) {
                    if slot.drive == Some(id) {
                        slot.drive = None;
                    }
                }
            }
        }

        tracing::trace!("drive group {:?} cancelled", group);
        entry.on_complete
    }

    /// Take the drive moving `value` out of its group
    ///
    /// Returns the group's callback when that was its last drive.
    fn detach_value_drive(&mut self, value: ValueId) -> Option<CompletionCallback> {
        let id = self.values.get_mut(value)?.drive.take()?;
        let drive = self.drives.remove(id)?;

        let group = self.groups.get_mut(drive.group)?;
        group.remaining = group.remaining.saturating_sub(1);
        if group.remaining > 0 {
            return None;
        }
        tracing::trace!("drive group {:?} emptied", drive.group);
        self.groups.remove(drive.group).and_then(|g| g.on_complete)
    }

    /// Remove a drive that reached its target; returns the group callback
    /// if this was the group's last drive
    fn finish_drive(&mut self, id: DriveId) -> Option<CompletionCallback> {
        let drive = self.drives.remove(id)?;
        if let Some(slot) = self.values.get_mut(drive.value) {
            if slot.drive == Some(id) {
                slot.drive = None;
            }
        }

        let group = self.groups.get_mut(drive.group)?;
        group.remaining = group.remaining.saturating_sub(1);
        if group.remaining > 0 {
            return None;
        }
        self.groups.remove(drive.group).and_then(|g| g.on_complete)
    }

    fn start(
        &mut self,
        composite: &Composite<ValueId>,
        on_complete: Option<CompletionCallback>,
        pending: &mut Pending,
    ) -> GroupId {
        let group = self.groups.insert(DriveGroup {
            remaining: 0,
            on_complete,
        });

        for scheduled in composite.flatten() {
            let Some(previous) = self.values.get(scheduled.target).map(|slot| slot.drive) else {
                // Value was dropped before the plan was started
                continue;
            };

            if let Some(previous) = previous {
                let previous_group = self.drives.get(previous).map(|d| d.group);
                match previous_group {
                    Some(previous_group) if previous_group == group => {
                        // Same plan drives this value twice: the later leaf wins
                        self.drives.remove(previous);
                        if let Some(g) = self.groups.get_mut(group) {
                            g.remaining = g.remaining.saturating_sub(1);
                        }
                    }
                    Some(previous_group) => {
                        if let Some(callback) = self.cancel_group(previous_group) {
                            pending.push((callback, DriveOutcome::Interrupted));
                        }
                    }
                    None => {}
                }
            }

            let Some(slot) = self.values.get_mut(scheduled.target) else {
                continue;
            };

            if scheduled.config.is_instant() {
                slot.value = scheduled.config.to_value;
                slot.drive = None;
                continue;
            }

            let id = self.drives.insert(ActiveDrive {
                value: scheduled.target,
                group,
                timing: TimingAnimation::new(scheduled.config),
            });
            slot.drive = Some(id);
            if let Some(g) = self.groups.get_mut(group) {
                g.remaining += 1;
            }
        }

        let empty = self.groups.get(group).map_or(false, |g| g.remaining == 0);
        if empty {
            if let Some(callback) = self.groups.remove(group).and_then(|g| g.on_complete) {
                pending.push((callback, DriveOutcome::Finished));
            }
        }

        group
    }

    fn tick(&mut self, dt_ms: f32, pending: &mut Pending) -> bool {
        let mut finished: SmallVec<[DriveId; 16]> = SmallVec::new();

        let SchedulerInner { values, drives, .. } = self;
        for (id, drive) in drives.iter_mut() {
            let Some(slot) = values.get_mut(drive.value) else {
                continue;
            };
            let step = drive.timing.step(dt_ms, slot.value);
            if let Some(value) = step.value {
                slot.value = value;
            }
            if step.finished {
                finished.push(id);
            }
        }

        for id in finished {
            if let Some(callback) = self.finish_drive(id) {
                pending.push((callback, DriveOutcome::Finished));
            }
        }

        !self.drives.is_empty()
    }
}

fn run_pending(pending: Pending) {
    for (callback, outcome) in pending {
        callback(outcome);
    }
}

/// The animation scheduler that ticks all drives
///
/// Held by the host's frame loop; components receive a `SchedulerHandle`.
///
/// ```ignore
/// let scheduler = AnimationScheduler::new();
/// let handle = scheduler.handle();
///
/// // Each frame:
/// if scheduler.tick() {
///     request_redraw();
/// }
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner::new())),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all drives using wall-clock time since the previous tick
    ///
    /// Returns true if any drives are still active (need another tick).
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.lock();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.tick_by(dt_ms)
    }

    /// Tick all drives by an explicit frame duration
    ///
    /// Completion callbacks run after the internal lock is released, so
    /// they may start new drives.
    pub fn tick_by(&self, dt_ms: f32) -> bool {
        let mut pending = Pending::new();
        let active = self.inner.lock().tick(dt_ms, &mut pending);
        run_pending(pending);
        active
    }

    /// Tick in fixed steps until nothing is animating (or `max_frames` runs out)
    ///
    /// Returns the number of frames ticked.
    pub fn run_until_idle(&self, step_ms: f32, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.has_active_animations() {
            self.tick_by(step_ms);
            frames += 1;
        }
        frames
    }

    /// Check if any drives are still active
    pub fn has_active_animations(&self) -> bool {
        !self.inner.lock().drives.is_empty()
    }

    /// Number of registered animated values
    pub fn value_count(&self) -> usize {
        self.inner.lock().values.len()
    }

    /// Number of drives in flight
    pub fn drive_count(&self) -> usize {
        self.inner.lock().drives.len()
    }

    /// Number of drive groups still waiting to complete
    pub fn group_count(&self) -> usize {
        self.inner.lock().groups.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that own animated values. It won't keep the
/// scheduler alive; every operation on a dropped scheduler is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a value and return its ID
    pub fn register_value(&self, initial: f32) -> Option<ValueId> {
        self.inner.upgrade().map(|inner| {
            inner.lock().values.insert(ValueSlot {
                value: initial,
                drive: None,
            })
        })
    }

    /// Current value
    pub fn value(&self, id: ValueId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().values.get(id).map(|slot| slot.value))
    }

    /// Config of the drive currently moving this value, if any
    pub fn active_config(&self, id: ValueId) -> Option<TimingConfig> {
        let inner = self.inner.upgrade()?;
        let guard = inner.lock();
        let drive = guard.values.get(id)?.drive?;
        guard.drives.get(drive).map(|d| *d.timing.config())
    }

    /// Whether a drive is currently moving (or waiting to move) this value
    pub fn is_animating(&self, id: ValueId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().values.get(id).map(|slot| slot.drive.is_some()))
            .unwrap_or(false)
    }

    /// Set a value immediately, stopping only the drive moving it
    pub fn set_value(&self, id: ValueId, value: f32) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let emptied = {
            let mut guard = inner.lock();
            let callback = guard.detach_value_drive(id);
            if let Some(slot) = guard.values.get_mut(id) {
                slot.value = value;
            }
            callback
        };
        if let Some(callback) = emptied {
            callback(DriveOutcome::Interrupted);
        }
    }

    /// Remove a value and its drive
    ///
    /// A group left without drives is discarded without its callback.
    pub fn remove_value(&self, id: ValueId) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let discarded = {
            let mut guard = inner.lock();
            let callback = guard.detach_value_drive(id);
            guard.values.remove(id);
            callback
        };
        // Released outside the lock: the callback may own other values
        drop(discarded);
    }

    /// Start a composite drive plan
    ///
    /// Returns the group ID, or `None` if the scheduler is gone (the callback
    /// is then dropped without being called).
    pub fn start(
        &self,
        composite: Composite<ValueId>,
        on_complete: Option<CompletionCallback>,
    ) -> Option<GroupId> {
        let inner = self.inner.upgrade()?;
        let mut pending = Pending::new();
        let group = {
            let mut guard = inner.lock();
            // Avoid a huge first dt for drives started after an idle period
            if guard.drives.is_empty() {
                guard.last_frame = Instant::now();
            }
            guard.start(&composite, on_complete, &mut pending)
        };
        tracing::trace!(
            "started drive group {:?} ({} drives)",
            group,
            composite.drive_count()
        );
        run_pending(pending);
        Some(group)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// A scheduler-owned value that is removed again when dropped
///
/// # Example
///
/// ```ignore
/// let progress = AnimatedValue::new(handle.clone(), 0.0);
/// handle.start(
///     Composite::parallel([progress.timing(TimingConfig::to(1.0).duration_ms(150.0))]),
///     None,
/// );
/// let current = progress.get();
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    id: Option<ValueId>,
    /// Last value written locally; used once the scheduler is gone
    fallback: f32,
}

impl AnimatedValue {
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        let id = handle.register_value(initial);
        Self {
            handle,
            id,
            fallback: initial,
        }
    }

    pub fn id(&self) -> Option<ValueId> {
        self.id
    }

    /// Current animated value
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.value(id))
            .unwrap_or(self.fallback)
    }

    /// Config of the drive in flight, if any
    pub fn active_config(&self) -> Option<TimingConfig> {
        self.id.and_then(|id| self.handle.active_config(id))
    }

    /// A single-drive composite for this value
    ///
    /// Yields an empty composite when the scheduler is gone.
    pub fn timing(&self, config: TimingConfig) -> Composite<ValueId> {
        match self.id {
            Some(id) => Composite::timing(id, config),
            None => Composite::parallel([]),
        }
    }

    /// Set value immediately without animation
    pub fn set_immediate(&mut self, value: f32) {
        self.fallback = value;
        if let Some(id) = self.id {
            self.handle.set_value(id, value);
        }
    }

    /// Check if currently animating (including a pending start delay)
    pub fn is_animating(&self) -> bool {
        self.id
            .map(|id| self.handle.is_animating(id))
            .unwrap_or(false)
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_value(id);
        }
    }
}
