//! Drive composition
//!
//! A `Composite` is a declarative tree of timed drives. Leaves name a target
//! (an animated value, or any label a caller binds to values later) and
//! carry a `TimingConfig`; inner nodes run their children together
//! (`Parallel`) or offset each child's start by a fixed interval (`Stagger`).
//!
//! Keeping the tree generic over its target lets components describe an
//! animation plan without touching the scheduler, then bind it to
//! `ValueId`s with [`Composite::filter_map_targets`].

use crate::timing::TimingConfig;

/// A tree of timed drives
#[derive(Clone, Debug, PartialEq)]
pub enum Composite<T> {
    /// A single drive of one target
    Timing { target: T, config: TimingConfig },
    /// Start all children at the same time
    Parallel(Vec<Composite<T>>),
    /// Start child `i` at `i * interval_ms`
    Stagger {
        interval_ms: f32,
        children: Vec<Composite<T>>,
    },
}

/// A leaf drive with its absolute start delay resolved
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledDrive<T> {
    pub target: T,
    /// Config whose `delay_ms` includes every enclosing stagger offset
    pub config: TimingConfig,
}

impl<T> ScheduledDrive<T> {
    /// Milliseconds after start at which this drive begins moving
    pub fn start_ms(&self) -> f32 {
        self.config.delay_ms
    }
}

impl<T> Composite<T> {
    pub fn timing(target: T, config: TimingConfig) -> Self {
        Composite::Timing { target, config }
    }

    pub fn parallel(children: impl IntoIterator<Item = Composite<T>>) -> Self {
        Composite::Parallel(children.into_iter().collect())
    }

    pub fn stagger(interval_ms: f32, children: impl IntoIterator<Item = Composite<T>>) -> Self {
        Composite::Stagger {
            interval_ms: interval_ms.max(0.0),
            children: children.into_iter().collect(),
        }
    }

    /// Number of leaf drives
    pub fn drive_count(&self) -> usize {
        match self {
            Composite::Timing { .. } => 1,
            Composite::Parallel(children) | Composite::Stagger { children, .. } => {
                children.iter().map(Composite::drive_count).sum()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.drive_count() == 0
    }

    /// Rebind every leaf to a new target, dropping leaves mapped to `None`
    ///
    /// Stagger slots are kept even when their child is dropped, so the
    /// remaining children keep their start offsets.
    pub fn filter_map_targets<U>(self, f: &mut impl FnMut(T) -> Option<U>) -> Composite<U> {
        match self {
            Composite::Timing { target, config } => match f(target) {
                Some(target) => Composite::Timing { target, config },
                None => Composite::Parallel(Vec::new()),
            },
            Composite::Parallel(children) => Composite::Parallel(
                children
                    .into_iter()
                    .map(|child| child.filter_map_targets(f))
                    .filter(|child| !child.is_empty())
                    .collect(),
            ),
            Composite::Stagger {
                interval_ms,
                children,
            } => Composite::Stagger {
                interval_ms,
                children: children
                    .into_iter()
                    .map(|child| child.filter_map_targets(f))
                    .collect(),
            },
        }
    }

    /// Resolve the tree into leaf drives in tree order
    pub fn flatten(&self) -> Vec<ScheduledDrive<T>>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.drive_count());
        self.flatten_into(0.0, &mut out);
        out
    }

    fn flatten_into(&self, offset_ms: f32, out: &mut Vec<ScheduledDrive<T>>)
    where
        T: Clone,
    {
        match self {
            Composite::Timing { target, config } => {
                let mut config = *config;
                config.delay_ms += offset_ms;
                out.push(ScheduledDrive {
                    target: target.clone(),
                    config,
                });
            }
            Composite::Parallel(children) => {
                for child in children {
                    child.flatten_into(offset_ms, out);
                }
            }
            Composite::Stagger {
                interval_ms,
                children,
            } => {
                for (i, child) in children.iter().enumerate() {
                    child.flatten_into(offset_ms + interval_ms * i as f32, out);
                }
            }
        }
    }
}
