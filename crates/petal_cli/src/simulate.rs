//! Headless frame loop
//!
//! Mounts components against a private scheduler, feeds them presses the
//! way a parent would, and samples their visuals every tick.

use anyhow::{bail, Result};
use parking_lot::Mutex;
use petal_animation::AnimationScheduler;
use petal_fab::prelude::*;
use petal_fab::{AnimatedFabVisual, FabGroupVisual};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Frame cap when `--frames` is not given
pub const DEFAULT_MAX_FRAMES: usize = 1000;

/// One sampled frame
#[derive(Debug, Serialize)]
pub struct Frame<T> {
    pub frame: usize,
    pub time_ms: f32,
    pub visual: T,
}

/// A labelled run of frames
#[derive(Debug, Serialize)]
pub struct Segment<T> {
    pub label: String,
    pub frames: Vec<Frame<T>>,
}

/// Tick until idle (or `max_frames`), sampling before the first tick and
/// after every tick
fn run<T>(
    scheduler: &AnimationScheduler,
    step_ms: f32,
    max_frames: usize,
    mut sample: impl FnMut() -> T,
) -> Vec<Frame<T>> {
    let mut frames = vec![Frame {
        frame: 0,
        time_ms: 0.0,
        visual: sample(),
    }];

    let mut frame = 0;
    while frame < max_frames && scheduler.has_active_animations() {
        scheduler.tick_by(step_ms);
        frame += 1;
        frames.push(Frame {
            frame,
            time_ms: frame as f32 * step_ms,
            visual: sample(),
        });
    }
    debug!("simulated {} frames", frame);
    frames
}

pub fn check_step(step_ms: f32) -> Result<()> {
    if !step_ms.is_finite() || step_ms <= 0.0 {
        bail!("Invalid step {}ms: must be a positive number", step_ms);
    }
    Ok(())
}

/// Options shared by the simulation commands
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub step_ms: f32,
    pub max_frames: usize,
}

/// Open a closed speed dial with a primary press, optionally close it again
/// with a backdrop press. The parent applies every requested state.
pub fn group(
    context: &FabContext,
    scheduler: &AnimationScheduler,
    action_count: usize,
    close: bool,
    options: RunOptions,
) -> Result<Vec<Segment<FabGroupVisual>>> {
    let requests: Arc<Mutex<Vec<FabGroupChange>>> = Arc::new(Mutex::new(Vec::new()));

    let props = |open: bool| {
        let sink = Arc::clone(&requests);
        FabGroupProps::new("plus")
            .open(open)
            .open_icon("close")
            .actions((0..action_count).map(|i| FabAction::new("star").label(format!("Action {i}"))))
            .on_state_change(move |change| sink.lock().push(change))
    };

    let mut group = FabGroup::mount(context, props(false))?;
    let mut segments = Vec::new();

    group.press_primary(&PressEvent::press());
    let open = apply_request(&requests)?;
    group.set_props(props(open))?;
    segments.push(Segment {
        label: "open".to_string(),
        frames: run(scheduler, options.step_ms, options.max_frames, || group.visual()),
    });

    if close {
        group.press_backdrop(&PressEvent::press());
        let open = apply_request(&requests)?;
        group.set_props(props(open))?;
        segments.push(Segment {
            label: "close".to_string(),
            frames: run(scheduler, options.step_ms, options.max_frames, || group.visual()),
        });
    }

    Ok(segments)
}

fn apply_request(requests: &Mutex<Vec<FabGroupChange>>) -> Result<bool> {
    match requests.lock().pop() {
        Some(change) => Ok(change.open),
        None => bail!("Group did not request a state change"),
    }
}

/// Parameters of the extend simulation
#[derive(Clone, Copy, Debug)]
pub struct ExtendOptions {
    pub label_width: f32,
    pub label_height: f32,
    pub animate_from: AnimateFrom,
    pub icon_mode: IconMode,
    pub collapse: bool,
}

/// Extend an AnimatedFab after its label has been measured
pub fn extend(
    context: &FabContext,
    scheduler: &AnimationScheduler,
    extend: ExtendOptions,
    options: RunOptions,
) -> Result<Vec<Segment<AnimatedFabVisual>>> {
    let props = |extended: bool| {
        AnimatedFabProps::new("plus", "Create")
            .extended(extended)
            .animate_from(extend.animate_from)
            .icon_mode(extend.icon_mode)
    };

    let mut fab = AnimatedFab::mount(context, props(false));
    fab.on_label_layout(extend.label_width, extend.label_height)?;

    let mut segments = Vec::new();
    fab.set_props(props(true));
    segments.push(Segment {
        label: "extend".to_string(),
        frames: run(scheduler, options.step_ms, options.max_frames, || fab.visual()),
    });

    if extend.collapse {
        fab.set_props(props(false));
        segments.push(Segment {
            label: "collapse".to_string(),
            frames: run(scheduler, options.step_ms, options.max_frames, || fab.visual()),
        });
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_theme::Theme;

    fn options() -> RunOptions {
        RunOptions {
            step_ms: 16.0,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }

    #[test]
    fn test_group_simulation_settles() {
        let scheduler = AnimationScheduler::new();
        let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
        let segments = group(&context, &scheduler, 3, true, options()).unwrap();

        assert_eq!(segments.len(), 2);
        let opened = &segments[0].frames.last().unwrap().visual;
        assert!(opened.open);
        assert!(opened.actions.iter().all(|a| a.progress == 1.0));

        let closed = &segments[1].frames.last().unwrap().visual;
        assert!(!closed.open);
        assert_eq!(closed.backdrop.opacity, 0.0);
    }

    #[test]
    fn test_extend_simulation_reaches_geometry() {
        let scheduler = AnimationScheduler::new();
        let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
        let segments = extend(
            &context,
            &scheduler,
            ExtendOptions {
                label_width: 80.0,
                label_height: 20.0,
                animate_from: AnimateFrom::Right,
                icon_mode: IconMode::Static,
                collapse: false,
            },
            options(),
        )
        .unwrap();

        let last = &segments[0].frames.last().unwrap().visual;
        assert_eq!(last.pill_translate_x, -108.0);
        assert_eq!(last.phase, ExtendPhase::Extended);
    }

    #[test]
    fn test_frame_cap() {
        let scheduler = AnimationScheduler::new();
        let context = FabContext::new(scheduler.handle(), Arc::new(Theme::light()));
        let capped = RunOptions {
            step_ms: 16.0,
            max_frames: 2,
        };
        let segments = group(&context, &scheduler, 2, false, capped).unwrap();
        assert_eq!(segments[0].frames.len(), 3);
    }

    #[test]
    fn test_step_validation() {
        assert!(check_step(16.0).is_ok());
        assert!(check_step(0.0).is_err());
        assert!(check_step(f32::NAN).is_err());
    }
}
