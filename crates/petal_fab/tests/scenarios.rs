//! End-to-end FAB scenarios driven the way a host would: props in, presses
//! in, frames ticked, snapshots out.

use parking_lot::Mutex;
use petal_animation::AnimationScheduler;
use petal_fab::prelude::*;
use petal_fab::ExtendOrigin;
use petal_theme::Theme;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn context(scheduler: &AnimationScheduler) -> FabContext {
    FabContext::new(scheduler.handle(), Arc::new(Theme::light()))
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    StateChange(bool),
    Action(usize),
}

fn speed_dial(open: bool, log: &Arc<Mutex<Vec<Event>>>) -> FabGroupProps {
    let actions = (0..2).map(|index| {
        let sink = Arc::clone(log);
        FabAction::new(format!("icon-{index}"))
            .label(format!("Action {index}"))
            .on_press(move |_| sink.lock().push(Event::Action(index)))
    });
    let sink = Arc::clone(log);
    FabGroupProps::new("plus")
        .open(open)
        .actions(actions)
        .on_state_change(move |change| sink.lock().push(Event::StateChange(change.open)))
}

#[test]
fn test_primary_press_only_requests_open() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut group = FabGroup::mount(&context(&scheduler), speed_dial(false, &log)).unwrap();
    let before = group.visual();

    assert!(group.press_primary(&PressEvent::press()));
    assert_eq!(*log.lock(), vec![Event::StateChange(true)]);

    // Nothing moves until the parent passes the new state back
    scheduler.tick_by(100.0);
    assert_eq!(group.visual(), before);
    assert!(!group.is_open());
    assert_eq!(group.phase(), GroupPhase::Closed);

    group.set_props(speed_dial(true, &log)).unwrap();
    assert_eq!(group.phase(), GroupPhase::Opening);
    scheduler.run_until_idle(16.0, 100);

    let opened = group.visual();
    assert!(opened.open);
    assert_eq!(opened.backdrop.opacity, 1.0);
    assert!(opened.actions.iter().all(|a| a.opacity == 1.0 && a.interactive));
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_action_press_fires_handler_then_close() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let group = FabGroup::mount(&context(&scheduler), speed_dial(true, &log)).unwrap();

    assert_eq!(group.press_action(1, &PressEvent::press()), Ok(true));
    assert_eq!(
        *log.lock(),
        vec![Event::Action(1), Event::StateChange(false)]
    );
}

#[test]
fn test_open_close_round_trip_with_parent() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut group = FabGroup::mount(&context(&scheduler), speed_dial(false, &log)).unwrap();

    // Parent applies each request as it arrives
    for _ in 0..2 {
        group.press_primary(&PressEvent::press());
        let requested = match log.lock().last() {
            Some(Event::StateChange(open)) => *open,
            other => panic!("unexpected event {other:?}"),
        };
        group.set_props(speed_dial(requested, &log)).unwrap();
        scheduler.run_until_idle(16.0, 100);
    }

    assert_eq!(
        *log.lock(),
        vec![Event::StateChange(true), Event::StateChange(false)]
    );
    assert_eq!(group.phase(), GroupPhase::Closed);
    assert_eq!(group.action_progress(), vec![0.0, 0.0]);
    assert_eq!(group.backdrop_progress(), 0.0);
}

#[test]
fn test_reopen_mid_close_continues_from_current_values() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut group = FabGroup::mount(&context(&scheduler), speed_dial(true, &log)).unwrap();

    group.set_props(speed_dial(false, &log)).unwrap();
    scheduler.tick_by(75.0);
    let midway = group.action_progress();
    assert!(midway.iter().all(|&p| p > 0.0 && p < 1.0));

    group.set_props(speed_dial(true, &log)).unwrap();
    scheduler.tick_by(1.0);
    let resumed = group.action_progress();
    // Action 1 starts first and moves up from where it was; action 0 waits
    assert!(resumed[1] >= midway[1]);
    assert_eq!(resumed[0], midway[0]);

    scheduler.run_until_idle(16.0, 100);
    assert_eq!(group.action_progress(), vec![1.0, 1.0]);
}

#[test]
fn test_extend_scenario_with_late_measurement() {
    let scheduler = AnimationScheduler::new();
    let presses = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&presses);
    let props = move |extended: bool| {
        let counter = Arc::clone(&counter);
        AnimatedFabProps::new("pencil", "Compose")
            .extended(extended)
            .on_press(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
    };

    let mut fab = AnimatedFab::mount(&context(&scheduler), props(false));
    fab.set_props(props(true));
    assert_eq!(fab.phase(), ExtendPhase::Extending);

    // Host text layout lands a frame later
    scheduler.tick_by(16.0);
    assert_eq!(fab.on_label_layout(79.4, 19.6), Ok(true));
    assert_eq!(
        fab.active_drive(ExtendTarget::PillTranslate).map(|c| c.to_value),
        Some(-108.0)
    );

    scheduler.run_until_idle(16.0, 100);
    let visual = fab.visual();
    assert_eq!(visual.phase, ExtendPhase::Extended);
    assert_eq!(visual.pill_translate_x, -108.0);
    assert_eq!(visual.width, 164.0);
    assert_eq!(visual.origin, ExtendOrigin::RightLtr);

    assert!(fab.press(&PressEvent::press()));
    assert_eq!(presses.load(Ordering::SeqCst), 1);
}

#[test]
fn test_scheduler_gone_leaves_components_inert() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut group = {
        let scheduler = AnimationScheduler::new();
        FabGroup::mount(&context(&scheduler), speed_dial(false, &log)).unwrap()
    };

    group.set_props(speed_dial(true, &log)).unwrap();
    assert_eq!(group.phase(), GroupPhase::Open);
    assert!(group.press_backdrop(&PressEvent::press()));
    assert_eq!(*log.lock(), vec![Event::StateChange(false)]);
}

#[test]
fn test_visual_serializes() {
    let scheduler = AnimationScheduler::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let group = FabGroup::mount(&context(&scheduler), speed_dial(true, &log)).unwrap();

    let json = serde_json::to_value(group.visual()).unwrap();
    assert_eq!(json["open"], true);
    assert_eq!(json["phase"], "open");
    assert_eq!(json["actions"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["fab"]["accessibility"]["expanded"], true);
}
