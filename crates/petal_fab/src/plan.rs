//! Animation plans
//!
//! Pure functions from a component's controlled booleans to a `Composite`
//! drive tree over symbolic targets. Components call them when a boolean
//! changes and bind the targets to their own animated values; keeping the
//! plans free of scheduler state makes every timing rule checkable without
//! running a frame loop.
//!
//! All durations and delays are multiplied by the theme's animation scale.

use crate::geometry::{ExtendGeometry, IconMode};
use petal_animation::{Composite, Easing, TimingConfig};

/// Backdrop fade-in when a group opens
pub const GROUP_OPEN_BACKDROP_MS: f32 = 250.0;
/// Backdrop fade-out when a group closes
pub const GROUP_CLOSE_BACKDROP_MS: f32 = 200.0;
/// Per-action drive, both directions
pub const GROUP_ACTION_MS: f32 = 150.0;
/// Start offset between consecutive actions while opening
pub const GROUP_STAGGER_MS: f32 = 50.0;

pub const EXTEND_MS: f32 = 150.0;
pub const LABEL_FADE_IN_MS: f32 = 250.0;
pub const LABEL_FADE_IN_DELAY_MS: f32 = 100.0;
pub const LABEL_FADE_OUT_MS: f32 = 100.0;
/// Pill height factor while extended
pub const EXTENDED_PILL_SCALE: f32 = 0.9;

pub const SHOW_MS: f32 = 200.0;
pub const HIDE_MS: f32 = 150.0;

/// Values animated by a FAB group
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupTarget {
    Backdrop,
    /// Progress of the action at this index
    Action(usize),
}

/// Values animated by an extending FAB
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtendTarget {
    PillScale,
    PillTranslate,
    IconTranslate,
    LabelOpacity,
}

impl ExtendTarget {
    pub const ALL: [ExtendTarget; 4] = [
        ExtendTarget::PillScale,
        ExtendTarget::PillTranslate,
        ExtendTarget::IconTranslate,
        ExtendTarget::LabelOpacity,
    ];
}

/// Plan for a group whose `open` prop changed
///
/// Opening fades the backdrop in while the actions unfurl one by one,
/// last action first. Closing retracts every action at once.
pub fn group_plan(open: bool, action_count: usize, scale: f32) -> Composite<GroupTarget> {
    if open {
        Composite::parallel([
            Composite::timing(
                GroupTarget::Backdrop,
                TimingConfig::to(1.0)
                    .duration_ms(GROUP_OPEN_BACKDROP_MS)
                    .scaled(scale),
            ),
            Composite::stagger(
                GROUP_STAGGER_MS * scale,
                (0..action_count).rev().map(|index| {
                    Composite::timing(
                        GroupTarget::Action(index),
                        TimingConfig::to(1.0).duration_ms(GROUP_ACTION_MS).scaled(scale),
                    )
                }),
            ),
        ])
    } else {
        Composite::parallel([
            Composite::timing(
                GroupTarget::Backdrop,
                TimingConfig::to(0.0)
                    .duration_ms(GROUP_CLOSE_BACKDROP_MS)
                    .scaled(scale),
            ),
            Composite::parallel((0..action_count).map(|index| {
                Composite::timing(
                    GroupTarget::Action(index),
                    TimingConfig::to(0.0).duration_ms(GROUP_ACTION_MS).scaled(scale),
                )
            })),
        ])
    }
}

/// Plan toward the extended (`true`) or collapsed (`false`) layout
pub fn extend_plan(
    extended: bool,
    geometry: &ExtendGeometry,
    icon_mode: IconMode,
    scale: f32,
) -> Composite<ExtendTarget> {
    let motion = |target, to| {
        Composite::timing(
            target,
            TimingConfig::to(to)
                .duration_ms(EXTEND_MS)
                .easing(Easing::Linear)
                .scaled(scale),
        )
    };

    if extended {
        let mut drives = vec![
            motion(ExtendTarget::PillScale, EXTENDED_PILL_SCALE),
            motion(ExtendTarget::PillTranslate, geometry.pill_translate_x),
        ];
        if icon_mode == IconMode::Dynamic {
            drives.push(motion(ExtendTarget::IconTranslate, geometry.icon_translate_x));
        }
        drives.push(Composite::timing(
            ExtendTarget::LabelOpacity,
            TimingConfig::to(1.0)
                .duration_ms(LABEL_FADE_IN_MS)
                .delay_ms(LABEL_FADE_IN_DELAY_MS)
                .easing(Easing::Linear)
                .scaled(scale),
        ));
        Composite::parallel(drives)
    } else {
        Composite::parallel([
            motion(ExtendTarget::PillScale, 1.0),
            motion(ExtendTarget::PillTranslate, 0.0),
            motion(ExtendTarget::IconTranslate, 0.0),
            Composite::timing(
                ExtendTarget::LabelOpacity,
                TimingConfig::to(0.0)
                    .duration_ms(LABEL_FADE_OUT_MS)
                    .easing(Easing::Linear)
                    .scaled(scale),
            ),
        ])
    }
}

/// Settled value of an extend target
pub fn extend_rest_value(
    target: ExtendTarget,
    extended: bool,
    geometry: &ExtendGeometry,
    icon_mode: IconMode,
) -> f32 {
    match (target, extended) {
        (ExtendTarget::PillScale, true) => EXTENDED_PILL_SCALE,
        (ExtendTarget::PillScale, false) => 1.0,
        (ExtendTarget::PillTranslate, true) => geometry.pill_translate_x,
        (ExtendTarget::IconTranslate, true) if icon_mode == IconMode::Dynamic => {
            geometry.icon_translate_x
        }
        (ExtendTarget::LabelOpacity, true) => 1.0,
        _ => 0.0,
    }
}

/// Drive for a `visible` change
pub fn visibility_config(visible: bool, scale: f32) -> TimingConfig {
    if visible {
        TimingConfig::to(1.0).duration_ms(SHOW_MS).scaled(scale)
    } else {
        TimingConfig::to(0.0).duration_ms(HIDE_MS).scaled(scale)
    }
}
