// ABOUTME: Hold/timer state machine for time and hold exercises
// ABOUTME: Frames gate the timer through the form streak; wall-clock ticks advance it to completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hold timing
//!
//! ```text
//!   idle ----valid----> holding ----invalid----> paused
//!                          ^                        |
//!                          +---------valid----------+
//!   holding --tick, elapsed >= target--> complete (terminal)
//! ```
//!
//! Frames decide whether the timer may run; ticks move it. The two never
//! overlap: the caller serializes them.

use crate::state::{EvaluationState, HoldPhase, HoldTimerPolicy};
use form_core::constants::messages::DEFAULT_COMPLETION;
use form_core::constants::timing::HOLD_TICK_SECONDS;
use form_core::models::ExerciseMessages;
use serde::{Deserialize, Serialize};

/// What one frame did to the hold state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldTransition {
    /// First valid frame of the session
    Started,
    /// Valid frame after an interruption
    Resumed,
    /// Valid frame while already holding
    Continued,
    /// Invalid frame interrupted a running hold
    Paused,
    /// Invalid frame while not holding
    WrongForm,
    /// Hold already complete; frame ignored
    AlreadyComplete,
}

/// What one tick did to the hold timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum TickTransition {
    /// Timer not running
    Idle,
    /// Timer advanced
    Advanced {
        /// Elapsed seconds after the tick
        elapsed: u32,
    },
    /// Timer crossed half of the target
    Halfway {
        /// Elapsed seconds after the tick
        elapsed: u32,
    },
    /// Target reached; session is now complete
    Completed {
        /// Final elapsed seconds, equal to the target
        elapsed: u32,
    },
}

/// Apply one frame's form result to the hold state
pub fn apply_form(
    state: &mut EvaluationState,
    messages: &ExerciseMessages,
    form_valid: bool,
    policy: HoldTimerPolicy,
) -> HoldTransition {
    if state.hold_phase == HoldPhase::Complete {
        return HoldTransition::AlreadyComplete;
    }

    if form_valid {
        let transition = match state.hold_phase {
            HoldPhase::Idle => HoldTransition::Started,
            HoldPhase::Paused => HoldTransition::Resumed,
            HoldPhase::Holding | HoldPhase::Complete => HoldTransition::Continued,
        };
        state.hold_phase = HoldPhase::Holding;
        state.is_hold_active = true;
        state.form_streak_count = state.form_streak_count.saturating_add(1);
        state.last_feedback_message.clone_from(&messages.correct);
        return transition;
    }

    state.is_hold_active = false;
    state.form_streak_count = 0;
    state.last_feedback_message.clone_from(&messages.wrong_form);

    match state.hold_phase {
        HoldPhase::Holding => {
            state.hold_phase = HoldPhase::Paused;
            if policy == HoldTimerPolicy::Reset {
                state.elapsed_hold_seconds = 0;
            }
            HoldTransition::Paused
        }
        HoldPhase::Idle | HoldPhase::Paused | HoldPhase::Complete => HoldTransition::WrongForm,
    }
}

/// Advance the hold timer by one wall-clock tick toward `target_seconds`
pub fn tick(
    state: &mut EvaluationState,
    messages: &ExerciseMessages,
    target_seconds: u32,
) -> TickTransition {
    if !state.is_hold_active || state.hold_phase != HoldPhase::Holding {
        return TickTransition::Idle;
    }

    let before = state.elapsed_hold_seconds;
    let elapsed = before.saturating_add(HOLD_TICK_SECONDS).min(target_seconds);
    state.elapsed_hold_seconds = elapsed;

    if elapsed >= target_seconds {
        state.hold_phase = HoldPhase::Complete;
        state.is_hold_active = false;
        state.last_feedback_message = messages
            .complete
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPLETION.to_owned());
        return TickTransition::Completed { elapsed };
    }

    let crossed_half = before.saturating_mul(2) < target_seconds
        && elapsed.saturating_mul(2) >= target_seconds;
    if crossed_half {
        if let Some(halfway) = &messages.halfway {
            state.last_feedback_message.clone_from(halfway);
            return TickTransition::Halfway { elapsed };
        }
    }

    TickTransition::Advanced { elapsed }
}
