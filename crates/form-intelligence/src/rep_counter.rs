// ABOUTME: Repetition state machine driven by threshold crossings of the primary angle
// ABOUTME: A rep is two edges (bottom then top); only the top edge increments the counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repetition counting
//!
//! Counting every valid frame would double count while the athlete dwells at
//! either end of the motion, so the counter only moves on edge crossings:
//!
//! ```text
//!   Extending --(valid, angle reaches down)--> Flexing      emits halfway
//!   Flexing   --(valid, angle reaches up)----> Extending    rep_count += 1, emits correct
//! ```
//!
//! Frames with invalid form emit the wrong-form message and change nothing
//! else. Valid frames between the thresholds keep the previous feedback.

use crate::state::{Direction, EvaluationState};
use form_core::models::{ExerciseMessages, RepThresholds};
use serde::{Deserialize, Serialize};

/// What one frame did to the repetition state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum RepTransition {
    /// Form check failed; direction and count untouched
    WrongForm,
    /// Bottom edge reached; direction flipped to flexing
    ReachedBottom,
    /// Top edge reached after the bottom; count incremented
    Completed {
        /// Count after the increment
        rep_count: u32,
    },
    /// Valid form, no edge crossed
    InProgress,
}

/// Advance the repetition state by one frame.
///
/// `primary_angle` is `None` when the primary landmarks were unavailable; such
/// a frame never crosses a threshold.
pub fn advance(
    state: &mut EvaluationState,
    thresholds: &RepThresholds,
    messages: &ExerciseMessages,
    primary_angle: Option<f64>,
    form_valid: bool,
) -> RepTransition {
    if !form_valid {
        state.form_streak_count = 0;
        state.last_feedback_message.clone_from(&messages.wrong_form);
        return RepTransition::WrongForm;
    }

    state.form_streak_count = state.form_streak_count.saturating_add(1);

    let Some(angle) = primary_angle else {
        return RepTransition::InProgress;
    };

    match state.direction {
        Direction::Extending if thresholds.reached_bottom(angle) => {
            state.direction = Direction::Flexing;
            state.last_feedback_message = messages.halfway.clone().unwrap_or_default();
            RepTransition::ReachedBottom
        }
        Direction::Flexing if thresholds.reached_top(angle) => {
            state.rep_count = state.rep_count.saturating_add(1);
            state.direction = Direction::Extending;
            state.last_feedback_message.clone_from(&messages.correct);
            RepTransition::Completed {
                rep_count: state.rep_count,
            }
        }
        Direction::Extending | Direction::Flexing => RepTransition::InProgress,
    }
}
