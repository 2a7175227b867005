// ABOUTME: Per-session evaluation state and the read-only snapshot exposed to presentation layers
// ABOUTME: Direction flag, hold phase, and timer policy types for the rep and hold state machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use form_core::constants::messages::GET_READY;
use form_core::models::{ExerciseDefinition, ExerciseKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which half of a repetition is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Moving toward (or resting at) the start of the rep
    #[default]
    Extending,
    /// Bottom edge reached, waiting for the completion edge
    Flexing,
}

/// Hold/timer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldPhase {
    /// No valid-form frame yet
    #[default]
    Idle,
    /// Valid form, timer advancing
    Holding,
    /// Form broken, timer stopped
    Paused,
    /// Target reached; terminal until the session restarts
    Complete,
}

impl fmt::Display for HoldPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Holding => "holding",
            Self::Paused => "paused",
            Self::Complete => "complete",
        })
    }
}

/// What happens to the elapsed hold time when form breaks mid-hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldTimerPolicy {
    /// Keep the elapsed time and continue from it when form returns
    #[default]
    Resume,
    /// Zero the elapsed time on every interruption
    Reset,
}

impl HoldTimerPolicy {
    /// Parse from configuration string representation
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "resume" => Some(Self::Resume),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }

    /// Convert to configuration string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Reset => "reset",
        }
    }
}

/// Mutable state of one exercise session.
///
/// Owned by the session and passed through each evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationState {
    /// Completed repetitions
    pub rep_count: u32,
    /// Rep half in progress
    pub direction: Direction,
    /// Consecutive frames with valid form
    pub form_streak_count: u32,
    /// Seconds accumulated by the hold timer
    pub elapsed_hold_seconds: u32,
    /// Whether the hold timer may advance
    pub is_hold_active: bool,
    /// Hold lifecycle phase
    pub hold_phase: HoldPhase,
    /// Most recent feedback text
    pub last_feedback_message: String,
    /// Whether the latest frame passed the form check
    pub is_form_valid: bool,
    /// Whether the primary angle could be measured in the latest frame
    pub is_primary_visible: bool,
    /// Named angle readings from the latest frame
    pub debug_angles: BTreeMap<String, f64>,
    /// Frames evaluated since the session started
    pub frames_evaluated: u64,
}

impl Default for EvaluationState {
    fn default() -> Self {
        Self {
            rep_count: 0,
            direction: Direction::Extending,
            form_streak_count: 0,
            elapsed_hold_seconds: 0,
            is_hold_active: false,
            hold_phase: HoldPhase::Idle,
            last_feedback_message: GET_READY.to_owned(),
            is_form_valid: false,
            is_primary_visible: false,
            debug_angles: BTreeMap::new(),
            frames_evaluated: 0,
        }
    }
}

impl EvaluationState {
    /// Fresh state for a newly selected exercise, showing its start message
    #[must_use]
    pub fn new(definition: &ExerciseDefinition) -> Self {
        Self {
            last_feedback_message: definition.messages.start.clone(),
            ..Self::default()
        }
    }

    /// Whether the hold has reached its target
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hold_phase == HoldPhase::Complete
    }

    /// Read-only view for the presentation layer
    #[must_use]
    pub fn snapshot(&self, definition: &ExerciseDefinition) -> EvaluationSnapshot {
        EvaluationSnapshot {
            exercise_name: definition.name.clone(),
            kind: definition.kind,
            rep_count: self.rep_count,
            elapsed_hold_seconds: self.elapsed_hold_seconds,
            hold_target_seconds: definition
                .hold_time_seconds
                .filter(|_| definition.kind.is_timed()),
            feedback_message: self.last_feedback_message.clone(),
            debug_angles: self.debug_angles.clone(),
            direction: self.direction,
            hold_phase: self.hold_phase,
            form_streak_count: self.form_streak_count,
            is_hold_active: self.is_hold_active,
            is_form_valid: self.is_form_valid,
            is_primary_visible: self.is_primary_visible,
            is_complete: self.is_complete(),
        }
    }
}

/// Read-only state published after each evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    /// Exercise display name
    pub exercise_name: String,
    /// Scoring model
    pub kind: ExerciseKind,
    /// Completed repetitions
    pub rep_count: u32,
    /// Seconds held
    pub elapsed_hold_seconds: u32,
    /// Hold target, for timed exercises
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_target_seconds: Option<u32>,
    /// Current feedback text
    pub feedback_message: String,
    /// Named angle readings
    pub debug_angles: BTreeMap<String, f64>,
    /// Rep half in progress
    pub direction: Direction,
    /// Hold lifecycle phase
    pub hold_phase: HoldPhase,
    /// Consecutive valid-form frames
    pub form_streak_count: u32,
    /// Whether the hold timer is running
    pub is_hold_active: bool,
    /// Whether the latest frame had valid form
    pub is_form_valid: bool,
    /// Whether the primary landmarks were visible
    pub is_primary_visible: bool,
    /// Whether the hold reached its target
    pub is_complete: bool,
}
