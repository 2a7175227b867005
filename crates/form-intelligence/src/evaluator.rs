// ABOUTME: Per-frame exercise evaluation dispatching to the rep or hold state machine
// ABOUTME: Takes state by value and returns the next state so evaluation stays pure and testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::angles::{calculate_angle, measure_constraint};
use crate::form::{check_form, FormCheck};
use crate::hold_timer::{self, HoldTransition, TickTransition};
use crate::rep_counter::{self, RepTransition};
use crate::state::{EvaluationState, HoldTimerPolicy};
use form_core::constants::thresholds::MAX_JOINT_ANGLE;
use form_core::models::{ExerciseDefinition, ExerciseKind, LandmarkSource, RepThresholds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

/// State machine event produced by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTransition {
    /// Rep exercise event
    Rep(RepTransition),
    /// Time/hold exercise event
    Hold(HoldTransition),
}

impl FrameTransition {
    /// Whether the frame changed more than the feedback and streak
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(
            self,
            Self::Rep(RepTransition::ReachedBottom | RepTransition::Completed { .. })
                | Self::Hold(
                    HoldTransition::Started | HoldTransition::Resumed | HoldTransition::Paused
                )
        )
    }
}

/// Result of evaluating one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvaluation {
    /// State after the frame
    pub state: EvaluationState,
    /// Form check against the exercise's form requirements
    pub form: FormCheck,
    /// First angle point reading, `None` when its landmarks are unavailable
    pub primary_angle: Option<f64>,
    /// State machine event
    pub transition: FrameTransition,
}

/// Result of one timer tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickEvaluation {
    /// State after the tick
    pub state: EvaluationState,
    /// Timer event
    pub transition: TickTransition,
}

/// Evaluates frames and ticks for any catalog exercise
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseEvaluator {
    policy: HoldTimerPolicy,
}

impl ExerciseEvaluator {
    /// Create an evaluator with the default hold timer policy
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: HoldTimerPolicy::Resume,
        }
    }

    /// Create an evaluator with an explicit hold timer policy
    #[must_use]
    pub const fn with_policy(policy: HoldTimerPolicy) -> Self {
        Self { policy }
    }

    /// Hold timer policy in effect
    #[must_use]
    pub const fn policy(&self) -> HoldTimerPolicy {
        self.policy
    }

    /// Evaluate one frame of landmarks against `definition`
    pub fn evaluate<L>(
        &self,
        definition: &ExerciseDefinition,
        mut state: EvaluationState,
        landmarks: &L,
    ) -> FrameEvaluation
    where
        L: LandmarkSource + ?Sized,
    {
        let form = check_form(landmarks, &definition.form_requirements);
        state.is_form_valid = form.valid;
        state.debug_angles = debug_angles(definition, landmarks);
        state.frames_evaluated = state.frames_evaluated.saturating_add(1);

        let primary_angle = definition
            .primary_angle()
            .and_then(|constraint| measure_constraint(landmarks, constraint));
        state.is_primary_visible = primary_angle.is_some();

        let transition = match definition.kind {
            ExerciseKind::Rep => FrameTransition::Rep(Self::evaluate_rep(
                definition,
                &mut state,
                primary_angle,
                form.valid,
            )),
            ExerciseKind::Time | ExerciseKind::Hold => FrameTransition::Hold(
                hold_timer::apply_form(&mut state, &definition.messages, form.valid, self.policy),
            ),
        };

        if transition.is_edge() {
            debug!(
                exercise = %definition.name,
                ?transition,
                rep_count = state.rep_count,
                elapsed = state.elapsed_hold_seconds,
                "Exercise state transition"
            );
        } else {
            trace!(exercise = %definition.name, ?transition, valid = form.valid, "Frame evaluated");
        }

        FrameEvaluation {
            state,
            form,
            primary_angle,
            transition,
        }
    }

    fn evaluate_rep(
        definition: &ExerciseDefinition,
        state: &mut EvaluationState,
        primary_angle: Option<f64>,
        form_valid: bool,
    ) -> RepTransition {
        // Unvalidated definition: without thresholds no frame can cross an edge
        let (thresholds, primary_angle) = match definition.rep_thresholds {
            Some(thresholds) => (thresholds, primary_angle),
            None => {
                warn!(exercise = %definition.name, "Rep exercise without thresholds");
                (RepThresholds::new(0.0, MAX_JOINT_ANGLE), None)
            }
        };
        rep_counter::advance(
            state,
            &thresholds,
            &definition.messages,
            primary_angle,
            form_valid,
        )
    }

    /// Advance the hold timer by one tick; a no-op for rep exercises
    pub fn tick(&self, definition: &ExerciseDefinition, mut state: EvaluationState) -> TickEvaluation {
        let transition = match (definition.kind.is_timed(), definition.hold_time_seconds) {
            (true, Some(target)) => hold_timer::tick(&mut state, &definition.messages, target),
            _ => TickTransition::Idle,
        };

        if let TickTransition::Completed { elapsed } = transition {
            info!(exercise = %definition.name, elapsed, "Hold target reached");
        }

        TickEvaluation { state, transition }
    }
}

/// Named readings of every angle point, `0` when unavailable
fn debug_angles<L>(definition: &ExerciseDefinition, landmarks: &L) -> BTreeMap<String, f64>
where
    L: LandmarkSource + ?Sized,
{
    definition
        .angle_points
        .iter()
        .map(|constraint| {
            let [a, b, c] = constraint.points;
            let angle = calculate_angle(
                landmarks.landmark(a),
                landmarks.landmark(b),
                landmarks.landmark(c),
            );
            (constraint.label(), angle)
        })
        .collect()
}
