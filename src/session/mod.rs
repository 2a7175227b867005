// ABOUTME: Exercise session owning the evaluation state for one active exercise
// ABOUTME: Handles selection and restart, rejects ticks from earlier generations, and builds snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise sessions
//!
//! [`ExerciseSession`] is the synchronous core of a session: every frame and
//! tick goes through `&mut self`, so ordering is whatever order the caller
//! imposes. [`runtime`] wraps it in a task for live use; replay drives it
//! directly.

/// Async session task with frame backpressure and wall-clock ticks
pub mod runtime;

use crate::catalog::ExerciseCatalog;
use chrono::{DateTime, Utc};
use form_core::errors::AppResult;
use form_core::models::{ExerciseDefinition, LandmarkSource};
use form_intelligence::{
    EvaluationSnapshot, EvaluationState, ExerciseEvaluator, FrameEvaluation, HoldTimerPolicy,
    TickTransition,
};
use serde::{Deserialize, Serialize};
use std::mem;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub use runtime::{FrameSubmission, RuntimeConfig, SessionHandle};

/// Snapshot of a session as published to observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier
    pub session_id: Uuid,
    /// Catalog key of the active exercise
    pub exercise_key: String,
    /// Bumped on every selection and restart
    pub generation: u64,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
    /// Frames evaluated since the last selection or restart
    pub frames_evaluated: u64,
    /// Frames dropped under backpressure over the session lifetime
    pub frames_dropped: u64,
    /// Evaluation state
    #[serde(flatten)]
    pub evaluation: EvaluationSnapshot,
}

impl SessionSnapshot {
    /// Whether anything a user would notice differs from `other`.
    ///
    /// Angle readings and counters of evaluated frames are ignored.
    #[must_use]
    pub fn progress_differs(&self, other: &Self) -> bool {
        let (a, b) = (&self.evaluation, &other.evaluation);
        self.generation != other.generation
            || self.exercise_key != other.exercise_key
            || a.rep_count != b.rep_count
            || a.elapsed_hold_seconds != b.elapsed_hold_seconds
            || a.feedback_message != b.feedback_message
            || a.direction != b.direction
            || a.hold_phase != b.hold_phase
            || a.is_form_valid != b.is_form_valid
            || a.is_primary_visible != b.is_primary_visible
    }
}

/// One exercise session
#[derive(Debug)]
pub struct ExerciseSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Arc<ExerciseCatalog>,
    exercise_key: String,
    definition: Arc<ExerciseDefinition>,
    evaluator: ExerciseEvaluator,
    state: EvaluationState,
    generation: u64,
    frames_dropped: u64,
}

impl ExerciseSession {
    /// Start a session on `exercise_key`
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the key is not in the catalog
    pub fn new(
        catalog: Arc<ExerciseCatalog>,
        exercise_key: &str,
        policy: HoldTimerPolicy,
    ) -> AppResult<Self> {
        let definition = catalog.get(exercise_key)?;
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            state: EvaluationState::new(&definition),
            exercise_key: exercise_key.to_owned(),
            definition,
            catalog,
            evaluator: ExerciseEvaluator::with_policy(policy),
            generation: 0,
            frames_dropped: 0,
        };
        info!(
            session_id = %session.id,
            exercise = %session.exercise_key,
            policy = policy.as_str(),
            "Exercise session started"
        );
        Ok(session)
    }

    /// Switch to another exercise, resetting all state.
    ///
    /// Returns the new generation. Unknown keys leave the session untouched.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the key is not in the catalog
    pub fn select(&mut self, exercise_key: &str) -> AppResult<u64> {
        let definition = self.catalog.get(exercise_key)?;
        exercise_key.clone_into(&mut self.exercise_key);
        self.definition = definition;
        self.reset_state();
        info!(
            session_id = %self.id,
            exercise = %self.exercise_key,
            generation = self.generation,
            "Exercise selected"
        );
        Ok(self.generation)
    }

    /// Restart the current exercise from zero and return the new generation
    pub fn restart(&mut self) -> u64 {
        self.reset_state();
        info!(
            session_id = %self.id,
            exercise = %self.exercise_key,
            generation = self.generation,
            "Exercise restarted"
        );
        self.generation
    }

    fn reset_state(&mut self) {
        self.state = EvaluationState::new(&self.definition);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Evaluate one frame against the active exercise
    pub fn process_frame<L>(&mut self, landmarks: &L) -> FrameEvaluation
    where
        L: LandmarkSource + ?Sized,
    {
        let state = mem::take(&mut self.state);
        let evaluation = self.evaluator.evaluate(&self.definition, state, landmarks);
        self.state.clone_from(&evaluation.state);
        evaluation
    }

    /// Advance the hold timer for a tick scheduled under `generation`.
    ///
    /// Returns `None` when the tick belongs to an earlier generation.
    pub fn tick(&mut self, generation: u64) -> Option<TickTransition> {
        if generation != self.generation {
            debug!(
                session_id = %self.id,
                tick_generation = generation,
                current = self.generation,
                "Stale tick ignored"
            );
            return None;
        }
        let state = mem::take(&mut self.state);
        let outcome = self.evaluator.tick(&self.definition, state);
        self.state = outcome.state;
        Some(outcome.transition)
    }

    /// Record frames dropped before they reached the session
    pub fn record_dropped_frames(&mut self, total: u64) {
        self.frames_dropped = total;
    }

    /// Read-only view of the session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            exercise_key: self.exercise_key.clone(),
            generation: self.generation,
            captured_at: Utc::now(),
            frames_evaluated: self.state.frames_evaluated,
            frames_dropped: self.frames_dropped,
            evaluation: self.state.snapshot(&self.definition),
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current generation
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Catalog key of the active exercise
    #[must_use]
    pub fn exercise_key(&self) -> &str {
        &self.exercise_key
    }

    /// Active exercise definition
    #[must_use]
    pub fn definition(&self) -> &ExerciseDefinition {
        &self.definition
    }

    /// Current evaluation state
    #[must_use]
    pub const fn state(&self) -> &EvaluationState {
        &self.state
    }
}
