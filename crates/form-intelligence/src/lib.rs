// ABOUTME: Exercise evaluation engine for the form coach platform
// ABOUTME: Joint angles, form validation, rep counting, and hold timing over pose landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Form Intelligence
//!
//! The per-frame evaluation core. Every function here is synchronous and free
//! of hidden state: the caller owns an [`EvaluationState`], passes it into
//! [`ExerciseEvaluator::evaluate`] or [`ExerciseEvaluator::tick`], and keeps the
//! state that comes back.
//!
//! ```rust
//! use form_core::models::{
//!     AngleConstraint, ExerciseDefinition, ExerciseKind, ExerciseMessages, Landmark,
//!     RepThresholds,
//! };
//! use form_intelligence::{EvaluationState, ExerciseEvaluator};
//!
//! let pushup = ExerciseDefinition {
//!     name: "Push-ups".to_owned(),
//!     kind: ExerciseKind::Rep,
//!     angle_points: vec![AngleConstraint::new(0, 1, 2).named("elbow")],
//!     form_requirements: vec![],
//!     rep_thresholds: Some(RepThresholds::new(80.0, 165.0)),
//!     hold_time_seconds: None,
//!     messages: ExerciseMessages {
//!         start: "Get in plank position".to_owned(),
//!         wrong_form: "Keep your back straight".to_owned(),
//!         correct: "Good form!".to_owned(),
//!         halfway: Some("Push back up".to_owned()),
//!         complete: None,
//!     },
//! };
//!
//! let bent = vec![
//!     Landmark::new(0.0, 0.0),
//!     Landmark::new(0.5, 0.0),
//!     Landmark::new(0.1, 0.3),
//! ];
//! let evaluator = ExerciseEvaluator::new();
//! let outcome = evaluator.evaluate(&pushup, EvaluationState::new(&pushup), &bent);
//! assert_eq!(outcome.state.last_feedback_message, "Push back up");
//! ```

/// Joint angle calculation with visibility gating
pub mod angles;

/// Frame evaluation dispatch
pub mod evaluator;

/// Form validation against angle constraints
pub mod form;

/// Hold/timer state machine
pub mod hold_timer;

/// Repetition state machine
pub mod rep_counter;

/// Evaluation state, snapshot, and policy types
pub mod state;

pub use angles::{calculate_angle, measure_angle};
pub use evaluator::{ExerciseEvaluator, FrameEvaluation, FrameTransition, TickEvaluation};
pub use form::{check_form, FormCheck};
pub use hold_timer::{HoldTransition, TickTransition};
pub use rep_counter::RepTransition;
pub use state::{Direction, EvaluationSnapshot, EvaluationState, HoldPhase, HoldTimerPolicy};
