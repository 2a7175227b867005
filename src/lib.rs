// ABOUTME: Main library entry point for the form coach exercise evaluation platform
// ABOUTME: Exercise catalog, live session runtime, frame replay, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Form Coach
//!
//! Counts repetitions, times holds, and checks form from a stream of body
//! landmarks produced by an external pose-estimation model.
//!
//! ## Architecture
//!
//! - **`form_core`**: landmarks, exercise definitions, errors, constants
//! - **`form_intelligence`**: angle calculator, form validator, rep and hold
//!   state machines
//! - **Catalog**: built-in and file-based exercise definitions
//! - **Session**: per-session state with exercise selection, restart, and a
//!   task-based runtime for live frames and wall-clock ticks
//! - **Replay**: deterministic evaluation of recorded frames
//!
//! ## Example Usage
//!
//! ```rust
//! use form_coach::catalog::ExerciseCatalog;
//! use form_coach::session::ExerciseSession;
//! use form_core::models::PoseFrame;
//! use form_intelligence::HoldTimerPolicy;
//! use std::sync::Arc;
//!
//! # fn main() -> form_core::errors::AppResult<()> {
//! let catalog = Arc::new(ExerciseCatalog::builtin()?);
//! let mut session = ExerciseSession::new(catalog, "squat", HoldTimerPolicy::Resume)?;
//!
//! // Nothing visible: the frame is evaluated but no rep edge is crossed
//! session.process_frame(&PoseFrame::empty(33));
//! assert_eq!(session.snapshot().evaluation.rep_count, 0);
//! # Ok(())
//! # }
//! ```

/// Exercise catalog loading and lookup
pub mod catalog;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Deterministic replay of recorded frames
pub mod replay;

/// Exercise sessions and the live session runtime
pub mod session;

pub use form_core;
pub use form_intelligence;
