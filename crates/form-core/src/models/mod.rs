// ABOUTME: Core data models shared by the evaluation engine and the session runtime
// ABOUTME: Re-exports landmark, pose frame, and exercise definition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body landmarks and per-frame landmark containers
pub mod landmark;

/// Declarative exercise definitions
pub mod exercise;

pub use exercise::{
    AngleConstraint, ExerciseDefinition, ExerciseKind, ExerciseMessages, RepThresholds,
    ThresholdPolarity,
};
pub use landmark::{Landmark, LandmarkSource, PoseFrame};
