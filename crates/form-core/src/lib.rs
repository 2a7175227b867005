// ABOUTME: Core types and constants for the form coach exercise evaluation platform
// ABOUTME: Foundation crate with landmarks, exercise definitions, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Form Core
//!
//! Foundation crate providing shared types and constants for the form coach
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and catalog errors
//! - **constants**: Pose model landmark numbering, thresholds, and environment keys
//! - **models**: Landmarks, pose frames, and declarative exercise definitions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Landmark, `PoseFrame`, `ExerciseDefinition`)
pub mod models;
