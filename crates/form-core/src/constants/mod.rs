// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pose landmark numbering, evaluation thresholds, timing defaults, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Body keypoint numbering of the external pose model
pub mod landmarks;

/// Angle evaluation thresholds
pub mod thresholds {
    /// Landmarks below this visibility confidence are treated as unusable
    pub const MIN_LANDMARK_VISIBILITY: f64 = 0.5;
    /// Angle returned when a reading is unavailable
    pub const UNAVAILABLE_ANGLE: f64 = 0.0;
    /// Largest included angle the calculator reports
    pub const MAX_JOINT_ANGLE: f64 = 180.0;
}

/// Hold timer and session runtime timing defaults
pub mod timing {
    /// Seconds added to the hold timer per tick
    pub const HOLD_TICK_SECONDS: u32 = 1;
    /// Default wall-clock tick period in milliseconds
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
    /// Default number of frames allowed to wait for evaluation
    pub const DEFAULT_FRAME_QUEUE_DEPTH: usize = 1;
    /// Capacity of the session command channel
    pub const COMMAND_CHANNEL_CAPACITY: usize = 16;
}

/// Feedback defaults
pub mod messages {
    /// Feedback before any exercise-specific message is emitted
    pub const GET_READY: &str = "Get ready";
    /// Emitted when a hold exercise reaches its target and no custom message exists
    pub const DEFAULT_COMPLETION: &str = "Exercise complete, great work!";
}

/// Service identity
pub mod service_names {
    /// Service name used in structured logs
    pub const FORM_COACH: &str = "form-coach";
}

/// Default configuration values
pub mod defaults {
    /// Exercise selected when none is configured
    pub const DEFAULT_EXERCISE: &str = "pushup";
}

/// Environment variable names
pub mod env_config {
    /// Optional external catalog overlay
    pub const CATALOG_PATH: &str = "FORM_COACH_CATALOG_PATH";
    /// Default exercise key
    pub const DEFAULT_EXERCISE: &str = "FORM_COACH_DEFAULT_EXERCISE";
    /// Hold timer behavior after an interrupted hold (`resume` or `reset`)
    pub const HOLD_TIMER_POLICY: &str = "FORM_COACH_HOLD_TIMER_POLICY";
    /// Tick period in milliseconds
    pub const TICK_INTERVAL_MS: &str = "FORM_COACH_TICK_INTERVAL_MS";
    /// Number of frames allowed to wait for evaluation
    pub const FRAME_QUEUE_DEPTH: &str = "FORM_COACH_FRAME_QUEUE_DEPTH";
    /// Log every published snapshot at debug level
    pub const SNAPSHOT_LOG: &str = "FORM_COACH_SNAPSHOT_LOG";
}
