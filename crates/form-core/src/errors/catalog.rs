// ABOUTME: Catalog error types for exercise definition parsing and validation
// ABOUTME: Defines error variants for malformed catalogs, bad thresholds, and out-of-range indices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog error types for exercise definition validation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating an exercise catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Rep exercise declares no primary angle point
    #[error("Exercise '{exercise}' is a rep exercise but declares no angle points")]
    MissingPrimaryAngle {
        /// Exercise key or name
        exercise: String,
    },

    /// Rep exercise has no thresholds to count against
    #[error("Exercise '{exercise}' is a rep exercise but has no rep thresholds")]
    MissingRepThresholds {
        /// Exercise key or name
        exercise: String,
    },

    /// Time or hold exercise without a positive target duration
    #[error("Exercise '{exercise}' needs a hold time greater than zero seconds")]
    MissingHoldTime {
        /// Exercise key or name
        exercise: String,
    },

    /// Constraint references a landmark outside the pose model
    #[error("Exercise '{exercise}' references landmark {index}, the pose model has {limit}")]
    LandmarkOutOfRange {
        /// Exercise key or name
        exercise: String,
        /// Offending index
        index: usize,
        /// Number of landmarks in the pose model
        limit: usize,
    },

    /// Angle bound outside 0..=180 or min above max
    #[error("Exercise '{exercise}' has an invalid angle range: {reason}")]
    InvalidAngleRange {
        /// Exercise key or name
        exercise: String,
        /// What is wrong with the range
        reason: String,
    },

    /// Threshold outside 0..=180
    #[error("Exercise '{exercise}' has rep threshold {value} outside 0..=180 degrees")]
    ThresholdOutOfRange {
        /// Exercise key or name
        exercise: String,
        /// Offending threshold
        value: f64,
    },

    /// Catalog contains no exercises
    #[error("Catalog contains no exercises")]
    Empty,

    /// Catalog file extension is not understood
    #[error("Unsupported catalog format for {}: expected .yaml, .yml, or .json", path.display())]
    UnsupportedFormat {
        /// File that was rejected
        path: PathBuf,
    },

    /// Catalog file could not be read
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// YAML catalog failed to parse
    #[error("Invalid YAML catalog: {0}")]
    Yaml(String),

    /// JSON catalog failed to parse
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}
