// ABOUTME: Landmark and pose frame types consumed from the external pose-estimation model
// ABOUTME: LandmarkSource abstracts indexed lookup so any landmark container can be evaluated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::thresholds::MIN_LANDMARK_VISIBILITY;
use serde::{Deserialize, Serialize};

/// A tracked anatomical point in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (0-1 normalized)
    pub x: f64,
    /// Vertical position (0-1 normalized, grows downward)
    pub y: f64,
    /// Relative depth, when the model provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence in [0, 1], when the model provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Create a 2D landmark without depth or confidence
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Attach a depth coordinate
    #[must_use]
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Attach a visibility confidence
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Whether the landmark is confident enough to measure against.
    ///
    /// A landmark without a visibility value is trusted.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.visibility
            .is_none_or(|visibility| visibility >= MIN_LANDMARK_VISIBILITY)
    }
}

/// Indexed access to the landmarks of one frame.
///
/// Indices follow the pose model numbering in `constants::landmarks`.
/// Returning `None` means the landmark is missing for this frame.
pub trait LandmarkSource {
    /// Look up a landmark by pose model index
    fn landmark(&self, index: usize) -> Option<&Landmark>;
}

impl LandmarkSource for [Landmark] {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index)
    }
}

impl LandmarkSource for Vec<Landmark> {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index)
    }
}

impl LandmarkSource for [Option<Landmark>] {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index).and_then(Option::as_ref)
    }
}

impl LandmarkSource for Vec<Option<Landmark>> {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.get(index).and_then(Option::as_ref)
    }
}

/// One pose-estimation result as delivered over the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Capture time in milliseconds, relative to any fixed origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Landmarks in pose model order; `null` entries are missing points
    #[serde(default)]
    pub landmarks: Vec<Option<Landmark>>,
}

impl PoseFrame {
    /// Build an empty frame with `count` missing landmarks
    #[must_use]
    pub fn empty(count: usize) -> Self {
        Self {
            timestamp_ms: None,
            landmarks: vec![None; count],
        }
    }

    /// Set the capture timestamp
    #[must_use]
    pub const fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Place a landmark, growing the frame with missing points if needed
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if self.landmarks.len() <= index {
            self.landmarks.resize(index + 1, None);
        }
        self.landmarks[index] = Some(landmark);
    }

    /// Number of present landmarks
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.landmarks.iter().filter(|l| l.is_some()).count()
    }
}

impl LandmarkSource for PoseFrame {
    fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.landmark(index)
    }
}
