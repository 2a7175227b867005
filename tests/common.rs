// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, synthetic pose builders, and catalog fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::panic
)]
//! Shared test utilities for `form_coach`
//!
//! Poses are built by angle rather than by coordinate: [`PoseBuilder::angle`]
//! places the three landmarks of a joint so the included angle at the middle
//! one is exactly the requested value, reusing any landmark already placed.

use form_coach::catalog::ExerciseCatalog;
use form_core::constants::landmarks::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, POSE_LANDMARK_COUNT,
};
use form_core::models::{Landmark, LandmarkSource, PoseFrame};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Length of every synthetic limb segment
const SEGMENT: f64 = 0.2;

/// Where the first vertex of a pose is placed
const ORIGIN: (f64, f64) = (0.5, 0.5);

/// Builds a 33-landmark frame from joint angles
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    frame: PoseFrame,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            frame: PoseFrame::empty(POSE_LANDMARK_COUNT),
        }
    }

    /// Place `points` so the angle at `points[1]` is `degrees`.
    ///
    /// The vertex and at most one end may already be placed.
    pub fn angle(mut self, points: [usize; 3], degrees: f64) -> Self {
        let [a, b, c] = points;
        let vertex = self.placed(b).unwrap_or_else(|| {
            let vertex = Landmark::new(ORIGIN.0, ORIGIN.1);
            self.frame.set(b, vertex);
            vertex
        });

        match (self.placed(a), self.placed(c)) {
            (None, None) => {
                self.frame
                    .set(a, Landmark::new(vertex.x + SEGMENT, vertex.y));
                self.frame.set(c, rotated(&vertex, 0.0, degrees));
            }
            (Some(first), None) => {
                let heading = heading(&vertex, &first);
                self.frame.set(c, rotated(&vertex, heading, degrees));
            }
            (None, Some(last)) => {
                let heading = heading(&vertex, &last);
                self.frame.set(a, rotated(&vertex, heading, -degrees));
            }
            (Some(_), Some(_)) => panic!("both ends of {points:?} are already placed"),
        }
        self
    }

    /// Set the visibility of an already placed landmark
    pub fn visibility(mut self, index: usize, visibility: f64) -> Self {
        let landmark = self.placed(index).unwrap().with_visibility(visibility);
        self.frame.set(index, landmark);
        self
    }

    /// Remove a landmark from the frame
    pub fn missing(mut self, index: usize) -> Self {
        self.frame.landmarks[index] = None;
        self
    }

    /// Stamp the frame
    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.frame = self.frame.at(timestamp_ms);
        self
    }

    pub fn build(self) -> PoseFrame {
        self.frame
    }

    fn placed(&self, index: usize) -> Option<Landmark> {
        self.frame.landmark(index).copied()
    }
}

fn heading(vertex: &Landmark, toward: &Landmark) -> f64 {
    (toward.y - vertex.y).atan2(toward.x - vertex.x).to_degrees()
}

fn rotated(vertex: &Landmark, heading_degrees: f64, degrees: f64) -> Landmark {
    let radians = (heading_degrees + degrees).to_radians();
    Landmark::new(
        vertex.x + SEGMENT * radians.cos(),
        vertex.y + SEGMENT * radians.sin(),
    )
}

// ============================================================================
// Exercise poses
// ============================================================================

pub const ELBOW: [usize; 3] = [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST];
pub const BACK: [usize; 3] = [LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE];
pub const KNEE: [usize; 3] = [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE];

/// Push-up frame: elbow angle plus shoulder-hip-knee line
pub fn pushup_frame(elbow: f64, back: f64) -> PoseFrame {
    PoseBuilder::new().angle(ELBOW, elbow).angle(BACK, back).build()
}

/// Plank frame: back and leg lines
pub fn plank_frame(back: f64, legs: f64) -> PoseFrame {
    PoseBuilder::new().angle(BACK, back).angle(KNEE, legs).build()
}

/// Plank frame with good form
pub fn good_plank() -> PoseFrame {
    plank_frame(175.0, 175.0)
}

/// Plank frame with sagging hips
pub fn sagging_plank() -> PoseFrame {
    plank_frame(110.0, 175.0)
}

// ============================================================================
// Catalog fixtures
// ============================================================================

pub fn builtin_catalog() -> Arc<ExerciseCatalog> {
    Arc::new(ExerciseCatalog::builtin().unwrap())
}

/// Built-in catalog plus a 3-second plank for fast timer tests
pub fn catalog_with_short_plank() -> Arc<ExerciseCatalog> {
    let mut catalog = ExerciseCatalog::builtin().unwrap();
    let short = ExerciseCatalog::from_yaml_str(
        r"
shortPlank:
  name: Short Plank
  type: time
  angle_points:
    - name: back
      points: [11, 23, 25]
  form_requirements:
    - points: [11, 23, 25]
      min_angle: 130
    - points: [23, 25, 27]
      min_angle: 130
  hold_time_seconds: 3
  messages:
    start: Get into plank position
    wrong_form: Keep your back and legs straight
    correct: Great form, keep holding!
    complete: Plank complete
",
    )
    .unwrap();
    catalog.merge(short);
    Arc::new(catalog)
}
