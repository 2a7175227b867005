// ABOUTME: Benchmark fixtures generating synthetic pose frame sequences
// ABOUTME: Deterministic joint angle sweeps for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating pose frames.
//!
//! Every generator is deterministic so runs are comparable.

use form_core::constants::landmarks::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, POSE_LANDMARK_COUNT,
};
use form_core::models::{Landmark, PoseFrame};
use std::f64::consts::TAU;

/// Camera frame rate the fixtures simulate
pub const FRAMES_PER_SECOND: u64 = 30;

/// Predefined recording lengths
#[derive(Debug, Clone, Copy)]
pub enum FrameBatchSize {
    /// One second of video
    Small,
    /// Ten seconds of video
    Medium,
}

impl FrameBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 300,
        }
    }
}

fn point(x: f64, y: f64) -> Landmark {
    Landmark::new(x, y).with_visibility(0.95)
}

/// Place `c` so the angle at `b` is `degrees`; `a` and `b` must already be placed
fn place_angle(frame: &mut PoseFrame, [a, b, c]: [usize; 3], degrees: f64) {
    let (Some(first), Some(vertex)) = (frame.landmarks[a], frame.landmarks[b]) else {
        return;
    };
    let heading = (first.y - vertex.y).atan2(first.x - vertex.x) + degrees.to_radians();
    frame.set(
        c,
        point(vertex.x + 0.2 * heading.cos(), vertex.y + 0.2 * heading.sin()),
    );
}

/// Elbow angle sweeping 60..175 degrees, two reps per second
#[allow(clippy::cast_precision_loss)]
fn elbow_angle(index: usize) -> f64 {
    let phase = (index as f64 / FRAMES_PER_SECOND as f64) * 2.0 * TAU;
    117.5 + 57.5 * phase.cos()
}

/// Push-up recording with a straight back
#[must_use]
pub fn pushup_frames(size: FrameBatchSize) -> Vec<PoseFrame> {
    (0..size.count())
        .map(|index| {
            let mut frame = PoseFrame::empty(POSE_LANDMARK_COUNT);
            frame.set(LEFT_SHOULDER, point(0.3, 0.4));
            frame.set(LEFT_ELBOW, point(0.3, 0.6));
            frame.set(LEFT_HIP, point(0.6, 0.42));
            place_angle(
                &mut frame,
                [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST],
                elbow_angle(index),
            );
            place_angle(&mut frame, [LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE], 175.0);
            frame.at(timestamp(index))
        })
        .collect()
}

/// Plank recording holding good form
#[must_use]
pub fn plank_frames(size: FrameBatchSize) -> Vec<PoseFrame> {
    (0..size.count())
        .map(|index| {
            let mut frame = PoseFrame::empty(POSE_LANDMARK_COUNT);
            frame.set(LEFT_SHOULDER, point(0.2, 0.5));
            frame.set(LEFT_HIP, point(0.5, 0.5));
            place_angle(&mut frame, [LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE], 175.0);
            place_angle(&mut frame, [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE], 176.0);
            frame.at(timestamp(index))
        })
        .collect()
}

fn timestamp(index: usize) -> u64 {
    u64::try_from(index).unwrap_or(u64::MAX) * 1000 / FRAMES_PER_SECOND
}
