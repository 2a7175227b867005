// ABOUTME: MediaPipe Pose landmark indices shared by the exercise catalog and the evaluator
// ABOUTME: The numbering is a contract with the external pose model and must not change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Number of landmarks produced per frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Nose
pub const NOSE: usize = 0;
/// Left eye (inner)
pub const LEFT_EYE_INNER: usize = 1;
/// Left eye
pub const LEFT_EYE: usize = 2;
/// Left eye (outer)
pub const LEFT_EYE_OUTER: usize = 3;
/// Right eye (inner)
pub const RIGHT_EYE_INNER: usize = 4;
/// Right eye
pub const RIGHT_EYE: usize = 5;
/// Right eye (outer)
pub const RIGHT_EYE_OUTER: usize = 6;
/// Left ear
pub const LEFT_EAR: usize = 7;
/// Right ear
pub const RIGHT_EAR: usize = 8;
/// Mouth (left corner)
pub const MOUTH_LEFT: usize = 9;
/// Mouth (right corner)
pub const MOUTH_RIGHT: usize = 10;
/// Left shoulder
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow
pub const LEFT_ELBOW: usize = 13;
/// Right elbow
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist
pub const LEFT_WRIST: usize = 15;
/// Right wrist
pub const RIGHT_WRIST: usize = 16;
/// Left pinky knuckle
pub const LEFT_PINKY: usize = 17;
/// Right pinky knuckle
pub const RIGHT_PINKY: usize = 18;
/// Left index knuckle
pub const LEFT_INDEX: usize = 19;
/// Right index knuckle
pub const RIGHT_INDEX: usize = 20;
/// Left thumb
pub const LEFT_THUMB: usize = 21;
/// Right thumb
pub const RIGHT_THUMB: usize = 22;
/// Left hip
pub const LEFT_HIP: usize = 23;
/// Right hip
pub const RIGHT_HIP: usize = 24;
/// Left knee
pub const LEFT_KNEE: usize = 25;
/// Right knee
pub const RIGHT_KNEE: usize = 26;
/// Left ankle
pub const LEFT_ANKLE: usize = 27;
/// Right ankle
pub const RIGHT_ANKLE: usize = 28;
/// Left heel
pub const LEFT_HEEL: usize = 29;
/// Right heel
pub const RIGHT_HEEL: usize = 30;
/// Left foot index
pub const LEFT_FOOT_INDEX: usize = 31;
/// Right foot index
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Human-readable name of a landmark index, `None` outside the pose model
#[must_use]
pub const fn landmark_name(index: usize) -> Option<&'static str> {
    match index {
        NOSE => Some("nose"),
        LEFT_EYE_INNER => Some("left_eye_inner"),
        LEFT_EYE => Some("left_eye"),
        LEFT_EYE_OUTER => Some("left_eye_outer"),
        RIGHT_EYE_INNER => Some("right_eye_inner"),
        RIGHT_EYE => Some("right_eye"),
        RIGHT_EYE_OUTER => Some("right_eye_outer"),
        LEFT_EAR => Some("left_ear"),
        RIGHT_EAR => Some("right_ear"),
        MOUTH_LEFT => Some("mouth_left"),
        MOUTH_RIGHT => Some("mouth_right"),
        LEFT_SHOULDER => Some("left_shoulder"),
        RIGHT_SHOULDER => Some("right_shoulder"),
        LEFT_ELBOW => Some("left_elbow"),
        RIGHT_ELBOW => Some("right_elbow"),
        LEFT_WRIST => Some("left_wrist"),
        RIGHT_WRIST => Some("right_wrist"),
        LEFT_PINKY => Some("left_pinky"),
        RIGHT_PINKY => Some("right_pinky"),
        LEFT_INDEX => Some("left_index"),
        RIGHT_INDEX => Some("right_index"),
        LEFT_THUMB => Some("left_thumb"),
        RIGHT_THUMB => Some("right_thumb"),
        LEFT_HIP => Some("left_hip"),
        RIGHT_HIP => Some("right_hip"),
        LEFT_KNEE => Some("left_knee"),
        RIGHT_KNEE => Some("right_knee"),
        LEFT_ANKLE => Some("left_ankle"),
        RIGHT_ANKLE => Some("right_ankle"),
        LEFT_HEEL => Some("left_heel"),
        RIGHT_HEEL => Some("right_heel"),
        LEFT_FOOT_INDEX => Some("left_foot_index"),
        RIGHT_FOOT_INDEX => Some("right_foot_index"),
        _ => None,
    }
}
