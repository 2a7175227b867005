// ABOUTME: Joint angle calculation from three landmarks with a visibility confidence gate
// ABOUTME: Returns the included angle at the middle point, folded into the 0-180 degree range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Joint angle calculation
//!
//! The angle at `p2` is the difference between the `atan2` headings of the rays
//! `p2→p3` and `p2→p1`, converted to degrees and folded so a reflex reading
//! `r > 180` becomes `360 - r`. Measurements use the image plane (`x`, `y`).

use form_core::constants::thresholds::{MAX_JOINT_ANGLE, UNAVAILABLE_ANGLE};
use form_core::models::{AngleConstraint, Landmark, LandmarkSource};

/// Included angle at `vertex` in degrees, in `[0, 180]`.
///
/// Pure geometry with no confidence gate.
#[must_use]
pub fn included_angle(first: &Landmark, vertex: &Landmark, last: &Landmark) -> f64 {
    let to_last = (last.y - vertex.y).atan2(last.x - vertex.x);
    let to_first = (first.y - vertex.y).atan2(first.x - vertex.x);

    let degrees = (to_last - to_first).to_degrees().abs();
    if degrees > MAX_JOINT_ANGLE {
        360.0 - degrees
    } else {
        degrees
    }
}

/// Measure the angle at `p2`, or `None` when any point is missing or below
/// the visibility threshold
#[must_use]
pub fn measure_angle(
    p1: Option<&Landmark>,
    p2: Option<&Landmark>,
    p3: Option<&Landmark>,
) -> Option<f64> {
    let (p1, p2, p3) = (p1?, p2?, p3?);
    if !(p1.is_usable() && p2.is_usable() && p3.is_usable()) {
        return None;
    }
    Some(included_angle(p1, p2, p3))
}

/// Angle at `p2` with `0` as the "unavailable" sentinel.
///
/// Callers must read `0` as "no reading", not as a folded joint.
#[must_use]
pub fn calculate_angle(p1: Option<&Landmark>, p2: Option<&Landmark>, p3: Option<&Landmark>) -> f64 {
    measure_angle(p1, p2, p3).unwrap_or(UNAVAILABLE_ANGLE)
}

/// Measure the angle a constraint describes in one frame
#[must_use]
pub fn measure_constraint<L>(landmarks: &L, constraint: &AngleConstraint) -> Option<f64>
where
    L: LandmarkSource + ?Sized,
{
    let [a, b, c] = constraint.points;
    measure_angle(
        landmarks.landmark(a),
        landmarks.landmark(b),
        landmarks.landmark(c),
    )
}
