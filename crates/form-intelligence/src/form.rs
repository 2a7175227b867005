// ABOUTME: Form validation against a list of angle constraints
// ABOUTME: Measures every constraint, ANDs the results, and reports all angles for diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::angles::calculate_angle;
use form_core::models::{AngleConstraint, LandmarkSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of checking one frame against a constraint list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormCheck {
    /// True when every constraint is satisfied
    pub valid: bool,
    /// Measured angle per constraint position, `0` when unavailable
    pub measured_angles: BTreeMap<usize, f64>,
    /// Positions of the constraints that failed
    pub failed_constraints: Vec<usize>,
}

impl FormCheck {
    /// Measured angle of the constraint at `position`
    #[must_use]
    pub fn angle(&self, position: usize) -> Option<f64> {
        self.measured_angles.get(&position).copied()
    }
}

/// Check one frame against `constraints`, in list order.
///
/// Unavailable angles are measured as `0` and checked like any other reading.
/// An empty list is valid.
#[must_use]
pub fn check_form<L>(landmarks: &L, constraints: &[AngleConstraint]) -> FormCheck
where
    L: LandmarkSource + ?Sized,
{
    let mut check = FormCheck {
        valid: true,
        ..FormCheck::default()
    };

    for (position, constraint) in constraints.iter().enumerate() {
        let [a, b, c] = constraint.points;
        let angle = calculate_angle(
            landmarks.landmark(a),
            landmarks.landmark(b),
            landmarks.landmark(c),
        );
        check.measured_angles.insert(position, angle);

        if !constraint.is_satisfied_by(angle) {
            check.valid = false;
            check.failed_constraints.push(position);
        }
    }

    check
}
