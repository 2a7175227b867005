// ABOUTME: Declarative exercise definitions: angle constraints, rep thresholds, hold targets, messages
// ABOUTME: Definitions are immutable once loaded and validated against the pose model numbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::landmarks::POSE_LANDMARK_COUNT;
use crate::constants::thresholds::MAX_JOINT_ANGLE;
use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an exercise is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Counted repetitions
    Rep,
    /// Timed effort held for a target duration
    Time,
    /// Static posture held for a target duration
    Hold,
}

impl ExerciseKind {
    /// Convert to catalog string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rep => "rep",
            Self::Time => "time",
            Self::Hold => "hold",
        }
    }

    /// Whether the exercise is driven by the hold timer
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        matches!(self, Self::Time | Self::Hold)
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An angle at landmark `points[1]` between rays to `points[0]` and `points[2]`,
/// with optional inclusive bounds in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleConstraint {
    /// Label used for debug display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Landmark indices `(a, b, c)`; the angle is measured at `b`
    pub points: [usize; 3],
    /// Inclusive lower bound, unconstrained when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_angle: Option<f64>,
    /// Inclusive upper bound, unconstrained when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
}

impl AngleConstraint {
    /// Create an unbounded constraint over three landmarks
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            name: None,
            points: [a, b, c],
            min_angle: None,
            max_angle: None,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the inclusive lower bound
    #[must_use]
    pub const fn min(mut self, degrees: f64) -> Self {
        self.min_angle = Some(degrees);
        self
    }

    /// Set the inclusive upper bound
    #[must_use]
    pub const fn max(mut self, degrees: f64) -> Self {
        self.max_angle = Some(degrees);
        self
    }

    /// Whether a measured angle lies within the bounds
    #[must_use]
    pub fn is_satisfied_by(&self, degrees: f64) -> bool {
        self.min_angle.is_none_or(|min| degrees >= min)
            && self.max_angle.is_none_or(|max| degrees <= max)
    }

    /// Display label: the name, or the joined landmark indices
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            let [a, b, c] = self.points;
            format!("{a}-{b}-{c}")
        })
    }

    fn validate(&self, exercise: &str) -> Result<(), CatalogError> {
        if let Some(&index) = self.points.iter().find(|&&i| i >= POSE_LANDMARK_COUNT) {
            return Err(CatalogError::LandmarkOutOfRange {
                exercise: exercise.to_owned(),
                index,
                limit: POSE_LANDMARK_COUNT,
            });
        }
        for bound in [self.min_angle, self.max_angle].into_iter().flatten() {
            if !(0.0..=MAX_JOINT_ANGLE).contains(&bound) {
                return Err(CatalogError::InvalidAngleRange {
                    exercise: exercise.to_owned(),
                    reason: format!("bound {bound} on {} is outside 0..=180", self.label()),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_angle, self.max_angle) {
            if min > max {
                return Err(CatalogError::InvalidAngleRange {
                    exercise: exercise.to_owned(),
                    reason: format!("min {min} exceeds max {max} on {}", self.label()),
                });
            }
        }
        Ok(())
    }
}

/// Which way the primary angle moves through a repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolarity {
    /// The bottom of the rep is a small angle (`down <= up`), e.g. push-up elbow
    Flexion,
    /// The bottom of the rep is a large angle (`down > up`), e.g. curl from a hanging arm
    Extension,
}

/// Primary-angle thresholds, in degrees, marking the two halves of a repetition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepThresholds {
    /// Angle marking the bottom of the repetition
    pub down: f64,
    /// Angle marking the completed repetition
    pub up: f64,
}

impl RepThresholds {
    /// Create thresholds
    #[must_use]
    pub const fn new(down: f64, up: f64) -> Self {
        Self { down, up }
    }

    /// Movement direction implied by the threshold order
    #[must_use]
    pub fn polarity(&self) -> ThresholdPolarity {
        if self.down > self.up {
            ThresholdPolarity::Extension
        } else {
            ThresholdPolarity::Flexion
        }
    }

    /// Whether the angle has reached the bottom edge
    #[must_use]
    pub fn reached_bottom(&self, degrees: f64) -> bool {
        match self.polarity() {
            ThresholdPolarity::Flexion => degrees <= self.down,
            ThresholdPolarity::Extension => degrees >= self.down,
        }
    }

    /// Whether the angle has reached the completion edge
    #[must_use]
    pub fn reached_top(&self, degrees: f64) -> bool {
        match self.polarity() {
            ThresholdPolarity::Flexion => degrees >= self.up,
            ThresholdPolarity::Extension => degrees <= self.up,
        }
    }
}

/// Feedback text for each evaluation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMessages {
    /// Shown when the session starts
    pub start: String,
    /// Shown on any frame with invalid form
    pub wrong_form: String,
    /// Shown on a completed rep or a valid hold frame
    pub correct: String,
    /// Shown at the bottom of a rep or halfway through a hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halfway: Option<String>,
    /// Shown when a hold reaches its target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<String>,
}

/// Immutable description of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Display name
    pub name: String,
    /// Scoring model
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    /// Measured angles; the first one drives rep counting
    #[serde(default)]
    pub angle_points: Vec<AngleConstraint>,
    /// Constraints that must all hold for a frame to count as good form
    #[serde(default)]
    pub form_requirements: Vec<AngleConstraint>,
    /// Rep edges, required for rep exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rep_thresholds: Option<RepThresholds>,
    /// Hold target, required for time and hold exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_time_seconds: Option<u32>,
    /// Feedback text
    pub messages: ExerciseMessages,
}

impl ExerciseDefinition {
    /// The angle point that drives rep counting
    #[must_use]
    pub fn primary_angle(&self) -> Option<&AngleConstraint> {
        self.angle_points.first()
    }

    /// Check the definition is internally consistent.
    ///
    /// `key` is the catalog key used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` describing the first problem found
    pub fn validate(&self, key: &str) -> Result<(), CatalogError> {
        match self.kind {
            ExerciseKind::Rep => {
                if self.angle_points.is_empty() {
                    return Err(CatalogError::MissingPrimaryAngle {
                        exercise: key.to_owned(),
                    });
                }
                let thresholds =
                    self.rep_thresholds
                        .ok_or_else(|| CatalogError::MissingRepThresholds {
                            exercise: key.to_owned(),
                        })?;
                for value in [thresholds.down, thresholds.up] {
                    if !(0.0..=MAX_JOINT_ANGLE).contains(&value) {
                        return Err(CatalogError::ThresholdOutOfRange {
                            exercise: key.to_owned(),
                            value,
                        });
                    }
                }
            }
            ExerciseKind::Time | ExerciseKind::Hold => {
                if self.hold_time_seconds.unwrap_or(0) == 0 {
                    return Err(CatalogError::MissingHoldTime {
                        exercise: key.to_owned(),
                    });
                }
            }
        }

        self.angle_points
            .iter()
            .chain(&self.form_requirements)
            .try_for_each(|constraint| constraint.validate(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> ExerciseMessages {
        ExerciseMessages {
            start: "Start".to_owned(),
            wrong_form: "Fix form".to_owned(),
            correct: "Good".to_owned(),
            halfway: None,
            complete: None,
        }
    }

    fn rep_definition() -> ExerciseDefinition {
        ExerciseDefinition {
            name: "Push-ups".to_owned(),
            kind: ExerciseKind::Rep,
            angle_points: vec![AngleConstraint::new(11, 13, 15).named("elbow")],
            form_requirements: vec![AngleConstraint::new(11, 23, 25).min(160.0)],
            rep_thresholds: Some(RepThresholds::new(80.0, 165.0)),
            hold_time_seconds: None,
            messages: messages(),
        }
    }

    #[test]
    fn test_constraint_bounds_are_inclusive_and_optional() {
        let bounded = AngleConstraint::new(0, 1, 2).min(45.0).max(90.0);
        assert!(bounded.is_satisfied_by(45.0));
        assert!(bounded.is_satisfied_by(90.0));
        assert!(!bounded.is_satisfied_by(44.9));
        assert!(!bounded.is_satisfied_by(90.1));

        let open = AngleConstraint::new(0, 1, 2);
        assert!(open.is_satisfied_by(0.0));
        assert!(open.is_satisfied_by(180.0));
    }

    #[test]
    fn test_threshold_polarity() {
        let pushup = RepThresholds::new(80.0, 165.0);
        assert_eq!(pushup.polarity(), ThresholdPolarity::Flexion);
        assert!(pushup.reached_bottom(80.0));
        assert!(!pushup.reached_bottom(81.0));
        assert!(pushup.reached_top(165.0));

        let curl = RepThresholds::new(160.0, 30.0);
        assert_eq!(curl.polarity(), ThresholdPolarity::Extension);
        assert!(curl.reached_bottom(165.0));
        assert!(!curl.reached_bottom(100.0));
        assert!(curl.reached_top(25.0));
        assert!(!curl.reached_top(60.0));
    }

    #[test]
    fn test_valid_rep_definition() {
        assert!(rep_definition().validate("pushup").is_ok());
    }

    #[test]
    fn test_rep_definition_requires_thresholds() {
        let mut definition = rep_definition();
        definition.rep_thresholds = None;
        assert!(matches!(
            definition.validate("pushup"),
            Err(CatalogError::MissingRepThresholds { .. })
        ));
    }

    #[test]
    fn test_hold_definition_requires_positive_target() {
        let mut definition = rep_definition();
        definition.kind = ExerciseKind::Hold;
        definition.hold_time_seconds = Some(0);
        assert!(matches!(
            definition.validate("plank"),
            Err(CatalogError::MissingHoldTime { .. })
        ));
    }

    #[test]
    fn test_out_of_range_landmark_rejected() {
        let mut definition = rep_definition();
        definition.form_requirements = vec![AngleConstraint::new(11, 23, 33)];
        assert!(matches!(
            definition.validate("pushup"),
            Err(CatalogError::LandmarkOutOfRange { index: 33, .. })
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut definition = rep_definition();
        definition.form_requirements = vec![AngleConstraint::new(11, 23, 25).min(120.0).max(90.0)];
        assert!(matches!(
            definition.validate("pushup"),
            Err(CatalogError::InvalidAngleRange { .. })
        ));
    }

    #[test]
    fn test_definition_wire_names() {
        let json = serde_json::to_value(rep_definition()).unwrap();
        assert_eq!(json["type"], "rep");
        assert_eq!(json["rep_thresholds"]["down"], 80.0);
        assert_eq!(json["form_requirements"][0]["points"][1], 23);
        assert_eq!(json["messages"]["wrong_form"], "Fix form");
    }
}
