// ABOUTME: Exercise catalog inspection commands for form-coach
// ABOUTME: Lists catalog entries and prints single definitions as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use form_coach::catalog::ExerciseCatalog;

use crate::helpers::display::{display_exercise_table, print_json_pretty};

/// List every exercise in the catalog
pub fn list(catalog: &ExerciseCatalog) {
    display_exercise_table(catalog);
}

/// Print one definition
pub fn show(catalog: &ExerciseCatalog, key: &str) -> Result<()> {
    let definition = catalog.get(key)?;
    print_json_pretty(definition.as_ref())
}
