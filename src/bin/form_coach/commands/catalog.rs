// ABOUTME: Catalog file validation command for form-coach
// ABOUTME: Loads a YAML or JSON catalog on its own and reports every exercise it defines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use form_coach::catalog::ExerciseCatalog;
use form_core::errors::AppError;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_exercise_table;

/// Validate a catalog file without merging it into the built-in catalog
pub fn validate(path: &Path) -> Result<()> {
    let catalog = ExerciseCatalog::load(path)
        .map_err(AppError::from)
        .with_context(|| format!("Catalog {} is invalid", path.display()))?;

    let builtin = ExerciseCatalog::builtin()?;
    let overrides = catalog.keys().filter(|key| builtin.contains(key)).count();
    info!(
        path = %path.display(),
        exercises = catalog.len(),
        overrides,
        "Catalog validated"
    );

    display_exercise_table(&catalog);
    println!(
        "\n{} exercises valid ({overrides} replace built-in entries)",
        catalog.len()
    );
    Ok(())
}
