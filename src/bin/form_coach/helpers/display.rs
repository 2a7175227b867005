// ABOUTME: Output formatting helpers for form-coach
// ABOUTME: Exercise tables for humans and JSON lines for machines on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use form_coach::catalog::ExerciseCatalog;
use serde::Serialize;

/// Print catalog entries as an aligned table
pub fn display_exercise_table(catalog: &ExerciseCatalog) {
    let key_width = catalog.keys().map(str::len).max().unwrap_or(3).max(3);
    let name_width = catalog
        .iter()
        .map(|(_, definition)| definition.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{:<key_width$}  {:<name_width$}  TYPE    TARGET", "KEY", "NAME");
    for (key, definition) in catalog.iter() {
        let target = match (definition.hold_time_seconds, definition.rep_thresholds) {
            (Some(seconds), _) if definition.kind.is_timed() => format!("{seconds}s hold"),
            (_, Some(thresholds)) => format!("{} -> {} deg", thresholds.down, thresholds.up),
            _ => "-".to_owned(),
        };
        println!(
            "{key:<key_width$}  {:<name_width$}  {:<6}  {target}",
            definition.name,
            definition.kind.as_str()
        );
    }
}

/// Print a value as one compact JSON line
pub fn print_json_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print a value as indented JSON
pub fn print_json_pretty<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
