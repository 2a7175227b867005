// ABOUTME: Exercise catalog mapping keys to validated, shared exercise definitions
// ABOUTME: Loads the embedded built-in catalog and merges YAML or JSON overlays over it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog
//!
//! Adding an exercise only needs a catalog entry. The built-in catalog is
//! compiled into the binary; external files use the same shape and replace
//! built-in entries with the same key.

use form_core::errors::{AppError, AppResult, CatalogError};
use form_core::models::ExerciseDefinition;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

/// Keyed set of validated exercise definitions
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<String, Arc<ExerciseDefinition>>,
}

impl ExerciseCatalog {
    /// The catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails to parse or validate
    pub fn builtin() -> AppResult<Self> {
        Ok(Self::from_yaml_str(BUILTIN_CATALOG)?)
    }

    /// Built-in catalog with an optional file merged over it
    ///
    /// # Errors
    ///
    /// Returns an error if either catalog fails to load
    pub fn with_overlay(path: Option<&Path>) -> AppResult<Self> {
        let mut catalog = Self::builtin()?;
        if let Some(path) = path {
            let overlay = Self::load(path)?;
            let replaced = catalog.merge(overlay);
            info!(
                path = %path.display(),
                replaced,
                total = catalog.len(),
                "Merged external exercise catalog"
            );
        }
        Ok(catalog)
    }

    /// Parse and validate a YAML catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed YAML or an invalid definition
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let definitions: BTreeMap<String, ExerciseDefinition> =
            serde_yaml::from_str(source).map_err(|e| CatalogError::Yaml(e.to_string()))?;
        Self::from_definitions(definitions)
    }

    /// Parse and validate a JSON catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON or an invalid definition
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let definitions: BTreeMap<String, ExerciseDefinition> = serde_json::from_str(source)?;
        Self::from_definitions(definitions)
    }

    /// Validate every definition and build the catalog
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, or `CatalogError::Empty`
    pub fn from_definitions(
        definitions: BTreeMap<String, ExerciseDefinition>,
    ) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let exercises = definitions
            .into_iter()
            .map(|(key, definition)| {
                definition.validate(&key)?;
                Ok((key, Arc::new(definition)))
            })
            .collect::<Result<BTreeMap<_, _>, CatalogError>>()?;

        debug!(count = exercises.len(), "Exercise catalog validated");
        Ok(Self { exercises })
    }

    /// Load a catalog file, choosing the parser by extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, has an unknown
    /// extension, or contains an invalid catalog
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }

    /// Insert every entry of `overlay`, replacing entries with the same key.
    ///
    /// Returns how many existing entries were replaced.
    pub fn merge(&mut self, overlay: Self) -> usize {
        let mut replaced = 0;
        for (key, definition) in overlay.exercises {
            if self.exercises.insert(key, definition).is_some() {
                replaced += 1;
            }
        }
        replaced
    }

    /// Look up an exercise by key
    ///
    /// # Errors
    ///
    /// Returns a not-found error naming the key when it is absent
    pub fn get(&self, key: &str) -> AppResult<Arc<ExerciseDefinition>> {
        self.exercises.get(key).cloned().ok_or_else(|| {
            AppError::not_found(format!("Exercise '{key}'")).with_details(serde_json::json!({
                "exercise": key,
                "available": self.exercises.keys().collect::<Vec<_>>(),
            }))
        })
    }

    /// Whether `key` is in the catalog
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.exercises.contains_key(key)
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercise keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.exercises.keys().map(String::as_str)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExerciseDefinition)> {
        self.exercises
            .iter()
            .map(|(key, definition)| (key.as_str(), definition.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_core::errors::ErrorCode;
    use form_core::models::ExerciseKind;

    #[test]
    fn test_builtin_catalog_loads_every_exercise() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        let keys: Vec<_> = catalog.keys().collect();
        assert_eq!(
            keys,
            vec![
                "forearmPronation",
                "hipThrust",
                "overheadTricepsExtension",
                "plank",
                "pushup",
                "reversePlank",
                "squat",
                "tricepsKickbacks",
                "zottmanCurls",
            ]
        );
    }

    #[test]
    fn test_builtin_plank_is_timed() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        let plank = catalog.get("plank").unwrap();
        assert_eq!(plank.kind, ExerciseKind::Time);
        assert_eq!(plank.hold_time_seconds, Some(30));
        assert_eq!(plank.form_requirements.len(), 2);
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let catalog = ExerciseCatalog::builtin().unwrap();
        let err = catalog.get("burpee").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert!(err.message.contains("burpee"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = ExerciseCatalog::from_yaml_str("{}").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_malformed_yaml_reports_parse_error() {
        let err = ExerciseCatalog::from_yaml_str("pushup: [unterminated").unwrap_err();
        assert!(matches!(err, CatalogError::Yaml(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = ExerciseCatalog::load(Path::new("catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
    }
}
