// ABOUTME: Configuration error types for environment-driven coach settings
// ABOUTME: Parse and range failures carry the offending variable name and raw value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use form_core::errors::AppError;
use serde_json::json;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value could not be parsed into the expected type
    #[error("Invalid value for {key}: '{value}' ({expected})")]
    Parse {
        /// Environment variable name
        key: &'static str,
        /// Raw value as read
        value: String,
        /// What the variable accepts
        expected: &'static str,
    },

    /// Numeric value must be greater than zero
    #[error("{key} must be greater than zero")]
    MustBePositive {
        /// Environment variable name
        key: &'static str,
    },

    /// Required value is empty
    #[error("{key} must not be empty")]
    Empty {
        /// Environment variable name
        key: &'static str,
    },
}

impl ConfigError {
    /// Environment variable the error is about
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Parse { key, .. } | Self::MustBePositive { key } | Self::Empty { key } => *key,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
            .with_details(json!({ "key": error.key() }))
            .with_source(error)
    }
}
