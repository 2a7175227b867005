// ABOUTME: Configuration module for the form coach runtime and CLI
// ABOUTME: Environment-only settings for catalog overlay, timer policy, tick period, and frame queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; see
//! [`form_core::constants::env_config`] for the names.

/// Environment configuration loading
pub mod environment;
/// Configuration error types
pub mod error;

pub use environment::CoachConfig;
pub use error::ConfigError;
