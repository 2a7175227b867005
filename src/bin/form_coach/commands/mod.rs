// ABOUTME: Re-exports command modules for form-coach
// ABOUTME: Catalog inspection, catalog validation, replay, and stream commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod exercises;
pub mod replay;
pub mod stream;
