// ABOUTME: Re-exports command modules for pierre-training-cli
// ABOUTME: Provides session editing and local analytics commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod session;
