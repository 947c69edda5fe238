// ABOUTME: Helper modules for pierre-training-cli
// ABOUTME: Output formatting shared by the session commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
