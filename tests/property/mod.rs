// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod configuration_invariants;
mod parameter_coercion;
