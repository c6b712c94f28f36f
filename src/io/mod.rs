// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for settings and overlay set files.

pub mod serialization;
pub mod settings;
