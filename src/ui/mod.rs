// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the livestream viewer.

pub mod controls;
pub mod dialogs;
pub mod editor;
pub mod landing;
pub mod sidebar;
pub mod viewer;
