// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model shared by the clients, the state container and the UI.

pub mod overlay;
pub mod stream;
