// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Clients for the companion overlay/stream service.
//!
//! Each client is a trait so the state runtime can be driven by in-memory
//! fakes in tests; the HTTP implementations share one [`ApiHttp`].

pub mod error;
pub mod http;
pub mod overlays;
pub mod stream;

pub use error::ApiError;
pub use http::ApiHttp;
pub use overlays::{HttpOverlayClient, OverlayApi};
pub use stream::{HttpStreamClient, StreamApi};
