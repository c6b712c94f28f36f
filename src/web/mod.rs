// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Browser playback: a `<video>` element driven directly or through hls.js.

pub mod hls;
pub mod video;

pub use hls::{inject_script, HlsLibrary};
pub use video::VideoSurface;

/// Id of the `<video>` element in `index.html`.
pub const VIDEO_ELEMENT_ID: &str = "stream_video";

/// Id of the canvas egui renders into.
pub const CANVAS_ID: &str = "the_canvas_id";
