// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video playback strategies.
//!
//! A stream URL is played in one of three ways:
//!
//! - [`PlaybackStrategy::AdaptiveLibrary`]: an HLS manifest handed to an
//!   external adaptive-streaming library (hls.js in the browser)
//! - [`PlaybackStrategy::NativeAdaptive`]: an HLS manifest assigned straight
//!   to a surface that understands it natively
//! - [`PlaybackStrategy::Progressive`]: a single-file video assigned straight
//!   to the surface
//!
//! The strategy is chosen once per URL by [`select_strategy`]; the
//! [`PlaybackAdapter`] owns the surface and at most one library instance.

pub mod adapter;
pub mod detached;

pub use adapter::PlaybackAdapter;
pub use detached::{DetachedSurface, NoLibrary};

/// MIME type a surface must accept to play HLS without a library.
pub const HLS_MIME: &str = "application/vnd.apple.mpegurl";

/// Reasons a stream cannot be played. The display strings are shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("HLS not supported in this browser")]
    AdaptiveUnsupported,

    #[error("RTSP streams require a backend conversion server. Please use HLS (.m3u8) or MP4 URLs instead.")]
    UnsupportedScheme,

    /// Fatal error reported by the adaptive-streaming library.
    #[error("HLS Error: {0}")]
    Library(String),

    /// The media element failed to load the source.
    #[error("Failed to load video stream")]
    Media,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStrategy {
    AdaptiveLibrary,
    NativeAdaptive,
    Progressive,
}

impl PlaybackStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackStrategy::AdaptiveLibrary => "HLS (hls.js)",
            PlaybackStrategy::NativeAdaptive => "HLS (native)",
            PlaybackStrategy::Progressive => "Direct",
        }
    }
}

/// Shape of a stream URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Manifest,
    RealTime,
    Progressive,
}

/// Classify a URL by its path extension and scheme.
pub fn classify_url(url: &str) -> UrlKind {
    let url = url.trim();
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lower = path.to_ascii_lowercase();

    if lower.ends_with(".m3u8") {
        UrlKind::Manifest
    } else if lower.starts_with("rtsp://") || lower.starts_with("rtsps://") {
        UrlKind::RealTime
    } else {
        UrlKind::Progressive
    }
}

/// Pick how to play `url`.
///
/// `library_ready` is true when the adaptive library is loaded and reports
/// runtime support; `native_manifest` when the surface can play
/// [`HLS_MIME`] by itself.
pub fn select_strategy(
    url: &str,
    library_ready: bool,
    native_manifest: bool,
) -> Result<PlaybackStrategy, PlaybackError> {
    match classify_url(url) {
        UrlKind::Manifest if library_ready => Ok(PlaybackStrategy::AdaptiveLibrary),
        UrlKind::Manifest if native_manifest => Ok(PlaybackStrategy::NativeAdaptive),
        UrlKind::Manifest => Err(PlaybackError::AdaptiveUnsupported),
        UrlKind::RealTime => Err(PlaybackError::UnsupportedScheme),
        UrlKind::Progressive => Ok(PlaybackStrategy::Progressive),
    }
}

/// Notifications from a media surface.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    LoadedMetadata { duration: f64 },
    LoadedData,
    TimeUpdate(f64),
    Play,
    Pause,
    Ended,
    /// A play request was honoured.
    PlayResolved,
    /// A play request was refused, typically by autoplay policy.
    PlayRejected(String),
    Error,
}

/// Notifications from an adaptive-streaming library instance.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    ManifestParsed,
    Error { fatal: bool, kind: String },
}

/// Playback changes forwarded to the state container.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// A new source was attached with the given strategy.
    Attached(PlaybackStrategy),
    Playing,
    Paused,
    TimeUpdate(f64),
    DurationChange(f64),
    Error(PlaybackError),
}

/// Construction options for an adaptive-streaming library instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveConfig {
    pub enable_worker: bool,
    pub low_latency_mode: bool,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            enable_worker: true,
            low_latency_mode: true,
        }
    }
}

/// Something that can display a video source.
pub trait MediaSurface {
    /// Assign a source for direct playback.
    fn set_source(&mut self, url: &str);

    /// Drop the current source.
    fn clear_source(&mut self);

    /// Whether the surface can play the given MIME type by itself.
    fn can_play_type(&self, mime: &str) -> bool;

    /// Ask for playback. The outcome arrives later as
    /// [`MediaEvent::PlayResolved`] or [`MediaEvent::PlayRejected`].
    fn request_play(&mut self);

    fn pause(&mut self);

    /// Volume in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64);

    fn seek(&mut self, seconds: f64);

    /// Take the events raised since the last call.
    fn drain_events(&mut self) -> Vec<MediaEvent>;

    /// Position the surface under the given screen rectangle.
    fn place(&mut self, _rect: egui::Rect) {}

    fn request_fullscreen(&mut self) {}
}

/// An adaptive-streaming library able to drive a surface of type `S`.
pub trait AdaptiveLibrary<S: MediaSurface> {
    type Session: AdaptiveSession<S>;

    /// Whether the library code is present in the runtime.
    fn is_loaded(&self) -> bool;

    /// Whether the library reports support for the current runtime.
    fn is_supported(&self) -> bool;

    fn create(&self, config: &AdaptiveConfig) -> Result<Self::Session, PlaybackError>;
}

/// One live instance of an adaptive-streaming library.
pub trait AdaptiveSession<S> {
    fn load_source(&mut self, url: &str);

    fn attach_media(&mut self, surface: &S);

    fn drain_events(&mut self) -> Vec<LibraryEvent>;

    /// Release decoders and network resources held by the instance.
    fn destroy(self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_url() {
        assert_eq!(classify_url("https://cdn/live/video.m3u8"), UrlKind::Manifest);
        assert_eq!(classify_url("https://cdn/LIVE.M3U8?token=abc"), UrlKind::Manifest);
        assert_eq!(
            classify_url("https://demo.unified-streaming.com/tears-of-steel.ism/.m3u8"),
            UrlKind::Manifest
        );
        assert_eq!(classify_url("rtsp://host/stream"), UrlKind::RealTime);
        assert_eq!(classify_url("RTSPS://host/stream"), UrlKind::RealTime);
        assert_eq!(classify_url("https://host/clip.mp4"), UrlKind::Progressive);
        assert_eq!(classify_url("https://host/clip.webm#t=10"), UrlKind::Progressive);
    }

    #[test]
    fn test_select_manifest_prefers_library() {
        assert_eq!(
            select_strategy("video.m3u8", true, true),
            Ok(PlaybackStrategy::AdaptiveLibrary)
        );
        assert_eq!(
            select_strategy("video.m3u8", false, true),
            Ok(PlaybackStrategy::NativeAdaptive)
        );
        assert_eq!(
            select_strategy("video.m3u8", false, false),
            Err(PlaybackError::AdaptiveUnsupported)
        );
    }

    #[test]
    fn test_select_other_schemes() {
        assert_eq!(
            select_strategy("rtsp://host/stream", true, true),
            Err(PlaybackError::UnsupportedScheme)
        );
        assert_eq!(
            select_strategy("clip.mp4", true, true),
            Ok(PlaybackStrategy::Progressive)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlaybackError::Library("networkError".to_string()).to_string(),
            "HLS Error: networkError"
        );
        assert_eq!(
            PlaybackError::AdaptiveUnsupported.to_string(),
            "HLS not supported in this browser"
        );
    }
}
