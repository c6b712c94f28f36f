// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Surface used by native builds, which link no video decoder.
//!
//! Sources are accepted and immediately reported as unplayable, so the
//! viewer shows its playback error banner while overlay management keeps
//! working.

use super::{AdaptiveConfig, AdaptiveLibrary, AdaptiveSession, LibraryEvent, MediaEvent, MediaSurface, PlaybackError};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct DetachedSurface {
    source: Option<String>,
    volume: f64,
    position: f64,
    pending: VecDeque<MediaEvent>,
}

impl DetachedSurface {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Default::default()
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl MediaSurface for DetachedSurface {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.position = 0.0;
        self.pending.push_back(MediaEvent::Error);
    }

    fn clear_source(&mut self) {
        self.source = None;
    }

    fn can_play_type(&self, _mime: &str) -> bool {
        false
    }

    fn request_play(&mut self) {
        self.pending
            .push_back(MediaEvent::PlayRejected("no video decoder in this build".to_string()));
    }

    fn pause(&mut self) {
        self.pending.push_back(MediaEvent::Pause);
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn seek(&mut self, seconds: f64) {
        self.position = seconds;
        self.pending.push_back(MediaEvent::TimeUpdate(seconds));
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.pending.drain(..).collect()
    }
}

/// Stand-in for an adaptive-streaming library that is never loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLibrary;

/// Uninhabited: [`NoLibrary`] never creates a session.
pub enum NoSession {}

impl<S> AdaptiveSession<S> for NoSession {
    fn load_source(&mut self, _url: &str) {
        match *self {}
    }

    fn attach_media(&mut self, _surface: &S) {
        match *self {}
    }

    fn drain_events(&mut self) -> Vec<LibraryEvent> {
        match *self {}
    }

    fn destroy(self) {
        match self {}
    }
}

impl<S: MediaSurface> AdaptiveLibrary<S> for NoLibrary {
    type Session = NoSession;

    fn is_loaded(&self) -> bool {
        false
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn create(&self, _config: &AdaptiveConfig) -> Result<NoSession, PlaybackError> {
        Err(PlaybackError::AdaptiveUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{PlaybackAdapter, PlaybackEvent};

    #[test]
    fn test_native_build_reports_errors_without_panicking() {
        let mut adapter = PlaybackAdapter::new(DetachedSurface::new(), NoLibrary);

        assert_eq!(
            adapter.load(Some("https://cdn/live.m3u8")),
            Err(PlaybackError::AdaptiveUnsupported)
        );

        adapter.load(Some("https://host/clip.mp4")).unwrap();
        assert_eq!(adapter.surface().source(), Some("https://host/clip.mp4"));
        assert_eq!(
            adapter.poll(),
            vec![PlaybackEvent::Error(PlaybackError::Media)]
        );

        adapter.play();
        assert_eq!(adapter.poll(), vec![PlaybackEvent::Paused]);

        adapter.load(None).unwrap();
        assert_eq!(adapter.surface().source(), None);
    }
}
