// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Attaching stream URLs to a media surface.

use super::{
    select_strategy, AdaptiveConfig, AdaptiveLibrary, AdaptiveSession, LibraryEvent, MediaEvent,
    MediaSurface, PlaybackError, PlaybackEvent, PlaybackStrategy, HLS_MIME,
};

/// The source currently attached to the surface.
struct Attachment<T> {
    url: String,
    strategy: PlaybackStrategy,
    /// Present only for [`PlaybackStrategy::AdaptiveLibrary`].
    session: Option<T>,
    /// Playback has been requested for this source.
    started: bool,
}

/// Owns the media surface and the single adaptive-library instance bound
/// to it.
pub struct PlaybackAdapter<S, L>
where
    S: MediaSurface,
    L: AdaptiveLibrary<S>,
{
    surface: S,
    library: L,
    config: AdaptiveConfig,
    current: Option<Attachment<L::Session>>,
    play_pending: bool,
    pause_after_play: bool,
}

impl<S, L> PlaybackAdapter<S, L>
where
    S: MediaSurface,
    L: AdaptiveLibrary<S>,
{
    pub fn new(surface: S, library: L) -> Self {
        Self {
            surface,
            library,
            config: AdaptiveConfig::default(),
            current: None,
            play_pending: false,
            pause_after_play: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.url.as_str())
    }

    pub fn strategy(&self) -> Option<PlaybackStrategy> {
        self.current.as_ref().map(|a| a.strategy)
    }

    /// Switch to `url`, or to nothing when `None`.
    ///
    /// Whatever was attached before is released first. Returns the chosen
    /// strategy, or the reason the URL cannot be played; in the error case
    /// nothing is attached.
    pub fn load(&mut self, url: Option<&str>) -> Result<Option<PlaybackStrategy>, PlaybackError> {
        self.detach();

        let Some(url) = url else {
            return Ok(None);
        };

        let library_ready = self.library.is_loaded() && self.library.is_supported();
        let native_manifest = self.surface.can_play_type(HLS_MIME);
        let strategy = select_strategy(url, library_ready, native_manifest)?;

        let session = match strategy {
            PlaybackStrategy::AdaptiveLibrary => {
                let mut session = self.library.create(&self.config)?;
                session.load_source(url);
                session.attach_media(&self.surface);
                Some(session)
            }
            PlaybackStrategy::NativeAdaptive | PlaybackStrategy::Progressive => {
                self.surface.set_source(url);
                None
            }
        };

        log::info!("Attached {} using {}", url, strategy.label());
        self.current = Some(Attachment {
            url: url.to_string(),
            strategy,
            session,
            started: false,
        });
        Ok(Some(strategy))
    }

    /// Release the current source and any library instance.
    ///
    /// Media events still queued for the old source are discarded.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.current.take() {
            match attachment.session {
                Some(session) => session.destroy(),
                None => self.surface.clear_source(),
            }
            log::debug!("Detached {}", attachment.url);
        }
        let stale = self.surface.drain_events();
        if !stale.is_empty() {
            log::debug!("Dropped {} media events from the previous source", stale.len());
        }
        self.play_pending = false;
        self.pause_after_play = false;
    }

    pub fn play(&mut self) {
        self.play_pending = true;
        self.pause_after_play = false;
        self.surface.request_play();
    }

    /// Pause now, or as soon as an outstanding play request settles.
    pub fn pause(&mut self) {
        if self.play_pending {
            self.pause_after_play = true;
        } else {
            self.surface.pause();
        }
    }

    /// Volume on the 0 to 100 scale.
    pub fn set_volume(&mut self, volume: u8) {
        self.surface.set_volume(f64::from(volume.min(100)) / 100.0);
    }

    pub fn seek(&mut self, seconds: f64) {
        if seconds.is_finite() && seconds >= 0.0 {
            self.surface.seek(seconds);
        }
    }

    /// Process surface and library notifications, starting playback when
    /// the attached source becomes ready.
    pub fn poll(&mut self) -> Vec<PlaybackEvent> {
        let mut out = Vec::new();

        for event in self.surface.drain_events() {
            match event {
                MediaEvent::LoadedMetadata { duration } => {
                    out.push(PlaybackEvent::DurationChange(duration));
                    self.start_when(PlaybackStrategy::NativeAdaptive);
                }
                MediaEvent::LoadedData => self.start_when(PlaybackStrategy::Progressive),
                MediaEvent::TimeUpdate(t) => out.push(PlaybackEvent::TimeUpdate(t)),
                MediaEvent::Play => out.push(PlaybackEvent::Playing),
                MediaEvent::Pause | MediaEvent::Ended => out.push(PlaybackEvent::Paused),
                MediaEvent::PlayResolved => {
                    self.play_pending = false;
                    if self.pause_after_play {
                        self.pause_after_play = false;
                        self.surface.pause();
                        out.push(PlaybackEvent::Paused);
                    } else {
                        out.push(PlaybackEvent::Playing);
                    }
                }
                MediaEvent::PlayRejected(reason) => {
                    self.play_pending = false;
                    self.pause_after_play = false;
                    log::info!("Autoplay prevented: {}", reason);
                    out.push(PlaybackEvent::Paused);
                }
                MediaEvent::Error => {
                    if self.current.is_some() {
                        log::error!("Video error while playing {:?}", self.current_url());
                        out.push(PlaybackEvent::Error(PlaybackError::Media));
                    }
                }
            }
        }

        let library_events = self
            .current
            .as_mut()
            .and_then(|a| a.session.as_mut())
            .map(|s| s.drain_events())
            .unwrap_or_default();

        for event in library_events {
            match event {
                LibraryEvent::ManifestParsed => {
                    log::info!("HLS manifest loaded");
                    self.start_when(PlaybackStrategy::AdaptiveLibrary);
                }
                LibraryEvent::Error { fatal, kind } => {
                    log::error!("HLS error: {} (fatal: {})", kind, fatal);
                    if fatal {
                        out.push(PlaybackEvent::Error(PlaybackError::Library(kind)));
                    }
                }
            }
        }

        out
    }

    /// Request playback once, if the attached source uses `strategy`.
    fn start_when(&mut self, strategy: PlaybackStrategy) {
        let ready = match self.current.as_mut() {
            Some(a) if a.strategy == strategy && !a.started => {
                a.started = true;
                true
            }
            _ => false,
        };
        if ready {
            self.play();
        }
    }
}

impl<S, L> Drop for PlaybackAdapter<S, L>
where
    S: MediaSurface,
    L: AdaptiveLibrary<S>,
{
    fn drop(&mut self) {
        self.detach();
    }
}
