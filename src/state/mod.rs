// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application state container.
//!
//! [`AppState`] is the single owner of the viewer's mutable state. Every
//! change goes through [`AppState::update`], a pure transition that takes a
//! [`Msg`] and returns the next state plus the remote calls ([`Effect`]s)
//! it wants made. Results of those calls come back as further messages;
//! [`runtime::Store`] does the plumbing.

pub mod editor;
pub mod queue;
pub mod runtime;

use crate::api::ApiError;
use crate::io::settings::Settings;
use crate::models::overlay::{fallback_overlays, Overlay, OverlayDraft, OverlayId};
use crate::models::stream::{
    Ack, HealthReport, PlaybackState, ServiceStats, StreamDescriptor, StreamHistory, StreamRecord,
    StreamSession, StreamStatus,
};
use crate::playback::PlaybackEvent;
use editor::OverlayEditor;
use std::collections::BTreeSet;

pub const OFFLINE_NOTICE: &str = "Failed to connect to backend. Using local mode.";
pub const EMPTY_URL_ALERT: &str = "Please enter a valid stream URL";
pub const SAVE_FAILED_ALERT: &str = "Failed to save overlay. Please try again.";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete overlay. Please try again.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this overlay?";

/// What the stream service last told us about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Offline,
    Online {
        /// The backend has a session marked live.
        live: bool,
    },
}

/// Inputs to the state container: user intents and remote completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    LoadOverlays,
    OverlaysLoaded(Result<Vec<Overlay>, ApiError>),

    SetStreamUrl(String),
    StartStream,
    StreamStarted(Result<Ack, ApiError>),
    StopStream,
    StreamStopped(Result<Ack, ApiError>),

    CheckBackend,
    BackendChecked(Result<StreamStatus, ApiError>),
    LoadHistory,
    HistoryLoaded(Result<StreamHistory, ApiError>),
    /// Refresh health and record counts.
    CheckHealth,
    HealthChecked(Result<HealthReport, ApiError>),
    StatsLoaded(Result<ServiceStats, ApiError>),

    /// Open the editor on a new overlay (`None`) or a copy of an existing one.
    OpenEditor(Option<OverlayId>),
    CancelEditor,
    SaveOverlay(OverlayDraft),
    OverlaySaved {
        editing: Option<OverlayId>,
        result: Result<Overlay, ApiError>,
    },
    ImportOverlays(Vec<OverlayDraft>),
    OverlayImported(Result<Overlay, ApiError>),

    /// Ask for confirmation before deleting.
    RequestDelete(OverlayId),
    ConfirmDelete,
    CancelDelete,
    OverlayDeleted {
        id: OverlayId,
        result: Result<Ack, ApiError>,
    },

    ToggleOverlayActive(OverlayId),

    Playback(PlaybackEvent),
    SetVolume(u8),

    DismissAlert,
    DismissStreamError,
}

impl Msg {
    /// Whether this message completes a call that showed the loading
    /// indicator.
    fn ends_progress(&self) -> bool {
        matches!(
            self,
            Msg::OverlaysLoaded(_)
                | Msg::StreamStarted(_)
                | Msg::StreamStopped(_)
                | Msg::OverlaySaved { .. }
                | Msg::OverlayImported(_)
                | Msg::OverlayDeleted { .. }
        )
    }

    /// Overlay id whose serialized mutation this message completes.
    pub fn completed_mutation(&self) -> Option<&OverlayId> {
        match self {
            Msg::OverlaySaved {
                editing: Some(id), ..
            } => Some(id),
            Msg::OverlayDeleted { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Remote calls requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchOverlays,
    CreateOverlay(OverlayDraft),
    ImportOverlay(OverlayDraft),
    UpdateOverlay(OverlayId, OverlayDraft),
    DeleteOverlay(OverlayId),
    StartStream(StreamDescriptor),
    StopStream,
    FetchStatus,
    FetchHistory(usize),
    FetchHealth,
    FetchStats,
}

impl Effect {
    /// Overlay id the call mutates; such calls are serialized per id.
    pub fn mutation_key(&self) -> Option<&OverlayId> {
        match self {
            Effect::UpdateOverlay(id, _) | Effect::DeleteOverlay(id) => Some(id),
            _ => None,
        }
    }

    fn shows_progress(&self) -> bool {
        !matches!(
            self,
            Effect::FetchStatus
                | Effect::FetchHistory(_)
                | Effect::FetchHealth
                | Effect::FetchStats
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub settings: Settings,
    pub stream: StreamSession,
    pub overlays: Vec<Overlay>,
    pub active: BTreeSet<OverlayId>,
    pub playback: PlaybackState,
    pub editor: Option<OverlayEditor>,
    /// Overlay awaiting delete confirmation.
    pub pending_delete: Option<OverlayId>,
    /// Blocking message the user must acknowledge.
    pub alert: Option<String>,
    /// Informational backend error shown as "offline mode".
    pub api_error: Option<String>,
    pub backend: BackendStatus,
    pub history: Vec<StreamRecord>,
    pub history_error: Option<String>,
    pub health: Option<Result<HealthReport, String>>,
    pub stats: Option<Result<ServiceStats, String>>,
    /// A start call is awaiting its reply.
    starting: bool,
    in_flight: usize,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_active(&self, id: &OverlayId) -> bool {
        self.active.contains(id)
    }

    pub fn overlay(&self, id: &OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| &o.id == id)
    }

    /// Apply `msg`, returning the next state and the remote calls to make.
    pub fn update(mut self, msg: Msg) -> (Self, Vec<Effect>) {
        if msg.ends_progress() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let effects = self.transition(msg);
        self.in_flight += effects.iter().filter(|e| e.shows_progress()).count();
        (self, effects)
    }

    fn transition(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::LoadOverlays => return vec![Effect::FetchOverlays],
            Msg::OverlaysLoaded(Ok(overlays)) => {
                log::info!("Loaded {} overlays", overlays.len());
                self.overlays = overlays;
                self.api_error = None;
                self.prune_active();
            }
            Msg::OverlaysLoaded(Err(e)) => {
                log::error!("Failed to fetch overlays: {}", e);
                self.api_error = Some(OFFLINE_NOTICE.to_string());
                self.overlays = if self.settings.offline_demo {
                    fallback_overlays()
                } else {
                    Vec::new()
                };
                self.prune_active();
            }

            Msg::SetStreamUrl(url) => self.stream.url = url,
            Msg::StartStream => {
                if self.starting || self.stream.is_streaming {
                    log::debug!("Stream already active, ignoring start request");
                    return Vec::new();
                }
                let url = self.stream.url.trim().to_string();
                if url.is_empty() {
                    self.alert = Some(EMPTY_URL_ALERT.to_string());
                    return Vec::new();
                }
                self.stream.url = url.clone();
                self.starting = true;
                return vec![Effect::StartStream(StreamDescriptor {
                    url,
                    title: self.settings.stream_title.clone(),
                    description: self.settings.stream_description.clone(),
                })];
            }
            Msg::StreamStarted(result) => {
                if !std::mem::take(&mut self.starting) {
                    log::debug!("Ignoring start reply with no pending start");
                    return Vec::new();
                }
                if let Err(e) = result {
                    // Local playback proceeds without the backend.
                    log::warn!("Failed to start stream: {}", e);
                }
                self.stream.is_streaming = true;
                self.stream.stream_error.clear();
            }
            Msg::StopStream => return vec![Effect::StopStream],
            Msg::StreamStopped(result) => {
                self.starting = false;
                if let Err(e) = result {
                    log::warn!("Failed to stop stream: {}", e);
                }
                self.stream.is_streaming = false;
                self.stream.url.clear();
                self.playback = PlaybackState {
                    volume: self.playback.volume,
                    ..Default::default()
                };
            }

            Msg::CheckBackend => return vec![Effect::FetchStatus],
            Msg::BackendChecked(Ok(status)) => {
                self.backend = BackendStatus::Online {
                    live: status.is_streaming,
                };
            }
            Msg::BackendChecked(Err(e)) => {
                log::warn!("Stream status unavailable: {}", e);
                self.backend = BackendStatus::Offline;
            }
            Msg::LoadHistory => return vec![Effect::FetchHistory(self.settings.history_limit)],
            Msg::HistoryLoaded(Ok(history)) => {
                self.history = history.streams;
                self.history_error = None;
            }
            Msg::HistoryLoaded(Err(e)) => {
                log::warn!("Failed to fetch stream history: {}", e);
                self.history_error = Some(e.to_string());
            }
            Msg::CheckHealth => return vec![Effect::FetchHealth, Effect::FetchStats],
            Msg::HealthChecked(result) => {
                self.health = Some(result.map_err(|e| e.to_string()));
            }
            Msg::StatsLoaded(result) => {
                if let Err(e) = &result {
                    log::warn!("Stats unavailable: {}", e);
                }
                self.stats = Some(result.map_err(|e| e.to_string()));
            }

            Msg::OpenEditor(None) => self.editor = Some(OverlayEditor::create()),
            Msg::OpenEditor(Some(id)) => match self.overlay(&id) {
                Some(overlay) => self.editor = Some(OverlayEditor::edit(overlay)),
                None => log::warn!("Cannot edit unknown overlay {}", id),
            },
            Msg::CancelEditor => self.editor = None,
            Msg::SaveOverlay(draft) => {
                let editing = self.editor.as_ref().and_then(|e| e.editing().cloned());
                return vec![match editing {
                    Some(id) => Effect::UpdateOverlay(id, draft),
                    None => Effect::CreateOverlay(draft),
                }];
            }
            Msg::OverlaySaved { editing, result } => match result {
                Ok(saved) => {
                    match editing {
                        Some(id) => {
                            if let Some(slot) = self.overlays.iter_mut().find(|o| o.id == id) {
                                *slot = saved;
                            }
                        }
                        None => self.overlays.push(saved),
                    }
                    self.editor = None;
                }
                Err(e) => {
                    log::error!("Failed to save overlay: {}", e);
                    self.alert = Some(SAVE_FAILED_ALERT.to_string());
                }
            },
            Msg::ImportOverlays(drafts) => {
                return drafts.into_iter().map(Effect::ImportOverlay).collect();
            }
            Msg::OverlayImported(Ok(overlay)) => self.overlays.push(overlay),
            Msg::OverlayImported(Err(e)) => {
                log::error!("Failed to import overlay: {}", e);
                self.alert = Some(SAVE_FAILED_ALERT.to_string());
            }

            Msg::RequestDelete(id) => self.pending_delete = Some(id),
            Msg::CancelDelete => self.pending_delete = None,
            Msg::ConfirmDelete => {
                if let Some(id) = self.pending_delete.take() {
                    return vec![Effect::DeleteOverlay(id)];
                }
            }
            Msg::OverlayDeleted { id, result } => match result {
                Ok(_) => {
                    self.overlays.retain(|o| o.id != id);
                    self.active.remove(&id);
                    log::info!("Deleted overlay {}, total: {}", id, self.overlays.len());
                }
                Err(e) => {
                    log::error!("Failed to delete overlay: {}", e);
                    self.alert = Some(DELETE_FAILED_ALERT.to_string());
                }
            },

            Msg::ToggleOverlayActive(id) => {
                if self.overlay(&id).is_some() && !self.active.remove(&id) {
                    self.active.insert(id);
                }
            }

            Msg::Playback(event) => self.apply_playback(event),
            Msg::SetVolume(volume) => self.playback.volume = volume.min(100),

            Msg::DismissAlert => self.alert = None,
            Msg::DismissStreamError => self.stream.stream_error.clear(),
        }
        Vec::new()
    }

    fn apply_playback(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Attached(_) => {
                self.stream.stream_error.clear();
                self.playback.current_time = 0.0;
                self.playback.duration = f64::NAN;
            }
            PlaybackEvent::Playing => self.playback.is_playing = true,
            PlaybackEvent::Paused => self.playback.is_playing = false,
            PlaybackEvent::TimeUpdate(t) => self.playback.current_time = t,
            PlaybackEvent::DurationChange(d) => self.playback.duration = d,
            PlaybackEvent::Error(e) => self.stream.stream_error = e.to_string(),
        }
    }

    /// Keep the active set a subset of the loaded overlays.
    fn prune_active(&mut self) {
        let overlays = &self.overlays;
        self.active.retain(|id| overlays.iter().any(|o| &o.id == id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overlay::{OverlayType, Position, Size};
    use crate::playback::PlaybackError;

    fn overlay(id: &str, name: &str) -> Overlay {
        Overlay::new(
            OverlayId::new(id),
            OverlayDraft {
                name: name.to_string(),
                content: name.to_string(),
                ..Default::default()
            },
        )
    }

    fn loaded(overlays: Vec<Overlay>) -> AppState {
        let (state, _) = AppState::default().update(Msg::OverlaysLoaded(Ok(overlays)));
        state
    }

    fn network_down() -> ApiError {
        ApiError::network("connection refused")
    }

    #[test]
    fn test_load_requests_fetch_and_shows_progress() {
        let (state, effects) = AppState::default().update(Msg::LoadOverlays);
        assert_eq!(effects, vec![Effect::FetchOverlays]);
        assert!(state.is_loading());

        let (state, _) = state.update(Msg::OverlaysLoaded(Ok(vec![overlay("a", "A")])));
        assert!(!state.is_loading());
        assert_eq!(state.overlays.len(), 1);
        assert_eq!(state.api_error, None);
    }

    #[test]
    fn test_load_failure_uses_fallback_exactly() {
        let (state, _) = AppState::default().update(Msg::LoadOverlays);
        let (state, effects) = state.update(Msg::OverlaysLoaded(Err(network_down())));
        assert!(effects.is_empty());
        assert_eq!(state.overlays, fallback_overlays());
        assert_eq!(state.api_error.as_deref(), Some(OFFLINE_NOTICE));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_load_failure_without_demo_mode_is_empty() {
        let settings = Settings {
            offline_demo: false,
            ..Default::default()
        };
        let (state, _) =
            AppState::new(settings).update(Msg::OverlaysLoaded(Err(network_down())));
        assert!(state.overlays.is_empty());
        assert_eq!(state.api_error.as_deref(), Some(OFFLINE_NOTICE));
    }

    #[test]
    fn test_reload_prunes_active_set() {
        let state = loaded(vec![overlay("a", "A"), overlay("b", "B")]);
        let (state, _) = state.update(Msg::ToggleOverlayActive(OverlayId::new("a")));
        let (state, _) = state.update(Msg::ToggleOverlayActive(OverlayId::new("b")));
        let (state, _) = state.update(Msg::OverlaysLoaded(Ok(vec![overlay("b", "B")])));
        assert_eq!(
            state.active.iter().collect::<Vec<_>>(),
            vec![&OverlayId::new("b")]
        );
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let state = loaded(vec![overlay("a", "A"), overlay("b", "B")]);
        let (state, _) = state.update(Msg::ToggleOverlayActive(OverlayId::new("b")));

        for id in ["a", "b"] {
            let before = state.active.clone();
            let (once, effects) = state
                .clone()
                .update(Msg::ToggleOverlayActive(OverlayId::new(id)));
            assert!(effects.is_empty());
            assert_ne!(once.active, before);
            let (twice, effects) = once.update(Msg::ToggleOverlayActive(OverlayId::new(id)));
            assert!(effects.is_empty());
            assert_eq!(twice.active, before);
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let state = loaded(vec![overlay("a", "A")]);
        let (state, _) = state.update(Msg::ToggleOverlayActive(OverlayId::new("ghost")));
        assert!(state.active.is_empty());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let state = loaded(vec![overlay("a", "A")]);
        let (state, effects) = state.update(Msg::RequestDelete(OverlayId::new("a")));
        assert!(effects.is_empty());
        assert_eq!(state.pending_delete, Some(OverlayId::new("a")));

        let (state, effects) = state.update(Msg::CancelDelete);
        assert!(effects.is_empty());
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.overlays.len(), 1);

        let (state, effects) = state.update(Msg::ConfirmDelete);
        assert!(effects.is_empty());
        assert!(!state.is_loading());

        let (state, _) = state.update(Msg::RequestDelete(OverlayId::new("a")));
        let (state, effects) = state.update(Msg::ConfirmDelete);
        assert_eq!(effects, vec![Effect::DeleteOverlay(OverlayId::new("a"))]);
        assert!(state.is_loading());
    }

    #[test]
    fn test_delete_removes_from_list_and_active_set() {
        for activate in [false, true] {
            let mut state = loaded(vec![overlay("a", "A"), overlay("b", "B")]);
            if activate {
                state = state.update(Msg::ToggleOverlayActive(OverlayId::new("a"))).0;
            }
            let (state, _) = state.update(Msg::OverlayDeleted {
                id: OverlayId::new("a"),
                result: Ok(Ack::default()),
            });
            assert_eq!(state.overlays, vec![overlay("b", "B")]);
            assert!(!state.is_active(&OverlayId::new("a")));
            assert!(state.active.iter().all(|id| state.overlay(id).is_some()));
        }
    }

    #[test]
    fn test_delete_failure_alerts_and_keeps_overlay() {
        let state = loaded(vec![overlay("a", "A")]);
        let (state, _) = state.update(Msg::OverlayDeleted {
            id: OverlayId::new("a"),
            result: Err(network_down()),
        });
        assert_eq!(state.overlays.len(), 1);
        assert_eq!(state.alert.as_deref(), Some(DELETE_FAILED_ALERT));

        let (state, _) = state.update(Msg::DismissAlert);
        assert_eq!(state.alert, None);
    }

    #[test]
    fn test_save_new_appends() {
        let state = loaded(vec![overlay("a", "A")]);
        let (state, _) = state.update(Msg::OpenEditor(None));
        let draft = OverlayDraft {
            name: "New".to_string(),
            ..Default::default()
        };
        let (state, effects) = state.update(Msg::SaveOverlay(draft.clone()));
        assert_eq!(effects, vec![Effect::CreateOverlay(draft)]);

        let (state, _) = state.update(Msg::OverlaySaved {
            editing: None,
            result: Ok(overlay("n", "New")),
        });
        assert_eq!(state.overlays, vec![overlay("a", "A"), overlay("n", "New")]);
        assert_eq!(state.editor, None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_save_existing_replaces_in_place() {
        let state = loaded(vec![overlay("a", "A"), overlay("b", "B"), overlay("c", "C")]);
        let (state, _) = state.update(Msg::OpenEditor(Some(OverlayId::new("b"))));
        assert_eq!(
            state.editor.as_ref().and_then(|e| e.editing()),
            Some(&OverlayId::new("b"))
        );

        let mut draft = state.editor.as_ref().unwrap().draft.clone();
        draft.name = "B2".to_string();
        let (state, effects) = state.update(Msg::SaveOverlay(draft.clone()));
        assert_eq!(
            effects,
            vec![Effect::UpdateOverlay(OverlayId::new("b"), draft)]
        );

        let (state, _) = state.update(Msg::OverlaySaved {
            editing: Some(OverlayId::new("b")),
            result: Ok(overlay("b", "B2")),
        });
        assert_eq!(
            state.overlays,
            vec![overlay("a", "A"), overlay("b", "B2"), overlay("c", "C")]
        );
        assert_eq!(state.editor, None);
    }

    #[test]
    fn test_save_failure_keeps_editor_open() {
        let state = loaded(Vec::new());
        let (state, _) = state.update(Msg::OpenEditor(None));
        let (state, _) = state.update(Msg::SaveOverlay(OverlayDraft::default()));
        let (state, _) = state.update(Msg::OverlaySaved {
            editing: None,
            result: Err(network_down()),
        });
        assert!(state.editor.is_some());
        assert!(state.overlays.is_empty());
        assert_eq!(state.alert.as_deref(), Some(SAVE_FAILED_ALERT));
    }

    #[test]
    fn test_cancel_editor_discards_draft() {
        let state = loaded(vec![overlay("a", "A")]);
        let (mut state, _) = state.update(Msg::OpenEditor(Some(OverlayId::new("a"))));
        if let Some(editor) = state.editor.as_mut() {
            editor.draft.name = "scratch".to_string();
        }
        let (state, effects) = state.update(Msg::CancelEditor);
        assert!(effects.is_empty());
        assert_eq!(state.editor, None);
        assert_eq!(state.overlays[0].draft.name, "A");
    }

    #[test]
    fn test_start_stream_rejects_blank_url() {
        let (state, _) = AppState::default().update(Msg::SetStreamUrl("   ".to_string()));
        let (state, effects) = state.update(Msg::StartStream);
        assert!(effects.is_empty());
        assert_eq!(state.alert.as_deref(), Some(EMPTY_URL_ALERT));
        assert!(!state.stream.is_streaming);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_start_stream_proceeds_even_if_backend_fails() {
        let (state, _) =
            AppState::default().update(Msg::SetStreamUrl(" https://cdn/live.m3u8 ".to_string()));
        let (state, effects) = state.update(Msg::StartStream);
        assert_eq!(
            effects,
            vec![Effect::StartStream(StreamDescriptor {
                url: "https://cdn/live.m3u8".to_string(),
                title: "Livestream Session".to_string(),
                description: "Active livestream".to_string(),
            })]
        );
        assert!(state.is_loading());
        assert!(!state.stream.is_streaming);

        let (state, _) = state.update(Msg::StreamStarted(Err(network_down())));
        assert!(state.stream.is_streaming);
        assert!(state.stream.stream_error.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.stream.effective_url(), Some("https://cdn/live.m3u8"));
    }

    #[test]
    fn test_repeated_start_sends_one_request() {
        let (state, _) = AppState::default().update(Msg::SetStreamUrl("clip.mp4".to_string()));
        let (state, first) = state.update(Msg::StartStream);
        let (state, second) = state.update(Msg::StartStream);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());

        let (state, _) = state.update(Msg::StreamStarted(Ok(Ack::default())));
        let (state, _) = state.update(Msg::StopStream);
        let (state, _) = state.update(Msg::StreamStopped(Ok(Ack::default())));

        // A reply nobody is waiting for leaves the stopped session alone.
        let (state, effects) = state.update(Msg::StreamStarted(Ok(Ack::default())));
        assert!(effects.is_empty());
        assert!(!state.stream.is_streaming);
        assert_eq!(state.stream.effective_url(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stop_stream_clears_regardless_of_outcome() {
        for result in [Ok(Ack::default()), Err(network_down())] {
            let (state, _) =
                AppState::default().update(Msg::SetStreamUrl("clip.mp4".to_string()));
            let (state, _) = state.update(Msg::StartStream);
            let (state, _) = state.update(Msg::StreamStarted(Ok(Ack::default())));
            let (state, _) = state.update(Msg::SetVolume(40));
            let (state, _) = state.update(Msg::Playback(PlaybackEvent::Playing));

            let (state, effects) = state.update(Msg::StopStream);
            assert_eq!(effects, vec![Effect::StopStream]);
            let (state, _) = state.update(Msg::StreamStopped(result));
            assert!(!state.stream.is_streaming);
            assert!(state.stream.url.is_empty());
            assert!(!state.playback.is_playing);
            assert_eq!(state.playback.volume, 40);
        }
    }

    #[test]
    fn test_playback_events_update_state() {
        let state = AppState::default();
        let (state, _) = state.update(Msg::Playback(PlaybackEvent::DurationChange(90.0)));
        let (state, _) = state.update(Msg::Playback(PlaybackEvent::TimeUpdate(12.5)));
        let (state, _) = state.update(Msg::Playback(PlaybackEvent::Playing));
        assert_eq!(state.playback.duration, 90.0);
        assert_eq!(state.playback.current_time, 12.5);
        assert!(state.playback.is_playing);

        let before = state.playback.clone();
        let (state, _) = state.update(Msg::Playback(PlaybackEvent::Error(
            PlaybackError::UnsupportedScheme,
        )));
        assert_eq!(state.playback, before);
        assert!(state.stream.stream_error.starts_with("RTSP streams require"));

        let (state, _) = state.update(Msg::DismissStreamError);
        assert!(state.stream.stream_error.is_empty());
    }

    #[test]
    fn test_import_creates_each_draft() {
        let drafts = vec![
            OverlayDraft {
                name: "one".to_string(),
                ..Default::default()
            },
            OverlayDraft {
                name: "two".to_string(),
                overlay_type: OverlayType::Shape,
                content: "#000".to_string(),
                position: Position { x: 1.0, y: 2.0 },
                size: Size {
                    width: 3.0,
                    height: 4.0,
                },
                z_index: 5,
                opacity: 0.5,
            },
        ];
        let (state, effects) = AppState::default().update(Msg::ImportOverlays(drafts.clone()));
        assert_eq!(
            effects,
            drafts.into_iter().map(Effect::ImportOverlay).collect::<Vec<_>>()
        );
        assert!(state.is_loading());

        let (state, _) = state.update(Msg::OverlayImported(Ok(overlay("x", "one"))));
        let (state, _) = state.update(Msg::OverlayImported(Ok(overlay("y", "two"))));
        assert_eq!(state.overlays.len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_backend_status() {
        let (state, effects) = AppState::default().update(Msg::CheckBackend);
        assert_eq!(effects, vec![Effect::FetchStatus]);
        assert!(!state.is_loading());

        let (state, _) = state.update(Msg::BackendChecked(Err(network_down())));
        assert_eq!(state.backend, BackendStatus::Offline);

        let (state, _) = state.update(Msg::BackendChecked(Ok(StreamStatus {
            is_streaming: true,
            stream: None,
        })));
        assert_eq!(state.backend, BackendStatus::Online { live: true });
    }

    #[test]
    fn test_history_uses_configured_limit() {
        let (state, effects) = AppState::default().update(Msg::LoadHistory);
        assert_eq!(effects, vec![Effect::FetchHistory(50)]);

        let (state, _) = state.update(Msg::HistoryLoaded(Err(network_down())));
        assert!(state.history_error.is_some());
    }

    #[test]
    fn test_health_check_also_fetches_stats() {
        let (state, effects) = AppState::default().update(Msg::CheckHealth);
        assert_eq!(effects, vec![Effect::FetchHealth, Effect::FetchStats]);
        assert!(!state.is_loading());

        let stats = ServiceStats {
            overlays: 2,
            total_streams: 7,
            active_streams: 1,
        };
        let (state, _) = state.update(Msg::StatsLoaded(Ok(stats.clone())));
        assert_eq!(state.stats, Some(Ok(stats)));

        let (state, _) = state.update(Msg::StatsLoaded(Err(network_down())));
        assert!(matches!(state.stats, Some(Err(_))));
    }
}
