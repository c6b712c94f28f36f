// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Runs the effects produced by [`AppState::update`].
//!
//! The [`Store`] owns the state, spawns one background task per effect and
//! collects their results over a channel, which the UI drains once per
//! frame with [`Store::poll`].

use super::queue::MutationQueue;
use super::{AppState, Effect, Msg};
use crate::api::{ApiHttp, HttpOverlayClient, HttpStreamClient, OverlayApi, StreamApi};
use crate::io::settings::Settings;
use crate::state::editor::OverlayEditor;
use crate::tasks::Spawner;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub struct Store {
    state: AppState,
    overlays: Arc<dyn OverlayApi>,
    streams: Arc<dyn StreamApi>,
    spawner: Spawner,
    queue: MutationQueue<Effect>,
    sender: Sender<Msg>,
    receiver: Receiver<Msg>,
}

impl Store {
    pub fn new(
        state: AppState,
        overlays: Arc<dyn OverlayApi>,
        streams: Arc<dyn StreamApi>,
        spawner: Spawner,
    ) -> Self {
        let (sender, receiver) = channel();
        Self {
            state,
            overlays,
            streams,
            spawner,
            queue: MutationQueue::new(),
            sender,
            receiver,
        }
    }

    /// Store talking to the REST service named in `settings`.
    pub fn connect(settings: Settings) -> anyhow::Result<Self> {
        let http = ApiHttp::new(&settings.api_base_url, settings.request_timeout());
        log::info!("Using API at {}", http.base_url());
        let overlays = Arc::new(HttpOverlayClient::new(http.clone()));
        let streams = Arc::new(HttpStreamClient::new(http));
        Ok(Self::new(
            AppState::new(settings),
            overlays,
            streams,
            Spawner::new()?,
        ))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The open editor form, which the UI edits in place.
    pub fn editor_mut(&mut self) -> Option<&mut OverlayEditor> {
        self.state.editor.as_mut()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(key) = msg.completed_mutation().cloned() {
            if let Some(next) = self.queue.finish(&key) {
                self.spawn(next);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (state, effects) = state.update(msg);
        self.state = state;

        for effect in effects {
            match effect.mutation_key().cloned() {
                Some(key) => {
                    if self.queue.is_busy(&key) {
                        log::debug!(
                            "Overlay {} busy, {} request(s) waiting",
                            key,
                            self.queue.waiting_len() + 1
                        );
                    }
                    if let Some(effect) = self.queue.submit(key, effect) {
                        self.spawn(effect);
                    }
                }
                None => self.spawn(effect),
            }
        }
    }

    /// Apply every result that has arrived. Returns true when anything
    /// changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.receiver.try_recv() {
            self.dispatch(msg);
            changed = true;
        }
        changed
    }

    fn spawn(&self, effect: Effect) {
        log::debug!("Running {:?}", effect);
        let overlays = Arc::clone(&self.overlays);
        let streams = Arc::clone(&self.streams);
        let sender = self.sender.clone();
        self.spawner.spawn(async move {
            let msg = perform(effect, overlays.as_ref(), streams.as_ref()).await;
            // The receiver only goes away when the app is shutting down.
            let _ = sender.send(msg);
        });
    }
}

/// Make the remote call for `effect` and wrap its outcome as a message.
pub async fn perform(effect: Effect, overlays: &dyn OverlayApi, streams: &dyn StreamApi) -> Msg {
    match effect {
        Effect::FetchOverlays => Msg::OverlaysLoaded(overlays.list().await),
        Effect::CreateOverlay(draft) => Msg::OverlaySaved {
            editing: None,
            result: overlays.create(&draft).await,
        },
        Effect::ImportOverlay(draft) => Msg::OverlayImported(overlays.create(&draft).await),
        Effect::UpdateOverlay(id, draft) => {
            let result = overlays.update(&id, &draft).await;
            Msg::OverlaySaved {
                editing: Some(id),
                result,
            }
        }
        Effect::DeleteOverlay(id) => {
            let result = overlays.delete(&id).await;
            Msg::OverlayDeleted { id, result }
        }
        Effect::StartStream(descriptor) => Msg::StreamStarted(streams.start(&descriptor).await),
        Effect::StopStream => Msg::StreamStopped(streams.stop().await),
        Effect::FetchStatus => Msg::BackendChecked(streams.status().await),
        Effect::FetchHistory(limit) => Msg::HistoryLoaded(streams.history(limit).await),
        Effect::FetchHealth => Msg::HealthChecked(streams.health().await),
        Effect::FetchStats => Msg::StatsLoaded(streams.stats().await),
    }
}
