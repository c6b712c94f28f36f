// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stream session and playback state.
//!
//! This module holds the client-side view of the current stream along with
//! the records exchanged with the stream service.

use serde::{Deserialize, Serialize};

/// Body of a stream start notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Generic acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// A stream session as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Response of the stream status endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamStatus {
    #[serde(alias = "isLive")]
    pub is_streaming: bool,
    #[serde(default)]
    pub stream: Option<StreamRecord>,
}

/// Response of the stream history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StreamHistory {
    pub streams: Vec<StreamRecord>,
    #[serde(default)]
    pub count: usize,
}

/// Response of the health endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Record counts from the stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    #[serde(default)]
    pub overlays: usize,
    #[serde(default)]
    pub total_streams: usize,
    #[serde(default)]
    pub active_streams: usize,
}

/// The stream the viewer is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamSession {
    pub url: String,
    pub is_streaming: bool,
    /// Empty when playback is healthy.
    pub stream_error: String,
}

impl StreamSession {
    /// URL handed to the playback adapter, present only while streaming.
    pub fn effective_url(&self) -> Option<&str> {
        if self.is_streaming && !self.url.trim().is_empty() {
            Some(self.url.trim())
        } else {
            None
        }
    }
}

/// Mirror of the media surface's playback state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    /// 0 to 100.
    pub volume: u8,
    pub current_time: f64,
    /// NaN until metadata has loaded.
    pub duration: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            volume: 100,
            current_time: 0.0,
            duration: f64::NAN,
        }
    }
}
