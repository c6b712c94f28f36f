// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay CRUD client.

use super::{error::ApiError, http::ApiHttp};
use crate::models::overlay::{Overlay, OverlayDraft, OverlayId};
use crate::models::stream::Ack;
use crate::tasks::MaybeSend;
use async_trait::async_trait;
use serde::Deserialize;

/// Remote store of overlay configurations.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OverlayApi: MaybeSend {
    /// Fetch every saved overlay.
    async fn list(&self) -> Result<Vec<Overlay>, ApiError>;

    /// Persist a new overlay; the server assigns its identifier.
    async fn create(&self, draft: &OverlayDraft) -> Result<Overlay, ApiError>;

    /// Replace an existing overlay with the given draft.
    async fn update(&self, id: &OverlayId, draft: &OverlayDraft) -> Result<Overlay, ApiError>;

    async fn delete(&self, id: &OverlayId) -> Result<Ack, ApiError>;
}

#[derive(Deserialize)]
struct OverlayList {
    overlays: Vec<Overlay>,
}

/// [`OverlayApi`] over the REST service.
pub struct HttpOverlayClient {
    http: ApiHttp,
}

impl HttpOverlayClient {
    pub fn new(http: ApiHttp) -> Self {
        Self { http }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OverlayApi for HttpOverlayClient {
    async fn list(&self) -> Result<Vec<Overlay>, ApiError> {
        let list: OverlayList = self.http.get("/overlays").await?;
        Ok(list.overlays)
    }

    async fn create(&self, draft: &OverlayDraft) -> Result<Overlay, ApiError> {
        self.http.post("/overlays", draft).await
    }

    async fn update(&self, id: &OverlayId, draft: &OverlayDraft) -> Result<Overlay, ApiError> {
        self.http.put(&format!("/overlays/{}", id), draft).await
    }

    async fn delete(&self, id: &OverlayId) -> Result<Ack, ApiError> {
        self.http.delete(&format!("/overlays/{}", id)).await
    }
}
