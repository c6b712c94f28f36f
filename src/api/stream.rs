// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stream lifecycle client.

use super::{error::ApiError, http::ApiHttp};
use crate::models::stream::{
    Ack, HealthReport, ServiceStats, StreamDescriptor, StreamHistory, StreamStatus,
};
use crate::tasks::MaybeSend;
use async_trait::async_trait;

/// Backend bookkeeping of stream sessions. Purely informational: the
/// viewer plays streams whether or not these calls succeed.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StreamApi: MaybeSend {
    async fn start(&self, descriptor: &StreamDescriptor) -> Result<Ack, ApiError>;

    async fn stop(&self) -> Result<Ack, ApiError>;

    async fn status(&self) -> Result<StreamStatus, ApiError>;

    /// Most recent sessions first.
    async fn history(&self, limit: usize) -> Result<StreamHistory, ApiError>;

    async fn health(&self) -> Result<HealthReport, ApiError>;

    async fn stats(&self) -> Result<ServiceStats, ApiError>;
}

/// [`StreamApi`] over the REST service.
pub struct HttpStreamClient {
    http: ApiHttp,
}

impl HttpStreamClient {
    pub fn new(http: ApiHttp) -> Self {
        Self { http }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl StreamApi for HttpStreamClient {
    async fn start(&self, descriptor: &StreamDescriptor) -> Result<Ack, ApiError> {
        self.http.post("/stream/start", descriptor).await
    }

    async fn stop(&self) -> Result<Ack, ApiError> {
        self.http.post_empty("/stream/stop").await
    }

    async fn status(&self) -> Result<StreamStatus, ApiError> {
        self.http.get("/stream/status").await
    }

    async fn history(&self, limit: usize) -> Result<StreamHistory, ApiError> {
        self.http
            .get_with_query("/stream/history", &[("limit", limit.to_string())])
            .await
    }

    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.http.get("/health").await
    }

    async fn stats(&self) -> Result<ServiceStats, ApiError> {
        self.http.get("/stats").await
    }
}
