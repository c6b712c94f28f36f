// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background task spawning for remote calls.
//!
//! In the browser every future runs on the page's event loop through
//! `wasm_bindgen_futures`. Natively a small tokio runtime drives them.
//! Either way, results are handed back to the UI thread over a channel.

use std::future::Future;

/// `Send + Sync` on native targets, no bound in the browser where nothing
/// leaves the event loop thread.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// Runs fire-and-forget futures off the UI frame.
#[cfg(not(target_arch = "wasm32"))]
pub struct Spawner {
    runtime: tokio::runtime::Runtime,
}

#[cfg(not(target_arch = "wasm32"))]
impl Spawner {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("livelay-net")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(future);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct Spawner;

#[cfg(target_arch = "wasm32")]
impl Spawner {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}
