// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! hls.js bindings.
//!
//! The library is not bundled: [`inject_script`] adds a `<script>` tag at
//! startup and `window.Hls` appears once it has loaded. Until then
//! [`HlsLibrary::is_loaded`] is false and manifests fall back to native
//! playback where the browser has it.

use super::video::VideoSurface;
use crate::playback::{AdaptiveConfig, AdaptiveLibrary, AdaptiveSession, LibraryEvent, PlaybackError};
use js_sys::{Object, Reflect};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlMediaElement;

const MANIFEST_PARSED: &str = "hlsManifestParsed";
const ERROR: &str = "hlsError";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Hls)]
    type Hls;

    #[wasm_bindgen(static_method_of = Hls, js_name = isSupported, catch)]
    fn is_supported() -> Result<bool, JsValue>;

    #[wasm_bindgen(constructor, catch)]
    fn new(config: &JsValue) -> Result<Hls, JsValue>;

    #[wasm_bindgen(method, js_name = loadSource)]
    fn load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = attachMedia)]
    fn attach_media(this: &Hls, media: &HtmlMediaElement);

    #[wasm_bindgen(method)]
    fn on(this: &Hls, event: &str, callback: &Closure<dyn FnMut(JsValue, JsValue)>);

    #[wasm_bindgen(method)]
    fn off(this: &Hls, event: &str, callback: &Closure<dyn FnMut(JsValue, JsValue)>);

    #[wasm_bindgen(method)]
    fn destroy(this: &Hls);
}

/// Add the hls.js `<script>` tag to the page.
pub fn inject_script(src: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_src(src);
    script.set_async(true);
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No document body"))?;
    body.append_child(&script)?;
    log::info!("Loading hls.js from {}", src);
    Ok(())
}

/// Handle on the page's `window.Hls`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HlsLibrary;

impl AdaptiveLibrary<VideoSurface> for HlsLibrary {
    type Session = HlsSession;

    fn is_loaded(&self) -> bool {
        web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str("Hls")).ok())
            .is_some_and(|hls| !hls.is_undefined() && !hls.is_null())
    }

    fn is_supported(&self) -> bool {
        Hls::is_supported().unwrap_or(false)
    }

    fn create(&self, config: &AdaptiveConfig) -> Result<HlsSession, PlaybackError> {
        let options = Object::new();
        let set = |key: &str, value: bool| {
            Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_bool(value))
        };
        set("enableWorker", config.enable_worker)
            .and_then(|_| set("lowLatencyMode", config.low_latency_mode))
            .map_err(|e| PlaybackError::Library(format!("{:?}", e)))?;

        let hls = Hls::new(&options).map_err(|e| PlaybackError::Library(format!("{:?}", e)))?;
        Ok(HlsSession::new(hls))
    }
}

type Listener = Closure<dyn FnMut(JsValue, JsValue)>;

pub struct HlsSession {
    hls: Hls,
    events: Rc<RefCell<VecDeque<LibraryEvent>>>,
    on_manifest: Listener,
    on_error: Listener,
}

impl HlsSession {
    fn new(hls: Hls) -> Self {
        let events: Rc<RefCell<VecDeque<LibraryEvent>>> = Rc::default();

        let queue = Rc::clone(&events);
        let on_manifest = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_event, _data| {
            queue.borrow_mut().push_back(LibraryEvent::ManifestParsed);
        });

        let queue = Rc::clone(&events);
        let on_error = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |_event, data: JsValue| {
            let fatal = Reflect::get(&data, &JsValue::from_str("fatal"))
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let kind = Reflect::get(&data, &JsValue::from_str("type"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            queue.borrow_mut().push_back(LibraryEvent::Error { fatal, kind });
        });

        hls.on(MANIFEST_PARSED, &on_manifest);
        hls.on(ERROR, &on_error);

        Self {
            hls,
            events,
            on_manifest,
            on_error,
        }
    }
}

impl AdaptiveSession<VideoSurface> for HlsSession {
    fn load_source(&mut self, url: &str) {
        self.hls.load_source(url);
    }

    fn attach_media(&mut self, surface: &VideoSurface) {
        self.hls.attach_media(surface.element());
    }

    fn drain_events(&mut self) -> Vec<LibraryEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn destroy(self) {
        self.hls.off(MANIFEST_PARSED, &self.on_manifest);
        self.hls.off(ERROR, &self.on_error);
        self.hls.destroy();
    }
}
