// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! `<video>` element surface for the browser build.
//!
//! The element sits underneath the egui canvas; the canvas clears to
//! transparent over the video area so the picture shows through and the
//! overlays are painted on top of it.

use crate::playback::{MediaEvent, MediaSurface};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

type EventQueue = Rc<RefCell<VecDeque<MediaEvent>>>;

pub struct VideoSurface {
    element: HtmlVideoElement,
    events: EventQueue,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
    placed: Option<egui::Rect>,
}

impl VideoSurface {
    /// Bind to the `<video>` element with the given id.
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing video element #{}", id)))?
            .dyn_into::<HtmlVideoElement>()?;
        Self::new(element)
    }

    pub fn new(element: HtmlVideoElement) -> Result<Self, JsValue> {
        element.set_controls(false);
        element.set_autoplay(false);
        element.set_attribute("playsinline", "")?;

        let events: EventQueue = Rc::default();
        let mut surface = Self {
            element,
            events,
            listeners: Vec::new(),
            placed: None,
        };

        surface.listen("loadedmetadata", |v| MediaEvent::LoadedMetadata {
            duration: v.duration(),
        })?;
        surface.listen("loadeddata", |_| MediaEvent::LoadedData)?;
        surface.listen("timeupdate", |v| MediaEvent::TimeUpdate(v.current_time()))?;
        surface.listen("play", |_| MediaEvent::Play)?;
        surface.listen("pause", |_| MediaEvent::Pause)?;
        surface.listen("ended", |_| MediaEvent::Ended)?;
        surface.listen("error", |_| MediaEvent::Error)?;
        Ok(surface)
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }

    fn listen(
        &mut self,
        name: &'static str,
        to_event: fn(&HtmlVideoElement) -> MediaEvent,
    ) -> Result<(), JsValue> {
        let queue = Rc::clone(&self.events);
        let target = self.element.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            queue.borrow_mut().push_back(to_event(&target));
        });
        self.element
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        self.listeners.push((name, closure));
        Ok(())
    }

    fn set_style(&self, name: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(name, value) {
            log::warn!("Failed to set video style {}: {:?}", name, e);
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl MediaSurface for VideoSurface {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
        self.element.load();
    }

    fn clear_source(&mut self) {
        if let Err(e) = self.element.pause() {
            log::debug!("Pause before clearing failed: {:?}", e);
        }
        if let Err(e) = self.element.remove_attribute("src") {
            log::warn!("Failed to clear video source: {:?}", e);
        }
        self.element.load();
    }

    fn can_play_type(&self, mime: &str) -> bool {
        !self.element.can_play_type(mime).is_empty()
    }

    fn request_play(&mut self) {
        match self.element.play() {
            Ok(promise) => {
                let queue = Rc::clone(&self.events);
                wasm_bindgen_futures::spawn_local(async move {
                    let event = match JsFuture::from(promise).await {
                        Ok(_) => MediaEvent::PlayResolved,
                        Err(e) => MediaEvent::PlayRejected(describe(&e)),
                    };
                    queue.borrow_mut().push_back(event);
                });
            }
            Err(e) => self
                .events
                .borrow_mut()
                .push_back(MediaEvent::PlayRejected(describe(&e))),
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("Failed to pause video: {:?}", e);
        }
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    fn seek(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn place(&mut self, rect: egui::Rect) {
        if self.placed == Some(rect) {
            return;
        }
        self.placed = Some(rect);
        self.set_style("left", &format!("{}px", rect.left()));
        self.set_style("top", &format!("{}px", rect.top()));
        self.set_style("width", &format!("{}px", rect.width()));
        self.set_style("height", &format!("{}px", rect.height()));
        self.set_style("display", if rect.is_positive() { "block" } else { "none" });
    }

    fn request_fullscreen(&mut self) {
        // The whole page goes fullscreen so the canvas stays above the video.
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.request_fullscreen() {
                log::warn!("Fullscreen refused: {:?}", e);
            }
        }
    }
}

impl Drop for VideoSurface {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}
