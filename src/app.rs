// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and UI logic.
//!
//! This module contains the core application structure that manages the
//! state store, the playback adapter and all UI components.

use crate::io::settings::Settings;
use crate::playback::{MediaSurface, PlaybackAdapter, PlaybackEvent};
use crate::render;
use crate::state::runtime::Store;
use crate::state::{BackendStatus, Msg};
use crate::ui::{controls, dialogs, editor, landing, sidebar, viewer};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use crate::playback::{DetachedSurface, NoLibrary};
#[cfg(not(target_arch = "wasm32"))]
type Player = PlaybackAdapter<DetachedSurface, NoLibrary>;

#[cfg(target_arch = "wasm32")]
use crate::web::{HlsLibrary, VideoSurface};
#[cfg(target_arch = "wasm32")]
type Player = PlaybackAdapter<VideoSurface, HlsLibrary>;

/// How often to wake up and collect remote results and media events.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Main application state.
pub struct LivestreamApp {
    /// State container and effect runtime
    store: Store,

    /// Media surface and adaptive library binding
    player: Player,

    /// URL the player was last loaded with
    loaded_url: Option<String>,

    show_history: bool,
    show_about: bool,
}

impl LivestreamApp {
    /// Create the application and kick off the startup requests.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let player = create_player(&settings)?;
        let store = Store::connect(settings)?;

        let mut app = Self {
            store,
            player,
            loaded_url: None,
            show_history: false,
            show_about: false,
        };
        app.store.dispatch(Msg::LoadOverlays);
        app.store.dispatch(Msg::CheckBackend);
        Ok(app)
    }

    /// Reload the player when the URL to play has changed.
    fn sync_player(&mut self) {
        let wanted = self
            .store
            .state()
            .stream
            .effective_url()
            .map(str::to_string);
        if wanted == self.loaded_url {
            return;
        }
        self.loaded_url = wanted.clone();

        match self.player.load(wanted.as_deref()) {
            Ok(Some(strategy)) => {
                self.player.set_volume(self.store.state().playback.volume);
                self.store
                    .dispatch(Msg::Playback(PlaybackEvent::Attached(strategy)));
            }
            Ok(None) => {}
            Err(e) => {
                log::warn!("Cannot play {}: {}", wanted.as_deref().unwrap_or_default(), e);
                self.store.dispatch(Msg::Playback(PlaybackEvent::Error(e)));
            }
        }
    }

    fn handle_controls(&mut self, ctx: &egui::Context, action: controls::ControlsAction) {
        match action {
            controls::ControlsAction::None => {}
            controls::ControlsAction::TogglePlay => {
                if self.store.state().playback.is_playing {
                    self.player.pause();
                } else {
                    self.player.play();
                }
            }
            controls::ControlsAction::Seek(seconds) => self.player.seek(seconds),
            controls::ControlsAction::SetVolume(volume) => {
                self.player.set_volume(volume);
                self.store.dispatch(Msg::SetVolume(volume));
            }
            controls::ControlsAction::Fullscreen => {
                self.player.surface_mut().request_fullscreen();
                if cfg!(not(target_arch = "wasm32")) {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
                }
            }
            controls::ControlsAction::Stop => self.store.dispatch(Msg::StopStream),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export_overlays(&self, path: std::path::PathBuf) {
        use crate::io::serialization::{export, OverlaySet};

        let set = OverlaySet::from_overlays(&self.store.state().overlays);
        match export(&set, &path) {
            Ok(()) => log::info!(
                "Exported {} overlays to {}",
                set.overlays.len(),
                path.display()
            ),
            Err(e) => log::error!("{:#}", e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn import_overlays(&mut self, path: std::path::PathBuf) {
        match crate::io::serialization::import(&path) {
            Ok(set) => {
                log::info!(
                    "Importing {} overlays from {}",
                    set.overlays.len(),
                    path.display()
                );
                self.store.dispatch(Msg::ImportOverlays(set.overlays));
            }
            Err(e) => log::error!("{:#}", e),
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            #[cfg(not(target_arch = "wasm32"))]
            ui.menu_button("File", |ui| {
                if ui.button("Import Overlays...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Overlay sets", &["yaml", "yml", "json"])
                        .pick_file()
                    {
                        self.import_overlays(path);
                    }
                    ui.close_menu();
                }
                ui.menu_button("Export Overlays", |ui| {
                    if ui.button("Export as YAML...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("YAML", &["yaml", "yml"])
                            .set_file_name("overlays.yaml")
                            .save_file()
                        {
                            self.export_overlays(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Export as JSON...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name("overlays.json")
                            .save_file()
                        {
                            self.export_overlays(path);
                        }
                        ui.close_menu();
                    }
                });
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reload Overlays").clicked() {
                    self.store.dispatch(Msg::LoadOverlays);
                    ui.close_menu();
                }
                if ui.button("Stream History").clicked() {
                    self.show_history = true;
                    self.store.dispatch(Msg::LoadHistory);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    self.show_about = true;
                    self.store.dispatch(Msg::CheckHealth);
                    ui.close_menu();
                }
            });
        });
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("🎥 Livestream Player");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let state = self.store.state();
                if state.api_error.is_some() || state.backend == BackendStatus::Offline {
                    ui.colored_label(egui::Color32::YELLOW, "⚠ Offline Mode")
                        .on_hover_text(state.api_error.as_deref().unwrap_or_default());
                } else if state.backend == (BackendStatus::Online { live: true }) {
                    ui.colored_label(egui::Color32::from_rgb(239, 68, 68), "● Backend live");
                }
                if state.is_loading() {
                    ui.spinner();
                }
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.store.state().alert.clone() {
            if dialogs::alert(ctx, &message) {
                self.store.dispatch(Msg::DismissAlert);
            }
        } else if let Some(id) = self.store.state().pending_delete.clone() {
            let name = self
                .store
                .state()
                .overlay(&id)
                .map(|o| o.draft.name.clone())
                .unwrap_or_default();
            match dialogs::confirm_delete(ctx, &name) {
                Some(true) => self.store.dispatch(Msg::ConfirmDelete),
                Some(false) => self.store.dispatch(Msg::CancelDelete),
                None => {}
            }
        } else {
            let busy = self.store.state().is_loading();
            let mut save = None;
            let mut cancel = false;
            if let Some(form) = self.store.editor_mut() {
                match editor::show(ctx, form, busy) {
                    editor::EditorAction::Save => save = Some(form.draft.clone()),
                    editor::EditorAction::Cancel => cancel = true,
                    editor::EditorAction::None => {}
                }
            }
            if let Some(draft) = save {
                self.store.dispatch(Msg::SaveOverlay(draft));
            } else if cancel {
                self.store.dispatch(Msg::CancelEditor);
            }
        }

        let mut msgs = Vec::new();
        if self.show_history {
            msgs.extend(dialogs::history(ctx, &mut self.show_history, self.store.state()));
        }
        if self.show_about {
            msgs.extend(dialogs::about(ctx, &mut self.show_about, self.store.state()));
        }
        for msg in msgs {
            self.store.dispatch(msg);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_player(_settings: &Settings) -> anyhow::Result<Player> {
    log::info!("No video decoder in native builds; playback reports errors only");
    Ok(PlaybackAdapter::new(DetachedSurface::new(), NoLibrary))
}

#[cfg(target_arch = "wasm32")]
fn create_player(settings: &Settings) -> anyhow::Result<Player> {
    if let Err(e) = crate::web::inject_script(&settings.hls_script_url) {
        log::warn!("Failed to load hls.js: {:?}", e);
    }
    let surface = VideoSurface::from_element_id(crate::web::VIDEO_ELEMENT_ID)
        .map_err(|e| anyhow::anyhow!("Video element unavailable: {:?}", e))?;
    Ok(PlaybackAdapter::new(surface, HlsLibrary))
}

impl eframe::App for LivestreamApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Collect remote results and media events
        self.store.poll();
        self.sync_player();
        for event in self.player.poll() {
            self.store.dispatch(Msg::Playback(event));
        }
        ctx.request_repaint_after(POLL_INTERVAL);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.menu_bar(ui);
            ui.separator();
            self.header(ui);
        });

        let mut msgs = Vec::new();
        let streaming = self.store.state().stream.is_streaming;

        if !streaming {
            self.player.surface_mut().place(egui::Rect::NOTHING);
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    msgs.extend(landing::show(ui, self.store.state()));
                });
            });
        } else {
            egui::SidePanel::right("overlays")
                .default_width(260.0)
                .show(ctx, |ui| {
                    msgs.extend(sidebar::show(ui, self.store.state()));
                });

            // The video shows through the canvas in the browser
            let frame = if cfg!(target_arch = "wasm32") {
                egui::Frame::none().inner_margin(egui::Margin::same(8.0))
            } else {
                egui::Frame::central_panel(&ctx.style())
            };

            let action = egui::CentralPanel::default()
                .frame(frame)
                .show(ctx, |ui| {
                    let strategy = self.player.strategy();
                    let state = self.store.state();
                    let boxes = render::project(&state.overlays, &state.active);
                    let response = viewer::show(ui, &boxes, &state.stream.stream_error);
                    if response.dismiss_error {
                        msgs.push(Msg::DismissStreamError);
                    }
                    let action = controls::show(ui, &state.playback, strategy);
                    (response.video_rect, action)
                })
                .inner;

            self.player.surface_mut().place(action.0);
            self.handle_controls(ctx, action.1);
        }

        for msg in msgs {
            self.store.dispatch(msg);
        }

        self.dialogs(ctx);
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        if cfg!(target_arch = "wasm32") {
            [0.0; 4]
        } else {
            visuals.panel_fill.to_normalized_gamma_f32()
        }
    }
}
