// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Alert, confirmation, history and about windows.

use crate::state::{AppState, BackendStatus, Msg, DELETE_CONFIRMATION};

/// Blocking message with a single OK button. Returns true when dismissed.
pub fn alert(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}

/// Yes/no delete confirmation. `Some(true)` confirms, `Some(false)`
/// cancels, `None` while undecided.
pub fn confirm_delete(ctx: &egui::Context, name: &str) -> Option<bool> {
    let mut answer = None;
    egui::Window::new("Delete Overlay")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(DELETE_CONFIRMATION);
            if !name.is_empty() {
                ui.label(egui::RichText::new(name).strong());
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(false);
    }
    answer
}

/// Past stream sessions. Picking one copies its URL into the URL field.
pub fn history(ctx: &egui::Context, open: &mut bool, state: &AppState) -> Option<Msg> {
    let mut msg = None;
    egui::Window::new("Stream History")
        .open(open)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟳ Refresh").clicked() {
                    msg = Some(Msg::LoadHistory);
                }
                ui.label(format!("{} sessions", state.history.len()));
            });
            ui.separator();

            if let Some(error) = &state.history_error {
                ui.colored_label(egui::Color32::YELLOW, format!("History unavailable: {}", error));
                return;
            }
            if state.history.is_empty() {
                ui.label(egui::RichText::new("No past streams.").weak());
                return;
            }

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                egui::Grid::new("stream_history_grid")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for record in &state.history {
                            let title = if record.is_live {
                                format!("🔴 {}", record.title)
                            } else {
                                record.title.clone()
                            };
                            ui.label(title);
                            let pick = ui
                                .add_enabled(!state.stream.is_streaming, egui::Link::new(&record.url))
                                .on_hover_text("Use this URL")
                                .on_disabled_hover_text("Stop the current stream first");
                            if pick.clicked() {
                                msg = Some(Msg::SetStreamUrl(record.url.clone()));
                            }
                            ui.label(record.start_time.as_deref().unwrap_or("-"));
                            ui.end_row();
                        }
                    });
            });
        });
    msg
}

/// Application and backend information.
pub fn about(ctx: &egui::Context, open: &mut bool, state: &AppState) -> Option<Msg> {
    let mut msg = None;
    egui::Window::new("About")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading(format!("Livelay {}", env!("CARGO_PKG_VERSION")));
            ui.label("Livestream viewer with positioned overlays.");
            ui.separator();

            egui::Grid::new("about_grid").num_columns(2).show(ui, |ui| {
                ui.label("API:");
                ui.label(&state.settings.api_base_url);
                ui.end_row();

                ui.label("Stream service:");
                ui.label(match state.backend {
                    BackendStatus::Unknown => "checking...",
                    BackendStatus::Offline => "unreachable",
                    BackendStatus::Online { live: true } => "online, stream live",
                    BackendStatus::Online { live: false } => "online",
                });
                ui.end_row();

                ui.label("Health:");
                match &state.health {
                    None => ui.label("unknown"),
                    Some(Ok(report)) => {
                        let text = format!(
                            "{} (database: {})",
                            report.status,
                            report.database.as_deref().unwrap_or("n/a")
                        );
                        if report.is_ok() {
                            ui.label(text)
                        } else {
                            ui.colored_label(egui::Color32::YELLOW, text)
                        }
                    }
                    Some(Err(e)) => ui.colored_label(egui::Color32::YELLOW, e),
                };
                ui.end_row();

                ui.label("Records:");
                match &state.stats {
                    None => ui.label("unknown"),
                    Some(Ok(stats)) => ui.label(format!(
                        "{} overlays, {} streams ({} live)",
                        stats.overlays, stats.total_streams, stats.active_streams
                    )),
                    Some(Err(e)) => ui.colored_label(egui::Color32::YELLOW, e),
                };
                ui.end_row();
            });

            ui.add_space(8.0);
            if ui.button("⟳ Check again").clicked() {
                msg = Some(Msg::CheckHealth);
            }
        });
    msg
}
