// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay list panel.
//!
//! Lists every loaded overlay with buttons to show/hide it over the video,
//! open it in the editor, or delete it.

use crate::state::{AppState, Msg};

/// Display the overlay list. Returns the message raised this frame, if any.
pub fn show(ui: &mut egui::Ui, state: &AppState) -> Option<Msg> {
    let mut msg = None;

    ui.horizontal(|ui| {
        ui.heading("Overlays");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕").on_hover_text("Add overlay").clicked() {
                msg = Some(Msg::OpenEditor(None));
            }
        });
    });
    ui.separator();

    if state.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
    }

    if state.overlays.is_empty() {
        ui.label(egui::RichText::new("No overlays available.").weak());
        return msg;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for overlay in &state.overlays {
            let active = state.is_active(&overlay.id);
            let fill = if active {
                egui::Color32::from_rgba_unmultiplied(29, 78, 216, 80)
            } else {
                ui.visuals().faint_bg_color
            };

            egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&overlay.draft.name).strong());
                        ui.label(
                            egui::RichText::new(overlay.draft.overlay_type.label())
                                .small()
                                .weak(),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            msg = Some(Msg::RequestDelete(overlay.id.clone()));
                        }
                        if ui.small_button("✏").on_hover_text("Edit").clicked() {
                            msg = Some(Msg::OpenEditor(Some(overlay.id.clone())));
                        }
                        let (icon, hint) = if active { ("✔", "Hide") } else { ("▶", "Show") };
                        if ui.small_button(icon).on_hover_text(hint).clicked() {
                            msg = Some(Msg::ToggleOverlayActive(overlay.id.clone()));
                        }
                    });
                });
            });
            ui.add_space(4.0);
        }
    });

    msg
}
