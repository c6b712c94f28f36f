// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay editor window.
//!
//! A form bound directly to the [`OverlayEditor`] draft. Numeric fields are
//! bounded by their widgets; nothing else is validated.

use crate::models::overlay::OverlayType;
use crate::render::parse_color;
use crate::state::editor::OverlayEditor;

/// Result of editor interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Save,
    Cancel,
}

const MAX_COORDINATE: f64 = 8192.0;

/// Display the editor window over the rest of the UI.
pub fn show(ctx: &egui::Context, editor: &mut OverlayEditor, busy: bool) -> EditorAction {
    let mut action = EditorAction::None;
    let title = editor.title();
    let draft = &mut editor.draft;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::Grid::new("overlay_editor_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("Overlay Name"));
                    ui.end_row();

                    ui.label("Type:");
                    egui::ComboBox::from_id_source("overlay_type")
                        .selected_text(match draft.overlay_type {
                            OverlayType::Text => "Text",
                            OverlayType::Shape => "Shape",
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut draft.overlay_type, OverlayType::Text, "Text");
                            ui.selectable_value(&mut draft.overlay_type, OverlayType::Shape, "Shape");
                        });
                    ui.end_row();

                    ui.label("Content:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut draft.content)
                                .hint_text("Content (Text or Color)"),
                        );
                        if draft.overlay_type == OverlayType::Shape {
                            match parse_color(&draft.content) {
                                Some(color) => {
                                    let (rect, _) = ui.allocate_exact_size(
                                        egui::vec2(18.0, 18.0),
                                        egui::Sense::hover(),
                                    );
                                    ui.painter().rect_filled(rect, 3.0, color);
                                }
                                None => {
                                    ui.label(egui::RichText::new("?").weak())
                                        .on_hover_text("Use #rgb, #rrggbb or a color name");
                                }
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Position:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut draft.position.x)
                                .prefix("x ")
                                .range(-MAX_COORDINATE..=MAX_COORDINATE),
                        );
                        ui.add(
                            egui::DragValue::new(&mut draft.position.y)
                                .prefix("y ")
                                .range(-MAX_COORDINATE..=MAX_COORDINATE),
                        );
                    });
                    ui.end_row();

                    ui.label("Size:");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut draft.size.width)
                                .prefix("w ")
                                .range(0.0..=MAX_COORDINATE),
                        );
                        ui.add(
                            egui::DragValue::new(&mut draft.size.height)
                                .prefix("h ")
                                .range(0.0..=MAX_COORDINATE),
                        );
                    });
                    ui.end_row();

                    ui.label("Z-Index:");
                    ui.add(egui::DragValue::new(&mut draft.z_index).speed(0.1));
                    ui.end_row();

                    ui.label("Opacity:");
                    ui.add(egui::Slider::new(&mut draft.opacity, 0.0..=1.0).step_by(0.1));
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_enabled(!busy, egui::Button::new("✔ Save")).clicked() {
                        action = EditorAction::Save;
                    }
                    if ui.button("✖ Cancel").clicked() {
                        action = EditorAction::Cancel;
                    }
                    if busy {
                        ui.spinner();
                    }
                });
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = EditorAction::Cancel;
    }

    action
}
