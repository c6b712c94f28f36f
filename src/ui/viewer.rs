// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video area with the active overlays painted on top.
//!
//! The video itself is not drawn by egui. In the browser a `<video>`
//! element is positioned under the returned rectangle and the area is left
//! transparent; natively the area is filled black.

use crate::render::{BoxFill, OverlayBox};

/// Aspect ratio of the video area.
const ASPECT: f32 = 16.0 / 9.0;

/// Room left below the video for the playback controls.
const CONTROLS_HEIGHT: f32 = 110.0;

/// Result of viewer interaction.
pub struct ViewerResponse {
    /// Screen rectangle of the video area.
    pub video_rect: egui::Rect,
    pub dismiss_error: bool,
}

/// Display the error banner (if any) and the video area.
pub fn show(ui: &mut egui::Ui, boxes: &[OverlayBox], stream_error: &str) -> ViewerResponse {
    let mut dismiss_error = false;

    if !stream_error.is_empty() {
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(220, 38, 38))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").color(egui::Color32::WHITE));
                    ui.label(egui::RichText::new(stream_error).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            dismiss_error = true;
                        }
                    });
                });
            });
    }

    let available = ui.available_size();
    let max_height = (available.y - CONTROLS_HEIGHT).max(90.0);
    let (width, height) = if available.x / ASPECT > max_height {
        (max_height * ASPECT, max_height)
    } else {
        (available.x, available.x / ASPECT)
    };

    let (outer, _) = ui.allocate_exact_size(egui::vec2(available.x, height), egui::Sense::hover());
    let video_rect = egui::Rect::from_center_size(outer.center(), egui::vec2(width, height));

    if cfg!(not(target_arch = "wasm32")) {
        ui.painter().rect_filled(video_rect, 0.0, egui::Color32::BLACK);
    }

    let painter = ui.painter().with_clip_rect(video_rect);
    for overlay in boxes {
        draw_overlay(&painter, overlay, video_rect.min);
    }

    ViewerResponse {
        video_rect,
        dismiss_error,
    }
}

/// Draw one overlay box with its top-left offset from `origin`.
fn draw_overlay(painter: &egui::Painter, overlay: &OverlayBox, origin: egui::Pos2) {
    let rect = overlay.rect.translate(origin.to_vec2());
    let opacity = overlay.opacity.clamp(0.0, 1.0);
    let painter = painter.with_clip_rect(painter.clip_rect().intersect(rect));

    match &overlay.fill {
        BoxFill::Text(text) => {
            painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(77).gamma_multiply(opacity));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(14.0),
                egui::Color32::WHITE.gamma_multiply(opacity),
            );
        }
        BoxFill::Solid(Some(color)) => {
            painter.rect_filled(rect, 0.0, color.gamma_multiply(opacity));
        }
        BoxFill::Solid(None) => {}
    }

    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    let stroke = egui::Stroke::new(2.0, egui::Color32::from_white_alpha(77).gamma_multiply(opacity));
    painter.extend(egui::Shape::dashed_line(&corners, stroke, 6.0, 4.0));
}
