// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landing screen shown while no stream is playing.
//!
//! Holds the URL entry, the sample stream shortcuts and a short note on
//! which formats play in a browser.

use crate::state::{AppState, Msg};

/// One-click sample streams.
pub const SAMPLE_STREAMS: [(&str, &str); 2] = [
    (
        "📺 Demo HLS Stream",
        "https://demo.unified-streaming.com/k8s/features/stable/video/tears-of-steel/tears-of-steel.ism/.m3u8",
    ),
    (
        "🎬 Big Buck Bunny (MP4)",
        "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    ),
];

/// Display the landing screen. Returns the messages raised this frame.
pub fn show(ui: &mut egui::Ui, state: &AppState) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let busy = state.is_loading();

    ui.vertical_centered(|ui| {
        ui.set_max_width(460.0);
        ui.add_space(40.0);
        ui.heading(egui::RichText::new("🎥 Livestream Player").size(32.0));
        ui.label(
            egui::RichText::new("Watch and manage your livestream with custom overlays")
                .color(egui::Color32::from_gray(170)),
        );
        ui.add_space(24.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                if let Some(notice) = &state.api_error {
                    ui.colored_label(egui::Color32::YELLOW, format!("⚠ {}", notice));
                    ui.add_space(8.0);
                }

                ui.heading("Enter Your Stream URL");
                ui.label("Paste your HLS (.m3u8) or video URL below");
                ui.add_space(8.0);

                let mut url = state.stream.url.clone();
                let response = ui.add_enabled(
                    !busy,
                    egui::TextEdit::singleline(&mut url)
                        .hint_text("https://example.com/stream.m3u8")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    msgs.push(Msg::SetStreamUrl(url));
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    msgs.push(Msg::StartStream);
                }

                ui.add_space(8.0);
                let label = if busy { "Starting..." } else { "▶ Start Streaming" };
                let start = ui.add_enabled(
                    !busy,
                    egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0)),
                );
                if start.clicked() {
                    msgs.push(Msg::StartStream);
                }
                if busy {
                    ui.spinner();
                }

                ui.add_space(16.0);
                ui.label(egui::RichText::new("Important Note").strong());
                ui.label("RTSP streams are NOT supported directly in browsers.");
                ui.label("Supported formats:");
                for format in ["HLS streams (.m3u8)", "MP4 video files", "WebM video files"] {
                    ui.label(egui::RichText::new(format!("• {}", format)).small().weak());
                }

                ui.add_space(16.0);
                ui.label(egui::RichText::new("Test Stream Examples:").strong());
                for (label, sample) in SAMPLE_STREAMS {
                    if ui.add_enabled(!busy, egui::Link::new(label)).clicked() {
                        msgs.push(Msg::SetStreamUrl(sample.to_string()));
                    }
                }
            });
    });

    msgs
}
