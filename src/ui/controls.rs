// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback controls below the video.
//!
//! Seek bar, elapsed/total time, play/pause, volume, fullscreen and the
//! stop button.

use crate::models::stream::PlaybackState;
use crate::playback::PlaybackStrategy;
use crate::util::time::format_time;

/// Result of control interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlsAction {
    None,
    TogglePlay,
    Seek(f64),
    SetVolume(u8),
    Fullscreen,
    Stop,
}

/// Display the playback controls.
pub fn show(
    ui: &mut egui::Ui,
    playback: &PlaybackState,
    strategy: Option<PlaybackStrategy>,
) -> ControlsAction {
    let mut action = ControlsAction::None;
    let seekable = playback.duration.is_finite() && playback.duration > 0.0;

    // Seek bar
    ui.horizontal(|ui| {
        ui.spacing_mut().slider_width = ui.available_width();
        let max = if seekable { playback.duration } else { 0.0 };
        let mut position = playback.current_time.clamp(0.0, max);
        let slider = egui::Slider::new(&mut position, 0.0..=max).show_value(false);
        if ui.add_enabled(seekable, slider).changed() {
            action = ControlsAction::Seek(position);
        }
    });

    ui.horizontal(|ui| {
        ui.label(format_time(playback.current_time));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format_time(playback.duration));
        });
    });

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let play_label = if playback.is_playing { "⏸" } else { "▶" };
        if ui
            .button(egui::RichText::new(play_label).size(18.0))
            .on_hover_text(if playback.is_playing { "Pause" } else { "Play" })
            .clicked()
        {
            action = ControlsAction::TogglePlay;
        }

        ui.label("🔊");
        let mut volume = playback.volume;
        ui.spacing_mut().slider_width = 96.0;
        if ui
            .add(egui::Slider::new(&mut volume, 0..=100).show_value(false))
            .changed()
        {
            action = ControlsAction::SetVolume(volume);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let stop = egui::Button::new(egui::RichText::new("Stop Stream").color(egui::Color32::WHITE))
                .fill(egui::Color32::from_rgb(220, 38, 38));
            if ui.add(stop).clicked() {
                action = ControlsAction::Stop;
            }
            if ui.button("⛶").on_hover_text("Fullscreen").clicked() {
                action = ControlsAction::Fullscreen;
            }
            if let Some(strategy) = strategy {
                ui.label(egui::RichText::new(strategy.label()).small().weak());
            }
        });
    });

    action
}
