// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay projection.
//!
//! Turns the overlay list and active set into the boxes painted over the
//! video. The result is recomputed every frame and carries everything the
//! painter needs, so drawing has no decisions left to make.

use crate::models::overlay::{Overlay, OverlayId, OverlayType};
use egui::Color32;
use std::collections::BTreeSet;

/// What fills an overlay box.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxFill {
    /// Literal text on a translucent dark plate.
    Text(String),
    /// Solid color. `None` when the content is not a color we understand.
    Solid(Option<Color32>),
}

/// One positioned box, in pixels relative to the video's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub id: OverlayId,
    pub rect: egui::Rect,
    pub opacity: f32,
    pub fill: BoxFill,
}

/// Project the active overlays into boxes in paint order (lowest z first).
pub fn project(overlays: &[Overlay], active: &BTreeSet<OverlayId>) -> Vec<OverlayBox> {
    let mut visible: Vec<&Overlay> = overlays.iter().filter(|o| active.contains(&o.id)).collect();
    // sort_by_key is stable: list order breaks zIndex ties.
    visible.sort_by_key(|o| o.draft.z_index);

    visible
        .into_iter()
        .map(|overlay| {
            let draft = &overlay.draft;
            let rect = egui::Rect::from_min_size(
                egui::pos2(draft.position.x as f32, draft.position.y as f32),
                egui::vec2(draft.size.width as f32, draft.size.height as f32),
            );
            let fill = match draft.overlay_type {
                OverlayType::Text => BoxFill::Text(draft.content.clone()),
                OverlayType::Shape => BoxFill::Solid(parse_color(&draft.content)),
            };
            OverlayBox {
                id: overlay.id.clone(),
                rect,
                opacity: draft.opacity as f32,
                fill,
            }
        })
        .collect()
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic CSS color name.
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    let color = match value.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "transparent" => Color32::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, i) in rgb.iter_mut().zip(0..3) {
                *slot = channel(&hex[i..i + 1])? * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 { channel(&hex[6..8])? } else { 255 };
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overlay::{fallback_overlays, OverlayDraft};

    fn at_z(id: &str, z: i32) -> Overlay {
        Overlay::new(
            OverlayId::new(id),
            OverlayDraft {
                z_index: z,
                ..Default::default()
            },
        )
    }

    fn ids(boxes: &[OverlayBox]) -> Vec<&str> {
        boxes.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_only_active_overlays_are_projected() {
        let overlays = fallback_overlays();
        assert!(project(&overlays, &BTreeSet::new()).is_empty());

        let active = BTreeSet::from([OverlayId::new("1")]);
        let boxes = project(&overlays, &active);
        assert_eq!(boxes.len(), 1);
        assert_eq!(
            boxes[0].rect,
            egui::Rect::from_min_size(egui::pos2(20.0, 20.0), egui::vec2(100.0, 40.0))
        );
        assert_eq!(boxes[0].fill, BoxFill::Text("🔴 LIVE".to_string()));
        assert!((boxes[0].opacity - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_paint_order_is_stable_by_z_index() {
        let overlays = vec![at_z("top", 5), at_z("a", 1), at_z("b", 1), at_z("neg", -2)];
        let active = overlays.iter().map(|o| o.id.clone()).collect();
        assert_eq!(ids(&project(&overlays, &active)), vec!["neg", "a", "b", "top"]);
    }

    #[test]
    fn test_shape_fill_parses_color() {
        let overlays = fallback_overlays();
        let active = BTreeSet::from([OverlayId::new("2")]);
        let boxes = project(&overlays, &active);
        assert_eq!(
            boxes[0].fill,
            BoxFill::Solid(Some(Color32::from_rgb(0xFF, 0x6B, 0x6B)))
        );
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_color(" #00FF00 "), Some(Color32::from_rgb(0, 255, 0)));
        assert_eq!(
            parse_color("#ff000080"),
            Some(Color32::from_rgba_unmultiplied(255, 0, 0, 128))
        );
        assert_eq!(parse_color("Orange"), Some(Color32::from_rgb(255, 165, 0)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#ggg"), None);
        assert_eq!(parse_color("#é12"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }
}
