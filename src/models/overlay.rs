// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay data structures.
//!
//! This module defines the records exchanged with the overlay service:
//! the editable [`OverlayDraft`] and the persisted [`Overlay`], which is a
//! draft plus its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an overlay, assigned by the server (or locally for the
/// offline fallback set).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(pub String);

impl OverlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayType {
    /// Literal text badge; `content` is the text.
    Text,
    /// Solid colored box; `content` is a color value.
    Shape,
}

impl OverlayType {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayType::Text => "TEXT",
            OverlayType::Shape => "SHAPE",
        }
    }
}

/// Top-left corner in pixels relative to the video surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Box dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

fn default_z_index() -> i32 {
    1
}

fn default_opacity() -> f64 {
    1.0
}

/// The editable part of an overlay. Sent verbatim as the body of
/// create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub overlay_type: OverlayType,
    pub content: String,
    pub position: Position,
    pub size: Size,
    #[serde(default = "default_z_index")]
    pub z_index: i32,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Default for OverlayDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            overlay_type: OverlayType::Text,
            content: String::new(),
            position: Position { x: 0.0, y: 0.0 },
            size: Size {
                width: 100.0,
                height: 50.0,
            },
            z_index: 1,
            opacity: 1.0,
        }
    }
}

impl OverlayDraft {
    /// Whether position and size are all finite numbers.
    pub fn is_finite(&self) -> bool {
        [
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// A persisted overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    #[serde(rename = "_id")]
    pub id: OverlayId,
    #[serde(flatten)]
    pub draft: OverlayDraft,
}

impl Overlay {
    pub fn new(id: OverlayId, draft: OverlayDraft) -> Self {
        Self { id, draft }
    }
}

/// The sample overlays shown when the overlay service cannot be reached.
pub fn fallback_overlays() -> Vec<Overlay> {
    vec![
        Overlay::new(
            OverlayId::new("1"),
            OverlayDraft {
                name: "Live Badge".to_string(),
                overlay_type: OverlayType::Text,
                content: "🔴 LIVE".to_string(),
                position: Position { x: 20.0, y: 20.0 },
                size: Size {
                    width: 100.0,
                    height: 40.0,
                },
                z_index: 2,
                opacity: 0.9,
            },
        ),
        Overlay::new(
            OverlayId::new("2"),
            OverlayDraft {
                name: "Logo".to_string(),
                overlay_type: OverlayType::Shape,
                content: "#FF6B6B".to_string(),
                position: Position { x: 20.0, y: 70.0 },
                size: Size {
                    width: 80.0,
                    height: 60.0,
                },
                z_index: 1,
                opacity: 0.7,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_parses_server_shape() {
        let json = r##"{
            "_id": "65f1c0ffee",
            "name": "Score",
            "type": "shape",
            "content": "#00ff00",
            "position": {"x": 10, "y": 12},
            "size": {"width": 200, "height": 30},
            "zIndex": 3,
            "opacity": 0.5,
            "createdAt": "Tue, 05 Mar 2024 10:00:00 GMT"
        }"##;

        let overlay: Overlay = serde_json::from_str(json).unwrap();
        assert_eq!(overlay.id.as_str(), "65f1c0ffee");
        assert_eq!(overlay.draft.overlay_type, OverlayType::Shape);
        assert_eq!(overlay.draft.position.x, 10.0);
        assert_eq!(overlay.draft.size.height, 30.0);
        assert_eq!(overlay.draft.z_index, 3);
    }

    #[test]
    fn test_missing_z_index_and_opacity_default_to_one() {
        let json = r#"{
            "_id": "a",
            "name": "n",
            "type": "text",
            "content": "hi",
            "position": {"x": 0, "y": 0},
            "size": {"width": 1, "height": 1}
        }"#;

        let overlay: Overlay = serde_json::from_str(json).unwrap();
        assert_eq!(overlay.draft.z_index, 1);
        assert_eq!(overlay.draft.opacity, 1.0);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{
            "_id": "a", "name": "n", "type": "image", "content": "",
            "position": {"x": 0, "y": 0}, "size": {"width": 1, "height": 1}
        }"#;
        assert!(serde_json::from_str::<Overlay>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let value = serde_json::to_value(OverlayDraft::default()).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["type"], "text");
        assert_eq!(value["zIndex"], 1);
        assert_eq!(value["size"]["width"], 100.0);
    }

    #[test]
    fn test_fallback_set() {
        let overlays = fallback_overlays();
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].draft.name, "Live Badge");
        assert_eq!(overlays[1].draft.content, "#FF6B6B");
        assert!(overlays.iter().all(|o| o.draft.is_finite()));
    }
}
