// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft model behind the overlay editor form.

use crate::models::overlay::{Overlay, OverlayDraft, OverlayId};

/// A single overlay being created or edited.
///
/// The form writes straight into [`OverlayEditor::draft`]; nothing is
/// validated beyond what the widgets themselves bound.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEditor {
    editing: Option<OverlayId>,
    pub draft: OverlayDraft,
}

impl OverlayEditor {
    /// Editor for a new overlay with default geometry.
    pub fn create() -> Self {
        Self {
            editing: None,
            draft: OverlayDraft::default(),
        }
    }

    /// Editor over a copy of an existing overlay.
    pub fn edit(overlay: &Overlay) -> Self {
        Self {
            editing: Some(overlay.id.clone()),
            draft: overlay.draft.clone(),
        }
    }

    /// Id of the overlay being replaced, `None` for a new one.
    pub fn editing(&self) -> Option<&OverlayId> {
        self.editing.as_ref()
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Overlay"
        } else {
            "Add Overlay"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overlay::{fallback_overlays, OverlayType};

    #[test]
    fn test_create_uses_defaults() {
        let editor = OverlayEditor::create();
        assert_eq!(editor.editing(), None);
        assert_eq!(editor.title(), "Add Overlay");
        assert_eq!(editor.draft.position.x, 0.0);
        assert_eq!(editor.draft.size.width, 100.0);
        assert_eq!(editor.draft.size.height, 50.0);
        assert_eq!(editor.draft.z_index, 1);
        assert_eq!(editor.draft.opacity, 1.0);
        assert_eq!(editor.draft.overlay_type, OverlayType::Text);
    }

    #[test]
    fn test_edit_copies_without_aliasing() {
        let overlay = fallback_overlays().remove(1);
        let mut editor = OverlayEditor::edit(&overlay);
        assert_eq!(editor.title(), "Edit Overlay");
        assert_eq!(editor.editing(), Some(&overlay.id));

        editor.draft.name = "Changed".to_string();
        assert_eq!(overlay.draft.name, "Logo");
    }
}
