// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay set export and import.
//!
//! An overlay set is a list of overlay drafts, without server ids, so an
//! exported file can be imported into any backend. YAML and JSON are
//! supported; the format is chosen from the file extension.

use crate::models::overlay::{Overlay, OverlayDraft};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySet {
    pub overlays: Vec<OverlayDraft>,
}

impl OverlaySet {
    pub fn from_overlays(overlays: &[Overlay]) -> Self {
        Self {
            overlays: overlays.iter().map(|o| o.draft.clone()).collect(),
        }
    }
}

/// Export an overlay set to YAML format.
pub fn export_yaml(set: &OverlaySet, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(set)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export an overlay set to JSON format.
pub fn export_json(set: &OverlaySet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(set)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import an overlay set from YAML format.
pub fn import_yaml(path: &Path) -> Result<OverlaySet> {
    let yaml = std::fs::read_to_string(path)?;
    let set: OverlaySet = serde_yaml::from_str(&yaml)?;
    validate(&set)?;
    Ok(set)
}

/// Import an overlay set from JSON format.
pub fn import_json(path: &Path) -> Result<OverlaySet> {
    let json = std::fs::read_to_string(path)?;
    let set: OverlaySet = serde_json::from_str(&json)?;
    validate(&set)?;
    Ok(set)
}

/// Export by extension: `.json` writes JSON, anything else YAML.
pub fn export(set: &OverlaySet, path: &Path) -> Result<()> {
    if is_json(path) {
        export_json(set, path)
    } else {
        export_yaml(set, path)
    }
    .with_context(|| format!("Failed to export overlays to {}", path.display()))
}

/// Import by extension: `.json` reads JSON, anything else YAML.
pub fn import(path: &Path) -> Result<OverlaySet> {
    if is_json(path) {
        import_json(path)
    } else {
        import_yaml(path)
    }
    .with_context(|| format!("Failed to import overlays from {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn validate(set: &OverlaySet) -> Result<()> {
    if let Some(bad) = set.overlays.iter().find(|d| !d.is_finite()) {
        bail!("Overlay '{}' has a non-numeric geometry value", bad.name);
    }
    Ok(())
}
