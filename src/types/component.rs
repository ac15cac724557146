// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wearable vacuum components (brushes, filter).

use std::fmt;

/// A wearable component whose remaining life can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// The main rolling brush.
    MainBrush,
    /// The side sweeper brush.
    SideBrush,
    /// The dust-bin filter.
    Filter,
}

impl Component {
    /// Returns the vendor wire token used in `GetLifeSpan` queries.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Self::MainBrush => "Brush",
            Self::SideBrush => "SideBrush",
            Self::Filter => "DustCaseHeap",
        }
    }

    /// Returns the canonical (library-side) name for this component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainBrush => "main_brush",
            Self::SideBrush => "side_brush",
            Self::Filter => "filter",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a device-reported component token to its canonical name.
///
/// Life-span reports use both the capitalized query tokens and lowercase
/// variants depending on firmware. Unmapped tokens pass through verbatim so
/// reports for components the library does not model still land in the
/// state store.
#[must_use]
pub fn canonical_component(token: &str) -> String {
    match token {
        "Brush" | "brush" => Component::MainBrush.as_str().to_string(),
        "SideBrush" | "side_brush" => Component::SideBrush.as_str().to_string(),
        "DustCaseHeap" | "dust_case_heap" => Component::Filter.as_str().to_string(),
        other => other.to_string(),
    }
}

/// Wear reading for one component, as published on the lifespan channel.
///
/// `level` is the remaining-life fraction reported by the device
/// (`val / total`). The device's `total` field carries no verified meaning
/// beyond being the denominator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComponentWear {
    /// Canonical component name, or the raw device token if unmapped.
    pub component: String,
    /// Remaining-life fraction, usually within 0.0 to 1.0.
    pub level: f64,
}
