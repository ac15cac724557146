// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vacuum command definitions and wire encoding.
//!
//! A [`Command`] is a named operation plus an ordered list of arguments,
//! rendered deterministically to the vendor's XML-like control element:
//!
//! | Builder | Wire form |
//! |---------|-----------|
//! | [`Command::clean`] | `<ctl td="Clean"><clean type="auto" speed="standard"/></ctl>` |
//! | [`Command::charge`] | `<ctl td="Charge"><charge type="go"/></ctl>` |
//! | [`Command::play_sound`] | `<ctl td="PlaySound" sid="0"/>` |
//! | [`Command::move_to`] | `<ctl td="Move"><move action="SpinLeft"/></ctl>` |
//! | [`Command::get_battery_state`] | `<ctl td="GetBatteryInfo"/>` |
//! | [`Command::get_life_span`] | `<ctl td="GetLifeSpan" type="Brush"/>` |
//!
//! Commands are immutable once constructed. Arbitrary operations can be
//! built with [`Command::new`] for protocol extensions the library does not
//! model by name.
//!
//! # Examples
//!
//! ```
//! use vacbot_lib::command::Command;
//!
//! let cmd = Command::new("CustomCommand").with_attr("type", "customtype");
//! assert_eq!(cmd.to_xml(), r#"<ctl td="CustomCommand" type="customtype"/>"#);
//! ```

mod clean;
mod motion;
mod query;

use std::fmt;

/// One argument of a [`Command`].
///
/// Arguments are either flat attributes on the control element itself or a
/// nested named element carrying its own attributes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CommandArg {
    /// A flat `key="value"` attribute on the control element.
    Attr {
        /// Attribute name.
        key: String,
        /// Attribute value.
        value: String,
    },
    /// A nested child element with its own attributes.
    Element {
        /// Element tag name.
        name: String,
        /// Ordered attribute pairs.
        attrs: Vec<(String, String)>,
    },
}

/// A command that can be sent to the vacuum.
///
/// The operation name becomes the control element's `td` (type descriptor)
/// attribute; arguments follow in construction order. Without arguments the
/// command renders as a bare self-closing element.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    name: String,
    args: Vec<CommandArg>,
}

impl Command {
    /// Creates a command with the given operation name and no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Adds a flat attribute to the control element.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(CommandArg::Attr {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a nested child element with the given attributes.
    #[must_use]
    pub fn with_element<K, V>(
        mut self,
        name: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.args.push(CommandArg::Element {
            name: name.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        });
        self
    }

    /// Returns the operation name (the wire `td` value).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command arguments in construction order.
    #[must_use]
    pub fn args(&self) -> &[CommandArg] {
        &self.args
    }

    /// Renders the command to its XML wire form.
    ///
    /// Rendering is deterministic: flat attributes appear after `td` in
    /// construction order, then nested elements. Attribute values are
    /// escaped; a command without nested elements renders self-closing.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(32);
        out.push_str("<ctl td=\"");
        out.push_str(&escape_attr(&self.name));
        out.push('"');

        for arg in &self.args {
            if let CommandArg::Attr { key, value } = arg {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }

        let elements: Vec<_> = self
            .args
            .iter()
            .filter_map(|arg| match arg {
                CommandArg::Element { name, attrs } => Some((name, attrs)),
                CommandArg::Attr { .. } => None,
            })
            .collect();

        if elements.is_empty() {
            out.push_str("/>");
            return out;
        }

        out.push('>');
        for (name, attrs) in elements {
            out.push('<');
            out.push_str(name);
            for (key, value) in attrs {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push_str("/>");
        }
        out.push_str("</ctl>");
        out
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

/// Escapes a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
