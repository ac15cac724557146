// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed values for the vacuum vocabulary.
//!
//! Command-side values ([`CleanMode`], [`MoveAction`], [`Component`]) are
//! closed enums because the library only ever *encodes* tokens it knows.
//! Device-reported values ([`VacuumStatus`], [`FanSpeed`]) are open
//! string-backed enums: canonical variants for the tokens the library
//! understands, plus a verbatim passthrough case so unseen vendor values
//! survive a round trip through the state store unchanged.

mod clean_mode;
mod component;
mod fan_speed;
mod move_action;
mod status;

pub use clean_mode::CleanMode;
pub use component::{Component, ComponentWear, canonical_component};
pub use fan_speed::FanSpeed;
pub use move_action::MoveAction;
pub use status::VacuumStatus;
