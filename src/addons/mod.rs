// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Add-on status resolution.

pub mod status;

pub use status::{map_addons, Addon, AddonStatus, LaunchLink};
