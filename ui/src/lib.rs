//! Shared UI crate for Radarboard. Board logic and views live here; the
//! platform crates only launch them.

use dioxus::prelude::{asset, manganis, Asset};

pub mod core;
pub mod editor;
pub mod radar;
pub mod views;

/// Shared theme, bundled for launchers that link stylesheets.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
