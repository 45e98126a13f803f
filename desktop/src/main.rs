#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Board;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so the binary carries no asset folder.

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _ = dioxus::logger::init(level);
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Radarboard – v{}", env!("CARGO_PKG_VERSION"))),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Board {}
    }
}
