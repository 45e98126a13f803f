use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Board;
use ui::THEME_CSS;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Only fails if a subscriber is already installed.
    let _ = dioxus::logger::init(level);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Radarboard" }
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Board {}
    }
}
