#![cfg(test)]
//! The desktop binary embeds the shared theme from `ui/assets/theme/main.css`.
//! A truncated or moved theme would only show up at runtime, so check it here.
//!
//! If you rename or relocate the theme, update this test and the `include_str!`
//! constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Classes the board components render with.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".button--primary",
    ".button--danger",
    ".board-card__header",
    ".board-card__placeholder",
    ".radar__plot",
    ".radar__legend",
    ".board-metrics__item",
    ".board-editor__metric",
    ".board-export__actions",
];

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_component_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|selector| !EMBEDDED_CSS.contains(selector))
        .collect();
    assert!(
        missing.is_empty(),
        "Selectors missing from ui/assets/theme/main.css: {missing:?}"
    );
}
