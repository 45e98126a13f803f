//! Formatting helpers for presenting scores.

/// Shortest decimal form: `7` → "7", `7.5` → "7.5".
pub fn format_score(value: f64) -> String {
    format!("{value}")
}

/// Value shown in the score field. Zero renders as an empty field.
pub fn score_input_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format_score(value)
    }
}

/// Legend label; unnamed data sets still need something to click on.
pub fn series_label(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unnamed)"
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_use_shortest_form() {
        assert_eq!(format_score(7.0), "7");
        assert_eq!(format_score(7.5), "7.5");
        assert_eq!(score_input_value(0.0), "");
        assert_eq!(score_input_value(10.0), "10");
    }

    #[test]
    fn blank_names_get_a_placeholder() {
        assert_eq!(series_label("  "), "(unnamed)");
        assert_eq!(series_label("Ann"), "Ann");
    }
}
