//! Fixed chart palette. Data sets take the entry at `creation index % len`.

use super::model::ColorAssignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub stroke: &'static str,
    pub fill: &'static str,
}

impl PaletteColor {
    pub fn assignment(&self) -> ColorAssignment {
        ColorAssignment {
            stroke: self.stroke.to_string(),
            fill: self.fill.to_string(),
        }
    }
}

const fn color(name: &'static str, stroke: &'static str, fill: &'static str) -> PaletteColor {
    PaletteColor { name, stroke, fill }
}

pub const PALETTE: [PaletteColor; 18] = [
    color("Red", "#FF0000", "#FFCCCC"),
    color("Blue", "#0000FF", "#CCCCFF"),
    color("Green", "#008000", "#B8E6A8"),
    color("Orange", "#FFA500", "#FFB84D"),
    color("Purple", "#800080", "#E6A8D7"),
    color("Pink", "#FFC0CB", "#FFCCE5"),
    color("Brown", "#A52A2A", "#D6A69E"),
    color("Gray", "#808080", "#D3D3D3"),
    color("Black", "#000000", "#666666"),
    color("Aqua", "#00BFFF", "#B2D8FF"),
    color("Light green", "#32CD32", "#9AF29E"),
    color("Sky blue", "#87CEEB", "#B3D9F9"),
    color("Lavender", "#E6E6FA", "#F2F2FF"),
    color("Turquoise", "#40E0D0", "#A2F4F1"),
    color("Salmon", "#FA8072", "#FFB7A4"),
    color("Charcoal", "#36454F", "#A1A8B3"),
    color("Gold", "#FFD700", "#FFE066"),
    color("Silver", "#C0C0C0", "#D3D3D3"),
];

/// Color for the data set created when the collection holds `index` entries.
pub fn color_for_index(index: usize) -> ColorAssignment {
    PALETTE[index % PALETTE.len()].assignment()
}
