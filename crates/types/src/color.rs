//! Process colors and the toggle rule.

use std::fmt;

/// Local state of a ring process.
///
/// `Green` is never produced by [`Color::toggled`]; it only appears when
/// the distinguished root resets itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Initial color of every process.
    #[default]
    Blue,
    /// The other toggle state.
    Red,
    /// Reset color of the distinguished root.
    Green,
}

impl Color {
    /// The flip rule non-root processes apply to their predecessor's color.
    ///
    /// Blue and Red toggle into each other. A Green predecessor (the root
    /// after a reset) maps to Red.
    pub fn toggled(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
            Color::Green => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
        };
        write!(f, "{}", name)
    }
}
