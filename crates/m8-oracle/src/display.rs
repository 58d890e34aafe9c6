//! Presentation hints.
//!
//! The ball does not render anything itself. It tells the front end how an
//! answer should look and leaves the interpretation to the rendering target.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// How a revealed message should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayHint {
    /// Green-ish.
    Positive,
    /// Red-ish.
    Negative,
    /// Blue-ish.
    Neutral,
    /// Default foreground, used for validation messages.
    Error,
}

impl DisplayHint {
    /// Palette colour as `#rrggbb`.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Positive => "#4ade80",
            Self::Negative => "#f87171",
            Self::Neutral => "#60a5fa",
            Self::Error => "#ffffff",
        }
    }

    /// Palette colour as an RGB triple.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Positive => (0x4a, 0xde, 0x80),
            Self::Negative => (0xf8, 0x71, 0x71),
            Self::Neutral => (0x60, 0xa5, 0xfa),
            Self::Error => (0xff, 0xff, 0xff),
        }
    }
}

impl From<Category> for DisplayHint {
    fn from(category: Category) -> Self {
        match category {
            Category::Positive => Self::Positive,
            Category::Negative => Self::Negative,
            Category::Neutral => Self::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_maps_to_hint() {
        assert_eq!(DisplayHint::from(Category::Positive), DisplayHint::Positive);
        assert_eq!(DisplayHint::from(Category::Negative), DisplayHint::Negative);
        assert_eq!(DisplayHint::from(Category::Neutral), DisplayHint::Neutral);
    }

    #[test]
    fn hex_and_rgb_agree() {
        for hint in [
            DisplayHint::Positive,
            DisplayHint::Negative,
            DisplayHint::Neutral,
            DisplayHint::Error,
        ] {
            let (r, g, b) = hint.rgb();
            assert_eq!(hint.hex(), format!("#{r:02x}{g:02x}{b:02x}"));
        }
    }

    #[test]
    fn error_is_white() {
        assert_eq!(DisplayHint::Error.hex(), "#ffffff");
    }
}
