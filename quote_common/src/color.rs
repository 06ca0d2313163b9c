//! Accent color palette.
//!
//! The widget picks one of twelve fixed colors on every fetch. Colors render as their
//! hex code and expose RGB components for truecolor terminals.
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// One entry of the fixed accent palette.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum AccentColor {
    #[default]
    #[strum(serialize = "#16a085")]
    GreenSea,
    #[strum(serialize = "#27ae60")]
    Nephritis,
    #[strum(serialize = "#2c3e50")]
    MidnightBlue,
    #[strum(serialize = "#f39c12")]
    Orange,
    #[strum(serialize = "#e74c3c")]
    Alizarin,
    #[strum(serialize = "#9b59b6")]
    Amethyst,
    #[strum(serialize = "#FB6964")]
    Salmon,
    #[strum(serialize = "#342224")]
    DarkPuce,
    #[strum(serialize = "#472E32")]
    Wine,
    #[strum(serialize = "#BDBB99")]
    Sage,
    #[strum(serialize = "#77B1A9")]
    Teal,
    #[strum(serialize = "#73A857")]
    Leaf,
}

/// Palette in display order; index 0 is the startup color.
pub const PALETTE: [AccentColor; 12] = [
    AccentColor::GreenSea,
    AccentColor::Nephritis,
    AccentColor::MidnightBlue,
    AccentColor::Orange,
    AccentColor::Alizarin,
    AccentColor::Amethyst,
    AccentColor::Salmon,
    AccentColor::DarkPuce,
    AccentColor::Wine,
    AccentColor::Sage,
    AccentColor::Teal,
    AccentColor::Leaf,
];

impl AccentColor {
    /// Red, green and blue components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            AccentColor::GreenSea => (0x16, 0xa0, 0x85),
            AccentColor::Nephritis => (0x27, 0xae, 0x60),
            AccentColor::MidnightBlue => (0x2c, 0x3e, 0x50),
            AccentColor::Orange => (0xf3, 0x9c, 0x12),
            AccentColor::Alizarin => (0xe7, 0x4c, 0x3c),
            AccentColor::Amethyst => (0x9b, 0x59, 0xb6),
            AccentColor::Salmon => (0xfb, 0x69, 0x64),
            AccentColor::DarkPuce => (0x34, 0x22, 0x24),
            AccentColor::Wine => (0x47, 0x2e, 0x32),
            AccentColor::Sage => (0xbd, 0xbb, 0x99),
            AccentColor::Teal => (0x77, 0xb1, 0xa9),
            AccentColor::Leaf => (0x73, 0xa8, 0x57),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn palette_lists_every_color_once() {
        assert_eq!(AccentColor::COUNT, PALETTE.len());
        let listed: Vec<AccentColor> = AccentColor::iter().collect();
        assert_eq!(listed, PALETTE.to_vec());
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(AccentColor::default(), PALETTE[0]);
    }

    #[test]
    fn rgb_matches_hex_code() {
        for color in AccentColor::iter() {
            let (r, g, b) = color.rgb();
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            assert_eq!(hex, color.to_string().to_lowercase());
        }
    }

    #[test]
    fn parses_hex_case_insensitively() {
        assert_eq!("#fb6964".parse::<AccentColor>().unwrap(), AccentColor::Salmon);
    }
}
