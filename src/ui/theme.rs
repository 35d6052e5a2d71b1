//! Keypad color themes.

use crossterm::style::Color;

use crate::config::ThemeVariant;

/// Background and text colors for one key.
#[derive(Clone, Copy, Debug)]
pub struct KeyStyle {
    pub bg: Color,
    pub fg: Color,
}

/// Palette for the readout and the three key classes.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary readout line.
    pub primary_fg: Color,
    /// Secondary readout line (previous operand and operator).
    pub secondary_fg: Color,
    /// Key hint line at the bottom.
    pub hint_fg: Color,
    /// Digit and point keys.
    pub digit: KeyStyle,
    /// Top-row function keys (AC, sign, percent).
    pub function: KeyStyle,
    /// Operator column and equals.
    pub operator: KeyStyle,
    /// The pending operator's key, inverted.
    pub operator_active: KeyStyle,
    /// Any key during its pressed flash.
    pub flash: KeyStyle,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

impl Theme {
    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary_fg: Color::White,
            secondary_fg: rgb(160, 160, 160),
            hint_fg: rgb(110, 110, 110),
            digit: KeyStyle {
                bg: rgb(51, 51, 51),
                fg: Color::White,
            },
            function: KeyStyle {
                bg: rgb(165, 165, 165),
                fg: Color::Black,
            },
            operator: KeyStyle {
                bg: rgb(255, 159, 10),
                fg: Color::White,
            },
            operator_active: KeyStyle {
                bg: Color::White,
                fg: rgb(255, 159, 10),
            },
            flash: KeyStyle {
                bg: rgb(217, 217, 217),
                fg: Color::Black,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            primary_fg: Color::Black,
            secondary_fg: rgb(99, 99, 102),
            hint_fg: rgb(142, 142, 147),
            digit: KeyStyle {
                bg: rgb(233, 233, 238),
                fg: Color::Black,
            },
            function: KeyStyle {
                bg: rgb(209, 209, 214),
                fg: Color::Black,
            },
            operator: KeyStyle {
                bg: rgb(255, 159, 10),
                fg: Color::White,
            },
            operator_active: KeyStyle {
                bg: Color::White,
                fg: rgb(255, 159, 10),
            },
            flash: KeyStyle {
                bg: rgb(190, 190, 195),
                fg: Color::Black,
            },
        }
    }
}
