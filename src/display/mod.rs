//! Display-side transforms.
//!
//! Pure functions from engine output to what a renderer draws: thousands
//! separators for the integer part, a shrink factor for overlong text, and
//! the per-frame `Readout` snapshot. Nothing here feeds back into engine
//! state.

use crate::engine::Calculator;

/// Primary-line width (in characters) shown at full size.
pub const FULL_SIZE_CHARS: usize = 9;

/// Smallest scale the primary line shrinks to.
pub const MIN_SCALE: f32 = 0.5;

/// Insert thousands separators into the integer part of an operand.
///
/// Sign and fraction are preserved. Text whose integer part is not purely
/// digits (the error sentinel, partial entries like `"-"`) passes through
/// unchanged, as do exponential renderings, whose one-digit integer part
/// has nothing to group.
pub fn group_thousands(operand: &str) -> String {
    let (sign, unsigned) = match operand.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", operand),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return operand.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}", sign, grouped, frac_part)
}

/// Shrink factor for the primary line.
///
/// Full size up to nine separator-free characters, then proportional to
/// length with a floor of [`MIN_SCALE`].
pub fn font_scale(operand: &str) -> f32 {
    let len = operand.chars().count();
    if len <= FULL_SIZE_CHARS {
        return 1.0;
    }
    (FULL_SIZE_CHARS as f32 / len as f32).max(MIN_SCALE)
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Readout {
    /// Current operand, grouped for display.
    pub primary: String,
    /// Previous operand plus the operator glyph; empty when nothing is
    /// pending.
    pub secondary: String,
    /// Shrink factor for the primary line.
    pub scale: f32,
}

impl Readout {
    /// Snapshot a calculator for rendering.
    pub fn from_calculator(calc: &Calculator, grouping: bool) -> Self {
        let group = |operand: &str| {
            if grouping {
                group_thousands(operand)
            } else {
                operand.to_string()
            }
        };

        let secondary = match calc.pending_operation() {
            Some(op) => format!("{} {}", group(calc.previous_operand()), op.glyph()),
            None => String::new(),
        };

        Self {
            primary: group(calc.current_operand()),
            secondary,
            scale: font_scale(calc.current_operand()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operation;

    #[test]
    fn test_groups_integer_part() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100"), "100");
    }

    #[test]
    fn test_groups_with_sign_and_fraction() {
        assert_eq!(group_thousands("-1234.5678"), "-1,234.5678");
        assert_eq!(group_thousands("-0.5"), "-0.5");
    }

    #[test]
    fn test_non_numeric_text_passes_through() {
        assert_eq!(group_thousands("Error"), "Error");
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("-"), "-");
    }

    #[test]
    fn test_exponential_renderings_pass_through() {
        assert_eq!(group_thousands("1.23456789e19"), "1.23456789e19");
    }

    #[test]
    fn test_full_size_up_to_nine_characters() {
        assert_eq!(font_scale("123456789"), 1.0);
        assert_eq!(font_scale("0.5"), 1.0);
        assert_eq!(font_scale(""), 1.0);
    }

    #[test]
    fn test_scale_shrinks_proportionally() {
        assert_eq!(font_scale("123456789012"), 0.75);
        assert_eq!(font_scale("123456789012345678"), 0.5);
    }

    #[test]
    fn test_scale_floor() {
        let long = "1".repeat(40);
        assert_eq!(font_scale(&long), MIN_SCALE);
    }

    #[test]
    fn test_readout_shows_pending_operation() {
        let mut calc = Calculator::new();
        for c in "1234".chars() {
            calc.append(c);
        }
        calc.choose_operation(Operation::Add);
        let readout = Readout::from_calculator(&calc, true);
        assert_eq!(readout.secondary, "1,234 +");
        assert_eq!(readout.primary, "");
    }

    #[test]
    fn test_readout_groups_primary() {
        let mut calc = Calculator::new();
        for c in "1234567".chars() {
            calc.append(c);
        }
        let readout = Readout::from_calculator(&calc, true);
        assert_eq!(readout.primary, "1,234,567");
        assert_eq!(readout.secondary, "");
        assert_eq!(readout.scale, 1.0);
    }

    #[test]
    fn test_readout_without_grouping() {
        let mut calc = Calculator::new();
        for c in "1234567".chars() {
            calc.append(c);
        }
        let readout = Readout::from_calculator(&calc, false);
        assert_eq!(readout.primary, "1234567");
    }
}
