//! Numeric result formatting.
//!
//! Turns computed `f64` values back into display operands, suppressing
//! binary floating-point noise and capping the rendered length.

/// Display sentinel for division by zero and non-finite results.
pub const ERROR_DISPLAY: &str = "Error";

/// Rendered results longer than this switch to exponential notation.
const MAX_PLAIN_LEN: usize = 15;

/// Format a computed value as a display operand.
///
/// Renders with 10 fractional digits and strips trailing zeros plus a
/// trailing bare point, so `0.1 + 0.2` comes out as `"0.3"`. Values whose
/// plain rendering exceeds 15 characters fall back to exponential notation
/// with 8 fractional digits. Non-finite values become the error sentinel.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // A value rounding to zero keeps no sign
    if trimmed == "-0" {
        return "0".to_string();
    }

    if trimmed.len() > MAX_PLAIN_LEN {
        return format!("{:.8e}", value);
    }

    trimmed.to_string()
}

/// Parse an operand string, ignoring thousands separators.
///
/// Accepts partial numerals such as `"5."`; rejects anything that does not
/// parse to a finite number (including the error sentinel).
pub fn parse_operand(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
