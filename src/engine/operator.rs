//! The four binary operations and their display glyphs.

/// A binary operation waiting for (or applied to) two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl Operation {
    /// Apply the operation to a left and right operand.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Human-readable glyph for the secondary display line.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(7.0, 2.0), 5.0);
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), 42.0);
        assert_eq!(Operation::Divide.apply(9.0, 3.0), 3.0);
    }

    #[test]
    fn test_division_by_zero_is_not_finite() {
        assert!(!Operation::Divide.apply(5.0, 0.0).is_finite());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Operation::Add.glyph(), '+');
        assert_eq!(Operation::Subtract.glyph(), '−');
        assert_eq!(Operation::Multiply.glyph(), '×');
        assert_eq!(Operation::Divide.glyph(), '÷');
    }
}
