//! The calculator state machine.
//!
//! A `Calculator` cycles between three logical states: entering an operand,
//! holding a pending operation, and showing a result. Operands live as
//! strings so partial entries like `"0."` or `"-"` survive verbatim; numbers
//! only exist transiently while evaluating.

use super::format::{ERROR_DISPLAY, format_result, parse_operand};
use super::operator::Operation;

/// Arithmetic state machine over string operands.
#[derive(Clone, Debug)]
pub struct Calculator {
    /// The operand being entered, or the last result.
    current_operand: String,
    /// Left operand captured when an operation was chosen.
    previous_operand: String,
    /// Operation waiting for its right operand.
    pending_operation: Option<Operation>,
    /// Set after a result or error; the next digit starts a fresh number.
    awaiting_reset: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing `"0"`.
    pub fn new() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            awaiting_reset: false,
        }
    }

    /// The operand currently shown on the primary line.
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The captured left operand, empty when nothing is pending.
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The active operation, exposed so a frontend can highlight its key.
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Whether the display currently shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current_operand == ERROR_DISPLAY
    }

    /// Feed a digit or the decimal point into the current operand.
    ///
    /// Anything other than `0-9` and `.` is ignored outright, in every
    /// state. After a result the operand is discarded first, so entry
    /// starts fresh. A second point is ignored, and a point on an empty
    /// or bare-minus operand gets a `"0"` prefix. Digits replace a lone
    /// leading zero (keeping the sign); a second zero on `"0"`/`"-0"` is
    /// ignored.
    pub fn append(&mut self, token: char) {
        if token != '.' && !token.is_ascii_digit() {
            return;
        }

        if self.awaiting_reset {
            self.current_operand.clear();
            self.awaiting_reset = false;
        }

        if token == '.' {
            if self.current_operand.contains('.') {
                return;
            }
            if self.current_operand.is_empty() || self.current_operand == "-" {
                self.current_operand.push('0');
            }
            self.current_operand.push('.');
            return;
        }

        if self.current_operand == "0" || self.current_operand == "-0" {
            if token == '0' {
                return;
            }
            // Replace the placeholder zero, keep the sign
            self.current_operand.pop();
            self.current_operand.push(token);
            return;
        }

        self.current_operand.push(token);
    }

    /// Choose the operation to apply to the current operand.
    ///
    /// A previously pending computation is evaluated first (left-to-right
    /// chaining, no operator precedence), unless the engine is already
    /// showing a result. The current operand then moves into the previous
    /// slot and entry of the right operand begins.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.current_operand.is_empty() || self.current_operand == "-" {
            self.current_operand = "0".to_string();
        }
        if self.pending_operation.is_some() && !self.awaiting_reset {
            self.evaluate();
        }
        self.pending_operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        self.awaiting_reset = false;
    }

    /// Evaluate the pending computation.
    ///
    /// No-op when nothing is pending. Unparseable operands, non-finite
    /// results, and division by zero all collapse to the error sentinel
    /// with the pending state cleared.
    pub fn evaluate(&mut self) {
        if self.previous_operand.is_empty() {
            return;
        }
        let Some(op) = self.pending_operation.take() else {
            return;
        };

        let lhs = parse_operand(&self.previous_operand);
        let rhs = parse_operand(&self.current_operand);
        self.previous_operand.clear();
        self.awaiting_reset = true;

        self.current_operand = match (lhs, rhs) {
            (Some(_), Some(rhs)) if op == Operation::Divide && rhs == 0.0 => {
                ERROR_DISPLAY.to_string()
            }
            (Some(lhs), Some(rhs)) => format_result(op.apply(lhs, rhs)),
            _ => ERROR_DISPLAY.to_string(),
        };
    }

    /// Divide the current operand by 100.
    ///
    /// No-op on an empty, bare-minus, or unparseable operand. Pending
    /// state is left untouched.
    pub fn toggle_percentage(&mut self) {
        if self.current_operand.is_empty() || self.current_operand == "-" {
            return;
        }
        let Some(value) = parse_operand(&self.current_operand) else {
            return;
        };
        self.current_operand = format_result(value / 100.0);
    }

    /// Flip the sign of the current operand.
    ///
    /// `"0"` and the empty operand become `"-0"`; otherwise a leading
    /// minus is stripped or prepended. The error sentinel is left alone.
    pub fn toggle_sign(&mut self) {
        if self.current_operand == ERROR_DISPLAY {
            return;
        }
        if self.current_operand == "0" || self.current_operand.is_empty() {
            self.current_operand = "-0".to_string();
        } else if let Some(stripped) = self.current_operand.strip_prefix('-') {
            self.current_operand = stripped.to_string();
        } else {
            self.current_operand.insert(0, '-');
        }
    }

    /// Reset everything to the startup state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drop the last character of the current operand.
    ///
    /// A single-character operand resets to `"0"`, as does the error
    /// sentinel. Acts on whatever is displayed, result or not.
    pub fn backspace(&mut self) {
        if self.current_operand == ERROR_DISPLAY {
            self.current_operand = "0".to_string();
            return;
        }
        if self.current_operand.len() > 1 {
            self.current_operand.pop();
        } else {
            self.current_operand = "0".to_string();
        }
    }
}
