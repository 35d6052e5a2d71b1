//! Calculator engine.
//!
//! This module provides:
//! - The arithmetic state machine over string operands
//! - The four binary operations and their glyphs
//! - Result formatting that suppresses floating-point artifacts

mod format;
mod operator;
mod state;

pub use format::{ERROR_DISPLAY, format_result, parse_operand};
pub use operator::Operation;
pub use state::Calculator;
