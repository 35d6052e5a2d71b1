//! Input adapter.
//!
//! Maps characters and terminal key events onto engine commands. The same
//! character table drives both the interactive frontend and the headless
//! `--keys` mode, so a key script behaves exactly like typing.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::{Calculator, Operation};

/// One engine call (or frontend action) requested by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Append a digit.
    Digit(char),
    /// Append the decimal point.
    Point,
    /// Choose a binary operation.
    Operation(Operation),
    /// Evaluate the pending computation.
    Evaluate,
    /// Divide the current operand by 100.
    Percent,
    /// Flip the sign of the current operand.
    ToggleSign,
    /// Reset to the startup state.
    Clear,
    /// Drop the last character.
    Backspace,
    /// Copy the current operand to the clipboard.
    Copy,
    /// Leave the interactive session.
    Quit,
}

/// Map a plain character to a command.
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' => Some(Command::Digit(c)),
        '.' => Some(Command::Point),
        '+' => Some(Command::Operation(Operation::Add)),
        '-' => Some(Command::Operation(Operation::Subtract)),
        '*' | 'x' | 'X' | '×' => Some(Command::Operation(Operation::Multiply)),
        '/' | '÷' => Some(Command::Operation(Operation::Divide)),
        '=' => Some(Command::Evaluate),
        '%' => Some(Command::Percent),
        'n' | 'N' => Some(Command::ToggleSign),
        'c' | 'C' => Some(Command::Clear),
        'b' | 'B' => Some(Command::Backspace),
        _ => None,
    }
}

/// Map a terminal key event to a command.
///
/// Enter evaluates, Escape and Delete clear, the Backspace key erases,
/// `y` copies, `q` and Ctrl+C quit; other characters fall through to
/// [`command_for_char`].
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(Command::Evaluate),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Esc | KeyCode::Delete => Some(Command::Clear),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::Copy),
        KeyCode::Char(c) => command_for_char(c),
        _ => None,
    }
}

/// Apply a command to the engine.
///
/// `Copy` and `Quit` are frontend concerns and do nothing here.
pub fn apply(calc: &mut Calculator, command: Command) {
    match command {
        Command::Digit(d) => calc.append(d),
        Command::Point => calc.append('.'),
        Command::Operation(op) => calc.choose_operation(op),
        Command::Evaluate => calc.evaluate(),
        Command::Percent => calc.toggle_percentage(),
        Command::ToggleSign => calc.toggle_sign(),
        Command::Clear => calc.clear(),
        Command::Backspace => calc.backspace(),
        Command::Copy | Command::Quit => {}
    }
}

/// Drive a whole key script through the engine.
///
/// Whitespace is skipped; any other unmapped character aborts.
pub fn feed(calc: &mut Calculator, script: &str) -> Result<()> {
    for c in script.chars() {
        if c.is_whitespace() {
            continue;
        }
        let Some(command) = command_for_char(c) else {
            anyhow::bail!("Unrecognized key '{}'", c);
        };
        apply(calc, command);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_point_map_to_entry() {
        assert_eq!(command_for_char('5'), Some(Command::Digit('5')));
        assert_eq!(command_for_char('0'), Some(Command::Digit('0')));
        assert_eq!(command_for_char('.'), Some(Command::Point));
    }

    #[test]
    fn test_operator_characters() {
        assert_eq!(
            command_for_char('+'),
            Some(Command::Operation(Operation::Add))
        );
        assert_eq!(
            command_for_char('-'),
            Some(Command::Operation(Operation::Subtract))
        );
        assert_eq!(
            command_for_char('*'),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            command_for_char('/'),
            Some(Command::Operation(Operation::Divide))
        );
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(
            command_for_char('x'),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            command_for_char('×'),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            command_for_char('÷'),
            Some(Command::Operation(Operation::Divide))
        );
    }

    #[test]
    fn test_unmapped_character() {
        assert_eq!(command_for_char('z'), None);
        assert_eq!(command_for_char('('), None);
    }

    #[test]
    fn test_key_events() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(command_for_key(&enter), Some(Command::Evaluate));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(command_for_key(&esc), Some(Command::Clear));

        let delete = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(command_for_key(&delete), Some(Command::Clear));

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(command_for_key(&backspace), Some(Command::Backspace));

        let digit = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert_eq!(command_for_key(&digit), Some(Command::Digit('7')));
    }

    #[test]
    fn test_quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(command_for_key(&q), Some(Command::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn test_copy_key() {
        let y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(command_for_key(&y), Some(Command::Copy));
    }

    #[test]
    fn test_feed_end_to_end() {
        let mut calc = Calculator::new();
        feed(&mut calc, "7x8=").unwrap();
        assert_eq!(calc.current_operand(), "56");
    }

    #[test]
    fn test_feed_skips_whitespace() {
        let mut calc = Calculator::new();
        feed(&mut calc, "3 + 4 x 2 =").unwrap();
        assert_eq!(calc.current_operand(), "14");
    }

    #[test]
    fn test_feed_division_by_zero() {
        let mut calc = Calculator::new();
        feed(&mut calc, "5/0=7").unwrap();
        assert_eq!(calc.current_operand(), "7");
    }

    #[test]
    fn test_feed_rejects_unknown_key() {
        let mut calc = Calculator::new();
        let err = feed(&mut calc, "7z8").unwrap_err();
        assert!(err.to_string().contains('z'));
    }

    #[test]
    fn test_feed_sign_and_percent() {
        let mut calc = Calculator::new();
        feed(&mut calc, "50%").unwrap();
        assert_eq!(calc.current_operand(), "0.5");

        let mut calc = Calculator::new();
        feed(&mut calc, "9n").unwrap();
        assert_eq!(calc.current_operand(), "-9");
    }
}
