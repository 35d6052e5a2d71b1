//! Keypad and readout rendering.
//!
//! Draws the frame with queued crossterm commands: two readout lines on
//! top, the five-row keypad below, a hint line at the bottom. The whole
//! frame is repainted on every change; at this size that is cheaper than
//! tracking damage.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::display::Readout;
use crate::engine::Operation;
use crate::input::Command;

use super::theme::{KeyStyle, Theme};

/// One key on the pad, identified for highlighting and flashing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadKey {
    Digit(char),
    Point,
    Op(Operation),
    Equals,
    Clear,
    Sign,
    Percent,
}

/// The pad key a command lights up, if any.
pub fn pad_key(command: Command) -> Option<PadKey> {
    match command {
        Command::Digit(d) => Some(PadKey::Digit(d)),
        Command::Point => Some(PadKey::Point),
        Command::Operation(op) => Some(PadKey::Op(op)),
        Command::Evaluate => Some(PadKey::Equals),
        Command::Percent => Some(PadKey::Percent),
        Command::ToggleSign => Some(PadKey::Sign),
        Command::Clear => Some(PadKey::Clear),
        Command::Backspace | Command::Copy | Command::Quit => None,
    }
}

const KEY_W: u16 = 7;
const KEY_H: u16 = 3;
const GAP_X: u16 = 1;
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;
/// Four key columns plus the gaps between them.
const PANEL_W: u16 = 4 * KEY_W + 3 * GAP_X;

const SECONDARY_ROW: u16 = ORIGIN_Y;
const PRIMARY_ROW: u16 = ORIGIN_Y + 1;
const PAD_TOP: u16 = ORIGIN_Y + 3;
const HINT_ROW: u16 = PAD_TOP + 5 * KEY_H + 1;

enum KeyClass {
    Function,
    Digit,
    Operator,
}

struct Key {
    pad: PadKey,
    label: &'static str,
    col: u16,
    row: u16,
    wide: bool,
}

const fn key(pad: PadKey, label: &'static str, col: u16, row: u16) -> Key {
    Key {
        pad,
        label,
        col,
        row,
        wide: false,
    }
}

const KEYS: [Key; 18] = [
    key(PadKey::Clear, "AC", 0, 0),
    key(PadKey::Sign, "±", 1, 0),
    key(PadKey::Percent, "%", 2, 0),
    key(PadKey::Op(Operation::Divide), "÷", 3, 0),
    key(PadKey::Digit('7'), "7", 0, 1),
    key(PadKey::Digit('8'), "8", 1, 1),
    key(PadKey::Digit('9'), "9", 2, 1),
    key(PadKey::Op(Operation::Multiply), "×", 3, 1),
    key(PadKey::Digit('4'), "4", 0, 2),
    key(PadKey::Digit('5'), "5", 1, 2),
    key(PadKey::Digit('6'), "6", 2, 2),
    key(PadKey::Op(Operation::Subtract), "−", 3, 2),
    key(PadKey::Digit('1'), "1", 0, 3),
    key(PadKey::Digit('2'), "2", 1, 3),
    key(PadKey::Digit('3'), "3", 2, 3),
    key(PadKey::Op(Operation::Add), "+", 3, 3),
    Key {
        pad: PadKey::Digit('0'),
        label: "0",
        col: 0,
        row: 4,
        wide: true,
    },
    key(PadKey::Point, ".", 2, 4),
];

/// Draw a full frame.
pub fn draw(
    out: &mut impl Write,
    readout: &Readout,
    pending: Option<Operation>,
    flash: Option<PadKey>,
    theme: &Theme,
) -> io::Result<()> {
    queue!(out, ResetColor, Clear(ClearType::All))?;
    draw_readout(out, readout, theme)?;
    for key in &KEYS {
        draw_key(out, key, pending, flash, theme)?;
    }
    draw_equals_key(out, flash, theme)?;
    draw_hints(out, theme)?;
    out.flush()
}

fn draw_readout(out: &mut impl Write, readout: &Readout, theme: &Theme) -> io::Result<()> {
    let width = PANEL_W as usize;

    let secondary = fit_tail(&readout.secondary, width);
    queue!(
        out,
        MoveTo(ORIGIN_X, SECONDARY_ROW),
        SetForegroundColor(theme.secondary_fg),
        Print(format!("{:>width$}", secondary)),
    )?;

    // Full-size text gets inter-glyph spacing, the terminal stand-in for
    // the large font; shrunk text renders compact.
    let primary = if readout.scale >= 1.0 {
        spaced(&readout.primary)
    } else {
        readout.primary.clone()
    };
    let primary = fit_tail(&primary, width);
    queue!(
        out,
        MoveTo(ORIGIN_X, PRIMARY_ROW),
        SetForegroundColor(theme.primary_fg),
        Print(format!("{:>width$}", primary)),
        ResetColor,
    )?;
    Ok(())
}

fn draw_key(
    out: &mut impl Write,
    key: &Key,
    pending: Option<Operation>,
    flash: Option<PadKey>,
    theme: &Theme,
) -> io::Result<()> {
    let (x, y, w) = key_rect(key);
    let style = key_style(key.pad, pending, flash, theme);
    paint_key(out, x, y, w, key.label, style)
}

// The equals key is not in the static table: it shares the operator class
// but never highlights as pending.
fn draw_equals_key(out: &mut impl Write, flash: Option<PadKey>, theme: &Theme) -> io::Result<()> {
    let x = ORIGIN_X + 3 * (KEY_W + GAP_X);
    let y = PAD_TOP + 4 * KEY_H;
    let style = if flash == Some(PadKey::Equals) {
        theme.flash
    } else {
        theme.operator
    };
    paint_key(out, x, y, KEY_W, "=", style)
}

fn paint_key(
    out: &mut impl Write,
    x: u16,
    y: u16,
    w: u16,
    label: &str,
    style: KeyStyle,
) -> io::Result<()> {
    let width = w as usize;
    let blank = " ".repeat(width);
    queue!(
        out,
        SetBackgroundColor(style.bg),
        SetForegroundColor(style.fg)
    )?;
    for dy in 0..KEY_H {
        queue!(out, MoveTo(x, y + dy))?;
        if dy == KEY_H / 2 {
            queue!(out, Print(format!("{:^width$}", label)))?;
        } else {
            queue!(out, Print(&blank))?;
        }
    }
    queue!(out, ResetColor)?;
    Ok(())
}

fn draw_hints(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    queue!(
        out,
        MoveTo(ORIGIN_X, HINT_ROW),
        SetForegroundColor(theme.hint_fg),
        Print("q quit   y copy   esc clear"),
        ResetColor,
    )?;
    Ok(())
}

fn key_rect(key: &Key) -> (u16, u16, u16) {
    let x = ORIGIN_X + key.col * (KEY_W + GAP_X);
    let y = PAD_TOP + key.row * KEY_H;
    let w = if key.wide { 2 * KEY_W + GAP_X } else { KEY_W };
    (x, y, w)
}

fn key_style(
    pad: PadKey,
    pending: Option<Operation>,
    flash: Option<PadKey>,
    theme: &Theme,
) -> KeyStyle {
    if flash == Some(pad) {
        return theme.flash;
    }
    if let PadKey::Op(op) = pad {
        if pending == Some(op) {
            return theme.operator_active;
        }
    }
    match key_class(pad) {
        KeyClass::Function => theme.function,
        KeyClass::Digit => theme.digit,
        KeyClass::Operator => theme.operator,
    }
}

fn key_class(pad: PadKey) -> KeyClass {
    match pad {
        PadKey::Clear | PadKey::Sign | PadKey::Percent => KeyClass::Function,
        PadKey::Op(_) | PadKey::Equals => KeyClass::Operator,
        PadKey::Digit(_) | PadKey::Point => KeyClass::Digit,
    }
}

/// Inter-glyph spacing for the full-size rendering.
fn spaced(text: &str) -> String {
    let mut result = String::new();
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Keep the tail visible when text is wider than the panel.
fn fit_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    text.chars().skip(count - width).collect()
}
