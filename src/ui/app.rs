//! Interactive event loop.
//!
//! Owns the terminal for the duration of the session: raw mode plus the
//! alternate screen, restored on drop even when the loop errors out. Key
//! presses map to commands, commands drive the calculator, and every
//! change repaints the frame. Pressed keys flash briefly like on the
//! phone keypad.

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use tracing::{debug, info, warn};

use crate::clipboard;
use crate::config::Config;
use crate::display::Readout;
use crate::engine::Calculator;
use crate::input::{self, Command};

use super::theme::Theme;
use super::view::{self, PadKey};

const FLASH_DURATION: Duration = Duration::from_millis(120);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal when dropped, so a panic or early return never
/// leaves the shell in raw mode. Constructed the moment raw mode goes on,
/// before the screen setup that can still fail.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
            .context("Failed to prepare terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the interactive calculator until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let theme = Theme::for_variant(config.theme.variant);
    let mut calc = Calculator::new();
    let mut flash: Option<(PadKey, Instant)> = None;

    info!("starting interactive session");
    let _guard = TerminalGuard::enter()?;
    redraw(&calc, config, None, &theme)?;

    loop {
        let timeout = match flash {
            Some((_, pressed)) => FLASH_DURATION.saturating_sub(pressed.elapsed()),
            None => IDLE_POLL,
        };
        if event::poll(timeout).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(command) = input::command_for_key(&key) else {
                        continue;
                    };
                    debug!(?command, "key");
                    if command == Command::Quit {
                        break;
                    }
                    handle(&mut calc, command, config);
                    flash = view::pad_key(command).map(|pad| (pad, Instant::now()));
                    redraw(&calc, config, flash.map(|(pad, _)| pad), &theme)?;
                }
                Event::Resize(_, _) => {
                    redraw(&calc, config, flash.map(|(pad, _)| pad), &theme)?;
                }
                _ => {}
            }
        } else if let Some((_, pressed)) = flash {
            if pressed.elapsed() >= FLASH_DURATION {
                flash = None;
                redraw(&calc, config, None, &theme)?;
            }
        }
    }

    info!("session ended");
    Ok(())
}

fn handle(calc: &mut Calculator, command: Command, config: &Config) {
    input::apply(calc, command);
    match command {
        Command::Copy => copy_operand(calc),
        Command::Evaluate if config.behavior.copy_on_evaluate && !calc.is_error() => {
            copy_operand(calc);
        }
        _ => {}
    }
}

// Clipboard failures are logged, never fatal; the session keeps going.
fn copy_operand(calc: &Calculator) {
    if let Err(e) = clipboard::copy_text(calc.current_operand()) {
        warn!(error = %e, "clipboard copy failed");
    }
}

fn redraw(calc: &Calculator, config: &Config, flash: Option<PadKey>, theme: &Theme) -> Result<()> {
    let readout = Readout::from_calculator(calc, config.display.grouping);
    let mut out = stdout();
    view::draw(&mut out, &readout, calc.pending_operation(), flash, theme)
        .context("Failed to draw frame")?;
    Ok(())
}
