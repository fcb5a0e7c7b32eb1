use std::io::{self, Write};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
    enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

const WINDOW_TITLE: &str = "grid-snake";

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode plus a titled alternate screen for one run of the game.
///
/// Dropping the session restores the terminal best-effort, including on
/// early returns through `?`.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Switches the terminal into game mode and wraps stdout in ratatui.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = enter_screen(&mut io::stdout())
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame.
    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restores the terminal before the default panic message is printed, so the
/// message is readable instead of lost in the alternate screen.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        EnterAlternateScreen,
        SetTitle(WINDOW_TITLE),
        Hide,
        Clear(ClearType::All)
    )
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

/// Leaves raw mode even when the screen commands fail, then reports the
/// first failure.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = leave_screen(&mut io::stdout());
    raw.and(screen)
}
