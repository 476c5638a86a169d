//! Puts the terminal into carousel mode and guarantees it comes back out.
//!
//! Carousel mode is raw input, the alternate screen, mouse capture (drags
//! arrive as `MouseEventKind::Drag`) and a hidden cursor. Leaving it is
//! idempotent and runs from whichever comes first: the guard's drop or the
//! panic hook.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static CAROUSEL_MODE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

pub type CarouselTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves carousel mode when dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        leave_carousel_mode();
    }
}

pub fn setup_terminal() -> io::Result<(CarouselTerminal, TerminalGuard)> {
    PANIC_HOOK.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            leave_carousel_mode();
            default_hook(info);
        }));
    });

    enable_raw_mode()?;
    CAROUSEL_MODE.store(true, Ordering::SeqCst);
    // From here on an early return drops the guard and undoes the setup.
    let guard = TerminalGuard { _private: () };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

fn leave_carousel_mode() {
    if !CAROUSEL_MODE.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, Show) {
        tracing::debug!("terminal restore failed: {err}");
    }
    if let Err(err) = disable_raw_mode() {
        tracing::debug!("leaving raw mode failed: {err}");
    }
}
