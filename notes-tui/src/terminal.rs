//! Terminal management
//!
//! Raw mode and alternate screen on the way in, restored on the way out
//! (including on panic), plus the per-frame draw call.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use libnotes::AppProvider;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::UiState;
use crate::error::Result;
use crate::ui;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen and raw mode
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before the default panic output is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Draw one frame on any backend
///
/// Rendering errors (a missing provider) are returned after the frame is
/// flushed instead of being lost inside the draw closure.
pub fn draw<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &UiState,
    provider: Option<&AppProvider>,
) -> Result<()> {
    let mut rendered = Ok(());
    terminal.draw(|frame| {
        rendered = ui::render(frame, state, provider);
    })?;
    rendered?;
    Ok(())
}
