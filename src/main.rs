use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::error::Error;
use std::io;

use gitflow::app::App;
use gitflow::config::Config;
use gitflow::theme::ThemeStore;
use gitflow::ui::ui;

fn main() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let theme_store = ThemeStore::load(Config::path());
    let mut app = App::new(theme_store);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        // Pick up any theme change committed by the last round of input, so
        // every view draws with the current palette.
        app.sync_theme();
        terminal.draw(|f| ui(f, app))?;

        let event = event::read()?;
        app.handle_event(event);
    }
}
