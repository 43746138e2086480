pub mod app;
pub mod views;

use crate::config::ViewerConfig;
use crate::core::{ConfigProvider, Dispatcher, Outcome, PokemonSource};
use crate::utils::error::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

const TICK_RATE: Duration = Duration::from_millis(50);

/// Runs the interactive viewer until the user quits. Must be called from
/// within a tokio runtime; requests run on spawned tasks.
pub fn run_ui<S: PokemonSource + 'static>(source: S, config: &ViewerConfig) -> Result<()> {
    let (dispatcher, mut outcomes) = Dispatcher::new(source);
    let mut app = App::new(config.list_limit(), config.artwork_base_url());
    dispatcher.dispatch(app.mount());

    enable_raw_mode()?;
    let mut terminal = restore_on_error(setup_terminal(), restore_terminal)?;

    let res = run_app(&mut terminal, &mut app, &dispatcher, &mut outcomes);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best effort; the setup error is what gets reported.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Runs `restore` when `result` is an error, so a failed setup does not leave
/// the terminal in raw mode.
fn restore_on_error<T, E>(
    result: std::result::Result<T, E>,
    restore: impl FnOnce(),
) -> std::result::Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_app<B: ratatui::backend::Backend, S: PokemonSource + 'static>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher<S>,
    outcomes: &mut UnboundedReceiver<Outcome>,
) -> Result<()> {
    loop {
        terminal.draw(|f| views::render(f, app))?;

        while let Ok(outcome) = outcomes.try_recv() {
            if let Some(effect) = app.apply(outcome) {
                dispatcher.dispatch(effect);
            }
        }

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(effect) = app.handle_key(key) {
                        dispatcher.dispatch(effect);
                    }
                }
            }
        }

        if app.should_quit {
            tracing::info!("Viewer closed");
            return Ok(());
        }
    }
}
