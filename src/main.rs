mod app;
mod chat_message;
mod chat_view;
mod config;
mod errors;
mod key_handlers;
mod logging;
mod responder;
mod status_indicator;
mod ui;

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;

use crate::app::{App, AppState};

enum Event {
    Input(crossterm::event::KeyEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    config::initialize_config()?;
    let cfg = config::get_config();
    let _logger = logging::init_logging(&cfg.log_level)?;
    log::info!("starting {}", cfg.assistant_name);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, cfg.tick_rate_ms).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{}", err);
    }

    log::info!("shutting down");
    Ok(())
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    tick_rate_ms: u64,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let (reply_tx, mut reply_rx) = mpsc::channel::<String>(100);

    // Spawn a task to read user input and emit ticks
    let tick_rate = Duration::from_millis(tick_rate_ms);
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(CEvent::Key(key)) = event::read() {
                    if tx.send(Event::Input(key)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        tokio::select! {
            Some(event) = rx.recv() => {
                match event {
                    Event::Input(key) => {
                        key_handlers::handle_key(key, &mut app, &reply_tx);
                    }
                    Event::Tick => {
                        app.status_indicator.update_spinner();
                    }
                }
            }
            Some(reply) = reply_rx.recv() => {
                app.push_reply(reply);
            }
            else => break,
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}
