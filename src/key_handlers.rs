use crate::app::{App, AppState};
use crate::{config, responder};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

pub fn handle_key(key: KeyEvent, app: &mut App, reply_tx: &mpsc::Sender<String>) {
    match app.state {
        AppState::Chat => handle_chat_key(key, app, reply_tx),
        AppState::QuitConfirm => handle_quit_confirm_key(key, app),
        AppState::Quit => {}
    }
}

fn handle_chat_key(key: KeyEvent, app: &mut App, reply_tx: &mpsc::Sender<String>) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            if let Some(text) = app.submit_input() {
                let cfg = config::get_config();
                app.replying = true;
                app.status_indicator.set_typing(true);
                app.status_indicator
                    .set_label(format!("{} is typing…", cfg.assistant_name));
                log::info!("accepted message ({} chars)", text.len());
                responder::schedule_reply(
                    text,
                    Duration::from_millis(cfg.reply_delay_ms),
                    reply_tx.clone(),
                );
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::QuitConfirm,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_quit_confirm_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}
