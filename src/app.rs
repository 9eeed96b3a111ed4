use crate::chat_message::{ChatMessage, Sender};
use crate::status_indicator::StatusIndicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub scroll: u16,
    pub stick_to_bottom: bool,
    pub last_max_scroll: u16,
    pub replying: bool,
    pub status_indicator: StatusIndicator,
}

impl App {
    pub fn new() -> App {
        App {
            state: AppState::Chat,
            messages: Vec::new(),
            input: String::new(),
            scroll: 0,
            stick_to_bottom: true,
            last_max_scroll: 0,
            replying: false,
            status_indicator: StatusIndicator::new(),
        }
    }

    /// Accepts the current input buffer as a user message. Whitespace-only
    /// input is rejected and the buffer is left exactly as typed; otherwise
    /// the trimmed text is recorded, the buffer is cleared, and the accepted
    /// text is returned so the caller can schedule exactly one reply.
    pub fn submit_input(&mut self) -> Option<String> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(Sender::User, &*text));
        self.input.clear();
        self.stick_to_bottom = true;
        Some(text)
    }

    /// Appends the assistant reply and re-sticks the view to the newest line.
    pub fn push_reply(&mut self, content: String) {
        self.messages.push(ChatMessage::new(Sender::Ella, content));
        self.replying = false;
        self.status_indicator.set_typing(false);
        self.stick_to_bottom = true;
    }

    pub fn scroll_up(&mut self) {
        if self.stick_to_bottom {
            self.scroll = self.last_max_scroll;
            self.stick_to_bottom = false;
        }
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.stick_to_bottom {
            return;
        }
        self.scroll = self.scroll.saturating_add(1);
        if self.scroll >= self.last_max_scroll {
            self.stick_to_bottom = true;
        }
    }
}
