//! # TitleBar Component
//!
//! Top status line: app name, current screen, and a status segment.
//!
//! Stateless. It receives all data as props and renders a single line:
//!
//! 1. **Loading**:  `"NASA Gallery | Gallery | Earth, page 2 | ⠋ Loading..."`
//! 2. **Failed**:   `"NASA Gallery | Gallery | Earth, page 2 | fetch failed: ..."`
//! 3. **Idle**:     `"NASA Gallery | Gallery | Earth, page 2"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub screen: String,
    pub context: String,
    pub status: Option<String>,
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(screen: &str, context: String) -> Self {
        Self {
            screen: screen.to_string(),
            context,
            status: None,
            is_error: false,
        }
    }

    /// Animated "Loading..." status for the given spinner frame.
    pub fn loading(mut self, label: &str, spinner_frame: usize) -> Self {
        let glyph = SPINNER[spinner_frame % SPINNER.len()];
        self.status = Some(format!("{glyph} {label}"));
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.status = Some(format!("fetch failed: {message}"));
        self.is_error = true;
        self
    }

    pub fn text(&self) -> String {
        let mut text = format!("NASA Gallery | {} | {}", self.screen, self.context);
        if let Some(status) = &self.status {
            text.push_str(" | ");
            text.push_str(status);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
