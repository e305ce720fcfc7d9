//! # Category Picker Component
//!
//! Overlay for choosing which topic to browse. Opened with `c`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState` while the overlay is open
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::Category;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the picker overlay.
pub struct CategoryPickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// Opens with the cursor on the category currently shown.
    pub fn new(current: Category) -> Self {
        let selected = current.index();
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }
}

impl EventHandler for CategoryPickerState {
    type Event = CategoryPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryPickerEvent> {
        let last = Category::ALL.len() - 1;
        match event {
            TuiEvent::Escape => Some(CategoryPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(last);
                self.list_state.select(Some(self.selected));
                None
            }
            // Number keys jump straight to a category
            TuiEvent::InputChar(c) => {
                let index = c.to_digit(10)? as usize;
                Category::ALL
                    .get(index.checked_sub(1)?)
                    .map(|category| CategoryPickerEvent::Select(*category))
            }
            TuiEvent::Submit => Category::ALL
                .get(self.selected)
                .map(|category| CategoryPickerEvent::Select(*category)),
            _ => None,
        }
    }
}

/// Events emitted by the category picker.
#[derive(Debug, PartialEq, Eq)]
pub enum CategoryPickerEvent {
    Select(Category),
    Dismiss,
}

/// Transient render wrapper for the picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
    current: Category,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState, current: Category) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Choose a Category ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let is_active = *category == self.current;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{}{}", category.label(), marker), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
