//! # Gallery List Component
//!
//! Scrollable list of image cards. Moving the cursor near the bottom emits
//! `GalleryEvent::ReachedEnd`, which the event loop turns into a
//! scroll-to-end trigger for the controller.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GalleryListState` lives in `TuiState`
//! - `GalleryList` is created each frame with borrowed images

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::api::ImageRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::image_card::{CARD_HEIGHT, ImageCard};
use crate::tui::event::TuiEvent;

/// How many cards from the bottom count as "reached the end".
pub const END_THRESHOLD: usize = 2;

pub struct GalleryListState {
    pub list_state: ListState,
    /// Number of images currently in the gallery (synced each frame).
    pub item_count: usize,
    /// Cards that fit in the last rendered area; used for paging.
    pub visible_cards: usize,
}

impl GalleryListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            item_count: 0,
            visible_cards: 1,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Sync the item count, keeping the selection in range.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        match self.list_state.selected() {
            _ if count == 0 => self.list_state.select(None),
            Some(i) if i >= count => self.list_state.select(Some(count - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Back to the top (new category or refreshed list).
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.item_count = 0;
    }

    fn move_to(&mut self, index: usize) -> Option<GalleryEvent> {
        let last = self.item_count - 1;
        let index = index.min(last);
        self.list_state.select(Some(index));
        if index + END_THRESHOLD >= last {
            Some(GalleryEvent::ReachedEnd)
        } else {
            None
        }
    }
}

impl Default for GalleryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the gallery list.
#[derive(Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    Open(usize),
    ReachedEnd,
}

impl EventHandler for GalleryListState {
    type Event = GalleryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GalleryEvent> {
        if self.item_count == 0 {
            return None;
        }
        let current = self.list_state.selected();
        match event {
            TuiEvent::CursorUp => {
                let index = current.map(|i| i.saturating_sub(1)).unwrap_or(0);
                self.list_state.select(Some(index));
                None
            }
            TuiEvent::CursorDown => self.move_to(current.map(|i| i + 1).unwrap_or(0)),
            TuiEvent::PageUp => {
                let index = current.unwrap_or(0).saturating_sub(self.visible_cards);
                self.list_state.select(Some(index));
                None
            }
            TuiEvent::PageDown => self.move_to(current.unwrap_or(0) + self.visible_cards),
            TuiEvent::End => self.move_to(self.item_count - 1),
            TuiEvent::Submit => current.map(GalleryEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the gallery list.
pub struct GalleryList<'a> {
    state: &'a mut GalleryListState,
    images: &'a [ImageRecord],
}

impl<'a> GalleryList<'a> {
    pub fn new(state: &'a mut GalleryListState, images: &'a [ImageRecord]) -> Self {
        Self { state, images }
    }
}

impl Component for GalleryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" Images ({}) ", self.images.len()))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        self.state.visible_cards = ((inner.height / CARD_HEIGHT) as usize).max(1);

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .images
            .iter()
            .enumerate()
            .map(|(i, record)| ImageCard::new(record, selected == Some(i)).list_item(inner.width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::records;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn state_with(count: usize) -> GalleryListState {
        let mut state = GalleryListState::new();
        state.set_item_count(count);
        state
    }

    #[test]
    fn test_empty_list_ignores_input() {
        let mut state = state_with(0);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_reaching_bottom_emits_end() {
        let mut state = state_with(10);
        assert_eq!(state.selected(), Some(0));
        for _ in 0..6 {
            assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        }
        // Index 7 is within END_THRESHOLD of the last item (9).
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown),
            Some(GalleryEvent::ReachedEnd)
        );
        assert_eq!(state.selected(), Some(7));
    }

    #[test]
    fn test_end_key_jumps_and_emits() {
        let mut state = state_with(10);
        assert_eq!(
            state.handle_event(&TuiEvent::End),
            Some(GalleryEvent::ReachedEnd)
        );
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = state_with(5);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(GalleryEvent::Open(1))
        );
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut state = state_with(20);
        state.handle_event(&TuiEvent::End);
        state.set_item_count(7);
        assert_eq!(state.selected(), Some(6));
        state.set_item_count(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_records_visible_cards() {
        let images = records("earth", 1, 10);
        let mut state = state_with(images.len());
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| GalleryList::new(&mut state, &images).render(f, f.area()))
            .unwrap();
        // 12 rows minus 2 border rows, two rows per card.
        assert_eq!(state.visible_cards, 5);
    }
}
