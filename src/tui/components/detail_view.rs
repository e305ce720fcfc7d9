//! # Detail View Component
//!
//! The detail screen for one record: title, preview link, description and
//! photographer, stacked in a vertical scroll view. Every optional field has a
//! placeholder, and a record without links shows a single notice instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::ImageRecord;
use crate::tui::component::Component;
use crate::tui::components::image_card::display_title;
use crate::tui::event::TuiEvent;

pub const DETAILS_UNAVAILABLE: &str = "Image details are unavailable";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Scroll position of the detail screen; reset whenever a new record opens.
#[derive(Default)]
pub struct DetailViewState {
    pub scroll_state: ScrollViewState,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::End => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
    }
}

pub struct DetailView<'a> {
    record: &'a ImageRecord,
    state: &'a mut DetailViewState,
}

impl<'a> DetailView<'a> {
    pub fn new(record: &'a ImageRecord, state: &'a mut DetailViewState) -> Self {
        Self { record, state }
    }

    /// The stacked sections, in display order.
    fn sections(&self) -> Vec<Paragraph<'a>> {
        let record = self.record;
        let href = record.preview_href().unwrap_or_default();

        let title = Paragraph::new(Line::from(Span::styled(
            display_title(record),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        let image = Paragraph::new(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(href, Style::default().fg(Color::Cyan)),
        ]))
        .wrap(Wrap { trim: false });

        let description = Paragraph::new(description_text(record))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let author = Paragraph::new(format!("Author: {}", author_text(record)))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);

        vec![title, image, description, author]
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.record.id))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.record.links.is_empty() {
            let notice = Paragraph::new(DETAILS_UNAVAILABLE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(notice, inner);
            return;
        }

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let sections = self.sections();
        let heights: Vec<u16> = sections
            .iter()
            .map(|p| p.line_count(content_width) as u16)
            .collect();
        // One blank row between sections
        let gaps = heights.len().saturating_sub(1) as u16;
        let total_height = heights.iter().sum::<u16>() + gaps;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in sections.into_iter().zip(heights) {
            scroll_view.render_widget(paragraph, Rect::new(0, y_offset, content_width, height));
            y_offset += height + 1;
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

fn description_text(record: &ImageRecord) -> &str {
    match record.description.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => NO_DESCRIPTION,
    }
}

fn author_text(record: &ImageRecord) -> &str {
    match record.photographer.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_AUTHOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(record: &ImageRecord) -> String {
        let mut state = DetailViewState::new();
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| DetailView::new(record, &mut state).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let mut item = record("PIA10", true);
        item.description = None;
        item.photographer = Some("  ".to_string());
        assert_eq!(description_text(&item), NO_DESCRIPTION);
        assert_eq!(author_text(&item), UNKNOWN_AUTHOR);

        let text = render_to_text(&item);
        assert!(text.contains(NO_DESCRIPTION));
        assert!(text.contains("Author: Unknown"));
    }

    #[test]
    fn test_renders_present_fields() {
        let item = record("PIA11", true);
        let text = render_to_text(&item);
        assert!(text.contains("Title of PIA11"));
        assert!(text.contains("A description"));
        assert!(text.contains("Author: NASA/JPL"));
    }

    #[test]
    fn test_record_without_links_shows_notice() {
        let item = record("PIA12", false);
        let text = render_to_text(&item);
        assert!(text.contains(DETAILS_UNAVAILABLE));
        assert!(!text.contains("Author:"));
    }
}
