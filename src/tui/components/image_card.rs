//! # Image Card
//!
//! One entry of the gallery list: the title on the first line, the preview
//! link (or a placeholder) dimmed underneath.
//!
//! ```text
//! ▌ Earthrise over the lunar horizon
//! ▌ https://images-assets.nasa.gov/image/as08-14-2383/as08-14-2383~thumb.jpg
//! ```
//!
//! Stateless: the card renders whatever record it is handed and never fails
//! on missing fields.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::UnicodeWidthChar;

use crate::api::ImageRecord;

pub const NO_TITLE: &str = "No Title";
pub const IMAGE_UNAVAILABLE: &str = "Image unavailable";

/// Rows each card occupies in the list.
pub const CARD_HEIGHT: u16 = 2;

pub struct ImageCard<'a> {
    pub record: &'a ImageRecord,
    pub selected: bool,
}

impl<'a> ImageCard<'a> {
    pub fn new(record: &'a ImageRecord, selected: bool) -> Self {
        Self { record, selected }
    }

    /// Builds the card's list item, truncated to `width` columns.
    pub fn list_item(&self, width: u16) -> ListItem<'static> {
        // Leave room for the selection gutter.
        let text_width = (width as usize).saturating_sub(2);
        let gutter = if self.selected { "▌ " } else { "  " };

        let title_style = if self.selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let link_line = match self.record.preview_href() {
            Some(href) => Span::styled(
                truncate_to_width(href, text_width),
                Style::default().fg(Color::DarkGray),
            ),
            None => Span::styled(
                IMAGE_UNAVAILABLE,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        };

        let gutter_style = Style::default().fg(Color::Cyan);
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(gutter, gutter_style),
                Span::styled(
                    truncate_to_width(display_title(self.record), text_width),
                    title_style,
                ),
            ]),
            Line::from(vec![Span::styled(gutter, gutter_style), link_line]),
        ])
    }
}

/// The record's title, or a placeholder when the archive sent none.
pub fn display_title(record: &ImageRecord) -> &str {
    let title = record.title.trim();
    if title.is_empty() { NO_TITLE } else { title }
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_display_title_fallback() {
        let mut item = record("PIA1", true);
        assert_eq!(display_title(&item), "Title of PIA1");
        item.title = "   ".to_string();
        assert_eq!(display_title(&item), NO_TITLE);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer title", 8), "a lon...");
        assert_eq!(truncate_to_width("abcdef", 2), "..");
        // Wide characters count as two columns.
        assert_eq!(truncate_to_width("木星木星木星", 7), "木星...");
    }

    #[test]
    fn test_card_has_two_lines() {
        let item = record("PIA2", true);
        let card = ImageCard::new(&item, false);
        assert_eq!(card.list_item(40).height(), CARD_HEIGHT as usize);
    }

    #[test]
    fn test_card_without_links_renders_placeholder() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;
        use ratatui::widgets::List;

        let item = record("PIA3", false);
        let backend = TestBackend::new(40, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let list = List::new(vec![ImageCard::new(&item, true).list_item(40)]);
                f.render_widget(list, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let second_row: String = (0..40)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(second_row.contains(IMAGE_UNAVAILABLE));
    }
}
