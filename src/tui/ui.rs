use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::{GalleryState, Navigator, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::progress_bar::PROGRESS_BAR_HEIGHT;
use crate::tui::components::{CategoryPicker, DetailView, GalleryList, ProgressBar, TitleBar};

const GALLERY_HELP: &str = " ↑/↓ Move  Enter Details  c Category  r Refresh  q Quit ";
const DETAIL_HELP: &str = " ↑/↓ Scroll  Esc Back  q Quit ";

pub fn draw_ui(
    frame: &mut Frame,
    state: &GalleryState,
    navigator: &Navigator,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let route = navigator.current();
    let mut title_bar = TitleBar::new(
        route.title(),
        format!("{}, page {}", state.category.label(), state.page),
    );
    if state.refreshing {
        title_bar = title_bar.loading("Refreshing...", spinner_frame);
    } else if state.loading {
        title_bar = title_bar.loading("Loading...", spinner_frame);
    } else if let Some(error) = &state.last_error {
        title_bar = title_bar.error(error);
    }
    title_bar.render(frame, title_area);

    let help = match route {
        Route::Gallery => {
            draw_gallery(frame, body_area, state, tui);
            GALLERY_HELP
        }
        Route::Details(record) => {
            DetailView::new(record, &mut tui.detail).render(frame, body_area);
            DETAIL_HELP
        }
    };
    frame.render_widget(
        Line::from(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.picker.as_mut() {
        CategoryPicker::new(picker, state.category).render(frame, frame.area());
    }
}

fn draw_gallery(frame: &mut Frame, area: Rect, state: &GalleryState, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [category_area, progress_area, list_area] =
        Layout::vertical([Length(1), Length(PROGRESS_BAR_HEIGHT), Min(0)]).areas(area);

    let category_line = Line::from(vec![
        Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.category.label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(category_line, category_area);

    ProgressBar::new(state.progress()).render(frame, progress_area);

    if state.images.is_empty() {
        let message = if state.loading {
            "Loading images..."
        } else {
            "No images found."
        };
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(placeholder, list_area);
        return;
    }

    GalleryList::new(&mut tui.gallery, &state.images).render(frame, list_area);
}
