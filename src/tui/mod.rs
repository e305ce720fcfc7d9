//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! translates keyboard events into `core::Action` values, and carries out the
//! `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetches
//!
//! `Effect::Fetch` spawns a tokio task that calls the `ImageSource` and sends
//! `Action::FetchCompleted` back over a channel. The loop drains that channel
//! every tick, so all state mutation stays on this thread.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{ImageSource, NasaImageClient};
use crate::core::config::ResolvedConfig;
use crate::core::{Action, Effect, FetchRequest, GalleryState, Navigator, Route, update};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryPickerEvent, CategoryPickerState, DetailViewState, GalleryEvent, GalleryListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub gallery: GalleryListState,
    pub detail: DetailViewState,
    /// Category picker overlay (None = hidden)
    pub picker: Option<CategoryPickerState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            gallery: GalleryListState::new(),
            detail: DetailViewState::new(),
            picker: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn ImageSource> = Arc::new(NasaImageClient::from_config(&config));
    info!(
        "Using image source '{}' at {}",
        source.name(),
        config.base_url
    );

    let mut state = GalleryState::new(config.category, config.assumed_total);
    let mut navigator = Navigator::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    // Mounting the gallery loads the default category.
    let initial_category = state.category;
    let effect = update(&mut state, Action::CategoryChanged(initial_category));
    let mut should_quit = apply_effect(effect, &mut navigator, &mut tui, &source, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        tui.gallery.set_item_count(state.images.len());

        let animating = state.loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &state, &navigator, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&event, &state, &mut navigator, &mut tui) {
                debug!("Dispatching {:?}", action);
                let effect = update(&mut state, action);
                if apply_effect(effect, &mut navigator, &mut tui, &source, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let was_refreshing = state.refreshing;
            let effect = update(&mut state, action);
            if was_refreshing && !state.refreshing {
                // The list was replaced under the cursor.
                tui.gallery.reset();
            }
            if apply_effect(effect, &mut navigator, &mut tui, &source, &tx) {
                should_quit = true;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Route a terminal event to the overlay or screen that owns it.
///
/// Presentation-only events are handled here; anything the controller needs
/// to know about comes back as an `Action`.
fn handle_event(
    event: &TuiEvent,
    state: &GalleryState,
    navigator: &mut Navigator,
    tui: &mut TuiState,
) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // Picker overlay captures everything while open
    if let Some(picker) = tui.picker.as_mut() {
        return match picker.handle_event(event)? {
            CategoryPickerEvent::Select(category) => {
                tui.picker = None;
                tui.gallery.reset();
                Some(Action::CategoryChanged(category))
            }
            CategoryPickerEvent::Dismiss => {
                tui.picker = None;
                None
            }
        };
    }

    let on_details = matches!(navigator.current(), Route::Details(_));
    match (on_details, event) {
        (_, TuiEvent::Quit) => Some(Action::Quit),
        (true, TuiEvent::Escape) => {
            navigator.back();
            None
        }
        (true, _) => {
            tui.detail.handle_event(event);
            None
        }
        (false, TuiEvent::InputChar('c')) => {
            tui.picker = Some(CategoryPickerState::new(state.category));
            None
        }
        (false, TuiEvent::InputChar('r')) => {
            tui.gallery.reset();
            Some(Action::PullToRefresh)
        }
        (false, _) => match tui.gallery.handle_event(event)? {
            GalleryEvent::ReachedEnd => Some(Action::ScrollEndReached),
            GalleryEvent::Open(index) => state.images.get(index).cloned().map(Action::ItemSelected),
        },
    }
}

/// Carry out an effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    navigator: &mut Navigator,
    tui: &mut TuiState,
    source: &Arc<dyn ImageSource>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Fetch(request) => {
            spawn_fetch(source.clone(), request, tx.clone());
            false
        }
        Effect::Navigate(record) => {
            tui.detail = DetailViewState::new();
            navigator.push(Route::Details(record));
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_fetch(source: Arc<dyn ImageSource>, request: FetchRequest, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch {} ({} page {})",
        request.id, request.category, request.page
    );
    tokio::spawn(async move {
        let outcome = source
            .search(request.category.query(), request.page)
            .await;
        if tx
            .send(Action::FetchCompleted {
                request: request.id,
                outcome,
            })
            .is_err()
        {
            warn!(
                "Failed to deliver fetch {} result: receiver dropped",
                request.id
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::test_support::{FakeSource, record, records};

    #[tokio::test(flavor = "multi_thread")]
    async fn test_fetch_effect_round_trips_through_channel() {
        let source: Arc<dyn ImageSource> = Arc::new(FakeSource);
        let (tx, rx) = mpsc::channel();
        let mut state = GalleryState::default();
        let mut navigator = Navigator::new();
        let mut tui = TuiState::new();

        let effect = update(&mut state, Action::CategoryChanged(Category::Jupiter));
        assert!(!apply_effect(effect, &mut navigator, &mut tui, &source, &tx));

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        update(&mut state, action);
        assert_eq!(state.images.len(), 10);
        assert_eq!(state.images[0].id, "jupiter-1-0");
        assert!(!state.loading);
    }

    #[test]
    fn test_navigate_effect_pushes_details() {
        let source: Arc<dyn ImageSource> = Arc::new(FakeSource);
        let (tx, _rx) = mpsc::channel();
        let mut navigator = Navigator::new();
        let mut tui = TuiState::new();
        let item = record("PIA5", true);

        assert!(!apply_effect(
            Effect::Navigate(item.clone()),
            &mut navigator,
            &mut tui,
            &source,
            &tx
        ));
        assert_eq!(navigator.current(), &Route::Details(item));
        assert!(apply_effect(Effect::Quit, &mut navigator, &mut tui, &source, &tx));
    }

    #[test]
    fn test_picker_selection_becomes_category_change() {
        let state = GalleryState::default();
        let mut navigator = Navigator::new();
        let mut tui = TuiState::new();

        assert!(handle_event(&TuiEvent::InputChar('c'), &state, &mut navigator, &mut tui).is_none());
        assert!(tui.picker.is_some());

        let action = handle_event(&TuiEvent::InputChar('4'), &state, &mut navigator, &mut tui);
        assert!(matches!(action, Some(Action::CategoryChanged(Category::Mars))));
        assert!(tui.picker.is_none());
    }

    #[test]
    fn test_gallery_keys_map_to_actions() {
        let mut state = GalleryState::default();
        state.images = records("earth", 1, 10);
        let mut navigator = Navigator::new();
        let mut tui = TuiState::new();
        tui.gallery.set_item_count(state.images.len());

        let refresh = handle_event(&TuiEvent::InputChar('r'), &state, &mut navigator, &mut tui);
        assert!(matches!(refresh, Some(Action::PullToRefresh)));

        let end = handle_event(&TuiEvent::End, &state, &mut navigator, &mut tui);
        assert!(matches!(end, Some(Action::ScrollEndReached)));

        let open = handle_event(&TuiEvent::Submit, &state, &mut navigator, &mut tui);
        match open {
            Some(Action::ItemSelected(item)) => assert_eq!(item.id, "earth-1-9"),
            other => panic!("expected ItemSelected, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_moves_cursor_back_to_top() {
        let mut state = GalleryState::default();
        state.images = records("earth", 1, 100);
        let mut navigator = Navigator::new();
        let mut tui = TuiState::new();
        tui.gallery.set_item_count(state.images.len());

        let end = handle_event(&TuiEvent::End, &state, &mut navigator, &mut tui);
        assert!(matches!(end, Some(Action::ScrollEndReached)));

        let refresh = handle_event(&TuiEvent::InputChar('r'), &state, &mut navigator, &mut tui);
        assert!(matches!(refresh, Some(Action::PullToRefresh)));

        // Next frame: the refreshed page has landed with the same length.
        state.images = records("earth", 1, 100);
        tui.gallery.set_item_count(state.images.len());
        assert_eq!(tui.gallery.selected(), Some(0));

        let down = handle_event(&TuiEvent::CursorDown, &state, &mut navigator, &mut tui);
        assert!(!matches!(down, Some(Action::ScrollEndReached)));
        assert_eq!(tui.gallery.selected(), Some(1));
    }

    #[test]
    fn test_escape_on_details_goes_back() {
        let state = GalleryState::default();
        let mut navigator = Navigator::new();
        navigator.push(Route::Details(record("PIA6", true)));
        let mut tui = TuiState::new();

        assert!(handle_event(&TuiEvent::Escape, &state, &mut navigator, &mut tui).is_none());
        assert_eq!(navigator.current(), &Route::Gallery);
        assert!(matches!(
            handle_event(&TuiEvent::ForceQuit, &state, &mut navigator, &mut tui),
            Some(Action::Quit)
        ));
    }
}
