//! # Actions
//!
//! Everything that can happen in the gallery becomes an `Action`.
//! User picks a category? That's `Action::CategoryChanged(category)`.
//! A search resolves? That's `Action::FetchCompleted { request, outcome }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the shell must do.
//! No side effects here. Fetching and navigating happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every fetch gets a sequence token. Only the completion carrying the newest
//! token is applied; anything older is dropped, so the last issued request
//! wins even if an earlier one answers later.

use log::{debug, info, warn};

use crate::api::{FetchError, ImageRecord};
use crate::core::state::{Category, FetchKind, GalleryState};

#[derive(Debug)]
pub enum Action {
    /// The picker selected a category (may be the current one).
    CategoryChanged(Category),
    /// The list reached its end.
    ScrollEndReached,
    /// The user asked to reload from page one.
    PullToRefresh,
    /// A card was activated.
    ItemSelected(ImageRecord),
    /// A fetch issued by `update` resolved.
    FetchCompleted {
        request: u64,
        outcome: Result<Vec<ImageRecord>, FetchError>,
    },
    Quit,
}

/// A search the shell should run, then report back as `FetchCompleted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: u64,
    pub category: Category,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    /// Open the detail view for this record.
    Navigate(ImageRecord),
    Quit,
}

pub fn update(state: &mut GalleryState, action: Action) -> Effect {
    match action {
        Action::CategoryChanged(category) => {
            info!("Category changed: {} -> {}", state.category, category);
            state.category = category;
            state.images.clear();
            state.page = 1;
            state.loading = true;
            state.refreshing = false;
            Effect::Fetch(issue(state, FetchKind::Reset))
        }
        Action::ScrollEndReached => {
            if state.loading {
                debug!("Scroll end ignored: fetch already in flight");
                return Effect::None;
            }
            state.page += 1;
            state.loading = true;
            Effect::Fetch(issue(state, FetchKind::Append))
        }
        Action::PullToRefresh => {
            state.refreshing = true;
            state.loading = true;
            state.page = 1;
            Effect::Fetch(issue(state, FetchKind::Refresh))
        }
        Action::ItemSelected(record) => {
            if record.links.is_empty() {
                debug!("Ignoring selection of '{}': no links", record.id);
                return Effect::None;
            }
            Effect::Navigate(record)
        }
        Action::FetchCompleted { request, outcome } => {
            if request != state.latest_request {
                debug!(
                    "Discarding stale fetch result (request={}, latest={})",
                    request, state.latest_request
                );
                return Effect::None;
            }
            let Some(kind) = state.in_flight.take() else {
                debug!("Discarding duplicate fetch result (request={})", request);
                return Effect::None;
            };
            state.loading = false;
            state.refreshing = false;

            match outcome {
                Ok(records) => {
                    info!(
                        "Fetch {} resolved: {} records ({:?}, page {})",
                        request,
                        records.len(),
                        kind,
                        state.page
                    );
                    state.last_error = None;
                    match kind {
                        FetchKind::Append => state.images.extend(records),
                        FetchKind::Reset | FetchKind::Refresh => state.images = records,
                    }
                }
                Err(e) => {
                    warn!("Fetch {} failed: {}", request, e);
                    state.last_error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn issue(state: &mut GalleryState, kind: FetchKind) -> FetchRequest {
    state.latest_request += 1;
    state.in_flight = Some(kind);
    FetchRequest {
        id: state.latest_request,
        category: state.category,
        page: state.page,
    }
}
