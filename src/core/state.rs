//! # Gallery State
//!
//! Core business state for the gallery screen. Domain data only; no
//! terminal types. Presentation state (selection, scroll offsets, overlays)
//! lives in the `tui` module.
//!
//! ```text
//! GalleryState
//! ├── category: Category          // what we are browsing
//! ├── page: u32                   // last requested page (>= 1)
//! ├── images: Vec<ImageRecord>    // arrival order, appended across pages
//! ├── loading: bool               // a fetch is in flight
//! ├── refreshing: bool            // the in-flight fetch is a refresh
//! ├── assumed_total: usize        // progress denominator (API gives none)
//! ├── latest_request: u64         // token of the newest issued fetch
//! ├── in_flight: Option<FetchKind>// what the newest fetch will do on resolve
//! └── last_error: Option<String>  // diagnostics from the last failed fetch
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::ImageRecord;

/// Progress denominator used when nothing else is configured.
pub const DEFAULT_ASSUMED_TOTAL: usize = 100;

/// The fixed set of browsable topics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sun,
    #[default]
    Earth,
    Moon,
    Mars,
    Jupiter,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sun,
        Category::Earth,
        Category::Moon,
        Category::Mars,
        Category::Jupiter,
    ];

    /// Search term sent to the archive.
    pub fn query(self) -> &'static str {
        match self {
            Category::Sun => "sun",
            Category::Earth => "earth",
            Category::Moon => "moon",
            Category::Mars => "mars",
            Category::Jupiter => "jupiter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Sun => "Sun",
            Category::Earth => "Earth",
            Category::Moon => "Moon",
            Category::Mars => "Mars",
            Category::Jupiter => "Jupiter",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query())
    }
}

/// What a fetch does to `images` once it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Category change: replace, clear `loading`.
    Reset,
    /// Scroll-to-end: append, clear `loading`.
    Append,
    /// Pull-to-refresh: replace, clear `loading` and `refreshing`.
    Refresh,
}

pub struct GalleryState {
    pub category: Category,
    pub page: u32,
    pub images: Vec<ImageRecord>,
    pub loading: bool,
    pub refreshing: bool,
    pub assumed_total: usize,
    pub latest_request: u64,
    pub in_flight: Option<FetchKind>,
    pub last_error: Option<String>,
}

impl GalleryState {
    pub fn new(category: Category, assumed_total: usize) -> Self {
        Self {
            category,
            page: 1,
            images: Vec::new(),
            loading: false,
            refreshing: false,
            assumed_total,
            latest_request: 0,
            in_flight: None,
            last_error: None,
        }
    }

    /// Loaded-vs-assumed ratio, clamped to `[0, 1]`.
    ///
    /// The archive does not report a total, so this is a display-only
    /// approximation against `assumed_total`.
    pub fn progress(&self) -> f64 {
        if self.assumed_total == 0 {
            return 0.0;
        }
        (self.images.len() as f64 / self.assumed_total as f64).min(1.0)
    }

    /// Rounded percentage for labels.
    pub fn progress_percent(&self) -> u16 {
        (self.progress() * 100.0).round() as u16
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Category::default(), DEFAULT_ASSUMED_TOTAL)
    }
}
