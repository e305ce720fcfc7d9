//! # Core Application Logic
//!
//! This module contains the gallery's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (gallery data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Navigator (routes)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    API     │
//!          │  Adapter   │                │  (search)  │
//!          │ (ratatui)  │                │  reqwest   │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `GalleryState` and `Category`
//! - [`action`]: `Action`, `Effect`, and `update()`
//! - [`navigation`]: the route stack
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod navigation;
pub mod state;

pub use action::{Action, Effect, FetchRequest, update};
pub use navigation::{Navigator, Route};
pub use state::{Category, GalleryState};
