//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status line
//! - `ImageCard`: one gallery entry
//! - `ProgressBar`: loaded-vs-assumed gauge
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose persistent state lives in `TuiState` and that are wrapped
//! with borrowed data each frame:
//! - `GalleryList`: scrollable card list, emits open / reached-end
//! - `CategoryPicker`: overlay for switching topics
//! - `DetailView`: scrollable detail screen
//!
//! Components receive external data as props, never by reaching into
//! `GalleryState` themselves:
//!
//! ```rust,ignore
//! ProgressBar::new(state.progress()).render(frame, area);
//! GalleryList::new(&mut tui.gallery, &state.images).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status line)
//! ├── image_card.rs       (single card)
//! ├── progress_bar.rs     (gauge)
//! ├── gallery_list.rs     (card list)
//! ├── category_picker.rs  (overlay)
//! └── detail_view.rs      (detail screen)
//! ```

pub mod category_picker;
pub mod detail_view;
pub mod gallery_list;
pub mod image_card;
pub mod progress_bar;
mod title_bar;

pub use category_picker::{CategoryPicker, CategoryPickerEvent, CategoryPickerState};
pub use detail_view::{DetailView, DetailViewState};
pub use gallery_list::{GalleryEvent, GalleryList, GalleryListState};
pub use progress_bar::ProgressBar;
pub use title_bar::TitleBar;
