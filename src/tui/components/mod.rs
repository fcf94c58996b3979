//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields and implement
//! `Component`:
//! - `TitleBar`: breadcrumbs, favorites count and status
//! - `SliderView`: the current slide, dots and autoplay progress
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that own presentation state and emit events:
//! - `SearchBox`: single-line search input
//! - `AnimalList` + `ListSelection`: paginated list for Browse and Favorites
//! - `DetailView` + `DetailState`: scrollable animal profile
//! - `FilterPicker` + `FilterPickerState`: filter overlay
//!
//! Components receive external data as props, never by reaching into `App`.
//! That keeps dependencies explicit and each component testable on its own
//! with ratatui's `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── slider_view.rs
//! ├── search_box.rs
//! ├── animal_list.rs
//! ├── detail.rs
//! └── filter_picker.rs
//! ```

pub mod animal_list;
pub mod detail;
pub mod filter_picker;
pub mod search_box;
pub mod slider_view;
pub mod title_bar;

pub use animal_list::{AnimalList, ListSelection};
pub use detail::{DetailState, DetailView};
pub use filter_picker::{FilterPicker, FilterPickerEvent, FilterPickerState};
pub use search_box::{SEARCH_BOX_HEIGHT, SearchBox, SearchEvent};
pub use slider_view::SliderView;
pub use title_bar::{StatusKind, TitleBar};
