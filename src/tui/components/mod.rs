//! # TUI Components
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Error: ...                    (ErrorBanner)  │
//! │ > [x] work     > 2024-01-02 09:00:00         │
//! │   [ ] ideas    > world                       │
//! │                                              │
//! │ (NotebookList)   2024-01-01 12:00:00         │
//! │                  hello        (NoteList)     │
//! │ ↑↓ move  enter open  ...      (HelpBar)      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `NotebookList`, `ErrorBanner`, `HelpBar`: everything comes in as props.
//!
//! ### Stateful Components
//!
//! - `NoteList`: borrows `NoteListState` (scroll position) from `TuiState`.
//!
//! Components never read `App` directly; the parent passes exactly the
//! fields each one needs.

pub mod error_banner;
pub mod help_bar;
pub mod note_list;
pub mod notebook_list;

pub use error_banner::ErrorBanner;
pub use help_bar::HelpBar;
pub use note_list::{NoteList, NoteListState};
pub use notebook_list::NotebookList;
