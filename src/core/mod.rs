//! # Core Application Logic
//!
//! Everything about notes that isn't about the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (browse state) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │ NoteStore  │      │   Editor   │      │    TUI     │
//!     │ (files on  │      │  Launcher  │      │  Adapter   │
//!     │   disk)    │      │ ($EDITOR)  │      │ (ratatui)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all browse state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`store`]: Notebooks and notes on disk
//! - [`editor`]: Running `$EDITOR` on a note
//! - [`write`]: The non-interactive `notes <notebook>` flow

pub mod action;
pub mod config;
pub mod editor;
pub mod error;
pub mod note;
pub mod state;
pub mod store;
pub mod write;
