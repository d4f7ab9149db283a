//! # NotebookList Component
//!
//! Left pane: one row per notebook.
//!
//! ```text
//! > [x] work      cursor here, this notebook's notes are shown
//!   [ ] ideas
//! ```
//!
//! The cursor marker is dimmed while the note pane has focus, so it's clear
//! which pane the arrow keys will move.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::note::Notebook;
use crate::tui::component::Component;

/// Columns taken by `"> [x] "` before the name.
const ROW_PREFIX_WIDTH: u16 = 6;

pub struct NotebookList<'a> {
    pub notebooks: &'a [Notebook],
    pub cursor: usize,
    pub selected: Option<usize>,
    /// Whether this pane has focus
    pub focused: bool,
}

impl<'a> NotebookList<'a> {
    pub fn new(
        notebooks: &'a [Notebook],
        cursor: usize,
        selected: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            notebooks,
            cursor,
            selected,
            focused,
        }
    }

    /// Width needed to show every name without clipping.
    pub fn width(notebooks: &[Notebook]) -> u16 {
        let longest = notebooks
            .iter()
            .map(|nb| nb.name.width())
            .max()
            .unwrap_or(0);
        ROW_PREFIX_WIDTH + u16::try_from(longest).unwrap_or(u16::MAX - ROW_PREFIX_WIDTH)
    }

    fn row(&self, index: usize, notebook: &'a Notebook) -> Line<'a> {
        let cursor = if index == self.cursor {
            let style = if self.focused {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Span::styled(">", style)
        } else {
            Span::raw(" ")
        };
        let checked = if self.selected == Some(index) { "x" } else { " " };

        Line::from(vec![
            cursor,
            Span::raw(format!(" [{checked}] ")),
            Span::raw(notebook.name.as_str()),
        ])
    }
}

impl Component for NotebookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .notebooks
            .iter()
            .enumerate()
            .map(|(i, nb)| self.row(i, nb))
            .collect();

        // Keep the cursor row on screen for long notebook lists
        let visible = area.height as usize;
        let scroll = if visible > 0 && self.cursor >= visible {
            self.cursor + 1 - visible
        } else {
            0
        };
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
    }
}
