//! # NoteList Component
//!
//! Right pane: the selected notebook's notes, newest first.
//!
//! ```text
//! > 2024-01-02 09:00:00     cursor block (note pane focused)
//! > world
//!
//!   2024-01-01 12:00:00
//!   hello ... second paragraph
//! ```
//!
//! Each block is a timestamp line followed by either a one-line preview or,
//! for the expanded note, the whole content wrapped to the pane width.
//!
//! ## Architecture
//!
//! `NoteList` is a transient component (created each frame) wrapping
//! `&'a mut NoteListState` (persistent scroll state) and the notes (props).
//! Block heights are measured up front so the viewport can be scrolled to
//! keep the cursor block fully visible before anything is drawn.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::note::Note;
use crate::tui::component::Component;

const CURSOR_MARKER: &str = "> ";
const BLANK_MARKER: &str = "  ";
/// Columns taken by the left marker.
const MARKER_WIDTH: u16 = 2;
/// Blank rows between blocks.
const BLOCK_GAP: u16 = 1;

/// Scroll state for the note pane. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct NoteListState {
    pub scroll_state: ScrollViewState,
    /// Height of each block from the last render, gap included
    pub heights: Vec<u16>,
    /// Last known viewport height
    pub viewport_height: u16,
}

impl NoteListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so the block at `index` is fully visible.
    /// A block taller than the viewport is aligned to its top edge.
    pub fn scroll_to(&mut self, index: usize) {
        if index >= self.heights.len() {
            return;
        }
        let top = stacked_height(&self.heights[..index]);
        let bottom = top.saturating_add(self.heights[index].saturating_sub(BLOCK_GAP));
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y || bottom - top > self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }

    /// Never scroll past the end of the content.
    pub fn clamp_scroll(&mut self) {
        let total = stacked_height(&self.heights);
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Sum of block heights, pinned at `u16::MAX` for oversized notes.
fn stacked_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0, |acc, h| acc.saturating_add(*h))
}

pub struct NoteList<'a> {
    pub state: &'a mut NoteListState,
    pub notes: &'a [Note],
    /// Block carrying the cursor marker; `None` when the pane is unfocused
    pub cursor: Option<usize>,
    /// Block shown in full
    pub expanded: Option<usize>,
}

impl<'a> NoteList<'a> {
    pub fn new(
        state: &'a mut NoteListState,
        notes: &'a [Note],
        cursor: Option<usize>,
        expanded: Option<usize>,
    ) -> Self {
        Self {
            state,
            notes,
            cursor,
            expanded,
        }
    }
}

/// Lines of one note block, markers included.
fn block_lines(note: &Note, is_cursor: bool, is_expanded: bool, width: u16) -> Vec<Line<'static>> {
    let marker_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let marker = || {
        if is_cursor {
            Span::styled(CURSOR_MARKER, marker_style)
        } else {
            Span::raw(BLANK_MARKER)
        }
    };

    let mut lines = vec![Line::from(vec![
        marker(),
        Span::styled(note.display_time(), Style::default().add_modifier(Modifier::BOLD)),
    ])];

    let body: Vec<String> = if is_expanded {
        wrap_content(&note.content, width.saturating_sub(MARKER_WIDTH))
    } else {
        vec![note.preview()]
    };
    lines.extend(
        body.into_iter()
            .map(|text| Line::from(vec![marker(), Span::raw(text)])),
    );
    lines
}

/// Word-wrap every line of `content` to `width`, keeping blank lines.
fn wrap_content(content: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut out = Vec::new();
    for line in content.trim_end().lines() {
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.extend(textwrap::wrap(line, width).into_iter().map(|l| l.into_owned()));
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

impl Component for NoteList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.notes.is_empty() {
            let empty = Paragraph::new("No notes yet. Press n to write one.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1);
        let blocks: Vec<Vec<Line>> = self
            .notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                block_lines(
                    note,
                    self.cursor == Some(i),
                    self.expanded == Some(i),
                    content_width,
                )
            })
            .collect();

        self.state.heights = blocks
            .iter()
            .map(|lines| u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(BLOCK_GAP))
            .collect();
        self.state.viewport_height = area.height;
        if let Some(cursor) = self.cursor {
            self.state.scroll_to(cursor);
        }
        self.state.clamp_scroll();

        let total_height = stacked_height(&self.state.heights);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (lines, height) in blocks.into_iter().zip(self.state.heights.iter()) {
            let rect = Rect::new(0, y_offset, content_width, height.saturating_sub(BLOCK_GAP));
            scroll_view.render_widget(Paragraph::new(lines), rect);
            y_offset = y_offset.saturating_add(*height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
