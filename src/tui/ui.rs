use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Focus};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorBanner, HelpBar, NoteList, NotebookList};

/// Columns between the notebook pane and the note pane.
const PANE_GAP: u16 = 2;

/// Draw one frame. Reads `app` only; scroll positions live in `tui`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let banner_height = if app.error.is_some() { 1 } else { 0 };
    let [banner_area, main_area, help_area] =
        Layout::vertical([Length(banner_height), Min(0), Length(1)]).areas(frame.area());

    if let Some(message) = &app.error {
        ErrorBanner::new(message).render(frame, banner_area);
    }

    draw_panes(frame, inset(main_area), app, tui);

    HelpBar::new(app.focus, app.selected_notebook.is_some()).render(frame, help_area);
}

fn draw_panes(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let notebooks_width = NotebookList::width(&app.notebooks) + PANE_GAP;
    let [notebooks_area, notes_area] =
        Layout::horizontal([Length(notebooks_width), Min(0)]).areas(area);

    if app.notebooks.is_empty() {
        frame.render_widget(
            Paragraph::new("No notebooks yet. Run `notes <notebook>` to start one."),
            area,
        );
        return;
    }

    NotebookList::new(
        &app.notebooks,
        app.cursor_notebook,
        app.selected_notebook,
        app.focus == Focus::Notebooks,
    )
    .render(frame, notebooks_area);

    if app.selected_notebook.is_some() {
        let cursor = (app.focus == Focus::Notes).then_some(app.cursor_note);
        NoteList::new(
            &mut tui.note_list,
            app.selected_notes(),
            cursor,
            app.selected_note,
        )
        .render(frame, notes_area);
    }
}

/// Leave a two-column left margin and a one-column right margin.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2).min(area.right()),
        width: area.width.saturating_sub(3),
        ..area
    }
}
