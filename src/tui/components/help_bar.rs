//! # HelpBar Component
//!
//! Bottom line listing the keys that do something in the focused pane.
//! Purely presentational: focus and selection come in as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::Focus;
use crate::tui::component::Component;

pub struct HelpBar {
    pub focus: Focus,
    /// Whether a notebook is selected (enables → and n)
    pub has_selection: bool,
}

impl HelpBar {
    pub fn new(focus: Focus, has_selection: bool) -> Self {
        Self {
            focus,
            has_selection,
        }
    }

    pub fn text(&self) -> String {
        let mut keys = vec!["↑↓ move"];
        match self.focus {
            Focus::Notebooks => {
                keys.push("enter open");
                if self.has_selection {
                    keys.extend(["→ notes", "n new", "esc close"]);
                }
            }
            Focus::Notes => {
                keys.extend(["enter expand", "e edit", "n new", "← notebooks", "esc collapse"]);
            }
        }
        keys.push("q quit");
        format!(" {}", keys.join("  "))
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
