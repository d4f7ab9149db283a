//! # ErrorBanner Component
//!
//! One red line above both panes. Stateless: the event loop clears
//! `App::error` once the banner has been drawn, so each error shows once.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = Paragraph::new(format!("Error: {}", self.message))
            .style(Style::default().fg(Color::LightRed));
        frame.render_widget(banner, area);
    }
}
