//! # TitleBar Component
//!
//! Top line showing the list title, how many users it holds, and the most
//! recent status (which channel fired last).
//!
//! Purely presentational: all data arrives as props.
//!
//! 1. **Status message**: `"List User (5) | Closure → Trần Trân"`
//! 2. **Default**: `"List User (5)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub title: String,
    pub user_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, user_count: usize, status_message: String) -> Self {
        Self {
            title,
            user_count,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("{} ({})", self.title, self.user_count)
        } else {
            format!("{} ({}) | {}", self.title, self.user_count, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_default_no_status() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new("List User".to_string(), 5, String::new());

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("List User (5)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_with_status() {
        let title_bar = TitleBar::new("List User".to_string(), 5, "Delegate → Au".to_string());
        assert_eq!(title_bar.text(), "List User (5) | Delegate → Au");
    }
}
