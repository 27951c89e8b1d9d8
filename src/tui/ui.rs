use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AlertDialog, AlertSlot, TitleBar, UserList, UserTable};

const HELP_TEXT: &str = " ↑↓ Select  ←→ Focus  Enter Tap  d Delegate  c Closure  q Quit ";
const ALERT_HELP_TEXT: &str = " Enter/Esc OK ";

pub fn draw_ui(frame: &mut Frame, owner: &UserList, tui: &mut TuiState, alerts: &AlertSlot) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        tui.title.clone(),
        owner.user_count(),
        tui.status_message.clone(),
    )
    .render(frame, title_area);

    UserTable::new(&mut tui.table, owner).render(frame, main_area);

    let alert = alerts.current();
    let help = if alert.is_some() { ALERT_HELP_TEXT } else { HELP_TEXT };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(alert) = alert {
        AlertDialog::new(&alert).render(frame, main_area);
    }
}
