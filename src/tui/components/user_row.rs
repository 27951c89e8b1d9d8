//! # UserRow Component
//!
//! One reusable list row: the bound user's name on the left and two action
//! buttons on the right. Each button notifies the row's owner through its own
//! channel.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                                                          │
//! │ Nguyễn Hải Âu                      Closure    Delegate   │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Channels
//!
//! | Button     | Field         | Holds                           | Fires with       |
//! |------------|---------------|---------------------------------|------------------|
//! | `Delegate` | `delegate`    | `Weak<dyn InfoTapDelegate>`     | `&User` (if any) |
//! | `Closure`  | `on_info_tap` | `Box<dyn Fn(Option<&User>)>`    | `Option<&User>`  |
//!
//! Both are plain props: the owner overwrites them every time it rebinds the
//! row, so a recycled row never carries a previous binding's handlers.
//!
//! ### Ownership
//!
//! The row never owns its owner. The delegate is a `Weak` handle and the
//! closure is expected to capture one too. A row outliving its owner just
//! stops notifying anyone.

use std::rc::{Rc, Weak};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::user::User;
use crate::tui::component::Component;

/// Rows are three lines tall with the content on the middle line.
pub const ROW_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 10;
const BUTTON_GAP: u16 = 1;
const TRAILING_MARGIN: u16 = 1;

const DELEGATE_COLOR: Color = Color::Rgb(153, 102, 51); // brown
const CLOSURE_COLOR: Color = Color::Rgb(128, 0, 128); // purple

/// Capability the owner implements to hear about delegate-button taps.
pub trait InfoTapDelegate {
    fn did_tap_info(&self, user: &User);
}

/// Handler fired by the closure button with whatever is bound (possibly nothing).
pub type InfoTapCallback = Box<dyn Fn(Option<&User>)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowButton {
    #[default]
    Delegate,
    Closure,
}

impl RowButton {
    pub fn label(self) -> &'static str {
        match self {
            RowButton::Delegate => "Delegate",
            RowButton::Closure => "Closure",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            RowButton::Delegate => RowButton::Closure,
            RowButton::Closure => RowButton::Delegate,
        }
    }

    fn color(self) -> Color {
        match self {
            RowButton::Delegate => DELEGATE_COLOR,
            RowButton::Closure => CLOSURE_COLOR,
        }
    }
}

/// Rects from the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct RowLayout {
    area: Rect,
    delegate: Rect,
    closure: Rect,
}

#[derive(Default)]
pub struct UserRow {
    user: Option<Rc<User>>,
    label: String,
    /// Capability channel.
    pub delegate: Option<Weak<dyn InfoTapDelegate>>,
    /// Callback channel.
    pub on_info_tap: Option<InfoTapCallback>,
    pub highlighted: bool,
    pub focused_button: RowButton,
    layout: RowLayout,
}

impl UserRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a user to this row, replacing any previous binding.
    ///
    /// A user without a name clears the label rather than leaving the
    /// previous user's name on screen.
    pub fn bind(&mut self, user: Rc<User>) {
        self.label = user.name.clone().unwrap_or_default();
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Delegate button: notify the delegate if it is still alive and a user is bound.
    pub fn tap_delegate(&self) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        if let Some(user) = self.user.as_deref() {
            delegate.did_tap_info(user);
        }
    }

    /// Closure button: call the handler with the bound user, present or not.
    pub fn tap_closure(&self) {
        if let Some(on_info_tap) = &self.on_info_tap {
            on_info_tap(self.user.as_deref());
        }
    }

    pub fn tap(&self, button: RowButton) {
        match button {
            RowButton::Delegate => self.tap_delegate(),
            RowButton::Closure => self.tap_closure(),
        }
    }

    /// Which button, if any, sits under the given terminal cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RowButton> {
        let position = Position::new(column, row);
        if self.layout.delegate.contains(position) {
            Some(RowButton::Delegate)
        } else if self.layout.closure.contains(position) {
            Some(RowButton::Closure)
        } else {
            None
        }
    }

    /// Whether the given terminal cell falls anywhere inside this row.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.layout.area.contains(Position::new(column, row))
    }

    fn button_style(&self, button: RowButton) -> Style {
        let style = Style::default().fg(Color::White).bg(button.color());
        if self.highlighted && self.focused_button == button {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl Component for UserRow {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Fill, Length, Min};

        if self.highlighted {
            frame.render_widget(Block::default().style(Style::default().bg(Color::DarkGray)), area);
        }

        let [_, line, _] = Layout::vertical([Fill(1), Length(1), Fill(1)]).areas(area);
        let [label_area, closure_area, _, delegate_area, _] = Layout::horizontal([
            Min(0),
            Length(BUTTON_WIDTH),
            Length(BUTTON_GAP),
            Length(BUTTON_WIDTH),
            Length(TRAILING_MARGIN),
        ])
        .areas(line);

        let label_width = label_area.width.saturating_sub(2) as usize; // leading space + gap
        let label = format!(" {}", truncate_to_width(&self.label, label_width));
        let label_style = if self.highlighted {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(label).style(label_style), label_area);

        for (button, button_area) in [
            (RowButton::Closure, closure_area),
            (RowButton::Delegate, delegate_area),
        ] {
            let widget = Paragraph::new(button.label())
                .alignment(Alignment::Center)
                .style(self.button_style(button));
            frame.render_widget(widget, button_area);
        }

        self.layout = RowLayout {
            area,
            delegate: delegate_area,
            closure: closure_area,
        };
    }
}

/// Truncate to `max_width` terminal columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}
