use crate::ui::selection::ActionSet;
use crate::ui::theme::{CONTROL_DISABLED, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints; `None` means always available.
const HINTS: [(&str, Option<Action>); 7] = [
    ("Arrows: Move", None),
    ("Tab: Ingress/Egress", None),
    ("Enter: Select", None),
    ("c: Connect", Some(Action::Connect)),
    ("d: Disconnect", Some(Action::Disconnect)),
    ("a: Disconnect All", Some(Action::DisconnectAll)),
    ("q: Quit", None),
];

#[derive(Clone, Copy)]
enum Action {
    Connect,
    Disconnect,
    DisconnectAll,
}

impl Action {
    fn enabled(self, actions: ActionSet) -> bool {
        match self {
            Action::Connect => actions.connect,
            Action::Disconnect => actions.disconnect,
            Action::DisconnectAll => actions.disconnect_all,
        }
    }
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints, with control keys dimmed while their action is unavailable.
    pub fn widget(&self, area: Rect, actions: ActionSet) -> Paragraph<'static> {
        let mut spans = hint_spans(actions);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        spans.push(Span::styled(" ".repeat(padding), dim));
        spans.push(Span::styled(version, dim));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hint_spans(actions: ActionSet) -> Vec<Span<'static>> {
    let enabled = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let disabled = Style::default().fg(CONTROL_DISABLED);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        let style = match action {
            Some(action) if !action.enabled(actions) => disabled,
            _ => enabled,
        };
        spans.push(Span::styled(*label, style));
    }
    spans
}
