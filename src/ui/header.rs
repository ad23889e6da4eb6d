use crate::ui::selection::{Readiness, SelectionPhase, SelectionState};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &SelectionState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let view = &state.view;

        let mut spans = vec![
            Span::styled("  Port Switch", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Ingress {}  Egress {}", view.num_ingress, view.num_egress),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Connections {}", view.pairing.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(selection_summary(state.phase()), text_style),
        ];

        if let Some(command) = state.pending {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Working: {}", command),
                Style::default().fg(STATUS_BUSY),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

pub fn selection_summary(phase: SelectionPhase) -> String {
    match phase {
        SelectionPhase::NoneSelected => "Nothing selected".to_string(),
        SelectionPhase::IngressOnly(ingress) => format!("Ingress {} selected", ingress),
        SelectionPhase::EgressOnly(egress) => format!("Egress {} selected", egress),
        SelectionPhase::BothSelected {
            ingress,
            egress,
            readiness,
        } => {
            let hint = match readiness {
                Readiness::ReadyToConnect => "ready to connect",
                Readiness::ReadyToDisconnect => "connected",
            };
            format!("{} -> {} ({})", ingress, egress, hint)
        }
    }
}
