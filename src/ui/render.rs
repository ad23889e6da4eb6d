use crate::service::CommandSink;
use crate::switch::PortRole;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, centered_rect, layout_regions};
use crate::ui::selection::{ActionSet, PortClass};
use crate::ui::theme::{
    CONTROL_DISABLED, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, PORT_CONNECTED,
    PORT_DISCONNECTED, PORT_HIGHLIGHT, PORT_SELECTED, STATUS_ERROR,
};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<C: CommandSink>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.controller().state();

    frame.render_widget(Header::new().widget(state), header);

    let (ingress, egress, controls) = body_sections(
        body,
        app.grid_rows(PortRole::Ingress) as u16,
        app.grid_rows(PortRole::Egress) as u16,
    );
    frame.render_widget(port_grid(app, PortRole::Ingress), ingress);
    frame.render_widget(port_grid(app, PortRole::Egress), egress);
    frame.render_widget(control_bar(app.controller().available_actions()), controls);

    frame.render_widget(
        Footer::new().widget(footer, app.controller().available_actions()),
        footer,
    );

    if let Some(err) = app.controller().last_error() {
        let popup = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(error_popup(err.title(), &err.to_string()), popup);
    }
}

fn port_grid<C: CommandSink>(app: &App<C>, role: PortRole) -> Paragraph<'static> {
    let state = app.controller().state();
    let width = app.layout_width() as usize;
    let cursor = app.cursor();

    let lines: Vec<Line<'static>> = state
        .port_views(role)
        .chunks(width)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for view in row {
                let mut style = match view.class {
                    PortClass::Selected => Style::default()
                        .fg(Color::White)
                        .bg(PORT_SELECTED)
                        .add_modifier(Modifier::BOLD),
                    PortClass::Connected => Style::default().fg(PORT_CONNECTED),
                    PortClass::Disconnected => Style::default().fg(PORT_DISCONNECTED),
                };
                if view.class != PortClass::Selected && app.is_highlighted(role, view.id) {
                    style = style.fg(Color::Black).bg(PORT_HIGHLIGHT);
                }
                if cursor.role == role && cursor.port == view.id {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {:>3} ", view.id), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let title = match role {
        PortRole::Ingress => " Ingress ",
        PortRole::Egress => " Egress ",
    };
    let border = if cursor.role == role {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    )
}

fn control_bar(actions: ActionSet) -> Paragraph<'static> {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(CONTROL_DISABLED)
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    let line = Line::from(vec![
        button("Connect", actions.connect),
        Span::raw("   "),
        button("Disconnect", actions.disconnect),
        Span::raw("   "),
        button("Disconnect All", actions.disconnect_all),
    ]);

    Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn error_popup(title: &str, message: &str) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from("Esc/Enter: Dismiss"),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        )
}
