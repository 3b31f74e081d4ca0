use crate::ui::request::RequestState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: resource being viewed, fetch mode and request status.
pub struct Header<'a> {
    endpoint: &'a str,
    param: Option<&'a str>,
    mode: &'static str,
    state: &'a RequestState,
}

impl<'a> Header<'a> {
    pub fn new(
        endpoint: &'a str,
        param: Option<&'a str>,
        mode: &'static str,
        state: &'a RequestState,
    ) -> Self {
        Self {
            endpoint,
            param,
            mode,
            state,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(match self.state {
            RequestState::Succeeded(_) => STATUS_OK,
            RequestState::Failed(_) => STATUS_ERROR,
            RequestState::Loading => STATUS_PENDING,
            RequestState::Idle => HEADER_SEPARATOR,
        });
        let resource = match self.param {
            Some(param) => format!("{}/{}", self.endpoint.trim_end_matches('/'), param),
            None => self.endpoint.to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ● ", status_style),
            Span::styled(
                "feedview",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(resource, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.mode, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.state.label(), status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
