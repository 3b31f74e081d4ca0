use crate::fetch::HttpClient;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, BODY_TEXT, HEADER_TEXT, STATUS_ERROR, STATUS_PENDING};
use crate::view::RenderOutput;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw<C: HttpClient>(frame: &mut Frame<'_>, app: &App<C>) {
    let (header, body, footer) = layout_regions(frame.area());
    let view = app.view();

    let header_widget = Header::new(
        view.endpoint(),
        view.param(),
        view.mode().label(),
        view.state(),
    );
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let lines: Vec<Line<'static>> = body_lines(&view.render(), app.animation_tick())
        .into_iter()
        .skip(app.scroll() as usize)
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);

    frame.render_widget(Footer::widget(footer), footer);
}

/// Lines for the body region.
pub fn body_lines(output: &RenderOutput, animation_tick: u8) -> Vec<Line<'static>> {
    match output {
        RenderOutput::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Nothing fetched yet. Press r to fetch.",
                Style::default().fg(BODY_TEXT),
            )),
        ],
        RenderOutput::Loading => {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_PENDING)),
                    Span::styled("Loading...", Style::default().fg(HEADER_TEXT)),
                ]),
            ]
        }
        RenderOutput::Error(message) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Error: ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.clone(), Style::default().fg(HEADER_TEXT)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Press r to retry.",
                Style::default().fg(BODY_TEXT),
            )),
        ],
        RenderOutput::List { heading, entries } => {
            let mut lines = Vec::with_capacity(entries.len() * 3 + 2);
            if let Some(heading) = heading {
                lines.push(Line::from(Span::styled(
                    format!(" {}", heading),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            for entry in entries {
                lines.push(Line::from(Span::styled(
                    format!(" - {}", entry.title),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )));
                for body_line in entry.body.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("   {}", body_line),
                        Style::default().fg(BODY_TEXT),
                    )));
                }
                lines.push(Line::from(""));
            }
            lines
        }
    }
}
