//! Bottom status bar — run phase and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Phase, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " Enter:Analyze  Tab:Field  \u{2190}/\u{2192}:Adjust  Esc:Quit",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));

    let phase = match app.phase {
        Phase::Idle => None,
        Phase::Fetching => Some("Fetching"),
        Phase::Computing => Some("Computing"),
        Phase::Rendering => Some("Rendering"),
    };
    if let Some(phase) = phase {
        spans.push(Span::styled(format!("{phase}... "), theme::warning()));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
