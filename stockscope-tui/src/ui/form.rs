//! Parameter form — ticker, date range, window sliders.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{
    AppState, Field, LONG_WINDOW_BOUNDS, SHORT_WINDOW_BOUNDS, VOLATILITY_WINDOW_BOUNDS,
};
use crate::theme;

const SLIDER_WIDTH: usize = 16;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[Tab]field [←/→]adjust [Enter]analyze",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    text_field(&mut lines, app, Field::Ticker, &app.ticker_input);
    text_field(&mut lines, app, Field::StartDate, &app.start_input);
    text_field(&mut lines, app, Field::EndDate, &app.end_input);
    lines.push(Line::from(""));

    slider_field(
        &mut lines,
        app,
        Field::ShortWindow,
        app.windows.short_window,
        SHORT_WINDOW_BOUNDS.min,
        SHORT_WINDOW_BOUNDS.max,
    );
    slider_field(
        &mut lines,
        app,
        Field::LongWindow,
        app.windows.long_window,
        LONG_WINDOW_BOUNDS.min,
        LONG_WINDOW_BOUNDS.max,
    );
    slider_field(
        &mut lines,
        app,
        Field::VolatilityWindow,
        app.windows.volatility_window,
        VOLATILITY_WINDOW_BOUNDS.min,
        VOLATILITY_WINDOW_BOUNDS.max,
    );

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", theme::muted()),
        Span::styled("Enter", theme::accent_bold()),
        Span::styled(" to analyze, ", theme::muted()),
        Span::styled("Esc", theme::accent_bold()),
        Span::styled(" to quit", theme::muted()),
    ]));

    f.render_widget(Paragraph::new(lines), area);
}

fn text_field(lines: &mut Vec<Line>, app: &AppState, field: Field, value: &str) {
    let focused = app.focus == field;
    let label_style = if focused {
        theme::accent_bold()
    } else {
        theme::neutral()
    };
    let value_style = if focused {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    };

    // A trailing underscore marks the insertion point on the focused field.
    let shown = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };

    lines.push(Line::from(vec![
        Span::styled(format!("{:>18}: ", field.label()), label_style),
        Span::styled(shown, value_style),
    ]));
}

fn slider_field(
    lines: &mut Vec<Line>,
    app: &AppState,
    field: Field,
    value: usize,
    min: usize,
    max: usize,
) {
    let focused = app.focus == field;
    let label_style = if focused {
        theme::accent_bold()
    } else {
        theme::neutral()
    };
    let bar_style = if focused { theme::accent() } else { theme::muted() };

    let bar = render_slider_inline(value as f64, min as f64, max as f64, SLIDER_WIDTH);

    lines.push(Line::from(vec![
        Span::styled(format!("{:>18}: ", field.label()), label_style),
        Span::styled(bar, bar_style),
        Span::styled(format!(" {value:>3}"), label_style),
    ]));
}

fn render_slider_inline(value: f64, min: f64, max: f64, width: usize) -> String {
    let range = max - min;
    if range <= 0.0 {
        return format!("[{}]", "=".repeat(width));
    }
    let frac = ((value - min) / range).clamp(0.0, 1.0);
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
