//! Returns/volatility panel — two stacked plots over the same date axis.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use stockscope_core::analysis::AnalysisReport;
use stockscope_core::domain::columns;

use crate::app::AppState;
use crate::theme;
use crate::ui::{padded_bounds, series_points};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let report = match &app.report {
        Some(report) => report,
        None => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Run an analysis to chart returns and volatility.",
                    theme::muted(),
                )),
            ];
            f.render_widget(Paragraph::new(lines), area);
            return;
        }
    };

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let table = &report.table;
    render_series(
        f,
        halves[0],
        report,
        table.column(columns::DAILY_RETURN).unwrap_or(&[]),
        "Daily Returns",
        theme::RETURNS,
    );
    render_series(
        f,
        halves[1],
        report,
        table.column(columns::VOLATILITY).unwrap_or(&[]),
        "Volatility",
        theme::VOLATILITY,
    );
}

fn render_series(
    f: &mut Frame,
    area: Rect,
    report: &AnalysisReport,
    values: &[f64],
    label: &str,
    color: Color,
) {
    let (y_min, y_max) = match padded_bounds(&[values]) {
        Some(bounds) => bounds,
        None => {
            // Nothing past the warm-up yet — the window is longer than the range.
            let lines = vec![Line::from(Span::styled(
                format!("{label}: not enough trading days for this window"),
                theme::muted(),
            ))];
            f.render_widget(Paragraph::new(lines), area);
            return;
        }
    };

    let points = series_points(values);
    let x_max = (report.table.row_count().saturating_sub(1) as f64).max(1.0);

    let dataset = Dataset::default()
        .name(label)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(color))
        .graph_type(GraphType::Line)
        .data(&points);

    let dates = report.table.dates();
    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(
                        dates.first().map(|d| d.to_string()).unwrap_or_default(),
                        theme::muted(),
                    ),
                    Span::styled(
                        dates.last().map(|d| d.to_string()).unwrap_or_default(),
                        theme::muted(),
                    ),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.4}"), theme::muted()),
                    Span::styled(format!("{y_max:.4}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
