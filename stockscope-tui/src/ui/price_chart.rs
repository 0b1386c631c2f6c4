//! Price chart — adjusted close overlaid with both moving averages.

use ratatui::layout::Rect;
use ratatui::style::Style;
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
    match &app.report {
        Some(report) => render_chart(f, area, report),
        None => render_empty(f, area),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Run an analysis to chart the price series.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, report: &AnalysisReport) {
    let table = &report.table;
    let closes = table.adj_closes();
    let short = table.column(columns::SHORT_MA).unwrap_or(&[]);
    let long = table.column(columns::LONG_MA).unwrap_or(&[]);

    let (y_min, y_max) = match padded_bounds(&[closes.as_slice(), short, long]) {
        Some(bounds) => bounds,
        None => {
            render_empty(f, area);
            return;
        }
    };

    let close_points = series_points(&closes);
    let short_points = series_points(short);
    let long_points = series_points(long);
    let x_max = (table.row_count().saturating_sub(1) as f64).max(1.0);

    let short_label = format!("Short MA ({})", report.windows.short_window);
    let long_label = format!("Long MA ({})", report.windows.long_window);
    let datasets = vec![
        Dataset::default()
            .name("Adj Close")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::PRICE))
            .graph_type(GraphType::Line)
            .data(&close_points),
        Dataset::default()
            .name(short_label)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::SHORT_MA))
            .graph_type(GraphType::Line)
            .data(&short_points),
        Dataset::default()
            .name(long_label)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::LONG_MA))
            .graph_type(GraphType::Line)
            .data(&long_points),
    ];

    let dates = table.dates();
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(dates.first().map(|d| d.to_string()).unwrap_or_default(), theme::muted()),
                    Span::styled(dates.last().map(|d| d.to_string()).unwrap_or_default(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price (USD)", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
