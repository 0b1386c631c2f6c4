//! Data preview — evenly spaced rows of the augmented table.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use stockscope_core::domain::columns;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let report = match &app.report {
        Some(report) => report,
        None => {
            render_empty(f, area);
            return;
        }
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "{} from {} to {} — {} trading days",
            report.ticker,
            report.start,
            report.end,
            report.table.row_count()
        ),
        theme::neutral(),
    )));

    lines.push(Line::from(Span::styled(
        format!(
            "{:<12} {:>10} {:>9} {:>10} {:>10} {:>9}",
            "Date", "Adj Close", "Return", "Short MA", "Long MA", "Volat"
        ),
        theme::accent(),
    )));

    let table = &report.table;
    let returns = table.column(columns::DAILY_RETURN);
    let short = table.column(columns::SHORT_MA);
    let long = table.column(columns::LONG_MA);
    let vol = table.column(columns::VOLATILITY);

    // Rows beyond the panel height simply clip; the sample is ~20 rows.
    for &i in &report.preview_rows {
        let bar = &table.bars()[i];
        let ret = value_at(returns, i);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", bar.date.to_string()), theme::muted()),
            Span::raw(format!(" {:>10}", fmt_cell(bar.adj_close, 2))),
            Span::styled(
                format!(" {:>9}", fmt_cell(ret, 4)),
                if ret.is_nan() { theme::muted() } else { theme::signed(ret) },
            ),
            Span::raw(format!(" {:>10}", fmt_cell(value_at(short, i), 2))),
            Span::raw(format!(" {:>10}", fmt_cell(value_at(long, i), 2))),
            Span::raw(format!(" {:>9}", fmt_cell(value_at(vol, i), 4))),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No analysis yet.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "Fill in the parameters and press Enter.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn value_at(column: Option<&[f64]>, i: usize) -> f64 {
    column.and_then(|c| c.get(i)).copied().unwrap_or(f64::NAN)
}

/// Warm-up values render as a dash, not a number.
fn fmt_cell(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.precision$}")
    }
}
