//! Single-screen layout — form, preview, charts, status line.

pub mod form;
pub mod preview_panel;
pub mod price_chart;
pub mod returns_chart;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    // Form on the left, preview and charts stacked on the right.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(40)])
        .split(main_area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(34),
            Constraint::Percentage(34),
        ])
        .split(columns[1]);

    draw_panel(f, columns[0], " Parameters ", true, |f, inner| {
        form::render(f, inner, app)
    });

    draw_panel(f, right[0], " Preview ", false, |f, inner| {
        preview_panel::render(f, inner, app)
    });

    let price_title = match &app.report {
        Some(report) => format!(" {} Price & Moving Averages ", report.ticker),
        None => " Price & Moving Averages ".to_string(),
    };
    draw_panel(f, right[1], &price_title, false, |f, inner| {
        price_chart::render(f, inner, app)
    });

    draw_panel(f, right[2], " Daily Returns & Volatility ", false, |f, inner| {
        returns_chart::render(f, inner, app)
    });

    status_bar::render(f, status_area, app);
}

/// Draw one bordered panel and render its body into the inner rect.
fn draw_panel<F>(f: &mut Frame, area: Rect, title: &str, active: bool, body: F)
where
    F: FnOnce(&mut Frame, Rect),
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(title.to_string())
        .title_style(theme::panel_title(active));

    let inner = block.inner(area);
    f.render_widget(block, area);
    body(f, inner);
}

/// (x, y) chart points for a series, with warm-up NaNs left out as gaps.
pub(crate) fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Padded y-axis bounds over every finite value of the given series, or
/// `None` when nothing is plottable yet.
pub(crate) fn padded_bounds(series: &[&[f64]]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for s in series {
        for v in s.iter().filter(|v| v.is_finite()) {
            min_y = min_y.min(*v);
            max_y = max_y.max(*v);
        }
    }
    if min_y > max_y {
        return None;
    }

    // A flat series still needs a visible span.
    let span = max_y - min_y;
    let padding = if span > 0.0 {
        span * 0.05
    } else {
        max_y.abs().max(1.0) * 0.05
    };
    Some((min_y - padding, max_y + padding))
}
