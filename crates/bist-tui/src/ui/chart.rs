//! Decorative intraday chart.
//!
//! The series is fixed sample data, not market data; it only gives the price
//! card its shape.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

use crate::theme;

/// (time label, value) pairs from market open to close
pub const INTRADAY: [(&str, f64); 9] = [
    ("09:00", 4000.0),
    ("10:00", 3000.0),
    ("11:00", 2000.0),
    ("12:00", 2780.0),
    ("13:00", 1890.0),
    ("14:00", 2390.0),
    ("15:00", 3490.0),
    ("16:00", 3200.0),
    ("17:00", 3500.0),
];

/// Chart coordinates of [`INTRADAY`], x being the hour index
pub fn intraday_points() -> Vec<(f64, f64)> {
    INTRADAY
        .iter()
        .enumerate()
        .map(|(i, (_, value))| (i as f64, *value))
        .collect()
}

pub fn render(f: &mut Frame, area: Rect) {
    let data = intraday_points();

    let min_y = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max_y = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs() * 0.05;
    let x_max = (INTRADAY.len() - 1) as f64;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::PALETTE.accent))
        .graph_type(GraphType::Line)
        .data(&data);

    let first = INTRADAY[0].0;
    let middle = INTRADAY[INTRADAY.len() / 2].0;
    let last = INTRADAY[INTRADAY.len() - 1].0;

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(middle, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([min_y - padding, max_y + padding]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intraday_points() {
        let points = intraday_points();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], (0.0, 4000.0));
        assert_eq!(points[4], (4.0, 1890.0));
        assert_eq!(points[8], (8.0, 3500.0));
        assert_eq!(INTRADAY[8].0, "17:00");
    }
}
