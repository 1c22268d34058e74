use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

use crate::hist;
use crate::model::{Report, Series, CHART_TITLE, X_LABEL, Y_LABEL};

// skyblue / salmon, the two fixed series colors of the comparison chart
pub(crate) const MUTEX_COLOR: Color = Color::Rgb(135, 206, 235);
pub(crate) const SEM_COLOR: Color = Color::Rgb(250, 128, 114);

/// Render both series' bin counts overlaid on one chart. Named datasets give
/// the legend; axis titles carry the fixed labels.
pub(crate) fn draw_histogram(f: &mut Frame, area: Rect, report: &Report) {
    let centers = hist::centers(&report.edges);
    let mutex_points: Vec<(f64, f64)> = centers
        .iter()
        .zip(&report.mutex.counts)
        .map(|(&x, &c)| (x, c as f64))
        .collect();
    let sem_points: Vec<(f64, f64)> = centers
        .iter()
        .zip(&report.sem.counts)
        .map(|(&x, &c)| (x, c as f64))
        .collect();

    let x_min = report.edges.first().copied().unwrap_or(0.0);
    let x_max = report.edges.last().copied().unwrap_or(1.0);
    let peak = report
        .mutex
        .counts
        .iter()
        .chain(&report.sem.counts)
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    // headroom so the tallest bin does not touch the frame
    let y_max = peak * 1.1;

    let datasets = vec![
        Dataset::default()
            .name(report.mutex.label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(MUTEX_COLOR))
            .data(&mutex_points),
        Dataset::default()
            .name(report.sem.label)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(SEM_COLOR))
            .data(&sem_points),
    ];

    let x_axis = Axis::default()
        .title(X_LABEL)
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
            Line::from(format!("{x_min:.0}")),
            Line::from(format!("{:.0}", (x_min + x_max) / 2.0)),
            Line::from(format!("{x_max:.0}")),
        ]);
    let y_axis = Axis::default()
        .title(Y_LABEL)
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, y_max])
        .labels(vec![
            Line::from("0"),
            Line::from(format!("{:.0}", y_max / 2.0)),
            Line::from(format!("{y_max:.0}")),
        ]);

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(CHART_TITLE))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight));
    f.render_widget(chart, area);
}

/// One stat line per series under the chart.
pub(crate) fn draw_summaries(f: &mut Frame, area: Rect, report: &Report) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .margin(1)
        .split(area);

    let block = Block::default().borders(Borders::ALL).title("Summary");
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(summary_line(&report.mutex, MUTEX_COLOR)),
        rows[0],
    );
    f.render_widget(Paragraph::new(summary_line(&report.sem, SEM_COLOR)), rows[1]);
}

fn summary_line(series: &Series, color: Color) -> Line<'_> {
    let m = &series.summary;
    let stat = |label: &'static str, value: String| {
        vec![
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::raw(value),
        ]
    };

    let mut spans = vec![Span::styled(
        format!("{:<9}", series.label),
        Style::default().fg(color),
    )];
    spans.extend(stat(" n ", format!("{}", m.count)));
    spans.extend(stat("  min ", format!("{:.0}", m.min_ns)));
    spans.extend(stat("  max ", format!("{:.0}", m.max_ns)));
    spans.extend(stat("  avg ", format!("{:.1}", m.mean_ns)));
    spans.extend(stat("  med ", format!("{:.0}", m.median_ns)));
    spans.extend(stat("  p95 ", format!("{:.0}", m.p95_ns)));
    spans.extend(stat("  p99 ", format!("{:.0}", m.p99_ns)));
    spans.extend(stat("  stddev ", format!("{:.1} ns", m.stddev_ns)));
    Line::from(spans)
}
