mod charts;
mod help;

use crate::cli::Cli;
use crate::model::Report;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use std::{io, time::Duration, time::Instant};

struct UiState {
    tab: usize,
    info: String,
    report: Report,
}

/// Run the blocking interactive viewer. Returns when the user closes it.
pub fn run(args: &Cli, report: Report) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut state = UiState {
        tab: 0,
        info: format!(
            "Loaded {} mutex + {} sem samples",
            report.mutex.samples.len(),
            report.sem.samples.len()
        ),
        report,
    };

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match (k.modifiers, k.code) {
                    (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                        break Ok(());
                    }
                    (_, KeyCode::Tab) => {
                        state.tab = (state.tab + 1) % 2;
                    }
                    (_, KeyCode::Char('?')) => {
                        state.tab = 1;
                    }
                    (_, KeyCode::Char('r')) => {
                        // Re-run the pipeline from disk; same inputs produce
                        // the same report.
                        match Report::build(&args.mutex_csv, &args.sem_csv, args.bins) {
                            Ok(fresh) => {
                                state.info = format!(
                                    "Reloaded {} mutex + {} sem samples",
                                    fresh.mutex.samples.len(),
                                    fresh.sem.samples.len()
                                );
                                state.report = fresh;
                            }
                            Err(e) => {
                                state.info = format!("Reload failed: {e:#}");
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let tabs = Tabs::new(vec![Line::from("Dashboard"), Line::from("Help")])
        .select(state.tab)
        .block(Block::default().borders(Borders::ALL).title("lockhist"))
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        0 => draw_dashboard(chunks[1], f, state),
        _ => help::draw_help(chunks[1], f),
    }
}

fn draw_dashboard(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(10),   // overlaid histogram
                Constraint::Length(4), // per-series summary lines
                Constraint::Length(3), // status row
            ]
            .as_ref(),
        )
        .split(area);

    charts::draw_histogram(f, main[0], &state.report);
    charts::draw_summaries(f, main[1], &state.report);

    let status = Paragraph::new(vec![Line::from(vec![
        Span::styled("Info: ", Style::default().fg(Color::Gray)),
        Span::raw(state.info.clone()),
        Span::raw("   "),
        Span::styled("Keys: ", Style::default().fg(Color::Gray)),
        Span::raw("q quit | r reload | tab switch | ? help"),
    ])])
    .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, main[2]);
}
