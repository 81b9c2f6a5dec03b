//! Sortviz - Terminal User Interface
//!
//! A TUI visualization of comparison sorts using ratatui.
//! App logic lives in `sortviz::tui::app`.

#![forbid(unsafe_code)]

fn main() -> std::io::Result<()> {
    use sortviz::config::VizConfig;
    use sortviz::tui::SortApp;

    let app = match std::env::args().nth(1) {
        Some(path) => match VizConfig::load(&path) {
            Ok(config) => SortApp::from_config(config),
            Err(err) => {
                eprintln!("sort_tui: {err}");
                std::process::exit(1);
            }
        },
        None => SortApp::new(),
    };
    tui::run(app)
}

mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use sortviz::algorithms::Highlight;
    use sortviz::engine::RunStatus;
    use sortviz::tui::SortApp;
    use std::io;
    use std::time::{Duration, Instant};

    /// Run the TUI application.
    pub fn run(mut app: SortApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(16);

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }

            app.update();
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &SortApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(9),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_bars(f, chunks[1], app);
        render_metrics(f, chunks[2], app);
        render_info(f, chunks[3], app);
    }

    fn status_color(status: RunStatus) -> Color {
        match status {
            RunStatus::Idle => Color::Gray,
            RunStatus::Sorting => Color::Green,
            RunStatus::Paused => Color::Yellow,
            RunStatus::Done => Color::Cyan,
        }
    }

    fn render_title(f: &mut Frame, area: Rect, app: &SortApp) {
        let info = app.algorithm().info();
        let status = app.status();
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " SORTVIZ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(info.name, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(
                format!("[{status}]").to_uppercase(),
                Style::default().fg(status_color(status)),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title(
            "Controls: [Space] Play/Pause  [N] New Array  [Tab/1-5] Algorithm  [+/-] Speed  [ [/] ] Size  [Q] Quit",
        ));
        f.render_widget(title, area);
    }

    fn bar_color(highlight: &Highlight, index: usize) -> Color {
        if highlight.swap.contains(&index) {
            Color::Red
        } else if highlight.compare.contains(&index) {
            Color::Yellow
        } else if highlight.sorted.contains(&index) {
            Color::Green
        } else {
            Color::Cyan
        }
    }

    fn render_bars(f: &mut Frame, area: Rect, app: &SortApp) {
        let highlight = app.controller.last_highlight();
        let bars: Vec<Bar> = app
            .controller
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                // Same visual scale as the classic visualizer: 10..100%.
                let height = (10.0 + v * 90.0).round() as u64;
                Bar::default()
                    .value(height)
                    .text_value(String::new())
                    .style(Style::default().fg(bar_color(highlight, i)))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Array"))
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .max(100);
        f.render_widget(chart, area);
    }

    fn render_metrics(f: &mut Frame, area: Rect, app: &SortApp) {
        let controller = &app.controller;
        let metrics = Paragraph::new(vec![Line::from(vec![
            Span::styled("Comparisons: ", Style::default().fg(Color::Gray)),
            Span::styled(
                controller.comparisons().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Writes: ", Style::default().fg(Color::Gray)),
            Span::styled(
                controller.writes().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Status: ", Style::default().fg(Color::Gray)),
            Span::styled(
                controller.status().to_string(),
                Style::default().fg(status_color(controller.status())),
            ),
            Span::raw(" | "),
            Span::styled("Delay: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}ms", controller.speed_ms()),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled("Size: ", Style::default().fg(Color::Gray)),
            Span::styled(
                controller.len().to_string(),
                Style::default().fg(Color::White),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title("Metrics"));
        f.render_widget(metrics, area);
    }

    fn render_info(f: &mut Frame, area: Rect, app: &SortApp) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let info = app.algorithm().info();
        let description = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Time: ", Style::default().fg(Color::Gray)),
                Span::styled(info.time, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled("Space: ", Style::default().fg(Color::Gray)),
                Span::styled(info.space, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    info.stability_label(),
                    Style::default().fg(if info.stable {
                        Color::Green
                    } else {
                        Color::Yellow
                    }),
                ),
            ]),
            Line::raw(""),
            Line::from(Span::styled(
                info.description,
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(info.name))
        .wrap(ratatui::widgets::Wrap { trim: true });
        f.render_widget(description, chunks[0]);

        let pseudocode = Paragraph::new(
            info.pseudocode
                .lines()
                .map(Line::raw)
                .collect::<Vec<_>>(),
        )
        .block(Block::default().borders(Borders::ALL).title("Pseudocode"));
        f.render_widget(pseudocode, chunks[1]);
    }

}
