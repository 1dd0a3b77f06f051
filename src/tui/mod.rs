//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for choosing the input mode and value
//! (percentage slider or free-text fraction), then renders the outcome pie
//! chart next to the worked equations. Every input event recomputes the
//! distribution synchronously through the shared pipeline.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{self, CalcOutput};
use crate::domain::{CalcConfig, InputMode};
use crate::error::AppError;
use crate::report::{fmt_percent, format_equation_lines, p_fraction_label};

mod pie_chart;

use pie_chart::OutcomePieChart;

/// Start the TUI.
pub fn run(config: CalcConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: CalcConfig,
    fraction_edit: String,
    editing_fraction: bool,
    selected_field: usize,
    status: String,
    run: CalcOutput,
}

impl App {
    fn new(config: CalcConfig) -> Self {
        let run = pipeline::run_calc_config(&config);
        Self {
            config,
            fraction_edit: String::new(),
            editing_fraction: false,
            selected_field: 0,
            status: "Ready.".to_string(),
            run,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_fraction {
            self.handle_fraction_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 2 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => {
                if self.selected_field == 2 {
                    self.fraction_edit = self.config.fraction_text.clone();
                    self.editing_fraction = true;
                    self.status =
                        "Editing fraction (e.g. 1/4). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('m') => {
                self.config.mode = self.config.mode.toggled();
                self.recompute();
                self.status = format!("mode: {}", self.config.mode.display_name());
            }
            KeyCode::Char('e') => {
                let path = PathBuf::from("punnett-report.json");
                match crate::io::export::write_report_json(&path, &self.run) {
                    Ok(()) => {
                        self.status = format!("Wrote report JSON: {}", path.display());
                    }
                    Err(err) => {
                        self.status = format!("Export failed: {err}");
                    }
                }
            }
            _ => {}
        }

        false
    }

    fn handle_fraction_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing_fraction = false;
                self.status = "Fraction edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_fraction = false;
                self.config.fraction_text = self.fraction_edit.clone();
                self.recompute();
                // Malformed text is accepted and shown as NaN; just hint.
                if self.config.mode == InputMode::Fraction && !self.run.p.is_finite() {
                    self.status = "Fraction does not evaluate; outcomes shown as NaN.".to_string();
                } else {
                    self.status = format!("fraction: {}", self.config.fraction_text);
                }
            }
            KeyCode::Backspace => {
                self.fraction_edit.pop();
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    self.fraction_edit.push(c);
                }
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                self.config.mode = self.config.mode.toggled();
                self.recompute();
                self.status = format!("mode: {}", self.config.mode.display_name());
            }
            1 => {
                // Bounded range control: 0..=100, step 1.
                let next = if delta >= 0 {
                    self.config.percent.saturating_add(1).min(100)
                } else {
                    self.config.percent.saturating_sub(1)
                };
                self.config.percent = next;
                self.recompute();
                self.status = format!("percent: {}", self.config.percent);
            }
            _ => {}
        }
    }

    /// Recompute the distribution from the current input.
    ///
    /// Pure and O(1), so it is safe to call on every keystroke; there is no
    /// cached state to invalidate.
    fn recompute(&mut self) {
        self.run = pipeline::run_calc_config(&self.config);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(7),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_settings(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("punnett", Style::default().fg(Color::Cyan)),
            Span::raw(" — autosomal recessive outcome calculator"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "mode: {} | p = {} ({})",
                self.config.mode.display_name(),
                fmt_percent(self.run.p),
                p_fraction_label(&self.run.input),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Min(0)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_equations(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Outcomes").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let o = &self.run.outcomes;
        let finite = o.normal.is_finite() && o.carrier.is_finite() && o.affected.is_finite();
        if !finite {
            let msg = Paragraph::new("Input does not evaluate to a probability (NaN).")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        }

        let widget = OutcomePieChart {
            sizes: [o.normal, o.carrier, o.affected],
            labels: [
                format!("Normal {}", fmt_percent(o.normal)),
                format!("Carrier {}", fmt_percent(o.carrier)),
                format!("Affected {}", fmt_percent(o.affected)),
            ],
        };
        frame.render_widget(widget, inner);
    }

    fn draw_equations(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let o = &self.run.outcomes;

        // Legend rows reuse the pie palette so slices are identifiable even
        // without in-chart labels on small terminals.
        let mut lines: Vec<Line> = vec![
            outcome_line("Normal", o.normal, Color::Rgb(74, 222, 128)),
            outcome_line("Carrier", o.carrier, Color::Rgb(251, 191, 36)),
            outcome_line("Affected", o.affected, Color::Rgb(248, 113, 113)),
            Line::from(""),
        ];
        for text in format_equation_lines(&self.run) {
            lines.push(Line::from(text));
        }

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Equations").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Mode: {}", self.config.mode.display_name())),
            ListItem::new(format!("Percent: {}%", self.config.percent)),
            ListItem::new(format!("Fraction: {}", self.config.fraction_text)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Input").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing_fraction {
            let hint = Paragraph::new(format!("fraction: {}_", self.fraction_edit))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit fraction  m mode  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn outcome_line(label: &str, value: f64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(format!(
            "{label}: {} = {}",
            fmt_percent(value),
            crate::math::decimal_to_fraction(value)
        )),
    ])
}
