//! Single-target dashboard: one full-width sparkline panel per variable.

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::term::{self, Term};
use super::{short_address, sparkline_string, RenderSink, Theme};
use crate::app::Dashboard;
use crate::data::format::format_value;
use crate::data::Target;

/// TUI sink for exactly one target.
pub struct SingleView {
    terminal: Option<Term>,
    theme: Theme,
}

impl SingleView {
    pub fn new() -> Self {
        Self {
            terminal: None,
            theme: Theme::auto_detect(),
        }
    }

    fn draw(&mut self, dashboard: &Dashboard) -> Result<()> {
        let Self { terminal, theme } = self;
        if let Some(terminal) = terminal.as_mut() {
            terminal.draw(|frame| render(frame, dashboard, theme))?;
        }
        Ok(())
    }
}

impl RenderSink for SingleView {
    fn init(&mut self, dashboard: &Dashboard) -> Result<()> {
        self.terminal = Some(term::setup()?);
        self.draw(dashboard)
    }

    fn refresh(&mut self, dashboard: &Dashboard) -> Result<()> {
        self.draw(dashboard)
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            term::restore(&mut terminal)?;
        }
        Ok(())
    }
}

fn render(frame: &mut Frame, dashboard: &Dashboard, theme: &Theme) {
    let Some(target) = dashboard.targets.first() else {
        return;
    };

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(dashboard.specs.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(frame.area());

    render_header(frame, target, dashboard, theme, chunks[0]);

    for (i, (spec, series)) in dashboard.specs.iter().zip(&target.series).enumerate() {
        let area = chunks[i + 1];
        let value = match series.last_value() {
            Some(value) => format_value(value, spec.kind),
            None => "-".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {}: {} ", spec.name, value));
        let inner_width = usize::from(area.width.saturating_sub(2));
        let spark = sparkline_string(&series.levels(), inner_width);
        frame.render_widget(
            Paragraph::new(spark)
                .style(Style::default().fg(theme.highlight))
                .block(block),
            area,
        );
    }
}

fn render_header(
    frame: &mut Frame,
    target: &Target,
    dashboard: &Dashboard,
    theme: &Theme,
    area: Rect,
) {
    let mut text = format!(
        "varwatch  {}  [{}]  updated {:.1}s ago",
        short_address(&target.address),
        target.status.symbol(),
        dashboard.updated_at.elapsed().as_secs_f64()
    );
    if let Some(err) = &target.last_error {
        text.push_str("  ");
        text.push_str(err);
    }
    frame.render_widget(Paragraph::new(text).style(theme.status_style(&target.status)), area);
}
