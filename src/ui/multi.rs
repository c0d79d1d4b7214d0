//! Table dashboard: one row per target, one column per variable.

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::term::{self, Term};
use super::{short_address, sparkline_string, RenderSink, Theme};
use crate::app::Dashboard;
use crate::data::format::format_value;
use crate::data::Series;
use crate::vars::VarSpec;

/// Width of the inline per-cell sparkline.
const CELL_SPARK_WIDTH: usize = 10;

/// TUI sink for multiple targets.
pub struct MultiView {
    terminal: Option<Term>,
    theme: Theme,
}

impl MultiView {
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

impl RenderSink for MultiView {
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
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Min(3),    // Target table
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    render_header(frame, dashboard, theme, chunks[0]);
    render_table(frame, dashboard, theme, chunks[1]);
    render_status_bar(frame, dashboard, theme, chunks[2]);
}

fn render_header(frame: &mut Frame, dashboard: &Dashboard, theme: &Theme, area: Rect) {
    let online = dashboard.targets.iter().filter(|t| t.status.is_online()).count();
    let text = format!(
        "varwatch  {}/{} targets online  updated {:.1}s ago",
        online,
        dashboard.targets.len(),
        dashboard.updated_at.elapsed().as_secs_f64()
    );
    frame.render_widget(Paragraph::new(text).style(theme.header), area);
}

fn render_table(frame: &mut Frame, dashboard: &Dashboard, theme: &Theme, area: Rect) {
    let mut header_cells = vec![Cell::from("TARGET"), Cell::from("STATUS")];
    header_cells.extend(dashboard.specs.iter().map(|spec| Cell::from(spec.name.as_str())));
    let header = Row::new(header_cells).height(1).style(theme.header);

    let rows: Vec<Row> = dashboard
        .targets
        .iter()
        .map(|target| {
            let mut cells = vec![
                Cell::from(short_address(&target.address).to_string()),
                Cell::from(target.status.symbol()).style(theme.status_style(&target.status)),
            ];
            cells.extend(
                dashboard
                    .specs
                    .iter()
                    .zip(&target.series)
                    .map(|(spec, series)| Cell::from(var_cell(spec, series))),
            );
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(22), Constraint::Length(6)];
    widths.extend(dashboard.specs.iter().map(|_| Constraint::Min(14)));

    frame.render_widget(Table::new(rows, widths).header(header), area);
}

/// Latest formatted value plus a short trend sparkline, or a dash
/// before the first successful read.
fn var_cell(spec: &VarSpec, series: &Series) -> String {
    match series.last_value() {
        Some(value) => format!(
            "{} {}",
            format_value(value, spec.kind),
            sparkline_string(&series.levels(), CELL_SPARK_WIDTH)
        ),
        None => "-".to_string(),
    }
}

fn render_status_bar(frame: &mut Frame, dashboard: &Dashboard, theme: &Theme, area: Rect) {
    // Surface the first problem; everything healthy reads as the key hint.
    let text = match dashboard.targets.iter().find(|t| t.last_error.is_some()) {
        Some(target) => format!(
            "{}: {}",
            short_address(&target.address),
            target.last_error.as_deref().unwrap_or_default()
        ),
        None => "q: quit".to_string(),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.border)),
        area,
    );
}
