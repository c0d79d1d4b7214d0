//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::TargetStatus;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on the
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and sparklines.
    pub highlight: Color,
    /// Color for online targets.
    pub online: Color,
    /// Color for offline targets.
    pub offline: Color,
    /// Color for targets that have not been polled yet.
    pub pending: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Color for borders and separators.
    pub border: Color,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            online: Color::Green,
            offline: Color::Red,
            pending: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border: Color::Gray,
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            online: Color::Green,
            offline: Color::Red,
            pending: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a target status
    pub fn status_style(&self, status: &TargetStatus) -> Style {
        match status {
            TargetStatus::Pending => Style::default().fg(self.pending),
            TargetStatus::Online => Style::default().fg(self.online),
            TargetStatus::Offline | TargetStatus::Error(_) => {
                Style::default().fg(self.offline).add_modifier(Modifier::BOLD)
            }
        }
    }
}
