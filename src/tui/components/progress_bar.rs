//! # Progress Bar
//!
//! Shows how much of the assumed gallery size has been loaded. The ratio is
//! clamped here as well, so a caller passing a raw `loaded / total` can never
//! overflow the gauge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::component::Component;

pub const PROGRESS_BAR_HEIGHT: u16 = 2;

pub struct ProgressBar {
    ratio: f64,
}

impl ProgressBar {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: clamp_ratio(ratio),
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn label(&self) -> String {
        format!("{}% Loaded", (self.ratio * 100.0).round() as u16)
    }
}

/// Clamp to `[0, 1]`; NaN counts as nothing loaded.
fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let label = Paragraph::new(self.label())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(label, label_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(self.ratio())
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(ProgressBar::new(-0.5).ratio(), 0.0);
        assert_eq!(ProgressBar::new(3.0).ratio(), 1.0);
        assert_eq!(ProgressBar::new(f64::NAN).ratio(), 0.0);
        assert_eq!(ProgressBar::new(0.42).ratio(), 0.42);
    }

    #[test]
    fn test_label_rounds_percentage() {
        assert_eq!(ProgressBar::new(0.126).label(), "13% Loaded");
        assert_eq!(ProgressBar::new(7.0).label(), "100% Loaded");
    }

    #[test]
    fn test_render_over_full_does_not_panic() {
        let backend = TestBackend::new(30, PROGRESS_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProgressBar::new(12.0).render(f, f.area()))
            .unwrap();
    }
}
