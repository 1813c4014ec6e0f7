//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;
use crate::ui::Palette;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keybindings: &KeyBindings, palette: &Palette) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(lines(keybindings, palette)).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );

        frame.render_widget(help, popup_area);
    }
}

fn lines(keybindings: &KeyBindings, palette: &Palette) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |key: &str, description: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(palette.up)),
            Span::raw(description),
        ])
    };

    vec![
        heading("Market"),
        Line::from(""),
        entry(&keybindings.spot, "Spot"),
        entry(&keybindings.swap, "Swap (perpetuals)"),
        Line::from(""),
        heading("Query"),
        Line::from(""),
        entry(&keybindings.next_timeframe, "Longer timeframe"),
        entry(&keybindings.prev_timeframe, "Shorter timeframe"),
        entry("+/-", "More/fewer candles"),
        entry("]/[", "More/fewer coins"),
        Line::from(""),
        heading("Actions"),
        Line::from(""),
        entry(&keybindings.refresh, "Refresh, bypassing the backend cache"),
        entry(&keybindings.help, "Toggle help"),
        entry(&format!("{}/Ctrl+c", keybindings.quit), "Quit"),
    ]
}
