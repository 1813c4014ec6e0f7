//! Controls bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{AppState, Market};
use crate::ui::Palette;

/// Market segments and the current query parameters.
pub struct ControlsBar;

impl ControlsBar {
    /// Render the controls bar.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &AppState,
        keybindings: &KeyBindings,
        palette: &Palette,
    ) {
        frame.render_widget(Paragraph::new(line(app, keybindings, palette)), area);
    }
}

fn line(app: &AppState, keybindings: &KeyBindings, palette: &Palette) -> Line<'static> {
    let key_style = Style::default().fg(palette.muted);
    let value_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::raw(" ")];

    for market in Market::ALL {
        let key = match market {
            Market::Spot => &keybindings.spot,
            Market::Swap => &keybindings.swap,
        };
        let name_style = if app.market == market {
            value_style.add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };

        spans.push(Span::styled(format!("[{key}] "), key_style));
        spans.push(Span::styled(market.label(), name_style));
        spans.push(Span::raw("  "));
    }

    let mut param = |key: String, label: &'static str, value: String| {
        spans.push(Span::styled(format!("[{key}] "), key_style));
        spans.push(Span::raw(label));
        spans.push(Span::styled(value, value_style));
        spans.push(Span::raw("  "));
    };

    param(
        format!("{}/{}", keybindings.next_timeframe, keybindings.prev_timeframe),
        "Timeframe ",
        app.timeframe.to_string(),
    );
    param("+/-".to_string(), "Candles ", app.candle_limit.to_string());
    param("]/[".to_string(), "Top ", app.top_n.to_string());

    spans.push(Span::styled(format!("[{}] ", keybindings.refresh), key_style));
    spans.push(Span::raw("Refresh"));

    Line::from(spans)
}
