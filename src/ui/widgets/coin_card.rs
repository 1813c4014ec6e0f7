//! Coin card widget: one ranked item with its chart.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::CandleChart;
use crate::state::RankedItem;
use crate::ui::Palette;

/// Card for a single ranked item.
pub struct CoinCard;

impl CoinCard {
    /// Render the card into `area`.
    pub fn render(frame: &mut Frame, area: Rect, item: &RankedItem, palette: &Palette) {
        let change_style = Style::default()
            .fg(palette.change(item.is_up()))
            .add_modifier(Modifier::BOLD);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(header(item, palette))
            .title_top(
                Line::styled(format!(" {} ", item.formatted_change()), change_style)
                    .right_aligned(),
            );

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [last_area, chart_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let last = Line::from(vec![
            Span::styled("Last ", Style::default().fg(palette.muted)),
            Span::raw(format_last(item.last_price)),
        ]);
        frame.render_widget(Paragraph::new(last), last_area);

        frame.render_widget(
            CandleChart::new(&item.candles).colors(palette.up, palette.down),
            chart_area,
        );
    }
}

/// Display symbol, followed by the raw symbol whenever a display symbol is set.
fn header<'a>(item: &'a RankedItem, palette: &Palette) -> Line<'a> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(item.title(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if item.display_symbol.is_some() {
        spans.push(Span::styled(
            format!(" {}", item.symbol),
            Style::default().fg(palette.muted),
        ));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn format_last(price: Option<f64>) -> String {
    price.map_or_else(|| "—".to_string(), |p| p.to_string())
}
