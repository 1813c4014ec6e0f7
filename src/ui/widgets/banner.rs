//! Error banner and empty-grid placeholder.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::state::MarketFeed;
use crate::ui::Palette;

/// Render the backend error line.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, palette: &Palette) {
    frame.render_widget(Clear, area);

    let content = Line::from(vec![
        Span::styled(
            " Backend error: ",
            Style::default()
                .fg(palette.down)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(error),
    ]);

    frame.render_widget(Paragraph::new(content), area);
}

/// Message for a grid with no items to show, if any.
pub fn placeholder(feed: &MarketFeed) -> Option<&'static str> {
    if feed.is_cold() {
        Some("Loading…")
    } else if feed.data.as_ref().is_some_and(|d| d.items.is_empty()) {
        Some("No data")
    } else {
        None
    }
}

/// Render a centered placeholder message.
pub fn render_placeholder(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, area.height.min(1));

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));

    frame.render_widget(paragraph, line_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Market, QueryResult, Source};
    use chrono::Utc;

    fn empty_result() -> QueryResult {
        QueryResult {
            exchange: "binance".to_string(),
            market: Market::Spot,
            quote: "USDT".to_string(),
            timeframe: "1m".to_string(),
            limit: 120,
            top: 12,
            updated_at: Utc::now(),
            source: Source::Live,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_placeholder_while_cold() {
        let feed = MarketFeed {
            loading: true,
            ..MarketFeed::default()
        };
        assert_eq!(placeholder(&feed), Some("Loading…"));
    }

    #[test]
    fn test_no_placeholder_when_refreshing_cached_data() {
        let mut result = empty_result();
        result.items.push(crate::state::RankedItem {
            symbol: "BTC/USDT".to_string(),
            display_symbol: None,
            base: "BTC".to_string(),
            quote: "USDT".to_string(),
            last_price: None,
            change_percent: 1.0,
            candles: Vec::new(),
        });
        let feed = MarketFeed {
            data: Some(result),
            loading: true,
            error: None,
        };
        assert_eq!(placeholder(&feed), None);
    }

    #[test]
    fn test_placeholder_for_empty_result() {
        let feed = MarketFeed {
            data: Some(empty_result()),
            ..MarketFeed::default()
        };
        assert_eq!(placeholder(&feed), Some("No data"));
        assert_eq!(placeholder(&MarketFeed::default()), None);
    }
}
