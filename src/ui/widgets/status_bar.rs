//! Status bar widget.

use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, MarketFeed};
use crate::ui::Palette;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar for the visible market.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        app: &AppState,
        feed: &MarketFeed,
        palette: &Palette,
    ) {
        let mut spans = vec![
            Span::styled(
                " max-line ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(palette.muted)),
            Span::raw(title(app, feed)),
        ];

        if feed.loading {
            spans.push(Span::styled(
                "  Loading…",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(palette.muted));

        // Right-align the help hint
        let left_len: usize = spans.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(left_len + help_hint.width());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(help_hint);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Headline describing the visible ranking.
pub fn title(app: &AppState, feed: &MarketFeed) -> String {
    let updated = feed
        .data
        .as_ref()
        .map(|data| {
            format!(
                "{} ({})",
                data.updated_at.with_timezone(&Local).format("%H:%M:%S"),
                data.source
            )
        })
        .unwrap_or_else(|| "—".to_string());

    format!(
        "Top {} gainers · {} · {} · updated {}",
        app.top_n,
        app.market.label(),
        app.timeframe,
        updated
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::state::{Market, QueryResult, Source};
    use chrono::Utc;

    #[test]
    fn test_title_without_data() {
        let app = AppState::new(&DashboardConfig::default());
        assert_eq!(
            title(&app, &MarketFeed::default()),
            "Top 12 gainers · Spot · 1m · updated —"
        );
    }

    #[test]
    fn test_title_with_data() {
        let mut app = AppState::new(&DashboardConfig::default());
        app.market = Market::Swap;
        let feed = MarketFeed {
            data: Some(QueryResult {
                exchange: "binance".to_string(),
                market: Market::Swap,
                quote: "USDT".to_string(),
                timeframe: "1m".to_string(),
                limit: 120,
                top: 12,
                updated_at: Utc::now(),
                source: Source::Cache,
                items: Vec::new(),
            }),
            ..MarketFeed::default()
        };

        let title = title(&app, &feed);
        assert!(title.starts_with("Top 12 gainers · Swap · 1m · updated "));
        assert!(title.ends_with(" (cache)"));
    }
}
