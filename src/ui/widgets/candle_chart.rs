//! Candlestick chart widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::state::Candle;

const WICK: &str = "│";
const BODY: &str = "█";

/// Draws one column per candle, most recent at the right edge.
pub struct CandleChart<'a> {
    candles: &'a [Candle],
    up: Color,
    down: Color,
}

impl<'a> CandleChart<'a> {
    pub fn new(candles: &'a [Candle]) -> Self {
        Self {
            candles,
            up: Color::Green,
            down: Color::Red,
        }
    }

    /// Colors for rising and falling candles.
    pub fn colors(mut self, up: Color, down: Color) -> Self {
        self.up = up;
        self.down = down;
        self
    }
}

/// The most recent candles that fit in `width` columns.
pub(crate) fn visible(candles: &[Candle], width: u16) -> &[Candle] {
    &candles[candles.len().saturating_sub(width as usize)..]
}

/// Maps prices onto chart rows, row 0 being the top.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PriceScale {
    low: f64,
    high: f64,
    height: u16,
}

impl PriceScale {
    pub(crate) fn fit(candles: &[Candle], height: u16) -> Self {
        let low = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let high = candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
        Self { low, high, height }
    }

    pub(crate) fn row(&self, price: f64) -> u16 {
        let last = self.height.saturating_sub(1);
        let span = self.high - self.low;
        if !span.is_finite() || span <= 0.0 {
            return last / 2;
        }
        let offset = ((self.high - price) / span * f64::from(last)).round();
        // `as u16` saturates; NaN becomes 0
        (offset.max(0.0) as u16).min(last)
    }
}

impl Widget for CandleChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.candles.is_empty() {
            return;
        }

        let candles = visible(self.candles, area.width);
        let scale = PriceScale::fit(candles, area.height);
        let left = area.right() - candles.len() as u16;

        for (i, candle) in candles.iter().enumerate() {
            let x = left + i as u16;
            let color = if candle.is_up() { self.up } else { self.down };

            let wick = scale.row(candle.high)..=scale.row(candle.low);
            let body = scale.row(candle.open.max(candle.close))
                ..=scale.row(candle.open.min(candle.close));

            for row in wick {
                let symbol = if body.contains(&row) { BODY } else { WICK };
                if let Some(cell) = buf.cell_mut((x, area.y + row)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
    }
}
