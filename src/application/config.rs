//! # Service Configuration
//!
//! Tunables for the market data and algo execution stages, with the
//! production defaults baked into `Default`.

use rust_decimal::Decimal;

/// Configuration for the market data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketDataConfig {
    /// Number of price levels retained per side of a book snapshot.
    pub book_depth: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self { book_depth: 5 }
    }
}

impl MarketDataConfig {
    /// Sets the book depth.
    #[must_use]
    pub fn with_book_depth(mut self, book_depth: usize) -> Self {
        self.book_depth = book_depth;
        self
    }
}

/// Configuration for the algo execution service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgoConfig {
    /// Maximum bid/offer spread at which the algo will cross,
    /// expressed in price units. Default: 1/128.
    pub spread_threshold: Decimal,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            // 1/128 = 0.0078125
            spread_threshold: Decimal::from_parts(78_125, 0, 0, false, 7),
        }
    }
}

impl AlgoConfig {
    /// Sets the spread threshold.
    #[must_use]
    pub fn with_spread_threshold(mut self, spread_threshold: Decimal) -> Self {
        self.spread_threshold = spread_threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_data_default_depth_is_five() {
        assert_eq!(MarketDataConfig::default().book_depth, 5);
    }

    #[test]
    fn algo_default_threshold_is_one_one_twenty_eighth() {
        let threshold = AlgoConfig::default().spread_threshold;
        assert_eq!(threshold * Decimal::from(128), Decimal::ONE);
    }

    #[test]
    fn builders() {
        let md = MarketDataConfig::default().with_book_depth(3);
        assert_eq!(md.book_depth, 3);

        let algo = AlgoConfig::default().with_spread_threshold(Decimal::ONE);
        assert_eq!(algo.spread_threshold, Decimal::ONE);
    }
}
