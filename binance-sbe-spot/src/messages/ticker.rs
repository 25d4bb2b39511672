/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Full 24 hour ticker statistics (template 206).

use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Rolling 24 hour statistics of one symbol.
    ///
    /// `last_qty`, `volume` and `quote_volume` are 128-bit little-endian
    /// mantissas scaled by `qty_exponent` (`quote_volume` by `price_exponent`
    /// and `qty_exponent` combined).
    pub struct TickerStats {
        block_length: 182,
        fields: {
            price_exponent: req i8 = ("priceExponent", 1),
            qty_exponent: req i8 = ("qtyExponent", 2),
            price_change: opt i64 = ("priceChange", 3),
            price_change_percent: opt f32 = ("priceChangePercent", 4),
            weighted_avg_price: opt i64 = ("weightedAvgPrice", 5),
            prev_close_price: opt i64 = ("prevClosePrice", 6),
            last_price: opt i64 = ("lastPrice", 7),
            last_qty: array 16 = ("lastQty", 8),
            bid_price: opt i64 = ("bidPrice", 9),
            bid_qty: req i64 = ("bidQty", 10),
            ask_price: opt i64 = ("askPrice", 11),
            ask_qty: req i64 = ("askQty", 12),
            open_price: opt i64 = ("openPrice", 13),
            high_price: opt i64 = ("highPrice", 14),
            low_price: opt i64 = ("lowPrice", 15),
            volume: array 16 = ("volume", 16),
            quote_volume: array 16 = ("quoteVolume", 17),
            open_time: req i64 = ("openTime", 18),
            close_time: req i64 = ("closeTime", 19),
            first_id: opt i64 = ("firstId", 20),
            last_id: opt i64 = ("lastId", 21),
            num_trades: req i64 = ("numTrades", 22),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
        },
    }
}

sbe_block! {
    /// 24 hour ticker statistics for one or more symbols.
    pub struct Ticker24hFullResponse {
        block_length: 0,
        fields: {},
        groups: {
            tickers: TickerStats = ("tickers", 100, GroupSize),
        },
        var_data: {},
    }
}

sbe_message!(Ticker24hFullResponse, "Ticker24hFullResponse", 206);

impl TickerStats {
    /// Last price as a decimal.
    #[must_use]
    pub fn last_price_decimal(&self) -> Option<Decimal> {
        self.last_price
            .and_then(|p| mantissa_to_decimal(p, self.price_exponent))
    }

    /// Bid quantity as a decimal.
    #[must_use]
    pub fn bid_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.bid_qty, self.qty_exponent)
    }

    /// Ask quantity as a decimal.
    #[must_use]
    pub fn ask_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.ask_qty, self.qty_exponent)
    }

    /// Base asset volume mantissa.
    #[must_use]
    pub const fn volume_mantissa(&self) -> i128 {
        i128::from_le_bytes(self.volume)
    }

    /// Quote asset volume mantissa.
    #[must_use]
    pub const fn quote_volume_mantissa(&self) -> i128 {
        i128::from_le_bytes(self.quote_volume)
    }

    /// Last trade quantity mantissa.
    #[must_use]
    pub const fn last_qty_mantissa(&self) -> i128 {
        i128::from_le_bytes(self.last_qty)
    }
}
