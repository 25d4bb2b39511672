/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Order queries (templates 304 and 308).

use crate::enums::{
    BoolEnum, Floor, OrderCapacity, OrderSide, OrderStatus, OrderType, PegOffsetType,
    PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Current state of one order.
    ///
    /// Also used as the entry of [`OrdersResponse`].
    pub struct OrderResponse {
        block_length: 162,
        fields: {
            price_exponent: req i8 = ("priceExponent", 1),
            qty_exponent: req i8 = ("qtyExponent", 2),
            order_id: req i64 = ("orderId", 3),
            order_list_id: opt i64 = ("orderListId", 4),
            price: req i64 = ("price", 5),
            orig_qty: req i64 = ("origQty", 6),
            executed_qty: req i64 = ("executedQty", 7),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 8),
            status: enum_req OrderStatus = ("status", 9),
            time_in_force: enum_req TimeInForce = ("timeInForce", 10),
            order_type: enum_req OrderType = ("orderType", 11),
            side: enum_req OrderSide = ("side", 12),
            stop_price: opt i64 = ("stopPrice", 13),
            trailing_delta: opt i64 = ("trailingDelta", 14),
            trailing_time: opt i64 = ("trailingTime", 15),
            iceberg_qty: opt i64 = ("icebergQty", 16),
            time: req i64 = ("time", 17),
            update_time: req i64 = ("updateTime", 18),
            is_working: enum_req BoolEnum = ("isWorking", 19),
            working_time: opt i64 = ("workingTime", 20),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 21),
            strategy_id: opt i64 = ("strategyId", 22),
            strategy_type: opt i32 = ("strategyType", 23),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 24),
            working_floor: enum_req Floor = ("workingFloor", 25),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 26),
            prevented_match_id: opt i64 = ("preventedMatchId", 27),
            prevented_quantity: req i64 = ("preventedQuantity", 28),
            used_sor: enum_req BoolEnum = ("usedSor", 29),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 30, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 31, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 32, since 1),
            pegged_price: opt i64 = ("peggedPrice", 33, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_message!(OrderResponse, "OrderResponse", 304);

sbe_block! {
    /// State of several orders, such as all open orders of an account.
    pub struct OrdersResponse {
        block_length: 0,
        fields: {},
        groups: {
            orders: OrderResponse = ("orders", 100, GroupSize),
        },
        var_data: {},
    }
}

sbe_message!(OrdersResponse, "OrdersResponse", 308);

impl OrderResponse {
    /// Limit price as a decimal.
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.price, self.price_exponent)
    }

    /// Original quantity as a decimal.
    #[must_use]
    pub fn qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.orig_qty, self.qty_exponent)
    }

    /// Quantity left to execute, as a mantissa.
    #[must_use]
    pub const fn remaining_qty(&self) -> i64 {
        self.orig_qty.saturating_sub(self.executed_qty)
    }

    /// Returns true if the order is on the book.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_working == BoolEnum::True && !self.status.is_final()
    }
}

impl OrdersResponse {
    /// Orders of one symbol.
    pub fn for_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a OrderResponse> + 'a {
        self.orders.iter().filter(move |o| o.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_sbe_core::{RangeError, SbeBlock, SbeError, SbeMessage};
    use binance_sbe_schema::fields_length;

    fn open_order(order_id: i64, symbol: &str) -> OrderResponse {
        OrderResponse {
            price_exponent: -2,
            qty_exponent: -5,
            order_id,
            price: 6_500_000,
            orig_qty: 100_000,
            executed_qty: 25_000,
            cummulative_quote_qty: 1_625_000,
            status: OrderStatus::PartiallyFilled,
            time_in_force: TimeInForce::Gtc,
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
            time: 1_700_000_000_000_000,
            update_time: 1_700_000_001_000_000,
            is_working: BoolEnum::True,
            working_time: Some(1_700_000_000_000_000),
            orig_quote_order_qty: 0,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            self_trade_prevention_mode: SelfTradePreventionMode::ExpireMaker,
            prevented_quantity: 0,
            used_sor: BoolEnum::False,
            symbol: symbol.to_string(),
            client_order_id: format!("client-{order_id}"),
            ..OrderResponse::default()
        }
    }

    #[test]
    fn test_block_length_matches_fields() {
        assert_eq!(
            fields_length(OrderResponse::FIELDS),
            usize::from(OrderResponse::BLOCK_LENGTH)
        );
    }

    #[test]
    fn test_round_trip() {
        let order = open_order(7, "BTCUSDT");
        let bytes = order.encode_to_vec().unwrap();
        let decoded = OrderResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, order);
        assert_eq!(decoded.price_decimal(), Some(Decimal::new(65_000, 0)));
        assert_eq!(decoded.remaining_qty(), 75_000);
        assert!(decoded.is_open());
    }

    #[test]
    fn test_lenient_decode_keeps_out_of_range_values() {
        let mut order = open_order(9, "BTCUSDT");
        order.orig_qty = i64::MIN;
        let mut bytes = Vec::new();
        order.encode_message(&mut bytes, false).unwrap();
        // status follows two exponents and six int64 fields
        bytes[8 + 2 + 6 * 8] = 42;

        assert!(matches!(
            OrderResponse::decode_message(&bytes, true),
            Err(SbeError::Range(RangeError::OutOfRange { .. }))
        ));

        let decoded = OrderResponse::decode_message(&bytes, false).unwrap();
        assert_eq!(decoded.orig_qty, i64::MIN);
        assert_eq!(decoded.status, OrderStatus::NonRepresentable);
        assert_eq!(decoded.order_id, 9);
        assert_eq!(decoded.symbol, "BTCUSDT");
        assert!(decoded.range_check(2, 2).is_err());
    }

    #[test]
    fn test_orders_group_reuses_order_layout() {
        let orders = OrdersResponse {
            orders: vec![
                open_order(1, "BTCUSDT"),
                open_order(2, "ETHUSDT"),
                open_order(3, "BTCUSDT"),
            ],
        };
        let bytes = orders.encode_to_vec().unwrap();
        assert_eq!(&bytes[8..14], &[162, 0, 3, 0, 0, 0]);
        let decoded = OrdersResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, orders);
        let ids: Vec<i64> = decoded.for_symbol("BTCUSDT").map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1, 3]);

        let group = OrdersResponse::META.group("orders").unwrap();
        assert_eq!(group.fields, OrderResponse::FIELDS);
    }

    #[test]
    fn test_empty_orders() {
        let bytes = OrdersResponse::default().encode_to_vec().unwrap();
        assert_eq!(bytes.len(), 14);
        let decoded = OrdersResponse::decode_message(&bytes, true).unwrap();
        assert!(decoded.orders.is_empty());
    }
}
