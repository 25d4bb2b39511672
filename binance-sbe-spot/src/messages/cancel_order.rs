/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Order cancellation (template 305).

use crate::enums::{
    BoolEnum, Floor, OrderCapacity, OrderSide, OrderStatus, OrderType, PegOffsetType,
    PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Final state of a canceled order.
    pub struct CancelOrderResponse {
        block_length: 137,
        fields: {
            price_exponent: req i8 = ("priceExponent", 1),
            qty_exponent: req i8 = ("qtyExponent", 2),
            order_id: req i64 = ("orderId", 3),
            order_list_id: opt i64 = ("orderListId", 4),
            transact_time: req i64 = ("transactTime", 5),
            price: req i64 = ("price", 6),
            orig_qty: req i64 = ("origQty", 7),
            executed_qty: req i64 = ("executedQty", 8),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 9),
            status: enum_req OrderStatus = ("status", 10),
            time_in_force: enum_req TimeInForce = ("timeInForce", 11),
            order_type: enum_req OrderType = ("orderType", 12),
            side: enum_req OrderSide = ("side", 13),
            stop_price: opt i64 = ("stopPrice", 14),
            trailing_delta: opt i64 = ("trailingDelta", 15),
            trailing_time: opt i64 = ("trailingTime", 16),
            iceberg_qty: opt i64 = ("icebergQty", 17),
            strategy_id: opt i64 = ("strategyId", 18),
            strategy_type: opt i32 = ("strategyType", 19),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 20),
            working_floor: enum_req Floor = ("workingFloor", 21),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 22),
            prevented_quantity: req i64 = ("preventedQuantity", 23),
            used_sor: enum_req BoolEnum = ("usedSor", 24),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 25),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 26, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 27, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 28, since 1),
            pegged_price: opt i64 = ("peggedPrice", 29, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            orig_client_order_id: string = ("origClientOrderId", 201, U8),
            client_order_id: string = ("clientOrderId", 202, U8),
        },
    }
}

sbe_message!(CancelOrderResponse, "CancelOrderResponse", 305);

impl CancelOrderResponse {
    /// Executed quantity as a decimal.
    #[must_use]
    pub fn executed_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.executed_qty, self.qty_exponent)
    }
}
