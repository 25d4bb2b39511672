/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Order amendment keeping queue priority (template 317).

use crate::enums::{
    BoolEnum, Floor, OrderCapacity, OrderSide, OrderStatus, OrderType, PegOffsetType,
    PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use crate::groups::ListStatus;
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Another order of the same list affected by the amendment.
    pub struct RelatedOrder {
        block_length: 127,
        fields: {
            order_id: req i64 = ("orderId", 1),
            order_list_id: opt i64 = ("orderListId", 2),
            price: req i64 = ("price", 3),
            qty: req i64 = ("qty", 4),
            executed_qty: req i64 = ("executedQty", 5),
            prevented_qty: req i64 = ("preventedQty", 6),
            cumulative_quote_qty: req i64 = ("cumulativeQuoteQty", 7),
            status: enum_req OrderStatus = ("status", 8),
            time_in_force: enum_req TimeInForce = ("timeInForce", 9),
            order_type: enum_req OrderType = ("orderType", 10),
            side: enum_req OrderSide = ("side", 11),
            stop_price: opt i64 = ("stopPrice", 12),
            trailing_delta: opt i64 = ("trailingDelta", 13),
            trailing_time: opt i64 = ("trailingTime", 14),
            iceberg_qty: opt i64 = ("icebergQty", 15),
            working_time: opt i64 = ("workingTime", 16),
            strategy_id: opt i64 = ("strategyId", 17),
            strategy_type: opt i32 = ("strategyType", 18),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 19),
            working_floor: enum_req Floor = ("workingFloor", 20),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 21),
            used_sor: enum_req BoolEnum = ("usedSor", 22),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 23, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 24, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 25, since 1),
            pegged_price: opt i64 = ("peggedPrice", 26, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_block! {
    /// Amended order, reduced in quantity without losing its queue position.
    pub struct OrderAmendKeepPriorityResponse {
        block_length: 145,
        fields: {
            transact_time: req i64 = ("transactTime", 1),
            execution_id: req i64 = ("executionId", 2),
            price_exponent: req i8 = ("priceExponent", 3),
            qty_exponent: req i8 = ("qtyExponent", 4),
            order_id: req i64 = ("orderId", 5),
            order_list_id: opt i64 = ("orderListId", 6),
            price: req i64 = ("price", 7),
            qty: req i64 = ("qty", 8),
            executed_qty: req i64 = ("executedQty", 9),
            prevented_qty: req i64 = ("preventedQty", 10),
            cumulative_quote_qty: req i64 = ("cumulativeQuoteQty", 11),
            status: enum_req OrderStatus = ("status", 12),
            time_in_force: enum_req TimeInForce = ("timeInForce", 13),
            order_type: enum_req OrderType = ("orderType", 14),
            side: enum_req OrderSide = ("side", 15),
            stop_price: opt i64 = ("stopPrice", 16),
            trailing_delta: opt i64 = ("trailingDelta", 17),
            trailing_time: opt i64 = ("trailingTime", 18),
            iceberg_qty: opt i64 = ("icebergQty", 19),
            working_time: opt i64 = ("workingTime", 20),
            strategy_id: opt i64 = ("strategyId", 21),
            strategy_type: opt i32 = ("strategyType", 22),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 23),
            working_floor: enum_req Floor = ("workingFloor", 24),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 25),
            used_sor: enum_req BoolEnum = ("usedSor", 26),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 27, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 28, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 29, since 1),
            pegged_price: opt i64 = ("peggedPrice", 30, since 1),
        },
        groups: {
            list_status: ListStatus = ("listStatus", 101, GroupSize16),
            related_orders: RelatedOrder = ("relatedOrders", 102, GroupSize16),
        },
        var_data: {
            symbol: string = ("symbol", 200, U8),
            orig_client_order_id: string = ("origClientOrderId", 201, U8),
            client_order_id: string = ("clientOrderId", 202, U8),
        },
    }
}

sbe_message!(
    OrderAmendKeepPriorityResponse,
    "OrderAmendKeepPriorityResponse",
    317
);

impl OrderAmendKeepPriorityResponse {
    /// New quantity as a decimal.
    #[must_use]
    pub fn qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.qty, self.qty_exponent)
    }

    /// Returns true if the amended order belongs to an order list.
    #[must_use]
    pub const fn is_list_order(&self) -> bool {
        self.order_list_id.is_some()
    }
}
