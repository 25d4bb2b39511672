/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Group entries shared by several messages.

use crate::enums::{ContingencyType, ListOrderStatus, MatchType};
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Trade executed while placing an order.
    pub struct Fill {
        block_length: 42,
        fields: {
            commission_exponent: req i8 = ("commissionExponent", 1),
            match_type: enum_req MatchType = ("matchType", 2),
            price: req i64 = ("price", 3),
            qty: req i64 = ("qty", 4),
            commission: req i64 = ("commission", 5),
            trade_id: opt i64 = ("tradeId", 6),
            alloc_id: opt i64 = ("allocId", 7),
        },
        groups: {},
        var_data: {
            commission_asset: string = ("commissionAsset", 200, U8),
        },
    }
}

impl Fill {
    /// Commission as a decimal.
    #[must_use]
    pub fn commission_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.commission, self.commission_exponent)
    }
}

sbe_block! {
    /// Match prevented by self-trade prevention.
    pub struct PreventedMatch {
        block_length: 40,
        fields: {
            prevented_match_id: req i64 = ("preventedMatchId", 1),
            maker_order_id: opt i64 = ("makerOrderId", 2),
            price: opt i64 = ("price", 3),
            taker_prevented_quantity: opt i64 = ("takerPreventedQuantity", 4),
            maker_prevented_quantity: opt i64 = ("makerPreventedQuantity", 5),
        },
        groups: {},
        var_data: {
            maker_symbol: string = ("makerSymbol", 200, U8),
        },
    }
}

sbe_block! {
    /// Order belonging to an order list.
    pub struct ListOrder {
        block_length: 8,
        fields: {
            order_id: req i64 = ("orderId", 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_block! {
    /// Status of an order list an amended order belongs to.
    pub struct ListStatus {
        block_length: 10,
        fields: {
            order_list_id: req i64 = ("orderListId", 1),
            contingency_type: enum_req ContingencyType = ("contingencyType", 2),
            list_order_status: enum_req ListOrderStatus = ("listOrderStatus", 3),
        },
        groups: {
            orders: ListOrder = ("orders", 100, GroupSize16),
        },
        var_data: {
            list_client_order_id: string = ("listClientOrderId", 200, U8),
            symbol: string = ("symbol", 201, U8),
        },
    }
}
