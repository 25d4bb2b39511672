/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Order list placement and cancellation (templates 310, 311 and 312).
//!
//! Prices and quantities of the order reports are scaled by the exponents of
//! the enclosing message.

use crate::enums::{
    BoolEnum, ContingencyType, Floor, ListOrderStatus, ListStatusType, OrderCapacity, OrderSide,
    OrderStatus, OrderType, PegOffsetType, PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use crate::groups::{Fill, ListOrder, PreventedMatch};
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Report of one order of a newly placed list.
    pub struct NewOrderListReport {
        block_length: 151,
        fields: {
            order_id: req i64 = ("orderId", 1),
            order_list_id: opt i64 = ("orderListId", 2),
            transact_time: req i64 = ("transactTime", 3),
            price: req i64 = ("price", 4),
            orig_qty: req i64 = ("origQty", 5),
            executed_qty: req i64 = ("executedQty", 6),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 7),
            status: enum_req OrderStatus = ("status", 8),
            time_in_force: enum_req TimeInForce = ("timeInForce", 9),
            order_type: enum_req OrderType = ("orderType", 10),
            side: enum_req OrderSide = ("side", 11),
            stop_price: opt i64 = ("stopPrice", 12),
            trailing_delta: opt i64 = ("trailingDelta", 13),
            trailing_time: opt i64 = ("trailingTime", 14),
            working_time: opt i64 = ("workingTime", 15),
            iceberg_qty: opt i64 = ("icebergQty", 16),
            strategy_id: opt i64 = ("strategyId", 17),
            strategy_type: opt i32 = ("strategyType", 18),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 19),
            working_floor: enum_req Floor = ("workingFloor", 20),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 21),
            trade_group_id: opt i64 = ("tradeGroupId", 22),
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
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_block! {
    /// Report of one order of a newly placed list, with its fills.
    pub struct NewOrderListFullReport {
        block_length: 151,
        fields: {
            order_id: req i64 = ("orderId", 1),
            order_list_id: opt i64 = ("orderListId", 2),
            transact_time: req i64 = ("transactTime", 3),
            price: req i64 = ("price", 4),
            orig_qty: req i64 = ("origQty", 5),
            executed_qty: req i64 = ("executedQty", 6),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 7),
            status: enum_req OrderStatus = ("status", 8),
            time_in_force: enum_req TimeInForce = ("timeInForce", 9),
            order_type: enum_req OrderType = ("orderType", 10),
            side: enum_req OrderSide = ("side", 11),
            stop_price: opt i64 = ("stopPrice", 12),
            trailing_delta: opt i64 = ("trailingDelta", 13),
            trailing_time: opt i64 = ("trailingTime", 14),
            working_time: opt i64 = ("workingTime", 15),
            iceberg_qty: opt i64 = ("icebergQty", 16),
            strategy_id: opt i64 = ("strategyId", 17),
            strategy_type: opt i32 = ("strategyType", 18),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 19),
            working_floor: enum_req Floor = ("workingFloor", 20),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 21),
            trade_group_id: opt i64 = ("tradeGroupId", 22),
            prevented_quantity: req i64 = ("preventedQuantity", 23),
            used_sor: enum_req BoolEnum = ("usedSor", 24),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 25),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 26, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 27, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 28, since 1),
            pegged_price: opt i64 = ("peggedPrice", 29, since 1),
        },
        groups: {
            fills: Fill = ("fills", 100, GroupSize),
            prevented_matches: PreventedMatch = ("preventedMatches", 101, GroupSize),
        },
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_block! {
    /// Report of one order of a canceled list.
    pub struct CancelOrderListReport {
        block_length: 135,
        fields: {
            order_id: req i64 = ("orderId", 1),
            order_list_id: opt i64 = ("orderListId", 2),
            transact_time: req i64 = ("transactTime", 3),
            price: req i64 = ("price", 4),
            orig_qty: req i64 = ("origQty", 5),
            executed_qty: req i64 = ("executedQty", 6),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 7),
            status: enum_req OrderStatus = ("status", 8),
            time_in_force: enum_req TimeInForce = ("timeInForce", 9),
            order_type: enum_req OrderType = ("orderType", 10),
            side: enum_req OrderSide = ("side", 11),
            stop_price: opt i64 = ("stopPrice", 12),
            trailing_delta: opt i64 = ("trailingDelta", 13),
            trailing_time: opt i64 = ("trailingTime", 14),
            iceberg_qty: opt i64 = ("icebergQty", 15),
            strategy_id: opt i64 = ("strategyId", 16),
            strategy_type: opt i32 = ("strategyType", 17),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 18),
            working_floor: enum_req Floor = ("workingFloor", 19),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 20),
            prevented_quantity: req i64 = ("preventedQuantity", 21),
            used_sor: enum_req BoolEnum = ("usedSor", 22),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 23),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 24, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 25, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 26, since 1),
            pegged_price: opt i64 = ("peggedPrice", 27, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            orig_client_order_id: string = ("origClientOrderId", 201, U8),
            client_order_id: string = ("clientOrderId", 202, U8),
        },
    }
}

sbe_block! {
    /// Result of placing an order list, without fills.
    pub struct NewOrderListResultResponse {
        block_length: 21,
        fields: {
            order_list_id: req i64 = ("orderListId", 1),
            contingency_type: enum_req ContingencyType = ("contingencyType", 2),
            list_status_type: enum_req ListStatusType = ("listStatusType", 3),
            list_order_status: enum_req ListOrderStatus = ("listOrderStatus", 4),
            transaction_time: req i64 = ("transactionTime", 5),
            price_exponent: req i8 = ("priceExponent", 6),
            qty_exponent: req i8 = ("qtyExponent", 7),
        },
        groups: {
            orders: ListOrder = ("orders", 100, GroupSize16),
            order_reports: NewOrderListReport = ("orderReports", 101, GroupSize16),
        },
        var_data: {
            list_client_order_id: string = ("listClientOrderId", 200, U8),
            symbol: string = ("symbol", 201, U8),
        },
    }
}

sbe_message!(NewOrderListResultResponse, "NewOrderListResultResponse", 310);

sbe_block! {
    /// Result of placing an order list, with fills.
    pub struct NewOrderListFullResponse {
        block_length: 21,
        fields: {
            order_list_id: req i64 = ("orderListId", 1),
            contingency_type: enum_req ContingencyType = ("contingencyType", 2),
            list_status_type: enum_req ListStatusType = ("listStatusType", 3),
            list_order_status: enum_req ListOrderStatus = ("listOrderStatus", 4),
            transaction_time: req i64 = ("transactionTime", 5),
            price_exponent: req i8 = ("priceExponent", 6),
            qty_exponent: req i8 = ("qtyExponent", 7),
        },
        groups: {
            orders: ListOrder = ("orders", 100, GroupSize16),
            order_reports: NewOrderListFullReport = ("orderReports", 101, GroupSize16),
        },
        var_data: {
            list_client_order_id: string = ("listClientOrderId", 200, U8),
            symbol: string = ("symbol", 201, U8),
        },
    }
}

sbe_message!(NewOrderListFullResponse, "NewOrderListFullResponse", 311);

sbe_block! {
    /// Result of canceling an order list.
    pub struct CancelOrderListResponse {
        block_length: 21,
        fields: {
            order_list_id: req i64 = ("orderListId", 1),
            contingency_type: enum_req ContingencyType = ("contingencyType", 2),
            list_status_type: enum_req ListStatusType = ("listStatusType", 3),
            list_order_status: enum_req ListOrderStatus = ("listOrderStatus", 4),
            transaction_time: req i64 = ("transactionTime", 5),
            price_exponent: req i8 = ("priceExponent", 6),
            qty_exponent: req i8 = ("qtyExponent", 7),
        },
        groups: {
            orders: ListOrder = ("orders", 100, GroupSize16),
            order_reports: CancelOrderListReport = ("orderReports", 101, GroupSize16),
        },
        var_data: {
            list_client_order_id: string = ("listClientOrderId", 200, U8),
            symbol: string = ("symbol", 201, U8),
        },
    }
}

sbe_message!(CancelOrderListResponse, "CancelOrderListResponse", 312);

impl NewOrderListResultResponse {
    /// Price of the report at `index` as a decimal.
    #[must_use]
    pub fn report_price_decimal(&self, index: usize) -> Option<Decimal> {
        let report = self.order_reports.get(index)?;
        mantissa_to_decimal(report.price, self.price_exponent)
    }
}

impl NewOrderListFullResponse {
    /// Price of the report at `index` as a decimal.
    #[must_use]
    pub fn report_price_decimal(&self, index: usize) -> Option<Decimal> {
        let report = self.order_reports.get(index)?;
        mantissa_to_decimal(report.price, self.price_exponent)
    }

    /// All fills across the order reports.
    pub fn fills(&self) -> impl Iterator<Item = &Fill> {
        self.order_reports.iter().flat_map(|r| r.fills.iter())
    }
}

impl CancelOrderListResponse {
    /// Returns true once every order of the list is done.
    #[must_use]
    pub fn is_all_done(&self) -> bool {
        self.list_status_type == ListStatusType::AllDone
            && self.list_order_status == ListOrderStatus::AllDone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::MatchType;
    use binance_sbe_core::{EncodeError, SbeBlock, SbeError, SbeMessage};
    use binance_sbe_schema::fields_length;

    fn list_orders() -> Vec<ListOrder> {
        vec![
            ListOrder {
                order_id: 12,
                symbol: "LTCBTC".to_string(),
                client_order_id: "leg-1".to_string(),
            },
            ListOrder {
                order_id: 13,
                symbol: "LTCBTC".to_string(),
                client_order_id: "leg-2".to_string(),
            },
        ]
    }

    fn report(order_id: i64, order_type: OrderType, price: i64) -> NewOrderListReport {
        NewOrderListReport {
            order_id,
            order_list_id: Some(1),
            transact_time: 1_563_417_480_525_000,
            price,
            orig_qty: 100_000,
            executed_qty: 0,
            cummulative_quote_qty: 0,
            status: OrderStatus::New,
            time_in_force: TimeInForce::Gtc,
            order_type,
            side: OrderSide::Sell,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            self_trade_prevention_mode: SelfTradePreventionMode::None,
            prevented_quantity: 0,
            used_sor: BoolEnum::False,
            orig_quote_order_qty: 0,
            symbol: "LTCBTC".to_string(),
            client_order_id: format!("leg-{order_id}"),
            ..NewOrderListReport::default()
        }
    }

    #[test]
    fn test_block_lengths_match_fields() {
        assert_eq!(fields_length(NewOrderListReport::FIELDS), 151);
        assert_eq!(fields_length(NewOrderListFullReport::FIELDS), 151);
        assert_eq!(fields_length(CancelOrderListReport::FIELDS), 135);
        assert_eq!(fields_length(NewOrderListResultResponse::FIELDS), 21);
        assert_eq!(fields_length(CancelOrderListResponse::FIELDS), 21);
    }

    #[test]
    fn test_result_round_trip() {
        let list = NewOrderListResultResponse {
            order_list_id: 1,
            contingency_type: ContingencyType::Oco,
            list_status_type: ListStatusType::ExecStarted,
            list_order_status: ListOrderStatus::Executing,
            transaction_time: 1_563_417_480_525_000,
            price_exponent: -6,
            qty_exponent: -3,
            orders: list_orders(),
            order_reports: vec![
                report(12, OrderType::StopLossLimit, 1_000),
                report(13, OrderType::LimitMaker, 5_000),
            ],
            list_client_order_id: "C3wyj4WVEktd7u9aVBRXcN".to_string(),
            symbol: "LTCBTC".to_string(),
        };
        let bytes = list.encode_to_vec().unwrap();
        // groupSize16Encoding dimension after the 21 byte root block
        assert_eq!(&bytes[29..33], &[8, 0, 2, 0]);
        let decoded = NewOrderListResultResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, list);
        assert_eq!(decoded.report_price_decimal(1), Some(Decimal::new(5, 3)));
        assert_eq!(decoded.report_price_decimal(2), None);
    }

    #[test]
    fn test_full_round_trip_with_nested_fills() {
        let base = report(12, OrderType::Market, 0);
        let full_report = NewOrderListFullReport {
            order_id: base.order_id,
            order_list_id: base.order_list_id,
            transact_time: base.transact_time,
            price: base.price,
            orig_qty: base.orig_qty,
            executed_qty: base.orig_qty,
            cummulative_quote_qty: 200,
            status: OrderStatus::Filled,
            time_in_force: TimeInForce::Ioc,
            order_type: OrderType::Market,
            side: OrderSide::Buy,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            self_trade_prevention_mode: SelfTradePreventionMode::ExpireTaker,
            prevented_quantity: 0,
            used_sor: BoolEnum::False,
            orig_quote_order_qty: 0,
            fills: vec![Fill {
                commission_exponent: -8,
                match_type: MatchType::AutoMatch,
                price: 2_000,
                qty: 100_000,
                commission: 0,
                trade_id: Some(77),
                alloc_id: None,
                commission_asset: "LTC".to_string(),
            }],
            symbol: "LTCBTC".to_string(),
            client_order_id: "leg-12".to_string(),
            ..NewOrderListFullReport::default()
        };
        let list = NewOrderListFullResponse {
            order_list_id: 2,
            contingency_type: ContingencyType::Oto,
            list_status_type: ListStatusType::AllDone,
            list_order_status: ListOrderStatus::AllDone,
            transaction_time: 1_563_417_480_525_000,
            price_exponent: -6,
            qty_exponent: -3,
            orders: list_orders(),
            order_reports: vec![full_report],
            list_client_order_id: "oto-1".to_string(),
            symbol: "LTCBTC".to_string(),
        };
        let bytes = list.encode_to_vec().unwrap();
        let decoded = NewOrderListFullResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, list);
        assert_eq!(decoded.fills().count(), 1);
        assert_eq!(decoded.fills().next().map(|f| f.trade_id), Some(Some(77)));
    }

    #[test]
    fn test_cancel_round_trip() {
        let cancel = CancelOrderListResponse {
            order_list_id: 1929,
            contingency_type: ContingencyType::Oco,
            list_status_type: ListStatusType::AllDone,
            list_order_status: ListOrderStatus::AllDone,
            transaction_time: 1_574_040_868_128_000,
            price_exponent: -8,
            qty_exponent: -8,
            orders: list_orders(),
            order_reports: vec![CancelOrderListReport {
                order_id: 12,
                order_list_id: Some(1929),
                transact_time: 1_574_040_868_128_000,
                price: 100_000,
                orig_qty: 100_000,
                executed_qty: 0,
                cummulative_quote_qty: 0,
                status: OrderStatus::Canceled,
                time_in_force: TimeInForce::Gtc,
                order_type: OrderType::StopLossLimit,
                side: OrderSide::Sell,
                stop_price: Some(90_000),
                order_capacity: OrderCapacity::Principal,
                working_floor: Floor::Exchange,
                self_trade_prevention_mode: SelfTradePreventionMode::None,
                prevented_quantity: 0,
                used_sor: BoolEnum::False,
                orig_quote_order_qty: 0,
                symbol: "LTCBTC".to_string(),
                orig_client_order_id: "leg-1".to_string(),
                client_order_id: "cancel-1".to_string(),
                ..CancelOrderListReport::default()
            }],
            list_client_order_id: "list-1929".to_string(),
            symbol: "LTCBTC".to_string(),
        };
        let bytes = cancel.encode_to_vec().unwrap();
        let decoded = CancelOrderListResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, cancel);
        assert!(decoded.is_all_done());
        assert_eq!(<CancelOrderListReport as SbeBlock>::BLOCK_LENGTH, 135);
    }

    #[test]
    fn test_group16_count_limit() {
        let list = NewOrderListResultResponse {
            order_list_id: 1,
            contingency_type: ContingencyType::Oco,
            list_status_type: ListStatusType::Response,
            list_order_status: ListOrderStatus::Executing,
            orders: vec![ListOrder::default(); 65_536],
            ..NewOrderListResultResponse::default()
        };
        let mut buf = Vec::new();
        assert_eq!(
            list.encode_message(&mut buf, false),
            Err(SbeError::Encode(EncodeError::GroupTooLarge {
                group: "orders".to_string(),
                count: 65_536,
                max_count: 65_535,
            }))
        );
    }
}
