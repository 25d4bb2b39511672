/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! User data stream execution report (template 603).

use crate::enums::{
    BoolEnum, ExecutionType, Floor, MatchType, OrderCapacity, OrderSide, OrderStatus, OrderType,
    PegOffsetType, PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use binance_sbe_core::{mantissa_to_decimal, timestamp_from_micros};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

sbe_block! {
    /// Order update pushed on the user data stream.
    pub struct ExecutionReportEvent {
        block_length: 281,
        fields: {
            event_time: req i64 = ("eventTime", 1),
            transact_time: req i64 = ("transactTime", 2),
            price_exponent: req i8 = ("priceExponent", 3),
            qty_exponent: req i8 = ("qtyExponent", 4),
            commission_exponent: req i8 = ("commissionExponent", 5),
            order_creation_time: opt i64 = ("orderCreationTime", 6),
            working_time: opt i64 = ("workingTime", 7),
            order_id: req i64 = ("orderId", 8),
            order_list_id: opt i64 = ("orderListId", 9),
            orig_qty: req i64 = ("origQty", 10),
            price: req i64 = ("price", 11),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 12),
            iceberg_qty: req i64 = ("icebergQty", 13),
            stop_price: req i64 = ("stopPrice", 14),
            order_type: enum_req OrderType = ("orderType", 15),
            side: enum_req OrderSide = ("side", 16),
            time_in_force: enum_req TimeInForce = ("timeInForce", 17),
            execution_type: enum_req ExecutionType = ("executionType", 18),
            order_status: enum_req OrderStatus = ("orderStatus", 19),
            trade_id: opt i64 = ("tradeId", 20),
            execution_id: req i64 = ("executionId", 21),
            executed_qty: req i64 = ("executedQty", 22),
            cummulative_quote_qty: req i64 = ("cummulativeQuoteQty", 23),
            last_qty: req i64 = ("lastQty", 24),
            last_price: req i64 = ("lastPrice", 25),
            quote_qty: req i64 = ("quoteQty", 26),
            commission: req i64 = ("commission", 27),
            is_working: enum_req BoolEnum = ("isWorking", 28),
            is_maker: enum_req BoolEnum = ("isMaker", 29),
            is_best_match: enum_req BoolEnum = ("isBestMatch", 30),
            match_type: enum_req MatchType = ("matchType", 31),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 32),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 33),
            working_floor: enum_req Floor = ("workingFloor", 34),
            used_sor: enum_req BoolEnum = ("usedSor", 35),
            alloc_id: opt i64 = ("allocId", 36),
            trailing_delta: opt u64 = ("trailingDelta", 37),
            trailing_time: opt i64 = ("trailingTime", 38),
            trade_group_id: opt i64 = ("tradeGroupId", 39),
            prevented_qty: req i64 = ("preventedQty", 40),
            last_prevented_qty: opt i64 = ("lastPreventedQty", 41),
            prevented_match_id: opt i64 = ("preventedMatchId", 42),
            prevented_execution_qty: opt i64 = ("preventedExecutionQty", 43),
            prevented_execution_price: opt i64 = ("preventedExecutionPrice", 44),
            prevented_execution_quote_qty: opt i64 = ("preventedExecutionQuoteQty", 45),
            strategy_type: opt i32 = ("strategyType", 46),
            strategy_id: opt i64 = ("strategyId", 47),
            counter_order_id: opt i64 = ("counterOrderId", 48),
            /// Subscription the event was routed through.
            subscription_id: opt u16 = ("subscriptionId", 49, since 1),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 50, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 51, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 52, since 1),
            pegged_price: opt i64 = ("peggedPrice", 53, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
            orig_client_order_id: string = ("origClientOrderId", 202, U8),
            commission_asset: string = ("commissionAsset", 203, U8),
            reject_reason: string = ("rejectReason", 204, U8),
            counter_symbol: string = ("counterSymbol", 205, U8),
        },
    }
}

sbe_message!(ExecutionReportEvent, "ExecutionReportEvent", 603);

impl ExecutionReportEvent {
    /// Returns true if this report carries a trade.
    #[must_use]
    pub fn is_trade(&self) -> bool {
        self.execution_type == ExecutionType::Trade
    }

    /// Price of the last fill as a decimal.
    #[must_use]
    pub fn last_price_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.last_price, self.price_exponent)
    }

    /// Quantity of the last fill as a decimal.
    #[must_use]
    pub fn last_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.last_qty, self.qty_exponent)
    }

    /// Commission of the last fill as a decimal.
    #[must_use]
    pub fn commission_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.commission, self.commission_exponent)
    }

    /// Event time as a UTC date time.
    #[must_use]
    pub fn event_time_utc(&self) -> Option<DateTime<Utc>> {
        timestamp_from_micros(self.event_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_sbe_core::{RangeError, SbeBlock, SbeError, SbeMessage};
    use binance_sbe_schema::fields_length;
    use proptest::prelude::*;

    fn trade() -> ExecutionReportEvent {
        ExecutionReportEvent {
            event_time: 1_499_405_658_658_000,
            transact_time: 1_499_405_658_657_000,
            price_exponent: -8,
            qty_exponent: -8,
            commission_exponent: -8,
            order_creation_time: Some(1_499_405_658_657_000),
            working_time: Some(1_499_405_658_657_000),
            order_id: 4_293_153,
            order_list_id: None,
            orig_qty: 100_000_000_000,
            price: 10_000,
            orig_quote_order_qty: 0,
            iceberg_qty: 0,
            stop_price: 0,
            order_type: OrderType::Limit,
            side: OrderSide::Buy,
            time_in_force: TimeInForce::Gtc,
            execution_type: ExecutionType::Trade,
            order_status: OrderStatus::PartiallyFilled,
            trade_id: Some(21),
            execution_id: 55,
            executed_qty: 25_000_000_000,
            cummulative_quote_qty: 2_500,
            last_qty: 25_000_000_000,
            last_price: 10_000,
            quote_qty: 2_500,
            commission: 12_500,
            is_working: BoolEnum::True,
            is_maker: BoolEnum::False,
            is_best_match: BoolEnum::True,
            match_type: MatchType::AutoMatch,
            self_trade_prevention_mode: SelfTradePreventionMode::None,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            used_sor: BoolEnum::False,
            prevented_qty: 0,
            subscription_id: Some(3),
            symbol: "ETHBTC".to_string(),
            client_order_id: "mUvoqJxFIILMdfAW5iGSOW".to_string(),
            commission_asset: "BNB".to_string(),
            ..ExecutionReportEvent::default()
        }
    }

    #[test]
    fn test_block_length_matches_fields() {
        assert_eq!(
            fields_length(ExecutionReportEvent::FIELDS),
            usize::from(ExecutionReportEvent::BLOCK_LENGTH)
        );
    }

    #[test]
    fn test_round_trip() {
        let report = trade();
        let bytes = report.encode_to_vec().unwrap();
        let decoded = ExecutionReportEvent::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, report);
        assert!(decoded.is_trade());
        assert_eq!(decoded.last_price_decimal(), Some(Decimal::new(1, 4)));
        assert_eq!(decoded.last_qty_decimal(), Some(Decimal::new(250, 0)));
        assert_eq!(decoded.commission_decimal(), Some(Decimal::new(125, 6)));
        assert_eq!(decoded.reject_reason, "");
    }

    #[test]
    fn test_subscription_id_since_version_one() {
        let meta = ExecutionReportEvent::field_meta("subscriptionId").unwrap();
        assert_eq!(meta.since_version, 1);
        assert!(!meta.in_acting_version(0));

        let report = trade();
        let bytes = report.encode_to_vec().unwrap();
        // Version 0 blocks end before subscriptionId and the peg fields.
        let v0_block = 281 - 2 - 11;
        let mut old = Vec::new();
        old.extend_from_slice(&(v0_block as u16).to_le_bytes());
        old.extend_from_slice(&bytes[2..6]);
        old.extend_from_slice(&0u16.to_le_bytes());
        old.extend_from_slice(&bytes[8..8 + v0_block]);
        old.extend_from_slice(&bytes[8 + 281..]);
        let decoded = ExecutionReportEvent::decode_message(&old, true).unwrap();
        assert_eq!(decoded.subscription_id, None);
        assert_eq!(decoded.symbol, "ETHBTC");
        assert_eq!(decoded.commission_asset, "BNB");
    }

    #[test]
    fn test_required_event_time() {
        let mut report = trade();
        report.event_time = i64::MIN;
        assert!(matches!(
            report.range_check(2, 2),
            Err(RangeError::OutOfRange { field, .. }) if field == "eventTime"
        ));
        assert!(matches!(report.encode_to_vec(), Err(SbeError::Range(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            order_id in (i64::MIN + 1)..=i64::MAX,
            price in (i64::MIN + 1)..=i64::MAX,
            trailing_delta in proptest::option::of(0u64..u64::MAX),
            subscription_id in proptest::option::of(0u16..u16::MAX),
            symbol in "[A-Z]{3,12}",
            reject_reason in ".{0,40}",
        ) {
            let report = ExecutionReportEvent {
                order_id,
                price,
                trailing_delta,
                subscription_id,
                symbol,
                reject_reason,
                ..trade()
            };
            let bytes = report.encode_to_vec().unwrap();
            let decoded = ExecutionReportEvent::decode_message(&bytes, true).unwrap();
            prop_assert_eq!(decoded, report);
        }
    }
}
