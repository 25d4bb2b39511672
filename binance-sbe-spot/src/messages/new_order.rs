/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! New order acknowledgements (templates 301 and 302).

use crate::enums::{
    BoolEnum, Floor, OrderCapacity, OrderSide, OrderStatus, OrderType, PegOffsetType,
    PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use crate::groups::{Fill, PreventedMatch};
use binance_sbe_core::{mantissa_to_decimal, timestamp_from_micros};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

sbe_block! {
    /// Result of a new order, without fills.
    pub struct NewOrderResultResponse {
        block_length: 153,
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
            working_time: opt i64 = ("workingTime", 17),
            iceberg_qty: opt i64 = ("icebergQty", 18),
            strategy_id: opt i64 = ("strategyId", 19),
            strategy_type: opt i32 = ("strategyType", 20),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 21),
            working_floor: enum_req Floor = ("workingFloor", 22),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 23),
            trade_group_id: opt i64 = ("tradeGroupId", 24),
            prevented_quantity: req i64 = ("preventedQuantity", 25),
            used_sor: enum_req BoolEnum = ("usedSor", 26),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 27),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 28, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 29, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 30, since 1),
            pegged_price: opt i64 = ("peggedPrice", 31, since 1),
        },
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
            client_order_id: string = ("clientOrderId", 201, U8),
        },
    }
}

sbe_message!(NewOrderResultResponse, "NewOrderResultResponse", 301);

sbe_block! {
    /// Result of a new order, with its fills and prevented matches.
    pub struct NewOrderFullResponse {
        block_length: 153,
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
            working_time: opt i64 = ("workingTime", 17),
            iceberg_qty: opt i64 = ("icebergQty", 18),
            strategy_id: opt i64 = ("strategyId", 19),
            strategy_type: opt i32 = ("strategyType", 20),
            order_capacity: enum_req OrderCapacity = ("orderCapacity", 21),
            working_floor: enum_req Floor = ("workingFloor", 22),
            self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("selfTradePreventionMode", 23),
            trade_group_id: opt i64 = ("tradeGroupId", 24),
            prevented_quantity: req i64 = ("preventedQuantity", 25),
            used_sor: enum_req BoolEnum = ("usedSor", 26),
            orig_quote_order_qty: req i64 = ("origQuoteOrderQty", 27),
            peg_price_type: enum_opt PegPriceType = ("pegPriceType", 28, since 1),
            peg_offset_type: enum_opt PegOffsetType = ("pegOffsetType", 29, since 1),
            peg_offset_value: opt u8 = ("pegOffsetValue", 30, since 1),
            pegged_price: opt i64 = ("peggedPrice", 31, since 1),
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

sbe_message!(NewOrderFullResponse, "NewOrderFullResponse", 302);

impl NewOrderResultResponse {
    /// Limit price as a decimal.
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.price, self.price_exponent)
    }

    /// Original quantity as a decimal.
    #[must_use]
    pub fn orig_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.orig_qty, self.qty_exponent)
    }

    /// Transaction time as a UTC date time.
    #[must_use]
    pub fn transact_time_utc(&self) -> Option<DateTime<Utc>> {
        timestamp_from_micros(self.transact_time)
    }
}

impl NewOrderFullResponse {
    /// Limit price as a decimal.
    #[must_use]
    pub fn price_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.price, self.price_exponent)
    }

    /// Executed quantity as a decimal.
    #[must_use]
    pub fn executed_qty_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.executed_qty, self.qty_exponent)
    }

    /// Sum of the quantities of all fills, as a mantissa.
    #[must_use]
    pub fn filled_qty(&self) -> i64 {
        self.fills.iter().map(|f| f.qty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::MatchType;
    use binance_sbe_core::{DecodeError, RangeError, SbeBlock, SbeError, SbeMessage};
    use binance_sbe_schema::fields_length;

    fn limit_order() -> NewOrderResultResponse {
        NewOrderResultResponse {
            price_exponent: -8,
            qty_exponent: -8,
            order_id: 28,
            order_list_id: None,
            transact_time: 1_507_725_176_595_000,
            price: 100_000_000,
            orig_qty: 1_000_000_000,
            executed_qty: 0,
            cummulative_quote_qty: 0,
            status: OrderStatus::New,
            time_in_force: TimeInForce::Gtc,
            order_type: OrderType::Limit,
            side: OrderSide::Sell,
            stop_price: None,
            trailing_delta: None,
            trailing_time: None,
            working_time: Some(1_507_725_176_595_000),
            iceberg_qty: None,
            strategy_id: None,
            strategy_type: None,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            self_trade_prevention_mode: SelfTradePreventionMode::None,
            trade_group_id: None,
            prevented_quantity: 0,
            used_sor: BoolEnum::False,
            orig_quote_order_qty: 0,
            peg_price_type: PegPriceType::PrimaryPeg,
            peg_offset_type: PegOffsetType::PriceLevel,
            peg_offset_value: Some(2),
            pegged_price: Some(99_000_000),
            symbol: "BTCUSDT".to_string(),
            client_order_id: "6gCrw2kRUAF9CvJDGP16IP".to_string(),
        }
    }

    #[test]
    fn test_block_length_matches_fields() {
        assert_eq!(fields_length(NewOrderResultResponse::FIELDS), 153);
        assert_eq!(fields_length(NewOrderFullResponse::FIELDS), 153);
    }

    #[test]
    fn test_round_trip() {
        let order = limit_order();
        let bytes = order.encode_to_vec().unwrap();
        assert_eq!(&bytes[..8], &[153, 0, 45, 1, 3, 0, 2, 0]);
        assert_eq!(bytes.len(), 8 + 153 + 8 + 23);
        let decoded = NewOrderResultResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, order);
        assert_eq!(decoded.price_decimal(), Some(Decimal::ONE));
        assert_eq!(decoded.orig_qty_decimal(), Some(Decimal::TEN));
        assert_eq!(
            decoded.transact_time_utc().map(|t| t.timestamp_millis()),
            Some(1_507_725_176_595)
        );
    }

    #[test]
    fn test_acting_version_zero_nulls_peg_fields() {
        let order = limit_order();
        let bytes = order.encode_to_vec().unwrap();

        // A version 0 writer stops before the 11 bytes of peg fields.
        let mut old = Vec::with_capacity(bytes.len());
        old.extend_from_slice(&142u16.to_le_bytes());
        old.extend_from_slice(&bytes[2..6]);
        old.extend_from_slice(&0u16.to_le_bytes());
        old.extend_from_slice(&bytes[8..8 + 142]);
        old.extend_from_slice(&bytes[8 + 153..]);

        let decoded = NewOrderResultResponse::decode_message(&old, true).unwrap();
        assert_eq!(decoded.peg_price_type, PegPriceType::NullVal);
        assert_eq!(decoded.peg_offset_type, PegOffsetType::NullVal);
        assert_eq!(decoded.peg_offset_value, None);
        assert_eq!(decoded.pegged_price, None);
        assert_eq!(decoded.symbol, order.symbol);
        assert_eq!(decoded.client_order_id, order.client_order_id);
        assert_eq!(decoded.order_id, order.order_id);
    }

    #[test]
    fn test_newer_acting_version_skips_extension() {
        let order = limit_order();
        let bytes = order.encode_to_vec().unwrap();

        let mut newer = Vec::with_capacity(bytes.len() + 5);
        newer.extend_from_slice(&158u16.to_le_bytes());
        newer.extend_from_slice(&bytes[2..6]);
        newer.extend_from_slice(&3u16.to_le_bytes());
        newer.extend_from_slice(&bytes[8..8 + 153]);
        newer.extend_from_slice(&[7, 7, 7, 7, 7]);
        newer.extend_from_slice(&bytes[8 + 153..]);

        let decoded = NewOrderResultResponse::decode_message(&newer, true).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_unknown_enum_code() {
        let mut bytes = limit_order().encode_to_vec().unwrap();
        // status sits after two exponents and seven int64 fields
        let status_at = 8 + 2 + 7 * 8;
        bytes[status_at] = 7;
        assert_eq!(
            NewOrderResultResponse::decode_message(&bytes, true),
            Err(SbeError::Range(RangeError::UnknownEnumValue {
                field: "status".to_string(),
                value: 254,
            }))
        );

        // Without the range check the unknown code still decodes.
        let lenient = NewOrderResultResponse::decode_message(&bytes, false).unwrap();
        assert_eq!(lenient.status, OrderStatus::NonRepresentable);
        assert_eq!(lenient.order_id, limit_order().order_id);

        // The same code from a newer schema maps to NonRepresentable.
        bytes[6] = 3;
        let decoded = NewOrderResultResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded.status, OrderStatus::NonRepresentable);
    }

    #[test]
    fn test_required_null_fails_range_check() {
        let mut order = limit_order();
        order.price = i64::MIN;
        assert_eq!(
            order.range_check(2, 2),
            Err(RangeError::OutOfRange {
                field: "price".to_string(),
                value: i64::MIN.to_string(),
                min: (i64::MIN + 1).to_string(),
                max: i64::MAX.to_string(),
            })
        );
        assert!(matches!(
            order.encode_to_vec(),
            Err(SbeError::Range(RangeError::OutOfRange { .. }))
        ));
        let mut buf = Vec::new();
        assert!(order.encode_message(&mut buf, false).is_ok());
        assert!(matches!(
            NewOrderResultResponse::decode_message(&buf, true),
            Err(SbeError::Range(_))
        ));
        assert!(NewOrderResultResponse::decode_message(&buf, false).is_ok());
    }

    #[test]
    fn test_template_mismatch() {
        let bytes = limit_order().encode_to_vec().unwrap();
        assert_eq!(
            NewOrderFullResponse::decode_message(&bytes, false),
            Err(SbeError::Decode(DecodeError::TemplateMismatch {
                expected: 302,
                actual: 301,
            }))
        );
    }

    #[test]
    fn test_full_response_with_fills() {
        let result = limit_order();
        let full = NewOrderFullResponse {
            price_exponent: result.price_exponent,
            qty_exponent: result.qty_exponent,
            order_id: result.order_id,
            transact_time: result.transact_time,
            price: result.price,
            orig_qty: result.orig_qty,
            executed_qty: 1_000_000_000,
            cummulative_quote_qty: 1_000_000_000,
            status: OrderStatus::Filled,
            time_in_force: TimeInForce::Gtc,
            order_type: OrderType::Limit,
            side: OrderSide::Sell,
            order_capacity: OrderCapacity::Principal,
            working_floor: Floor::Exchange,
            self_trade_prevention_mode: SelfTradePreventionMode::ExpireMaker,
            prevented_quantity: 0,
            used_sor: BoolEnum::False,
            orig_quote_order_qty: 0,
            fills: vec![
                Fill {
                    commission_exponent: -8,
                    match_type: MatchType::AutoMatch,
                    price: 100_000_000,
                    qty: 400_000_000,
                    commission: 40_000,
                    trade_id: Some(1),
                    alloc_id: None,
                    commission_asset: "USDT".to_string(),
                },
                Fill {
                    commission_exponent: -8,
                    match_type: MatchType::AutoMatch,
                    price: 100_000_000,
                    qty: 600_000_000,
                    commission: 60_000,
                    trade_id: Some(2),
                    alloc_id: None,
                    commission_asset: "USDT".to_string(),
                },
            ],
            prevented_matches: vec![PreventedMatch {
                prevented_match_id: 9,
                maker_order_id: Some(27),
                price: Some(100_000_000),
                taker_prevented_quantity: None,
                maker_prevented_quantity: Some(1),
                maker_symbol: "BTCUSDT".to_string(),
            }],
            symbol: result.symbol.clone(),
            client_order_id: result.client_order_id.clone(),
            ..NewOrderFullResponse::default()
        };
        let bytes = full.encode_to_vec().unwrap();
        let decoded = NewOrderFullResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, full);
        assert_eq!(decoded.filled_qty(), decoded.executed_qty);
        assert_eq!(decoded.executed_qty_decimal(), Some(Decimal::TEN));
        assert_eq!(decoded.peg_price_type, PegPriceType::NullVal);
        assert_eq!(<NewOrderFullResponse as SbeBlock>::BLOCK_LENGTH, 153);
    }
}
