/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Exchange information (template 103).
//!
//! Filters travel as opaque blobs; each blob is itself an SBE encoded filter
//! message and is left to the caller to interpret.

use crate::enums::{BoolEnum, RateLimitInterval, RateLimitType, SelfTradePreventionMode, SymbolStatus};
use crate::sets::{AllowedSelfTradePreventionModes, OrderTypes};

sbe_block! {
    /// Request rate limit.
    pub struct RateLimit {
        block_length: 11,
        fields: {
            rate_limit_type: enum_req RateLimitType = ("rateLimitType", 1),
            interval: enum_req RateLimitInterval = ("interval", 2),
            interval_num: req u8 = ("intervalNum", 3),
            rate_limit: req i64 = ("rateLimit", 4),
        },
        groups: {},
        var_data: {},
    }
}

sbe_block! {
    /// Encoded filter blob.
    pub struct Filter {
        block_length: 0,
        fields: {},
        groups: {},
        var_data: {
            filter: binary = ("filter", 200, U8),
        },
    }
}

sbe_block! {
    /// Single account permission.
    pub struct Permission {
        block_length: 0,
        fields: {},
        groups: {},
        var_data: {
            permission: string = ("permission", 200, U8),
        },
    }
}

sbe_block! {
    /// Set of permissions; holding any one of them grants access.
    pub struct PermissionSet {
        block_length: 0,
        fields: {},
        groups: {
            permissions: Permission = ("permissions", 100, GroupSize),
        },
        var_data: {},
    }
}

sbe_block! {
    /// Trading rules of one symbol.
    pub struct SymbolInfo {
        block_length: 19,
        fields: {
            status: enum_req SymbolStatus = ("status", 1),
            base_asset_precision: req u8 = ("baseAssetPrecision", 2),
            quote_asset_precision: req u8 = ("quoteAssetPrecision", 3),
            base_commission_precision: req u8 = ("baseCommissionPrecision", 4),
            quote_commission_precision: req u8 = ("quoteCommissionPrecision", 5),
            order_types: set OrderTypes = ("orderTypes", 6),
            iceberg_allowed: enum_req BoolEnum = ("icebergAllowed", 7),
            oco_allowed: enum_req BoolEnum = ("ocoAllowed", 8),
            oto_allowed: enum_req BoolEnum = ("otoAllowed", 9),
            quote_order_qty_market_allowed: enum_req BoolEnum = ("quoteOrderQtyMarketAllowed", 10),
            allow_trailing_stop: enum_req BoolEnum = ("allowTrailingStop", 11),
            cancel_replace_allowed: enum_req BoolEnum = ("cancelReplaceAllowed", 12),
            amend_allowed: enum_req BoolEnum = ("amendAllowed", 13),
            is_spot_trading_allowed: enum_req BoolEnum = ("isSpotTradingAllowed", 14),
            is_margin_trading_allowed: enum_req BoolEnum = ("isMarginTradingAllowed", 15),
            default_self_trade_prevention_mode: enum_req SelfTradePreventionMode = ("defaultSelfTradePreventionMode", 16),
            allowed_self_trade_prevention_modes: set AllowedSelfTradePreventionModes = ("allowedSelfTradePreventionModes", 17),
            peg_instructions_allowed: enum_opt BoolEnum = ("pegInstructionsAllowed", 18, since 1),
        },
        groups: {
            filters: Filter = ("filters", 100, GroupSize),
            permission_sets: PermissionSet = ("permissionSets", 101, GroupSize),
        },
        var_data: {
            symbol: string = ("symbol", 200, U8),
            base_asset: string = ("baseAsset", 201, U8),
            quote_asset: string = ("quoteAsset", 202, U8),
        },
    }
}

sbe_block! {
    /// Symbol reachable through smart order routing.
    pub struct SorSymbol {
        block_length: 0,
        fields: {},
        groups: {},
        var_data: {
            symbol: string = ("symbol", 200, U8),
        },
    }
}

sbe_block! {
    /// Smart order routing configuration for one base asset.
    pub struct Sor {
        block_length: 0,
        fields: {},
        groups: {
            sor_symbols: SorSymbol = ("sorSymbols", 1, GroupSize),
        },
        var_data: {
            base_asset: string = ("baseAsset", 200, U8),
        },
    }
}

sbe_block! {
    /// Exchange trading rules and symbol information.
    pub struct ExchangeInfoResponse {
        block_length: 0,
        fields: {},
        groups: {
            rate_limits: RateLimit = ("rateLimits", 100, GroupSize),
            exchange_filters: Filter = ("exchangeFilters", 101, GroupSize),
            symbols: SymbolInfo = ("symbols", 102, GroupSize),
            sors: Sor = ("sors", 103, GroupSize),
        },
        var_data: {},
    }
}

sbe_message!(ExchangeInfoResponse, "ExchangeInfoResponse", 103);

impl ExchangeInfoResponse {
    /// Looks up a symbol by name.
    #[must_use]
    pub fn symbol(&self, name: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|s| s.symbol == name)
    }
}

impl SymbolInfo {
    /// Returns true if the symbol accepts orders.
    #[must_use]
    pub fn is_trading(&self) -> bool {
        self.status == SymbolStatus::Trading
    }

    /// Permissions of every permission set, flattened.
    #[must_use]
    pub fn permissions(&self) -> Vec<&str> {
        self.permission_sets
            .iter()
            .flat_map(|set| set.permissions.iter().map(|p| p.permission.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_sbe_core::{MessageHeader, SbeMessage};
    use bytes::Bytes;

    fn btcusdt() -> SymbolInfo {
        SymbolInfo {
            status: SymbolStatus::Trading,
            base_asset_precision: 8,
            quote_asset_precision: 8,
            base_commission_precision: 8,
            quote_commission_precision: 8,
            order_types: OrderTypes::MARKET | OrderTypes::LIMIT | OrderTypes::LIMIT_MAKER,
            iceberg_allowed: BoolEnum::True,
            oco_allowed: BoolEnum::True,
            oto_allowed: BoolEnum::True,
            quote_order_qty_market_allowed: BoolEnum::True,
            allow_trailing_stop: BoolEnum::True,
            cancel_replace_allowed: BoolEnum::True,
            amend_allowed: BoolEnum::True,
            is_spot_trading_allowed: BoolEnum::True,
            is_margin_trading_allowed: BoolEnum::False,
            default_self_trade_prevention_mode: SelfTradePreventionMode::ExpireMaker,
            allowed_self_trade_prevention_modes: AllowedSelfTradePreventionModes::EXPIRE_TAKER
                | AllowedSelfTradePreventionModes::EXPIRE_MAKER,
            peg_instructions_allowed: BoolEnum::False,
            filters: vec![Filter {
                filter: Bytes::from_static(&[0x10, 0x00, 0xe8, 0x03]),
            }],
            permission_sets: vec![PermissionSet {
                permissions: vec![
                    Permission {
                        permission: "SPOT".to_string(),
                    },
                    Permission {
                        permission: "MARGIN".to_string(),
                    },
                ],
            }],
            symbol: "BTCUSDT".to_string(),
            base_asset: "BTC".to_string(),
            quote_asset: "USDT".to_string(),
        }
    }

    fn sample() -> ExchangeInfoResponse {
        ExchangeInfoResponse {
            rate_limits: vec![RateLimit {
                rate_limit_type: RateLimitType::RequestWeight,
                interval: RateLimitInterval::Minute,
                interval_num: 1,
                rate_limit: 6000,
            }],
            exchange_filters: Vec::new(),
            symbols: vec![btcusdt()],
            sors: vec![Sor {
                sor_symbols: vec![SorSymbol {
                    symbol: "BTCUSDT".to_string(),
                }],
                base_asset: "BTC".to_string(),
            }],
        }
    }

    #[test]
    fn test_undeclared_set_bits_pass_range_check() {
        let mut info = sample();
        info.symbols[0].order_types = OrderTypes::from_bits(0xffff);
        info.symbols[0].allowed_self_trade_prevention_modes =
            AllowedSelfTradePreventionModes::from_bits(0b0110_0000);
        let bytes = info.encode_to_vec().unwrap();
        let decoded = ExchangeInfoResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded.symbols[0].order_types.bits(), 0xffff);
        assert_eq!(
            decoded.symbols[0].allowed_self_trade_prevention_modes.bits(),
            0b0110_0000
        );
    }

    #[test]
    fn test_round_trip() {
        let info = sample();
        let bytes = info.encode_to_vec().unwrap();
        let decoded = ExchangeInfoResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded, info);
        let symbol = decoded.symbol("BTCUSDT").unwrap();
        assert!(symbol.is_trading());
        assert_eq!(symbol.permissions(), vec!["SPOT", "MARGIN"]);
        assert!(decoded.symbol("ETHUSDT").is_none());
    }

    #[test]
    fn test_empty_root_block_layout() {
        let bytes = ExchangeInfoResponse::default().encode_to_vec().unwrap();
        // header followed by four empty groupSizeEncoding dimensions
        assert_eq!(bytes.len(), MessageHeader::ENCODED_LENGTH + 4 * 6);
        assert_eq!(&bytes[8..14], &[11, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[14..20], &[0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[20..26], &[19, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_peg_instructions_absent_in_version_zero() {
        let info = sample();
        let mut bytes = info.encode_to_vec().unwrap();
        // Version 0 symbols end before pegInstructionsAllowed.
        bytes[6] = 0;
        let at = 8 + 6 + 11 + 6 + 6;
        assert_eq!(&bytes[at - 6..at - 4], &19u16.to_le_bytes());
        bytes[at - 6] = 18;
        bytes.remove(at + 18);
        let decoded = ExchangeInfoResponse::decode_message(&bytes, true).unwrap();
        assert_eq!(decoded.symbols[0].peg_instructions_allowed, BoolEnum::NullVal);
        assert_eq!(decoded.symbols[0].symbol, "BTCUSDT");
        assert_eq!(decoded.symbols[0].filters, info.symbols[0].filters);
    }

    #[test]
    fn test_group_metadata() {
        let meta = ExchangeInfoResponse::META;
        let symbols = meta.group("symbols").unwrap();
        assert_eq!(symbols.block_length, 19);
        assert_eq!(symbols.field("pegInstructionsAllowed").unwrap().since_version, 1);
        let permission_sets = symbols.group("permissionSets").unwrap();
        assert_eq!(permission_sets.groups[0].name, "permissions");
    }
}
