/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Account information (template 400).

use crate::enums::{AccountType, BoolEnum};
use binance_sbe_core::mantissa_to_decimal;
use rust_decimal::Decimal;

sbe_block! {
    /// Balance of one asset.
    pub struct Balance {
        block_length: 17,
        fields: {
            exponent: req i8 = ("exponent", 1),
            free: req i64 = ("free", 2),
            locked: req i64 = ("locked", 3),
        },
        groups: {},
        var_data: {
            asset: string = ("asset", 200, U8),
        },
    }
}

sbe_block! {
    /// Permission granted to the account.
    pub struct AccountPermission {
        block_length: 0,
        fields: {},
        groups: {},
        var_data: {
            permission: string = ("permission", 200, U8),
        },
    }
}

sbe_block! {
    /// Commission rates, trading flags and balances of an account.
    pub struct AccountResponse {
        block_length: 64,
        fields: {
            commission_exponent: req i8 = ("commissionExponent", 1),
            commission_rate_maker: req i64 = ("commissionRateMaker", 2),
            commission_rate_taker: req i64 = ("commissionRateTaker", 3),
            commission_rate_buyer: req i64 = ("commissionRateBuyer", 4),
            commission_rate_seller: req i64 = ("commissionRateSeller", 5),
            can_trade: enum_req BoolEnum = ("canTrade", 6),
            can_withdraw: enum_req BoolEnum = ("canWithdraw", 7),
            can_deposit: enum_req BoolEnum = ("canDeposit", 8),
            brokered: enum_req BoolEnum = ("brokered", 9),
            require_self_trade_prevention: enum_req BoolEnum = ("requireSelfTradePrevention", 10),
            prevent_sor: enum_req BoolEnum = ("preventSor", 11),
            update_time: req i64 = ("updateTime", 12),
            account_type: enum_req AccountType = ("accountType", 13),
            trade_group_id: opt i64 = ("tradeGroupId", 14),
            uid: req i64 = ("uid", 15),
        },
        groups: {
            balances: Balance = ("balances", 100, GroupSize),
            permissions: AccountPermission = ("permissions", 101, GroupSize),
        },
        var_data: {},
    }
}

sbe_message!(AccountResponse, "AccountResponse", 400);

impl Balance {
    /// Free amount as a decimal.
    #[must_use]
    pub fn free_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.free, self.exponent)
    }

    /// Locked amount as a decimal.
    #[must_use]
    pub fn locked_decimal(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.locked, self.exponent)
    }

    /// Free plus locked amount as a decimal.
    #[must_use]
    pub fn total_decimal(&self) -> Option<Decimal> {
        self.free_decimal()?.checked_add(self.locked_decimal()?)
    }
}

impl AccountResponse {
    /// Maker commission rate as a decimal.
    #[must_use]
    pub fn maker_commission(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.commission_rate_maker, self.commission_exponent)
    }

    /// Taker commission rate as a decimal.
    #[must_use]
    pub fn taker_commission(&self) -> Option<Decimal> {
        mantissa_to_decimal(self.commission_rate_taker, self.commission_exponent)
    }

    /// Looks up the balance of an asset.
    #[must_use]
    pub fn balance(&self, asset: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.asset == asset)
    }
}
