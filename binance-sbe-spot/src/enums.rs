/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Enumerations of the spot schema.
//!
//! Every enumeration is a single byte. Besides the schema values each carries
//! `NonRepresentable` (254) for codes introduced by a newer schema and
//! `NullVal` (255), the default.

sbe_enum! {
    /// Boolean carried as an enumeration.
    BoolEnum {
        False = 0,
        True = 1,
    }
}

impl BoolEnum {
    /// Returns `Some(bool)` for `True`/`False`, `None` otherwise.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::NonRepresentable | Self::NullVal => None,
        }
    }
}

impl From<bool> for BoolEnum {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

sbe_enum! {
    /// Order side.
    OrderSide {
        Buy = 0,
        Sell = 1,
    }
}

sbe_enum! {
    /// Order status.
    OrderStatus {
        New = 0,
        PartiallyFilled = 1,
        Filled = 2,
        Canceled = 3,
        PendingCancel = 4,
        Rejected = 5,
        Expired = 6,
        ExpiredInMatch = 9,
        PendingNew = 11,
        Unknown = 253,
    }
}

impl OrderStatus {
    /// Returns true if the order can no longer trade.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            Self::Filled | Self::Canceled | Self::Rejected | Self::Expired | Self::ExpiredInMatch
        )
    }
}

sbe_enum! {
    /// Order type.
    OrderType {
        Market = 0,
        Limit = 1,
        StopLoss = 2,
        StopLossLimit = 3,
        TakeProfit = 4,
        TakeProfitLimit = 5,
        LimitMaker = 6,
    }
}

sbe_enum! {
    /// Time in force.
    TimeInForce {
        Gtc = 0,
        Ioc = 1,
        Fok = 2,
    }
}

sbe_enum! {
    /// Self-trade prevention mode.
    SelfTradePreventionMode {
        None = 1,
        ExpireTaker = 2,
        ExpireMaker = 3,
        ExpireBoth = 4,
        Decrement = 5,
    }
}

sbe_enum! {
    /// Order capacity.
    OrderCapacity {
        Principal = 1,
        Agency = 2,
    }
}

sbe_enum! {
    /// Where an order is working.
    Floor {
        Exchange = 1,
        Broker = 2,
        Sor = 3,
    }
}

sbe_enum! {
    /// Peg price type.
    PegPriceType {
        PrimaryPeg = 1,
        MarketPeg = 2,
    }
}

sbe_enum! {
    /// Peg offset type.
    PegOffsetType {
        PriceLevel = 1,
    }
}

sbe_enum! {
    /// Order list contingency type.
    ContingencyType {
        Oco = 1,
        Oto = 2,
    }
}

sbe_enum! {
    /// Order list status type.
    ListStatusType {
        Response = 0,
        ExecStarted = 1,
        AllDone = 2,
        Updated = 3,
    }
}

sbe_enum! {
    /// Order list order status.
    ListOrderStatus {
        Canceling = 0,
        Executing = 1,
        AllDone = 2,
        Reject = 3,
    }
}

sbe_enum! {
    /// Execution type of an execution report.
    ExecutionType {
        New = 0,
        Canceled = 1,
        Replaced = 2,
        Rejected = 3,
        Trade = 4,
        Expired = 5,
        TradePrevention = 8,
    }
}

sbe_enum! {
    /// Match type of a fill.
    MatchType {
        AutoMatch = 1,
        OnePartyTradeReport = 2,
    }
}

sbe_enum! {
    /// Trading status of a symbol.
    SymbolStatus {
        Trading = 0,
        EndOfDay = 1,
        Halt = 2,
        Break = 3,
    }
}

sbe_enum! {
    /// Rate limit type.
    RateLimitType {
        RawRequests = 0,
        Connections = 1,
        RequestWeight = 2,
        Orders = 3,
    }
}

sbe_enum! {
    /// Rate limit interval.
    RateLimitInterval {
        Second = 0,
        Minute = 1,
        Hour = 2,
        Day = 3,
    }
}

sbe_enum! {
    /// Account type.
    AccountType {
        Spot = 0,
    }
}
