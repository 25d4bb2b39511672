/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Choice sets of the spot schema.

sbe_set! {
    /// Order types a symbol accepts.
    OrderTypes(u16, Uint16) {
        MARKET("Market") = 0,
        LIMIT("Limit") = 1,
        STOP_LOSS("StopLoss") = 2,
        STOP_LOSS_LIMIT("StopLossLimit") = 3,
        TAKE_PROFIT("TakeProfit") = 4,
        TAKE_PROFIT_LIMIT("TakeProfitLimit") = 5,
        LIMIT_MAKER("LimitMaker") = 6,
        NON_REPRESENTABLE("NonRepresentable") = 15,
    }
}

sbe_set! {
    /// Self-trade prevention modes a symbol accepts.
    AllowedSelfTradePreventionModes(u8, Uint8) {
        NONE("None") = 0,
        EXPIRE_TAKER("ExpireTaker") = 1,
        EXPIRE_MAKER("ExpireMaker") = 2,
        EXPIRE_BOTH("ExpireBoth") = 3,
        DECREMENT("Decrement") = 4,
        NON_REPRESENTABLE("NonRepresentable") = 7,
    }
}
