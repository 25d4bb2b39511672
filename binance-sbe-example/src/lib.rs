/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Common utilities shared across examples.

use binance_sbe_spot::{
    BoolEnum, ErrorResponse, ExecutionReportEvent, ExecutionType, Floor, MatchType,
    OrderCapacity, OrderResponse, OrderSide, OrderStatus, OrderType, SelfTradePreventionMode,
    TimeInForce,
};
use bytes::Bytes;
use chrono::Utc;
use std::env;

/// Default server port.
pub const DEFAULT_PORT: u16 = 9443;

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Price and quantity exponent of the example market.
pub const EXPONENT: i8 = -8;

/// Example configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExampleConfig {
    /// Server hostname.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Symbol traded by the example.
    pub symbol: String,
    /// Number of orders the server reports.
    pub orders: usize,
}

impl ExampleConfig {
    /// Creates a configuration from `SBE_HOST`, `SBE_PORT`, `SBE_SYMBOL`
    /// and `SBE_ORDERS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("SBE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("SBE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            symbol: env::var("SBE_SYMBOL").unwrap_or_else(|_| "BTCUSDT".to_string()),
            orders: env::var("SBE_ORDERS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Returns the socket address string.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Current time in microseconds since the epoch.
#[must_use]
pub fn now_micros() -> i64 {
    Utc::now().timestamp_micros()
}

/// Builds a resting limit order.
#[must_use]
pub fn limit_order(symbol: &str, order_id: i64, side: OrderSide, price: i64, qty: i64) -> OrderResponse {
    let now = now_micros();
    OrderResponse {
        price_exponent: EXPONENT,
        qty_exponent: EXPONENT,
        order_id,
        price,
        orig_qty: qty,
        executed_qty: 0,
        cummulative_quote_qty: 0,
        status: OrderStatus::New,
        time_in_force: TimeInForce::Gtc,
        order_type: OrderType::Limit,
        side,
        time: now,
        update_time: now,
        is_working: BoolEnum::True,
        working_time: Some(now),
        orig_quote_order_qty: 0,
        order_capacity: OrderCapacity::Principal,
        working_floor: Floor::Exchange,
        self_trade_prevention_mode: SelfTradePreventionMode::ExpireMaker,
        prevented_quantity: 0,
        used_sor: BoolEnum::False,
        symbol: symbol.to_string(),
        client_order_id: format!("example-{order_id}"),
        ..OrderResponse::default()
    }
}

/// Builds the execution report of a full fill of `order`.
#[must_use]
pub fn fill_report(order: &OrderResponse, trade_id: i64) -> ExecutionReportEvent {
    let now = now_micros();
    let quote = order
        .price
        .checked_mul(order.orig_qty)
        .map_or(0, |q| q / 100_000_000);
    ExecutionReportEvent {
        event_time: now,
        transact_time: now,
        price_exponent: order.price_exponent,
        qty_exponent: order.qty_exponent,
        commission_exponent: EXPONENT,
        order_creation_time: Some(order.time),
        working_time: order.working_time,
        order_id: order.order_id,
        orig_qty: order.orig_qty,
        price: order.price,
        order_type: order.order_type,
        side: order.side,
        time_in_force: order.time_in_force,
        execution_type: ExecutionType::Trade,
        order_status: OrderStatus::Filled,
        trade_id: Some(trade_id),
        execution_id: trade_id,
        executed_qty: order.orig_qty,
        cummulative_quote_qty: quote,
        last_qty: order.orig_qty,
        last_price: order.price,
        quote_qty: quote,
        commission: 0,
        is_working: BoolEnum::True,
        is_maker: BoolEnum::True,
        is_best_match: BoolEnum::True,
        match_type: MatchType::AutoMatch,
        self_trade_prevention_mode: order.self_trade_prevention_mode,
        order_capacity: order.order_capacity,
        working_floor: order.working_floor,
        used_sor: order.used_sor,
        symbol: order.symbol.clone(),
        client_order_id: order.client_order_id.clone(),
        commission_asset: "BNB".to_string(),
        ..ExecutionReportEvent::default()
    }
}

/// Builds an error response.
#[must_use]
pub fn error_response(code: i16, msg: &str) -> ErrorResponse {
    ErrorResponse {
        code,
        server_time: Some(now_micros()),
        retry_after: None,
        msg: msg.to_string(),
        data: Bytes::new(),
    }
}
