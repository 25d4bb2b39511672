/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Typed messages of the spot schema, one module per message family.

pub mod account;
pub mod amend;
pub mod cancel_order;
pub mod error;
pub mod exchange_info;
pub mod execution_report;
pub mod new_order;
pub mod order;
pub mod order_list;
pub mod ticker;

pub use account::{AccountPermission, AccountResponse, Balance};
pub use amend::{OrderAmendKeepPriorityResponse, RelatedOrder};
pub use cancel_order::CancelOrderResponse;
pub use error::ErrorResponse;
pub use exchange_info::{
    ExchangeInfoResponse, Filter, Permission, PermissionSet, RateLimit, Sor, SorSymbol, SymbolInfo,
};
pub use execution_report::ExecutionReportEvent;
pub use new_order::{NewOrderFullResponse, NewOrderResultResponse};
pub use order::{OrderResponse, OrdersResponse};
pub use order_list::{
    CancelOrderListReport, CancelOrderListResponse, NewOrderListFullReport,
    NewOrderListFullResponse, NewOrderListReport, NewOrderListResultResponse,
};
pub use ticker::{Ticker24hFullResponse, TickerStats};
