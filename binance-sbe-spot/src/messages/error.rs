/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error response (template 100).

use binance_sbe_core::timestamp_from_micros;
use chrono::{DateTime, Utc};

sbe_block! {
    /// Error returned in place of a request's response.
    pub struct ErrorResponse {
        block_length: 18,
        fields: {
            /// Binance error code.
            code: req i16 = ("code", 1),
            server_time: opt i64 = ("serverTime", 2),
            /// Time after which the request may be retried.
            retry_after: opt i64 = ("retryAfter", 3),
        },
        groups: {},
        var_data: {
            msg: string = ("msg", 200, U16),
            data: binary = ("data", 201, U32),
        },
    }
}

sbe_message!(ErrorResponse, "ErrorResponse", 100);

impl ErrorResponse {
    /// Returns true if the server asked the client to back off.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.retry_after.is_some()
    }

    /// Server time as a UTC date time.
    #[must_use]
    pub fn server_time_utc(&self) -> Option<DateTime<Utc>> {
        self.server_time.and_then(timestamp_from_micros)
    }
}
