/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dispatch on the template id of incoming messages.

use crate::messages::{
    AccountResponse, CancelOrderListResponse, CancelOrderResponse, ErrorResponse,
    ExchangeInfoResponse, ExecutionReportEvent, NewOrderFullResponse, NewOrderListFullResponse,
    NewOrderListResultResponse, NewOrderResultResponse, OrderAmendKeepPriorityResponse,
    OrderResponse, OrdersResponse, Ticker24hFullResponse,
};
use crate::{SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION};
use binance_sbe_core::{DecodeError, MessageHeader, SbeError, SbeMessage};
use binance_sbe_schema::{MessageMeta, Schema, SchemaError};
use bytes::BufMut;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Layouts of every message of the spot schema.
pub const MESSAGES: &[&MessageMeta] = &[
    ErrorResponse::META,
    ExchangeInfoResponse::META,
    Ticker24hFullResponse::META,
    NewOrderResultResponse::META,
    NewOrderFullResponse::META,
    OrderResponse::META,
    CancelOrderResponse::META,
    OrdersResponse::META,
    NewOrderListResultResponse::META,
    NewOrderListFullResponse::META,
    CancelOrderListResponse::META,
    OrderAmendKeepPriorityResponse::META,
    AccountResponse::META,
    ExecutionReportEvent::META,
];

/// Builds the registry of the spot schema for the generic codec.
///
/// # Errors
/// Returns `SchemaError` if a layout is inconsistent.
pub fn spot_schema() -> Result<Schema, SchemaError> {
    let mut schema = Schema::new(SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION);
    for meta in MESSAGES.iter().copied() {
        schema.add_message(meta)?;
    }
    Ok(schema)
}

/// Any message of the spot schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpotMessage {
    /// Template 100.
    Error(ErrorResponse),
    /// Template 103.
    ExchangeInfo(ExchangeInfoResponse),
    /// Template 206.
    Ticker24hFull(Ticker24hFullResponse),
    /// Template 301.
    NewOrderResult(NewOrderResultResponse),
    /// Template 302.
    NewOrderFull(NewOrderFullResponse),
    /// Template 304.
    Order(OrderResponse),
    /// Template 305.
    CancelOrder(CancelOrderResponse),
    /// Template 308.
    Orders(OrdersResponse),
    /// Template 310.
    NewOrderListResult(NewOrderListResultResponse),
    /// Template 311.
    NewOrderListFull(NewOrderListFullResponse),
    /// Template 312.
    CancelOrderList(CancelOrderListResponse),
    /// Template 317.
    OrderAmendKeepPriority(OrderAmendKeepPriorityResponse),
    /// Template 400.
    Account(AccountResponse),
    /// Template 603.
    ExecutionReport(ExecutionReportEvent),
}

macro_rules! dispatch {
    ($self:expr, $msg:ident => $body:expr) => {
        match $self {
            SpotMessage::Error($msg) => $body,
            SpotMessage::ExchangeInfo($msg) => $body,
            SpotMessage::Ticker24hFull($msg) => $body,
            SpotMessage::NewOrderResult($msg) => $body,
            SpotMessage::NewOrderFull($msg) => $body,
            SpotMessage::Order($msg) => $body,
            SpotMessage::CancelOrder($msg) => $body,
            SpotMessage::Orders($msg) => $body,
            SpotMessage::NewOrderListResult($msg) => $body,
            SpotMessage::NewOrderListFull($msg) => $body,
            SpotMessage::CancelOrderList($msg) => $body,
            SpotMessage::OrderAmendKeepPriority($msg) => $body,
            SpotMessage::Account($msg) => $body,
            SpotMessage::ExecutionReport($msg) => $body,
        }
    };
}

fn meta_of<M: SbeMessage>(_: &M) -> &'static MessageMeta {
    M::META
}

impl SpotMessage {
    /// Decodes a message starting with its header.
    ///
    /// # Arguments
    /// * `buf` - Header followed by the message body
    /// * `range_check` - Validate the decoded fields against the acting version
    ///
    /// # Errors
    /// Returns `DecodeError::SchemaMismatch` for a foreign schema id,
    /// `DecodeError::UnknownTemplate` for a template outside the spot schema,
    /// otherwise the first decoding or validation failure.
    pub fn decode(buf: &[u8], range_check: bool) -> Result<Self, SbeError> {
        let header = MessageHeader::decode(buf)?;
        let body = &buf[MessageHeader::ENCODED_LENGTH..];
        Self::decode_body(body, &header, range_check)
    }

    /// Decodes a message body using an already decoded header.
    ///
    /// # Errors
    /// Same as [`SpotMessage::decode`].
    pub fn decode_body(
        body: &[u8],
        header: &MessageHeader,
        range_check: bool,
    ) -> Result<Self, SbeError> {
        if header.schema_id != SCHEMA_ID {
            return Err(DecodeError::SchemaMismatch {
                expected: SCHEMA_ID,
                actual: header.schema_id,
            }
            .into());
        }
        let message = match header.template_id {
            ErrorResponse::TEMPLATE_ID => {
                Self::Error(ErrorResponse::decode_body(body, header, range_check)?)
            }
            ExchangeInfoResponse::TEMPLATE_ID => {
                Self::ExchangeInfo(ExchangeInfoResponse::decode_body(body, header, range_check)?)
            }
            Ticker24hFullResponse::TEMPLATE_ID => {
                Self::Ticker24hFull(Ticker24hFullResponse::decode_body(body, header, range_check)?)
            }
            NewOrderResultResponse::TEMPLATE_ID => Self::NewOrderResult(
                NewOrderResultResponse::decode_body(body, header, range_check)?,
            ),
            NewOrderFullResponse::TEMPLATE_ID => {
                Self::NewOrderFull(NewOrderFullResponse::decode_body(body, header, range_check)?)
            }
            OrderResponse::TEMPLATE_ID => {
                Self::Order(OrderResponse::decode_body(body, header, range_check)?)
            }
            CancelOrderResponse::TEMPLATE_ID => {
                Self::CancelOrder(CancelOrderResponse::decode_body(body, header, range_check)?)
            }
            OrdersResponse::TEMPLATE_ID => {
                Self::Orders(OrdersResponse::decode_body(body, header, range_check)?)
            }
            NewOrderListResultResponse::TEMPLATE_ID => Self::NewOrderListResult(
                NewOrderListResultResponse::decode_body(body, header, range_check)?,
            ),
            NewOrderListFullResponse::TEMPLATE_ID => Self::NewOrderListFull(
                NewOrderListFullResponse::decode_body(body, header, range_check)?,
            ),
            CancelOrderListResponse::TEMPLATE_ID => Self::CancelOrderList(
                CancelOrderListResponse::decode_body(body, header, range_check)?,
            ),
            OrderAmendKeepPriorityResponse::TEMPLATE_ID => Self::OrderAmendKeepPriority(
                OrderAmendKeepPriorityResponse::decode_body(body, header, range_check)?,
            ),
            AccountResponse::TEMPLATE_ID => {
                Self::Account(AccountResponse::decode_body(body, header, range_check)?)
            }
            ExecutionReportEvent::TEMPLATE_ID => {
                Self::ExecutionReport(ExecutionReportEvent::decode_body(body, header, range_check)?)
            }
            other => {
                debug!(template_id = other, "unknown spot template");
                return Err(DecodeError::UnknownTemplate(other).into());
            }
        };
        Ok(message)
    }

    /// Encodes header and body into `buf`.
    ///
    /// # Returns
    /// The number of bytes written.
    ///
    /// # Errors
    /// Returns the first validation or encoding failure.
    pub fn encode<B: BufMut>(&self, buf: &mut B, range_check: bool) -> Result<usize, SbeError> {
        dispatch!(self, m => m.encode_message(buf, range_check))
    }

    /// Encodes header and body into a new vector, with range checking.
    ///
    /// # Errors
    /// Returns the first validation or encoding failure.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, SbeError> {
        dispatch!(self, m => m.encode_to_vec())
    }

    /// Layout of the wrapped message.
    #[must_use]
    pub fn meta(&self) -> &'static MessageMeta {
        dispatch!(self, m => meta_of(m))
    }

    /// Template id of the wrapped message.
    #[must_use]
    pub fn template_id(&self) -> u16 {
        self.meta().template_id
    }

    /// Schema name of the wrapped message.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.meta().name
    }
}

macro_rules! impl_from_message {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for SpotMessage {
                fn from(message: $ty) -> Self {
                    Self::$variant(message)
                }
            }
        )+
    };
}

impl_from_message!(
    Error(ErrorResponse),
    ExchangeInfo(ExchangeInfoResponse),
    Ticker24hFull(Ticker24hFullResponse),
    NewOrderResult(NewOrderResultResponse),
    NewOrderFull(NewOrderFullResponse),
    Order(OrderResponse),
    CancelOrder(CancelOrderResponse),
    Orders(OrdersResponse),
    NewOrderListResult(NewOrderListResultResponse),
    NewOrderListFull(NewOrderListFullResponse),
    CancelOrderList(CancelOrderListResponse),
    OrderAmendKeepPriority(OrderAmendKeepPriorityResponse),
    Account(AccountResponse),
    ExecutionReport(ExecutionReportEvent),
);
